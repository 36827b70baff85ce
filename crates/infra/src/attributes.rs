// crates/infra/src/attributes.rs
use std::path::Path;

use ls_long_ports::attributes::AttributeProbe;

/// Attribute names under which Linux stores POSIX ACLs beyond the mode bits.
#[cfg(target_os = "linux")]
const POSIX_ACL_XATTRS: [&str; 2] = ["system.posix_acl_access", "system.posix_acl_default"];

/// Extended-attribute and ACL probe built on `listxattr`/`getxattr`.
///
/// The attribute listing stays on a symlink itself; the ACL lookup follows it
/// to the target. Any failure (unsupported filesystem, permission denied,
/// missing path) reads as "not present".
#[derive(Debug, Default, Clone, Copy)]
pub struct XattrProbe;

impl XattrProbe {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl AttributeProbe for XattrProbe {
    fn has_extended_attributes(&self, path: &Path) -> bool {
        match xattr::list(path) {
            Ok(mut names) => names.next().is_some(),
            Err(err) => {
                tracing::trace!(path = %path.display(), error = %err, "listxattr failed");
                false
            }
        }
    }

    #[cfg(target_os = "linux")]
    fn has_access_control_list(&self, path: &Path) -> bool {
        POSIX_ACL_XATTRS
            .iter()
            .any(|name| matches!(xattr::get_deref(path, name), Ok(Some(_))))
    }

    // TODO: macOS keeps ACLs outside the xattr namespace; detecting them needs acl_get_file(ACL_TYPE_EXTENDED).
    #[cfg(not(target_os = "linux"))]
    fn has_access_control_list(&self, _path: &Path) -> bool {
        false
    }
}

#[cfg(not(unix))]
impl AttributeProbe for XattrProbe {
    fn has_extended_attributes(&self, _path: &Path) -> bool {
        false
    }

    fn has_access_control_list(&self, _path: &Path) -> bool {
        false
    }
}
