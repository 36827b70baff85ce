// crates/infra/src/identity.rs
use ls_long_ports::identity::IdentityResolver;
use ls_long_shared_kernel::{GroupName, OwnerName};

/// Resolves ids through the system passwd and group databases (`getpwuid_r`/`getgrgid_r`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentityResolver;

impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl IdentityResolver for SystemIdentityResolver {
    fn owner_name(&self, uid: u32) -> Option<OwnerName> {
        use nix::unistd::{Uid, User};

        match User::from_uid(Uid::from_raw(uid)) {
            Ok(user) => user.map(|user| OwnerName::new(user.name)),
            Err(err) => {
                tracing::debug!(uid, error = %err, "user lookup failed");
                None
            }
        }
    }

    fn group_name(&self, gid: u32) -> Option<GroupName> {
        use nix::unistd::{Gid, Group};

        match Group::from_gid(Gid::from_raw(gid)) {
            Ok(group) => group.map(|group| GroupName::new(group.name)),
            Err(err) => {
                tracing::debug!(gid, error = %err, "group lookup failed");
                None
            }
        }
    }
}

/// No identity databases; callers fall back to numeric ids.
#[cfg(not(unix))]
impl IdentityResolver for SystemIdentityResolver {
    fn owner_name(&self, _uid: u32) -> Option<OwnerName> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<GroupName> {
        None
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn root_ids_resolve() {
        let resolver = SystemIdentityResolver::new();
        assert_eq!(resolver.owner_name(0).map(|name| name.as_str().to_string()).as_deref(), Some("root"));
        assert!(resolver.group_name(0).is_some());
    }
}
