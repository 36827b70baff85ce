// crates/ports/src/identity.rs
use ls_long_shared_kernel::{GroupName, OwnerName};

/// Port for resolving numeric ids through the system user and group databases.
///
/// `None` means the id has no name, whether it is unknown or the lookup failed.
pub trait IdentityResolver {
    fn owner_name(&self, uid: u32) -> Option<OwnerName>;
    fn group_name(&self, gid: u32) -> Option<GroupName>;
}
