// crates/domain/src/model/entities/entry_metadata.rs
use ls_long_shared_kernel::{FileMode, FileName, FileSize, ModeString, ModificationTime};

/// Everything the describer needs to know about one directory child.
///
/// Produced per entry by the metadata collaborator and consumed by a single
/// describe call; platform details (nanosecond mtimes, `st_mode` layout) are
/// already normalised away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntryMetadata {
    pub name: FileName,
    pub mode: FileMode,
    pub link_count: u64,
    pub owner_id: u32,
    pub group_id: u32,
    pub size: FileSize,
    pub modified: ModificationTime,
    pub has_extended_attributes: bool,
    pub has_access_control_list: bool,
}

impl DirectoryEntryMetadata {
    /// Mode column with the attribute marker, then the ACL marker, applied in that order.
    pub fn mode_string(&self) -> ModeString {
        ModeString::from_mode(self.mode)
            .with_extended_attributes(self.has_extended_attributes)
            .with_access_control_list(self.has_access_control_list)
    }
}
