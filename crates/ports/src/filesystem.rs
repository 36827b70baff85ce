// crates/ports/src/filesystem.rs
use std::path::Path;

use ls_long_shared_kernel::{FileName, InfraResult};

/// Raw `stat` fields for one entry, already normalised to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStatDto {
    pub mode: u32,
    pub link_count: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub mtime_secs: i64,
}

/// Port for the accessibility precondition.
pub trait PathProbe {
    /// `true` when a metadata probe on `path` succeeds; every failure collapses to `false`.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for listing the immediate children of a directory.
pub trait DirectoryReader {
    /// Names in the order the filesystem yields them.
    fn list_children(&self, dir: &Path) -> InfraResult<Vec<FileName>>;
}

/// Port for per-entry metadata. Symlinks are followed.
pub trait MetadataSource {
    fn stat(&self, path: &Path) -> InfraResult<EntryStatDto>;
}
