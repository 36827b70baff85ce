// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use ls_long_ports::filesystem::{DirectoryReader, EntryStatDto, MetadataSource, PathProbe};
use ls_long_shared_kernel::{FileName, InfraResult, InfrastructureError};
use tracing::{debug, trace};

use crate::platform;

/// Filesystem adapter backed by `std::fs`, implementing the path, directory and metadata ports.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl PathProbe for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let ok = fs::metadata(path).is_ok();
        trace!(path = %path.display(), ok, "probed path");
        ok
    }
}

impl DirectoryReader for StdFileSystem {
    fn list_children(&self, dir: &Path) -> InfraResult<Vec<FileName>> {
        let entries = fs::read_dir(dir)
            .map_err(|source| InfrastructureError::DirectoryOpen { path: dir.to_path_buf(), source })?;

        // An unreadable directory entry is dropped like an unstattable child.
        let names = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(FileName::new(entry.file_name())),
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                    None
                }
            })
            .collect();
        Ok(names)
    }
}

impl MetadataSource for StdFileSystem {
    fn stat(&self, path: &Path) -> InfraResult<EntryStatDto> {
        fs::metadata(path)
            .map(|metadata| platform::entry_stat(&metadata))
            .map_err(|source| InfrastructureError::MetadataProbe { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_existing_and_missing_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fs = StdFileSystem::new();
        assert!(fs.exists(dir.path()));
        assert!(!fs.exists(&dir.path().join("missing")));
    }

    #[test]
    fn lists_immediate_children_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("a.txt"), "a").expect("write");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("sub").join("nested.txt"), "n").expect("write");

        let mut names: Vec<_> = StdFileSystem
            .list_children(dir.path())
            .expect("listing")
            .into_iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.txt", "sub"]);
    }

    #[test]
    fn listing_a_file_fails_to_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("plain");
        std::fs::write(&file, "x").expect("write");

        let err = StdFileSystem.list_children(&file).unwrap_err();
        assert!(matches!(err, InfrastructureError::DirectoryOpen { .. }));
    }

    #[test]
    fn stat_of_missing_entry_is_a_probe_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = StdFileSystem.stat(&dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, InfrastructureError::MetadataProbe { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn stat_follows_symlinks_and_fails_when_dangling() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("target"), [1u8; 3]).expect("write");
        std::os::unix::fs::symlink("target", dir.path().join("link")).expect("symlink");
        std::os::unix::fs::symlink("nowhere", dir.path().join("dangling")).expect("symlink");

        let linked = StdFileSystem.stat(&dir.path().join("link")).expect("stat through link");
        assert_eq!(linked.size, 3);
        assert_eq!(linked.mode & 0o170_000, 0o100_000);
        assert!(StdFileSystem.stat(&dir.path().join("dangling")).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn undecodable_names_are_listed_and_stattable() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        use ls_long_shared_kernel::FilePath;

        let dir = tempfile::tempdir().expect("tempdir");
        let raw = OsStr::from_bytes(b"bad\xffname");
        std::fs::write(dir.path().join(raw), "x").expect("write");

        let names = StdFileSystem.list_children(dir.path()).expect("listing");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].as_os_str(), raw);

        let child = FilePath::from(dir.path()).child(&names[0]);
        assert_eq!(StdFileSystem.stat(child.as_path()).expect("stat raw name").size, 1);
    }
}
