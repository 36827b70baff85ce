// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the rest of the crate sees a
//! single [`EntryStatDto`] shape regardless of how `stat` looks on the host.

use std::fs::Metadata;

use ls_long_ports::filesystem::EntryStatDto;

// ============================================================================
// Metadata Normalization
// ============================================================================

/// Converts `std` metadata into the port DTO, truncating the mtime to whole seconds.
#[cfg(unix)]
pub fn entry_stat(metadata: &Metadata) -> EntryStatDto {
    use std::os::unix::fs::MetadataExt;

    EntryStatDto {
        mode: metadata.mode(),
        link_count: metadata.nlink(),
        uid: metadata.uid(),
        gid: metadata.gid(),
        size: metadata.size(),
        mtime_secs: metadata.mtime(),
    }
}

/// Without POSIX metadata the mode is synthesized from the file type and the
/// read-only flag; ownership reads as root.
#[cfg(not(unix))]
pub fn entry_stat(metadata: &Metadata) -> EntryStatDto {
    use ls_long_shared_kernel::FileMode;

    let perms = if metadata.permissions().readonly() { 0o444 } else { 0o644 };
    let mode = if metadata.is_dir() {
        FileMode::directory(perms | 0o111)
    } else {
        FileMode::regular(perms)
    };

    EntryStatDto {
        mode: mode.bits(),
        link_count: 1,
        uid: 0,
        gid: 0,
        size: metadata.len(),
        mtime_secs: metadata.modified().map(epoch_seconds).unwrap_or_default(),
    }
}

/// Whole seconds relative to the Unix epoch, negative for earlier instants.
#[cfg(not(unix))]
fn epoch_seconds(time: std::time::SystemTime) -> i64 {
    use std::time::UNIX_EPOCH;

    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => {
            let secs = before.duration().as_secs();
            // Floor, so 0.5s before the epoch is -1 like `st_mtime`.
            let secs = if before.duration().subsec_nanos() > 0 { secs + 1 } else { secs };
            i64::try_from(secs).map_or(i64::MIN, |s| -s)
        }
    }
}
