// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

/// Directory path handed from the use case to the metadata ports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path of a direct child: parent, one separator, then the raw name.
    pub fn child(&self, name: &FileName) -> Self {
        Self(self.0.join(name.as_os_str()))
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Entry name within its parent directory, kept as the bytes the directory reader returned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileName(OsString);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Text for the listing line; invalid UTF-8 shows as U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
#[repr(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const KIB: u64 = 1024;
    const MIB: u64 = Self::KIB * Self::KIB;
    const GIB: u64 = Self::MIB * Self::KIB;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Returns a base-2 human readable representation with a single-letter unit.
    ///
    /// Exact powers of 1024 belong to the larger unit, so `1024` renders as `1.0K`.
    pub fn to_human(self) -> String {
        let bytes = self.bytes();
        if bytes < Self::KIB {
            return format!("{bytes}B");
        }
        let (divisor, unit) = if bytes < Self::MIB {
            (Self::KIB, 'K')
        } else if bytes < Self::GIB {
            (Self::MIB, 'M')
        } else {
            (Self::GIB, 'G')
        };
        #[allow(clippy::cast_precision_loss)]
        let scaled = bytes as f64 / divisor as f64;
        format!("{scaled:.1}{unit}")
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // `pad` keeps width/alignment flags working for the column layout.
            f.pad(&self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Modification time in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(i64);

impl ModificationTime {
    /// Rendered when the timestamp is outside chrono's range.
    pub const UNREPRESENTABLE: &'static str = "??? ?? ??:??";

    pub const fn from_epoch(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// The timestamp in the local time zone, if chrono can represent it.
    pub fn local(self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp(self.0, 0).map(|utc| utc.with_timezone(&Local))
    }

    /// `Mon DD HH:MM` in local time, without a year.
    pub fn to_listing(self) -> String {
        self.local()
            .map(|local| local.format("%b %d %H:%M").to_string())
            .unwrap_or_else(|| Self::UNREPRESENTABLE.to_string())
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_listing())
    }
}
