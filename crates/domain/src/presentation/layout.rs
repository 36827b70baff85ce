// crates/domain/src/presentation/layout.rs
use std::fmt;

use ls_long_shared_kernel::{FileName, FileSize, GroupName, ModeString, ModificationTime, OwnerName};

use super::color::{NameColor, RESET};

/// Columns of one long-format line, borrowed from the describer.
///
/// Renders as
/// `<mode>  <links:>2> <owner>  <group> <size:>6> <time> <color><name><reset>`.
#[derive(Debug, Clone, Copy)]
pub struct ListingLine<'a> {
    pub mode: &'a ModeString,
    pub link_count: u64,
    pub owner: &'a OwnerName,
    pub group: &'a GroupName,
    pub size: FileSize,
    pub modified: ModificationTime,
    pub name: &'a FileName,
}

impl fmt::Display for ListingLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = NameColor::of_mode(self.mode).escape();
        write!(
            f,
            "{}  {:>2} {}  {} {:>#6} {} {color}{}{RESET}",
            self.mode,
            self.link_count,
            self.owner,
            self.group,
            self.size,
            self.modified,
            self.name.to_string_lossy(),
        )
    }
}
