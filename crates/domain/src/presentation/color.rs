// crates/domain/src/presentation/color.rs
use ls_long_shared_kernel::ModeString;

/// Escape emitted after every entry name.
pub const RESET: &str = "\x1b[0m";

/// Colour class of an entry name, decided from the mode column alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColor {
    Directory,
    Executable,
    Plain,
}

impl NameColor {
    /// Directories are blue, regular files with the owner execute bit are red.
    pub fn of_mode(mode: &ModeString) -> Self {
        match (mode.file_type(), mode.owner_execute()) {
            ('d', _) => Self::Directory,
            ('-', 'x') => Self::Executable,
            _ => Self::Plain,
        }
    }

    pub const fn escape(self) -> &'static str {
        match self {
            Self::Directory => "\x1b[1;34m",
            Self::Executable => "\x1b[0;31m",
            Self::Plain => RESET,
        }
    }
}
