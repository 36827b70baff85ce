// crates/shared-kernel/src/value_objects/mode.rs
use std::fmt;

/// Raw POSIX type and permission bits as reported by `stat`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct FileMode(u32);

impl FileMode {
    pub const S_IFMT: u32 = 0o170_000;
    pub const S_IFSOCK: u32 = 0o140_000;
    pub const S_IFLNK: u32 = 0o120_000;
    pub const S_IFREG: u32 = 0o100_000;
    pub const S_IFBLK: u32 = 0o060_000;
    pub const S_IFDIR: u32 = 0o040_000;
    pub const S_IFCHR: u32 = 0o020_000;
    pub const S_IFIFO: u32 = 0o010_000;

    pub const S_ISUID: u32 = 0o4000;
    pub const S_ISGID: u32 = 0o2000;
    pub const S_ISVTX: u32 = 0o1000;

    pub const S_IRUSR: u32 = 0o400;
    pub const S_IWUSR: u32 = 0o200;
    pub const S_IXUSR: u32 = 0o100;
    pub const S_IRGRP: u32 = 0o040;
    pub const S_IWGRP: u32 = 0o020;
    pub const S_IXGRP: u32 = 0o010;
    pub const S_IROTH: u32 = 0o004;
    pub const S_IWOTH: u32 = 0o002;
    pub const S_IXOTH: u32 = 0o001;

    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Regular file with the given permission bits.
    #[inline]
    pub const fn regular(perms: u32) -> Self {
        Self(Self::S_IFREG | (perms & 0o7777))
    }

    /// Directory with the given permission bits.
    #[inline]
    pub const fn directory(perms: u32) -> Self {
        Self(Self::S_IFDIR | (perms & 0o7777))
    }

    const fn type_char(self) -> char {
        match self.0 & Self::S_IFMT {
            Self::S_IFDIR => 'd',
            Self::S_IFLNK => 'l',
            Self::S_IFCHR => 'c',
            Self::S_IFBLK => 'b',
            Self::S_IFIFO => 'p',
            Self::S_IFSOCK => 's',
            _ => '-',
        }
    }

    const fn bit(self, mask: u32, on: char) -> char {
        if self.0 & mask != 0 { on } else { '-' }
    }

    /// Execute slot that also carries a special bit (setuid, setgid, sticky).
    const fn exec(self, exec_mask: u32, special_mask: u32, lower: char, upper: char) -> char {
        match (self.0 & exec_mask != 0, self.0 & special_mask != 0) {
            (true, true) => lower,
            (false, true) => upper,
            (true, false) => 'x',
            (false, false) => '-',
        }
    }
}

impl fmt::Debug for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode({:#08o})", self.0)
    }
}

/// Fixed-layout `ls -l` mode column: type, nine permission characters and a
/// trailing marker slot that is blank, `@` (extended attributes) or `+` (ACL).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeString([u8; ModeString::LEN]);

impl ModeString {
    pub const LEN: usize = 11;
    pub const MARKER_POS: usize = 10;
    pub const XATTR_MARKER: u8 = b'@';
    pub const ACL_MARKER: u8 = b'+';

    pub fn from_mode(mode: FileMode) -> Self {
        let chars = [
            mode.type_char(),
            mode.bit(FileMode::S_IRUSR, 'r'),
            mode.bit(FileMode::S_IWUSR, 'w'),
            mode.exec(FileMode::S_IXUSR, FileMode::S_ISUID, 's', 'S'),
            mode.bit(FileMode::S_IRGRP, 'r'),
            mode.bit(FileMode::S_IWGRP, 'w'),
            mode.exec(FileMode::S_IXGRP, FileMode::S_ISGID, 's', 'S'),
            mode.bit(FileMode::S_IROTH, 'r'),
            mode.bit(FileMode::S_IWOTH, 'w'),
            mode.exec(FileMode::S_IXOTH, FileMode::S_ISVTX, 't', 'T'),
            ' ',
        ];
        // Every candidate character above is ASCII.
        Self(chars.map(|c| c as u8))
    }

    #[must_use]
    pub fn with_extended_attributes(self, present: bool) -> Self {
        if present { self.with_marker(Self::XATTR_MARKER) } else { self }
    }

    /// Applied after the attribute marker, so an ACL always wins the slot.
    #[must_use]
    pub fn with_access_control_list(self, present: bool) -> Self {
        if present { self.with_marker(Self::ACL_MARKER) } else { self }
    }

    fn with_marker(mut self, marker: u8) -> Self {
        self.0[Self::MARKER_POS] = marker;
        self
    }

    pub fn file_type(&self) -> char {
        char::from(self.0[0])
    }

    pub fn owner_execute(&self) -> char {
        char::from(self.0[3])
    }

    pub fn as_str(&self) -> &str {
        // Only ever populated with ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for ModeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ModeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeString({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_regular_file() {
        let mode = ModeString::from_mode(FileMode::regular(0o644));
        assert_eq!(mode.as_str(), "-rw-r--r-- ");
    }

    #[test]
    fn renders_directory_and_special_bits() {
        assert_eq!(ModeString::from_mode(FileMode::directory(0o755)).as_str(), "drwxr-xr-x ");
        assert_eq!(ModeString::from_mode(FileMode::directory(0o1777)).as_str(), "drwxrwxrwt ");
        assert_eq!(ModeString::from_mode(FileMode::regular(0o4755)).as_str(), "-rwsr-xr-x ");
        assert_eq!(ModeString::from_mode(FileMode::regular(0o2644)).as_str(), "-rw-r-Sr-- ");
    }

    #[test]
    fn renders_other_types() {
        let link = FileMode::new(FileMode::S_IFLNK | 0o777);
        assert_eq!(ModeString::from_mode(link).file_type(), 'l');
        let fifo = FileMode::new(FileMode::S_IFIFO | 0o600);
        assert_eq!(ModeString::from_mode(fifo).as_str(), "prw------- ");
    }

    #[test]
    fn acl_marker_beats_xattr_marker() {
        let base = ModeString::from_mode(FileMode::regular(0o644));
        assert_eq!(base.with_extended_attributes(true).as_str(), "-rw-r--r--@");
        assert_eq!(base.with_access_control_list(true).as_str(), "-rw-r--r--+");
        let both = base.with_extended_attributes(true).with_access_control_list(true);
        assert_eq!(both.as_str(), "-rw-r--r--+");
        let neither = base.with_extended_attributes(false).with_access_control_list(false);
        assert_eq!(neither, base);
    }
}
