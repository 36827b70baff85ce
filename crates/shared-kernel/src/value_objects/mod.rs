// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod identity;
pub mod mode;

pub use file_info::{FileName, FilePath, FileSize, ModificationTime};
pub use identity::{GroupName, OwnerName};
pub use mode::{FileMode, ModeString};
