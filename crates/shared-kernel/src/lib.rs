// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ErrorContext, IdentityKind, InfraResult, InfrastructureError,
    LsLongError, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    FileMode, FileName, FilePath, FileSize, GroupName, ModeString, ModificationTime, OwnerName,
};
