pub mod entities;

pub use entities::{DirectoryEntryMetadata, FormattedRecord};
