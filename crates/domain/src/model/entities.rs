pub mod entry_metadata;
pub mod formatted_record;

pub use entry_metadata::DirectoryEntryMetadata;
pub use formatted_record::FormattedRecord;
