#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod describe;
pub mod model;
pub mod options;
pub mod presentation;

pub use analytics::rank::rank_newest_first;
pub use describe::{ResolvedIdentity, describe_entry};
pub use model::{DirectoryEntryMetadata, FormattedRecord};
pub use options::{IdentityPolicy, ListingOptions};
