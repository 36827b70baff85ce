//! Turning per-entry metadata into ranked listing records.

use ls_long_shared_kernel::{GroupName, OwnerName};

use crate::{
    model::{DirectoryEntryMetadata, FormattedRecord},
    presentation::ListingLine,
};

/// Owner and group names after identity lookup (or numeric fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub owner: OwnerName,
    pub group: GroupName,
}

impl ResolvedIdentity {
    pub fn new(owner: OwnerName, group: GroupName) -> Self {
        Self { owner, group }
    }
}

/// Builds the display record for one entry, keyed by its modification time.
pub fn describe_entry(meta: &DirectoryEntryMetadata, identity: &ResolvedIdentity) -> FormattedRecord {
    let mode = meta.mode_string();
    let line = ListingLine {
        mode: &mode,
        link_count: meta.link_count,
        owner: &identity.owner,
        group: &identity.group,
        size: meta.size,
        modified: meta.modified,
        name: &meta.name,
    };
    FormattedRecord::new(meta.modified.epoch_seconds(), line.to_string())
}
