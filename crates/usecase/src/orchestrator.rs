// crates/usecase/src/orchestrator.rs
use std::path::Path;

use ls_long_domain::{
    DirectoryEntryMetadata, FormattedRecord, IdentityPolicy, ListingOptions, ResolvedIdentity, describe_entry,
    rank_newest_first,
};
use ls_long_ports::{
    attributes::AttributeProbe,
    filesystem::{DirectoryReader, EntryStatDto, MetadataSource, PathProbe},
    identity::IdentityResolver,
};
use ls_long_shared_kernel::{
    ApplicationError, FileMode, FileName, FilePath, FileSize, GroupName, IdentityKind, ModificationTime, OwnerName,
    Result,
};
use tracing::{debug, trace};

use crate::dto::Listing;

/// The collaborators a listing run needs.
#[derive(Clone, Copy)]
pub struct ListingPorts<'a> {
    pub probe: &'a dyn PathProbe,
    pub reader: &'a dyn DirectoryReader,
    pub metadata: &'a dyn MetadataSource,
    pub identities: &'a dyn IdentityResolver,
    pub attributes: &'a dyn AttributeProbe,
}

pub struct ListDirectory<'a> {
    ports: ListingPorts<'a>,
    options: ListingOptions,
}

impl<'a> ListDirectory<'a> {
    pub fn new(ports: ListingPorts<'a>, options: ListingOptions) -> Self {
        Self { ports, options }
    }

    /// Lists `dir` and returns its entries ranked newest first.
    ///
    /// Fails before any directory I/O when `dir` is inaccessible, and when the
    /// directory cannot be opened. Children whose `stat` fails are skipped.
    pub fn run(&self, dir: &Path) -> Result<Listing> {
        if !self.ports.probe.exists(dir) {
            return Err(ApplicationError::PathInaccessible { path: dir.to_path_buf() }.into());
        }

        let names = self.ports.reader.list_children(dir).map_err(|source| {
            ApplicationError::DirectoryUnreadable { path: dir.to_path_buf(), source: Box::new(source.into()) }
        })?;

        let parent = FilePath::from(dir);
        let mut records = Vec::with_capacity(names.len());
        let mut skipped = 0;
        for name in names {
            match self.describe(&parent, name)? {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        rank_newest_first(&mut records);
        debug!(dir = %dir.display(), listed = records.len(), skipped, "listing complete");
        Ok(Listing { records, skipped })
    }

    /// `Ok(None)` when the entry is skipped; `Err` only for a strict identity abort.
    fn describe(&self, parent: &FilePath, name: FileName) -> Result<Option<FormattedRecord>> {
        let path = parent.child(&name);
        let stat = match self.ports.metadata.stat(path.as_path()) {
            Ok(stat) => stat,
            Err(err) => {
                debug!(path = %path, error = %err, "skipping entry");
                return Ok(None);
            }
        };

        let meta = self.to_metadata(&path, name, stat);
        let identity = self.resolve_identity(&meta)?;
        trace!(path = %path, "described entry");
        Ok(Some(describe_entry(&meta, &identity)))
    }

    fn to_metadata(&self, path: &FilePath, name: FileName, stat: EntryStatDto) -> DirectoryEntryMetadata {
        DirectoryEntryMetadata {
            name,
            mode: FileMode::new(stat.mode),
            link_count: stat.link_count,
            owner_id: stat.uid,
            group_id: stat.gid,
            size: FileSize::new(stat.size),
            modified: ModificationTime::from_epoch(stat.mtime_secs),
            has_extended_attributes: self.ports.attributes.has_extended_attributes(path.as_path()),
            has_access_control_list: self.ports.attributes.has_access_control_list(path.as_path()),
        }
    }

    fn resolve_identity(&self, meta: &DirectoryEntryMetadata) -> Result<ResolvedIdentity> {
        let owner = match self.ports.identities.owner_name(meta.owner_id) {
            Some(owner) => owner,
            None => {
                self.on_unresolved(IdentityKind::User, meta.owner_id)?;
                OwnerName::numeric(meta.owner_id)
            }
        };
        let group = match self.ports.identities.group_name(meta.group_id) {
            Some(group) => group,
            None => {
                self.on_unresolved(IdentityKind::Group, meta.group_id)?;
                GroupName::numeric(meta.group_id)
            }
        };
        Ok(ResolvedIdentity::new(owner, group))
    }

    fn on_unresolved(&self, kind: IdentityKind, id: u32) -> Result<()> {
        match self.options.identity_policy {
            IdentityPolicy::NumericFallback => {
                debug!(%kind, id, "no name for id, showing it numerically");
                Ok(())
            }
            IdentityPolicy::AbortListing => Err(ApplicationError::IdentityUnresolved { kind, id }.into()),
        }
    }
}
