// src/app.rs
use std::io::{self, BufWriter};

use ls_long_infra::{StdFileSystem, SystemIdentityResolver, XattrProbe};
use ls_long_shared_kernel::{ErrorContext, Result};
use ls_long_usecase::{ListDirectory, ListingPorts};
use tracing::debug;

use crate::{config::Config, output};

/// Lists the configured directory to stdout using the host adapters.
pub fn run(config: &Config) -> Result<()> {
    let filesystem = StdFileSystem::new();
    let identities = SystemIdentityResolver::new();
    let attributes = XattrProbe::new();
    let ports = ListingPorts {
        probe: &filesystem,
        reader: &filesystem,
        metadata: &filesystem,
        identities: &identities,
        attributes: &attributes,
    };

    let listing = ListDirectory::new(ports, config.listing).run(&config.directory)?;
    debug!(entries = listing.records.len(), skipped = listing.skipped, "printing listing");

    let stdout = io::stdout();
    output::emit(&listing, BufWriter::new(stdout.lock())).context("writing listing to stdout")?;
    Ok(())
}
