// src/output.rs
use std::io::{self, Write};

use ls_long_shared_kernel::{PresentationError, PresentationResult};
use ls_long_usecase::Listing;

/// Writes one line per record, already ranked. A closed pipe ends output quietly.
pub fn emit<W: Write>(listing: &Listing, mut out: W) -> PresentationResult<()> {
    let written = listing
        .lines()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush());
    quiet_on_broken_pipe(written)
}

fn quiet_on_broken_pipe(result: io::Result<()>) -> PresentationResult<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(PresentationError::Write),
    }
}
