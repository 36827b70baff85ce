// src/cli/mod.rs
mod args;

pub use args::Args;
use clap::Parser;

/// Exit status for a wrong argument count or unparsable arguments.
pub const USAGE_EXIT: u8 = 1;

/// Parsed arguments, or the exit status to stop with once clap has printed its message.
///
/// `--help` and `--version` print to stdout and exit `0`; every other parse
/// failure prints usage to stderr and exits with [`USAGE_EXIT`].
pub fn parse_args<I, T>(argv: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|err| {
        // Nothing useful to do if the terminal is gone.
        let _ = err.print();
        if err.use_stderr() { USAGE_EXIT } else { 0 }
    })
}
