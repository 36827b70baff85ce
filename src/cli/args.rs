// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ls_long",
    version = crate::VERSION,
    about = "List a directory in ls -l long format, newest modification first"
)]
pub struct Args {
    /// Directory whose immediate entries are listed
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,
}
