// src/config.rs
use std::path::PathBuf;

use ls_long_domain::ListingOptions;

use crate::cli::Args;

/// Everything a run needs, derived from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub listing: ListingOptions,
}

impl Config {
    pub fn new(directory: impl Into<PathBuf>, listing: ListingOptions) -> Self {
        Self { directory: directory.into(), listing }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(args.directory, ListingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use ls_long_domain::IdentityPolicy;

    use super::*;

    #[test]
    fn cli_config_uses_numeric_identity_fallback() {
        let config = Config::from(Args { directory: PathBuf::from("/tmp") });
        assert_eq!(config.directory, PathBuf::from("/tmp"));
        assert_eq!(config.listing.identity_policy, IdentityPolicy::NumericFallback);
    }
}
