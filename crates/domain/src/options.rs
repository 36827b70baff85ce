// crates/domain/src/options.rs

/// What to do when a uid or gid has no entry in the identity databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Show the numeric id in place of the name and keep listing.
    #[default]
    NumericFallback,
    /// Stop describing entries at the first unresolvable id and print nothing.
    AbortListing,
}

/// Knobs for a single listing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingOptions {
    pub identity_policy: IdentityPolicy,
}

impl ListingOptions {
    pub fn strict() -> Self {
        Self { identity_policy: IdentityPolicy::AbortListing }
    }
}
