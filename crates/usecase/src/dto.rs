// crates/usecase/src/dto.rs
use ls_long_domain::FormattedRecord;

/// Outcome of one listing run, records already ranked newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub records: Vec<FormattedRecord>,
    /// Children whose metadata probe failed and were left out.
    pub skipped: usize,
}

impl Listing {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(FormattedRecord::line)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
