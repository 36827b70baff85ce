// crates/domain/src/model/entities/formatted_record.rs

/// One rendered listing line together with the key it is ranked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    sort_key: i64,
    line: String,
}

impl FormattedRecord {
    pub fn new(sort_key: i64, line: String) -> Self {
        Self { sort_key, line }
    }

    /// Modification time in epoch seconds.
    pub fn sort_key(&self) -> i64 {
        self.sort_key
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
