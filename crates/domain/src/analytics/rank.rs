// crates/domain/src/analytics/rank.rs
use std::cmp::Reverse;

use crate::model::FormattedRecord;

/// Orders records newest modification first.
///
/// The sort is stable: records sharing a timestamp keep the order in which
/// they were described.
pub fn rank_newest_first(records: &mut [FormattedRecord]) {
    records.sort_by_key(|record| Reverse(record.sort_key()));
}
