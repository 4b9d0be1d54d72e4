//! Order merged records by cost ascending

use std::cmp::Ordering;

use crate::record::StatRecord;

/// Sort records in place by `cost` ascending.
///
/// Ties may land in any relative order. Records with a NaN cost compare
/// as equal to everything and may sort inconsistently; that is accepted
/// rather than specially handled.
pub fn sort_by_cost(records: &mut [StatRecord]) {
    records.sort_unstable_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));
}
