//! Merge two record dumps into one, deduplicating by id
//!
//! The merge concatenates both inputs, sorts by id, then folds each run of
//! equal ids into a single record:
//! - count: saturating addition (clamped at the i32 bounds)
//! - cost: plain f32 addition (NaN/Inf propagate per IEEE-754)
//! - primary: logical AND
//! - mode: maximum
//!
//! Duplicate ids within a single input merge the same way as collisions
//! across inputs. Two empty inputs yield an empty output.

use crate::record::StatRecord;

/// Add `term` to `acc`, clamping at the i32 bounds instead of wrapping.
///
/// The clamp direction follows the sign of the added term, mirroring the
/// two-sided overflow check computed before the addition.
pub fn saturating_add_count(acc: i32, term: i32) -> i32 {
    if term > 0 && acc > i32::MAX - term {
        i32::MAX
    } else if term < 0 && acc < i32::MIN - term {
        i32::MIN
    } else {
        acc + term
    }
}

/// Fold `dup` into the accumulator `acc` (same id assumed).
fn fold_duplicate(acc: &mut StatRecord, dup: &StatRecord) {
    acc.count = saturating_add_count(acc.count, dup.count);
    acc.cost += dup.cost;
    acc.primary = acc.primary && dup.primary;
    if dup.mode > acc.mode {
        acc.mode = dup.mode;
    }
}

/// Merge two dumps into one sequence with at most one record per id.
///
/// Takes both inputs by value; the result owns its storage. The returned
/// records come out ascending by id, but callers re-sort by cost before
/// persisting, so that order carries no meaning.
pub fn merge_dumps(a: Vec<StatRecord>, b: Vec<StatRecord>) -> Vec<StatRecord> {
    let mut combined = a;
    combined.extend(b);

    if combined.is_empty() {
        return combined;
    }

    // Equal ids collapse into one record, so the tie-break among them
    // does not matter.
    combined.sort_unstable_by_key(|r| r.id);

    let mut merged: Vec<StatRecord> = Vec::new();
    for record in combined {
        match merged.last_mut() {
            Some(acc) if acc.id == record.id => fold_duplicate(acc, &record),
            _ => merged.push(record),
        }
    }

    merged
}
