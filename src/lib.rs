//! statmerge - merge, sort and preview fixed-layout binary stat dumps
//!
//! A dump file is a headerless array of 17-byte records keyed by a 64-bit
//! id. This crate merges two dumps into one (deduplicating by id with
//! per-field aggregation), sorts the result by cost, renders a bounded
//! preview table, and writes the merged dump back out.

pub mod dump;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod sort;

pub use dump::{load_dump, store_dump, DumpError};
pub use merge::{merge_dumps, saturating_add_count};
pub use pipeline::{run, MergeSummary};
pub use record::StatRecord;
pub use report::print_preview;
pub use sort::sort_by_cost;
