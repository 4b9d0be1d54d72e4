//! Load → merge → sort → preview → store, as one synchronous pass
//!
//! Each stage hands ownership of the working buffer to the next; no stage
//! prints on failure, errors propagate up with path context for the CLI
//! to report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dump::{load_dump, store_dump};
use crate::merge::merge_dumps;
use crate::report::print_preview;
use crate::sort::sort_by_cost;

/// Record counts observed by a pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct MergeSummary {
    pub loaded_a: usize,
    pub loaded_b: usize,
    pub merged: usize,
}

/// Run the whole pipeline: read both inputs, merge by id, sort by cost,
/// print a preview of at most `preview_limit` rows to `out`, and write
/// the merged dump to `output`.
pub fn run(
    input_a: &Path,
    input_b: &Path,
    output: &Path,
    preview_limit: usize,
    out: &mut impl Write,
) -> Result<MergeSummary> {
    let a = load_dump(input_a)
        .with_context(|| format!("failed to load {}", input_a.display()))?;
    let b = load_dump(input_b)
        .with_context(|| format!("failed to load {}", input_b.display()))?;
    let (loaded_a, loaded_b) = (a.len(), b.len());

    let mut merged = merge_dumps(a, b);
    sort_by_cost(&mut merged);

    print_preview(out, &merged, preview_limit).context("failed to render preview")?;

    store_dump(output, &merged)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(MergeSummary {
        loaded_a,
        loaded_b,
        merged: merged.len(),
    })
}
