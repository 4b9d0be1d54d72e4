//! Render a bounded preview table of cost-sorted records

use std::io::{self, Write};

use crate::record::StatRecord;

/// Render the 3-bit mode as a binary string, most-significant bit first.
fn mode_bits(mode: u8) -> String {
    (0..3)
        .rev()
        .map(|bit| if mode >> bit & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Print up to `limit` records from the front of an already cost-sorted
/// slice as a human-readable table.
///
/// A row whose id equals the immediately preceding rendered row's id is
/// skipped. Merge output is already fully deduplicated, so this is only a
/// guard against accidental adjacent duplicates, not a second dedup pass.
pub fn print_preview(
    out: &mut impl Write,
    records: &[StatRecord],
    limit: usize,
) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{:<10} {:<10} {:<15} {:<8} {:<5}",
        "ID", "Count", "Cost", "Primary", "Mode"
    )?;
    writeln!(out, "{}", "-".repeat(44))?;

    let mut last_rendered: Option<i64> = None;
    for record in records.iter().take(limit) {
        if last_rendered == Some(record.id) {
            continue;
        }

        writeln!(
            out,
            "0x{:<8x} {:<10} {:<15} {:<8} {}",
            record.id,
            record.count,
            format!("{:.3e}", record.cost),
            if record.primary { 'y' } else { 'n' },
            mode_bits(record.mode),
        )?;

        last_rendered = Some(record.id);
    }

    Ok(())
}
