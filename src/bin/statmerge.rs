//! statmerge CLI tool
//!
//! Merges two binary stat dumps into one, prints a preview of the
//! lowest-cost records, and writes the merged dump to the output path.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use statmerge::pipeline;

#[derive(Parser)]
#[command(name = "statmerge")]
#[command(about = "Merge two fixed-layout binary stat dumps by record id")]
struct Cli {
    /// First input dump
    input1: PathBuf,
    /// Second input dump
    input2: PathBuf,
    /// Merged output dump
    output: PathBuf,
    /// Maximum preview rows printed before the output is written
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

fn main() -> Result<()> {
    // Usage errors must exit 1, same as pipeline failures; --help/--version
    // still exit 0
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    let mut stdout = io::stdout().lock();
    let summary = pipeline::run(&cli.input1, &cli.input2, &cli.output, cli.limit, &mut stdout)?;

    println!(
        "Merged {} + {} records into {} ({} unique ids)",
        summary.loaded_a,
        summary.loaded_b,
        cli.output.display(),
        summary.merged
    );

    Ok(())
}
