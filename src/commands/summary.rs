//! Summary command implementation.
//!
//! Loads the transactions file, builds the summary report and writes it as
//! JSON (file or stdout) or prints the text form.

use super::models::SummaryArgs;
use super::utils::load_analyzer;
use crate::output::{to_json_string, write_summary};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading transactions from {}", args.input.display());
    let analyzer = load_analyzer(&args.input)?;

    info!("Step 2/3: Aggregating {} transactions...", analyzer.len());
    let summary = analyzer.summary(args.input.display().to_string());
    info!("Summary: {}", summary.summary_line());

    info!("Step 3/3: Writing report...");
    if args.text {
        println!("{}", summary.to_text(args.top_merchants));
    } else if let Some(path) = &args.output {
        write_summary(&summary, path).context("Failed to write summary JSON")?;
        info!("✓ Summary written to: {}", path.display());
    } else {
        println!("{}", to_json_string(&summary)?);
    }

    info!(
        "Summary completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate summary arguments
///
/// **Public** - can be called before execute_summary for early validation
pub fn validate_summary_args(args: &SummaryArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.text && args.output.is_some() {
        anyhow::bail!("--text prints to stdout and cannot be combined with --output");
    }

    if args.top_merchants == 0 {
        anyhow::bail!("top_merchants must be greater than 0");
    }

    Ok(())
}
