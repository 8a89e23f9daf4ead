//! Query command implementation.
//!
//! The query command:
//! 1. Loads the transactions file
//! 2. Builds the analyzer
//! 3. Runs one operation
//! 4. Writes the result as JSON to stdout or a file

use super::models::{Query, QueryArgs};
use super::utils::load_analyzer;
use crate::analyzer::TransactionAnalyzer;
use crate::output::{to_json_string, write_json};
use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::{json, Value};

/// Execute the query command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Transactions file missing or malformed
/// * `average` over an empty file
/// * Output file write errors
pub fn execute_query(args: QueryArgs) -> Result<()> {
    info!("Running query '{}' on {}", args.query.name(), args.input.display());

    let analyzer = load_analyzer(&args.input)?;
    let result = run_query(&analyzer, &args.query)?;

    match &args.output {
        Some(path) => {
            write_json(&result, path).context("Failed to write query result")?;
            info!("✓ Result written to: {}", path.display());
        }
        None => println!("{}", to_json_string(&result)?),
    }

    Ok(())
}

/// Run one query against an analyzer and return the result as JSON
///
/// **Public** - usable without touching the filesystem
///
/// Absent results (`first-of-type`, `find`) are `null`. A sum or average
/// that overflows to a non-finite value is an error, never `null`.
pub fn run_query(analyzer: &TransactionAnalyzer, query: &Query) -> Result<Value> {
    let value = match query {
        Query::All => serde_json::to_value(analyzer.transactions())?,
        Query::Render => serde_json::to_value(analyzer.render_all())?,
        Query::UniqueOfType { kind } => serde_json::to_value(analyzer.unique_of_type(kind))?,
        Query::Total => finite_amount("Total amount", analyzer.total_amount())?,
        Query::TotalOnDate { year, month, day } => finite_amount(
            "Total amount on date",
            analyzer.total_amount_on_date(*year, *month, *day),
        )?,
        Query::FirstOfType { kind } => serde_json::to_value(analyzer.first_of_type(kind))?,
        Query::DateRange { start, end } => {
            serde_json::to_value(analyzer.in_date_range(*start, *end))?
        }
        Query::Merchant { name } => serde_json::to_value(analyzer.by_merchant(name))?,
        Query::Average => finite_amount(
            "Average amount",
            analyzer
                .average_amount()
                .context("Failed to compute average amount")?,
        )?,
        Query::AmountRange { min, max } => {
            serde_json::to_value(analyzer.by_amount_range(*min, *max))?
        }
        Query::DebitTotal => finite_amount("Debit total", analyzer.total_debit_amount())?,
        Query::BusiestMonth => serde_json::to_value(analyzer.most_frequent_month())?,
        Query::BusiestDebitMonth => serde_json::to_value(analyzer.most_frequent_debit_month())?,
        Query::DominantType => serde_json::to_value(analyzer.dominant_type())?,
        Query::Before { cutoff } => serde_json::to_value(analyzer.before_date(*cutoff))?,
        Query::Find { id } => serde_json::to_value(analyzer.find_by_id(id))?,
        Query::Descriptions => serde_json::to_value(analyzer.descriptions())?,
    };

    debug!("Query '{}' produced: {}", query.name(), value);

    Ok(value)
}

/// JSON number for an amount aggregate
///
/// **Private** - JSON has no encoding for infinity or NaN
fn finite_amount(label: &str, value: f64) -> Result<Value> {
    if !value.is_finite() {
        anyhow::bail!("{} is not a finite number ({})", label, value);
    }
    Ok(json!(value))
}
