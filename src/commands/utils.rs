use crate::analyzer::TransactionAnalyzer;
use crate::parser::load_transactions;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

/// Load a transactions file and build an analyzer over it
pub fn load_analyzer(input_path: &Path) -> Result<TransactionAnalyzer> {
    let transactions = load_transactions(input_path).with_context(|| {
        format!("Failed to load transactions from {}", input_path.display())
    })?;
    Ok(TransactionAnalyzer::new(transactions))
}

/// What `validate` found in a transactions file
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub transaction_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub by_type: BTreeMap<String, usize>,
}

/// Check that a transactions file loads, and describe it
pub fn inspect_transactions_file(input_path: &Path) -> Result<ValidationReport> {
    let analyzer = load_analyzer(input_path)?;
    let records = analyzer.transactions();

    let mut by_type = BTreeMap::new();
    for tx in records {
        *by_type.entry(tx.transaction_type.clone()).or_insert(0) += 1;
    }

    Ok(ValidationReport {
        transaction_count: records.len(),
        first_date: records.iter().map(|tx| tx.transaction_date).min(),
        last_date: records.iter().map(|tx| tx.transaction_date).max(),
        by_type,
    })
}

/// Validate a transactions file and print what it holds
pub fn validate_transactions_file(input_path: &Path) -> Result<()> {
    println!("Validating transactions: {}", input_path.display());

    let report = inspect_transactions_file(input_path)?;

    println!("✓ Valid transactions JSON");
    println!("  Transactions: {}", report.transaction_count);
    if let (Some(first), Some(last)) = (report.first_date, report.last_date) {
        println!("  Date span: {} .. {}", first, last);
    }
    for (kind, count) in &report.by_type {
        println!("  {}: {}", kind, count);
    }

    Ok(())
}

/// Display the transaction record layout
pub fn display_schema(show_details: bool) {
    println!("Transaction Analyzer Input Schema");
    println!("Report Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Input: a JSON array of transaction objects");
        println!("  transaction_id: number|string   - Identifier (26 and \"26\" match)");
        println!("  transaction_date: string        - YYYY-MM-DD or RFC 3339 timestamp");
        println!("  transaction_amount: number      - Amount, any sign");
        println!("  transaction_type: string        - \"debit\", \"credit\" or any label");
        println!("  merchant_name: string?          - Merchant (defaults to empty)");
        println!("  transaction_description: string? - Free text (defaults to empty)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Transaction Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Filter, aggregate and summarize financial transaction records.");
}
