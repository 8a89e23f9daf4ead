//! Summary report over a transaction collection.
//!
//! Collects every scalar aggregate into one serializable report, plus a
//! per-merchant breakdown. This is what the `summary` command writes.

use super::collection::TransactionAnalyzer;
use super::frequency::{DominantType, MonthFrequency};
use crate::parser::schema::Transaction;
use crate::utils::config::{CREDIT, DEBIT, REPORT_SCHEMA_VERSION};
use chrono::{NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the records were loaded from
    pub source: String,

    pub transaction_count: usize,
    pub debit_count: usize,
    pub credit_count: usize,

    pub total_amount: f64,
    pub total_debit_amount: f64,

    /// Mean amount, absent for an empty collection
    pub average_amount: Option<f64>,

    pub dominant_type: DominantType,

    /// Busiest month over all records
    pub busiest_month: Option<MonthFrequency>,

    /// Busiest month over debit records
    pub busiest_debit_month: Option<MonthFrequency>,

    /// Earliest record date
    pub first_date: Option<NaiveDate>,

    /// Latest record date
    pub last_date: Option<NaiveDate>,

    /// Per-merchant totals, largest total first
    pub merchants: Vec<MerchantTotal>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

/// Record count and amount total for one merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantTotal {
    pub merchant: String,
    pub count: usize,
    pub total_amount: f64,
}

/// Build a summary report from an analyzer
///
/// **Public** - main entry point for summaries
///
/// # Arguments
/// * `analyzer` - Collection to summarize
/// * `source` - Label for the input (usually the file path)
pub fn build_summary(analyzer: &TransactionAnalyzer, source: impl Into<String>) -> Summary {
    let records = analyzer.transactions();
    debug!("Building summary over {} transactions", records.len());

    let first_date = records.iter().map(|tx| tx.transaction_date).min();
    let last_date = records.iter().map(|tx| tx.transaction_date).max();

    Summary {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.into(),
        transaction_count: analyzer.len(),
        debit_count: analyzer.count_of_type(DEBIT),
        credit_count: analyzer.count_of_type(CREDIT),
        total_amount: analyzer.total_amount(),
        total_debit_amount: analyzer.total_debit_amount(),
        average_amount: analyzer.average_amount().ok(),
        dominant_type: analyzer.dominant_type(),
        busiest_month: analyzer.most_frequent_month(),
        busiest_debit_month: analyzer.most_frequent_debit_month(),
        first_date,
        last_date,
        merchants: merchant_totals(records),
        generated_at: Utc::now().to_rfc3339(),
    }
}

impl TransactionAnalyzer {
    /// Summarize this collection, labelled with `source`
    pub fn summary(&self, source: impl Into<String>) -> Summary {
        build_summary(self, source)
    }
}

/// Group records by merchant
///
/// **Public** - also useful on filtered subsets
///
/// # Returns
/// One entry per merchant, sorted by total amount (descending), then name
pub fn merchant_totals<I, T>(records: I) -> Vec<MerchantTotal>
where
    I: IntoIterator<Item = T>,
    T: AsRef<Transaction>,
{
    let mut by_merchant: HashMap<String, MerchantTotal> = HashMap::new();

    for record in records {
        let record = record.as_ref();
        let entry = by_merchant
            .entry(record.merchant_name.clone())
            .or_insert_with(|| MerchantTotal {
                merchant: record.merchant_name.clone(),
                count: 0,
                total_amount: 0.0,
            });
        entry.count += 1;
        entry.total_amount += record.transaction_amount;
    }

    let mut totals: Vec<MerchantTotal> = by_merchant.into_values().collect();
    totals.sort_by(|a, b| {
        b.total_amount
            .total_cmp(&a.total_amount)
            .then_with(|| a.merchant.cmp(&b.merchant))
    });
    totals
}

impl Summary {
    /// Get human-readable one-line digest
    ///
    /// **Public** - for logging and debugging
    pub fn summary_line(&self) -> String {
        format!(
            "Transactions: {} | Total: {:.2} | Debit: {:.2} | Average: {} | Dominant: {} | Busiest month: {}",
            self.transaction_count,
            self.total_amount,
            self.total_debit_amount,
            format_optional_amount(self.average_amount),
            self.dominant_type,
            format_optional(self.busiest_month.as_ref()),
        )
    }

    /// Multi-line text report
    ///
    /// **Public** - printed by `summary --text`
    pub fn to_text(&self, top_merchants: usize) -> String {
        let mut lines = vec![
            "=".repeat(60),
            "TRANSACTION SUMMARY".to_string(),
            "=".repeat(60),
            format!("Source:              {}", self.source),
            format!("Transactions:        {}", self.transaction_count),
            format!("  debit / credit:    {} / {}", self.debit_count, self.credit_count),
            format!(
                "Date span:           {} .. {}",
                format_optional(self.first_date.as_ref()),
                format_optional(self.last_date.as_ref())
            ),
            format!("Total amount:        {:.2}", self.total_amount),
            format!("Total debit amount:  {:.2}", self.total_debit_amount),
            format!("Average amount:      {}", format_optional_amount(self.average_amount)),
            format!("Dominant type:       {}", self.dominant_type),
            format!("Busiest month:       {}", format_optional(self.busiest_month.as_ref())),
            format!(
                "Busiest debit month: {}",
                format_optional(self.busiest_debit_month.as_ref())
            ),
        ];

        if !self.merchants.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "Top merchants ({} of {}):",
                top_merchants.min(self.merchants.len()),
                self.merchants.len()
            ));
            for (i, m) in self.merchants.iter().take(top_merchants).enumerate() {
                lines.push(format!(
                    "  {}. {} - {} transaction(s), {:.2}",
                    i + 1,
                    m.merchant,
                    m.count,
                    m.total_amount
                ));
            }
        }

        lines.push("=".repeat(60));
        lines.join("\n")
    }
}

fn format_optional<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn format_optional_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}
