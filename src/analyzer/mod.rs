//! Aggregation and queries over transaction records.
//!
//! This module provides:
//! - The `TransactionAnalyzer` collection and its queries
//! - Month frequency and debit/credit balance results
//! - Calendar date normalization
//! - The summary report

pub mod calendar;
pub mod collection;
pub mod frequency;
pub mod summary;

// Re-export main types and functions
pub use calendar::normalize_calendar_date;
pub use collection::TransactionAnalyzer;
pub use frequency::{count_by_month, most_frequent_month, DominantType, MonthFrequency};
pub use summary::{build_summary, merchant_totals, MerchantTotal, Summary};
