//! Transaction Analyzer
//!
//! In-memory filtering, aggregation and summaries over financial
//! transaction records loaded from a JSON file.
//!
//! This crate provides the core implementation for the
//! `txn-analyzer` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use transaction_analyzer::{load_transactions, TransactionAnalyzer};
//!
//! let analyzer = TransactionAnalyzer::new(load_transactions("transaction.json")?);
//! println!("total: {}", analyzer.total_amount());
//! println!("busiest month: {:?}", analyzer.most_frequent_month());
//! ```

pub mod analyzer;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use analyzer::{DominantType, MonthFrequency, Summary, TransactionAnalyzer};
pub use parser::{load_transactions, parse_transactions, Transaction, TransactionId};
pub use utils::{AnalyzerError, LoadError, OutputError};
