use crate::parser::{parse_date, TransactionId};
use crate::utils::config::DEFAULT_INPUT_PATH;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

/// One read operation over the loaded transactions
///
/// **Public** - parsed by main.rs as the `query` subcommand
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Query {
    /// List every transaction in file order
    All,

    /// Render each transaction as a one-line JSON string
    Render,

    /// Transactions of a type, each record once
    UniqueOfType {
        /// Type label, e.g. "debit"
        #[arg(value_name = "TYPE")]
        kind: String,
    },

    /// Sum of all amounts
    Total,

    /// Sum of amounts on one calendar day (out-of-range values roll over)
    TotalOnDate {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        #[arg(allow_negative_numbers = true)]
        month: i32,
        #[arg(allow_negative_numbers = true)]
        day: i32,
    },

    /// First transaction of a type
    FirstOfType {
        #[arg(value_name = "TYPE")]
        kind: String,
    },

    /// Transactions dated within START..=END
    DateRange {
        #[arg(value_parser = parse_date)]
        start: NaiveDate,
        #[arg(value_parser = parse_date)]
        end: NaiveDate,
    },

    /// Transactions with a merchant
    Merchant { name: String },

    /// Mean amount (fails on an empty file)
    Average,

    /// Transactions with MIN <= amount <= MAX
    AmountRange {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Sum of debit amounts
    DebitTotal,

    /// Month (1-12) with the most transactions
    BusiestMonth,

    /// Month (1-12) with the most debit transactions
    BusiestDebitMonth,

    /// Whether debit or credit transactions are more numerous
    DominantType,

    /// Transactions dated strictly before CUTOFF
    Before {
        #[arg(value_parser = parse_date)]
        cutoff: NaiveDate,
    },

    /// Transaction with an identifier
    Find { id: TransactionId },

    /// Descriptions of all transactions
    Descriptions,
}

impl Query {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Query::All => "all",
            Query::Render => "render",
            Query::UniqueOfType { .. } => "unique-of-type",
            Query::Total => "total",
            Query::TotalOnDate { .. } => "total-on-date",
            Query::FirstOfType { .. } => "first-of-type",
            Query::DateRange { .. } => "date-range",
            Query::Merchant { .. } => "merchant",
            Query::Average => "average",
            Query::AmountRange { .. } => "amount-range",
            Query::DebitTotal => "debit-total",
            Query::BusiestMonth => "busiest-month",
            Query::BusiestDebitMonth => "busiest-debit-month",
            Query::DominantType => "dominant-type",
            Query::Before { .. } => "before",
            Query::Find { .. } => "find",
            Query::Descriptions => "descriptions",
        }
    }
}

/// Arguments for the query command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct QueryArgs {
    /// Transactions JSON file
    pub input: PathBuf,

    /// Operation to run
    pub query: Query,

    /// Write the result here instead of stdout
    pub output: Option<PathBuf>,
}

/// Arguments for the summary command
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    /// Transactions JSON file
    pub input: PathBuf,

    /// Write the JSON report here instead of stdout
    pub output: Option<PathBuf>,

    /// Print the text report instead of JSON
    pub text: bool,

    /// Merchants listed in the text report
    pub top_merchants: usize,
}

impl Default for SummaryArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: None,
            text: false,
            top_merchants: 5,
        }
    }
}
