//! Transactions file loader.
//!
//! Reads a JSON array of transaction records into memory in one pass.
//! Any failure here is fatal for the CLI: there is nothing to analyze
//! without a parsed record sequence.

use super::schema::Transaction;
use crate::utils::error::LoadError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load all transaction records from a JSON file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `input_path` - Path to a JSON file holding an array of records
///
/// # Returns
/// Records in file order
///
/// # Errors
/// * `LoadError::Io` - File missing or unreadable
/// * `LoadError::Json` - Malformed JSON or a record with bad fields
/// * `LoadError::InvalidFormat` - Top level is not an array
pub fn load_transactions(input_path: impl AsRef<Path>) -> Result<Vec<Transaction>, LoadError> {
    let input_path = input_path.as_ref();

    debug!("Reading transactions from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    let transactions = from_value(raw)?;
    debug!(
        "Loaded {} transactions from {}",
        transactions.len(),
        input_path.display()
    );

    Ok(transactions)
}

/// Parse transaction records from a JSON string
///
/// **Public** - useful for tests and in-memory sources
pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>, LoadError> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    from_value(raw)
}

/// Check the document shape, then decode every record
///
/// **Private** - internal helper for the public loaders
fn from_value(raw: serde_json::Value) -> Result<Vec<Transaction>, LoadError> {
    match raw {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(raw)?),
        other => Err(LoadError::InvalidFormat(format!(
            "Transactions must be a JSON array, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
