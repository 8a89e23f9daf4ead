//! JSON output writer.
//!
//! Writes query results and summary reports as JSON, to files or strings.

use crate::analyzer::summary::Summary;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a summary report to a JSON file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(summary: &Summary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_json(summary, output_path)
}

/// Write any serializable value as pretty JSON to a file
///
/// **Public** - used for summaries and for `query --output`
pub fn write_json<T>(value: &T, output_path: impl AsRef<Path>) -> Result<(), OutputError>
where
    T: Serialize + ?Sized,
{
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        "JSON written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Render any serializable value as pretty JSON
///
/// **Public** - used for stdout output
pub fn to_json_string<T>(value: &T) -> Result<String, OutputError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Read a summary report back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<Summary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path)?;
    let summary: Summary = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Summary loaded: version {}, {} transactions",
        summary.version, summary.transaction_count
    );

    Ok(summary)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{build_summary, TransactionAnalyzer};
    use crate::parser::schema::{Transaction, TransactionId};
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn create_test_summary() -> Summary {
        let analyzer = TransactionAnalyzer::new(vec![Transaction {
            transaction_id: TransactionId::Number(1.into()),
            transaction_date: NaiveDate::from_ymd_opt(2019, 1, 5).unwrap(),
            transaction_amount: 50.0,
            transaction_type: "debit".to_string(),
            merchant_name: "SuperMart123".to_string(),
            transaction_description: "Groceries".to_string(),
        }]);
        build_summary(&analyzer, "test.json")
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_summary(&summary, path).unwrap();
        let loaded = read_summary(path).unwrap();

        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_to_json_string() {
        let json = to_json_string(&vec![1, 2]).unwrap();
        assert_eq!(json, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&create_test_summary(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
