//! Output writers for query results and summary reports.
//!
//! This module handles writing data in JSON:
//! - Summary reports (to files, and back)
//! - Arbitrary query results (to files or strings)

pub mod json;

// Re-export main functions
pub use json::{read_summary, to_json_string, write_json, write_summary};
