//! Configuration and constants for the CLI.

/// Input file read when `--file` is not given
pub const DEFAULT_INPUT_PATH: &str = "transaction.json";

/// Current summary report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Transaction type labels. The type field is an open string; these are the
// two labels the aggregates single out.
pub const DEBIT: &str = "debit";
pub const CREDIT: &str = "credit";

/// Calendar date layout used in input files and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";
