//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod query;
pub mod summary;
pub mod utils;

// Re-export main command functions
pub use models::{Query, QueryArgs, SummaryArgs};
pub use query::{execute_query, run_query};
pub use summary::{execute_summary, validate_summary_args};
pub use utils::{
    display_schema, display_version, inspect_transactions_file, load_analyzer,
    validate_transactions_file, ValidationReport,
};
