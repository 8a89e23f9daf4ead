//! Transaction record parsing and schema definitions.
//!
//! This module handles:
//! - Defining the record schema
//! - Decoding calendar dates from plain dates or timestamps
//! - Loading a transactions file into memory

pub mod dates;
pub mod loader;
pub mod schema;

// Re-export main types
pub use dates::parse_date;
pub use loader::{load_transactions, parse_transactions};
pub use schema::{Transaction, TransactionId};
