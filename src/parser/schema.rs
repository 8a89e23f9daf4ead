//! Transaction record schema.
//!
//! This module defines the structure of the records read from the input file.
//! Field names match the JSON keys exactly.

use crate::utils::config::{CREDIT, DEBIT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, numeric or textual
    pub transaction_id: TransactionId,

    /// Calendar day of the transaction
    #[serde(deserialize_with = "super::dates::deserialize_date")]
    pub transaction_date: NaiveDate,

    /// Amount; the sign is not constrained
    pub transaction_amount: f64,

    /// Category label such as "debit" or "credit" (open set)
    pub transaction_type: String,

    #[serde(default)]
    pub merchant_name: String,

    #[serde(default)]
    pub transaction_description: String,
}

impl Transaction {
    /// Whether the record carries the given type label
    pub fn is_type(&self, label: &str) -> bool {
        self.transaction_type == label
    }

    pub fn is_debit(&self) -> bool {
        self.is_type(DEBIT)
    }

    pub fn is_credit(&self) -> bool {
        self.is_type(CREDIT)
    }

    /// Render the record as compact JSON
    ///
    /// **Public** - stable string form of a record, also used by `Display`
    pub fn to_display_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl AsRef<Transaction> for Transaction {
    fn as_ref(&self) -> &Transaction {
        self
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

/// Transaction identifier as found in the input file
///
/// Any JSON number or string is accepted. Equality is loose: numbers compare
/// by value (`26` equals `26.0`) and a string equals a number when it parses
/// to that value (`"26"` equals `26`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(Number),
    Text(String),
}

impl TransactionId {
    /// Numeric value of the id, if it has one
    ///
    /// Text ids count when they hold a number after trimming whitespace.
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            TransactionId::Number(n) => n.as_f64(),
            TransactionId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
            }
        }
    }
}

impl PartialEq for TransactionId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TransactionId::Text(a), TransactionId::Text(b)) => a == b,
            (TransactionId::Number(a), TransactionId::Number(b)) if a == b => true,
            _ => match (self.numeric_value(), other.numeric_value()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionId::Number(n) => write!(f, "{}", n),
            TransactionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for TransactionId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .parse::<i64>()
            .map(Number::from)
            .or_else(|_| s.parse::<u64>().map(Number::from))
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64));

        Ok(match number {
            Some(n) => TransactionId::Number(n),
            None => TransactionId::Text(s.to_string()),
        })
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        TransactionId::Number(value.into())
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        TransactionId::Text(value.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        TransactionId::Text(value)
    }
}
