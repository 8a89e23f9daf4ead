//! Month frequency and debit/credit balance over transaction records.

use crate::parser::schema::Transaction;
use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// The month (1-12) holding the most records
///
/// A tie for the highest count is reported as `Tied` with every tied
/// month, never as an arbitrary pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFrequency {
    Single(u32),
    Tied(BTreeSet<u32>),
}

impl MonthFrequency {
    /// All months in the result, ascending
    pub fn months(&self) -> Vec<u32> {
        match self {
            MonthFrequency::Single(month) => vec![*month],
            MonthFrequency::Tied(months) => months.iter().copied().collect(),
        }
    }

    pub fn is_tied(&self) -> bool {
        matches!(self, MonthFrequency::Tied(_))
    }
}

impl Display for MonthFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFrequency::Single(month) => write!(f, "{}", month),
            MonthFrequency::Tied(months) => {
                let joined: Vec<String> = months.iter().map(|m| m.to_string()).collect();
                write!(f, "tied: {}", joined.join(", "))
            }
        }
    }
}

/// Which of debit and credit records is more numerous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl DominantType {
    /// Compare debit and credit record counts
    pub fn from_counts(debit_count: usize, credit_count: usize) -> Self {
        use std::cmp::Ordering;

        match debit_count.cmp(&credit_count) {
            Ordering::Greater => DominantType::Debit,
            Ordering::Less => DominantType::Credit,
            Ordering::Equal => DominantType::Equal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DominantType::Debit => "debit",
            DominantType::Credit => "credit",
            DominantType::Equal => "equal",
        }
    }
}

impl Display for DominantType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count records per calendar month (1-12), across all years
///
/// **Public** - building block for `most_frequent_month`
pub fn count_by_month<I, T>(records: I) -> BTreeMap<u32, usize>
where
    I: IntoIterator<Item = T>,
    T: AsRef<Transaction>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry(record.as_ref().transaction_date.month())
            .or_insert(0) += 1;
    }
    counts
}

/// Find the month with the most records
///
/// **Public** - main entry point for month frequency
///
/// # Returns
/// * `None` - no records
/// * `Some(Single(m))` - one month has the highest count
/// * `Some(Tied(ms))` - several months share the highest count
pub fn most_frequent_month<I, T>(records: I) -> Option<MonthFrequency>
where
    I: IntoIterator<Item = T>,
    T: AsRef<Transaction>,
{
    let counts = count_by_month(records);
    let max = counts.values().copied().max()?;

    let busiest: BTreeSet<u32> = counts
        .iter()
        .filter(|(_, count)| **count == max)
        .map(|(month, _)| *month)
        .collect();

    debug!(
        "Month counts {:?}: {} month(s) with {} records",
        counts,
        busiest.len(),
        max
    );

    if busiest.len() == 1 {
        busiest.into_iter().next().map(MonthFrequency::Single)
    } else {
        Some(MonthFrequency::Tied(busiest))
    }
}
