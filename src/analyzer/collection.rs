//! Query and aggregation over an ordered collection of transactions.
//!
//! Records are held as `Arc<Transaction>`. Appending the same `Arc` twice
//! stores one record identity twice, which is what `unique_of_type`
//! deduplicates on. Two distinct records with equal fields stay distinct.

use super::calendar::normalize_calendar_date;
use super::frequency::{self, DominantType, MonthFrequency};
use crate::parser::schema::{Transaction, TransactionId};
use crate::utils::error::AnalyzerError;
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Owns an ordered sequence of transaction records
///
/// **Public** - main entry point of the library
///
/// All queries read the sequence as it is at call time. The only mutation
/// is `push`. No internal locking; wrap in an `RwLock` to share across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct TransactionAnalyzer {
    transactions: Vec<Arc<Transaction>>,
}

impl TransactionAnalyzer {
    /// Create an analyzer over an initial sequence (possibly empty)
    pub fn new<I, T>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<Transaction>>,
    {
        let transactions: Vec<Arc<Transaction>> =
            transactions.into_iter().map(Into::into).collect();
        debug!("Analyzer created with {} transactions", transactions.len());
        Self { transactions }
    }

    /// Append a record to the end of the sequence, without validation
    pub fn push(&mut self, transaction: impl Into<Arc<Transaction>>) {
        self.transactions.push(transaction.into());
    }

    /// The live sequence, in insertion order
    pub fn transactions(&self) -> &[Arc<Transaction>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// One display string per record, in sequence order
    pub fn render_all(&self) -> Vec<String> {
        self.transactions
            .iter()
            .map(|tx| tx.to_display_string())
            .collect()
    }

    /// Records of the given type, each record identity at most once
    ///
    /// Identity is the `Arc` allocation, not field equality.
    pub fn unique_of_type(&self, label: &str) -> Vec<&Arc<Transaction>> {
        let mut seen: HashSet<*const Transaction> = HashSet::new();
        self.transactions
            .iter()
            .filter(|tx| tx.is_type(label))
            .filter(|tx| seen.insert(Arc::as_ptr(*tx)))
            .collect()
    }

    /// Sum of all amounts; `0.0` when empty
    pub fn total_amount(&self) -> f64 {
        self.transactions
            .iter()
            .map(|tx| tx.transaction_amount)
            .sum()
    }

    /// Sum of amounts on one calendar day
    ///
    /// Out-of-range `month`/`day` roll over (see `normalize_calendar_date`).
    /// A date that cannot be represented matches nothing.
    pub fn total_amount_on_date(&self, year: i32, month: i32, day: i32) -> f64 {
        let Some(date) = normalize_calendar_date(year, month, day) else {
            debug!("Date {}-{}-{} is not representable", year, month, day);
            return 0.0;
        };

        self.transactions
            .iter()
            .filter(|tx| tx.transaction_date == date)
            .map(|tx| tx.transaction_amount)
            .sum()
    }

    /// First record of the given type, in sequence order
    pub fn first_of_type(&self, label: &str) -> Option<&Arc<Transaction>> {
        self.transactions.iter().find(|tx| tx.is_type(label))
    }

    /// Records dated within `[start, end]`, both ends inclusive
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Arc<Transaction>> {
        self.filter(|tx| tx.transaction_date >= start && tx.transaction_date <= end)
    }

    /// Records with the given merchant, in sequence order
    pub fn by_merchant(&self, merchant: &str) -> Vec<&Arc<Transaction>> {
        self.filter(|tx| tx.merchant_name == merchant)
    }

    /// Mean amount per record
    ///
    /// # Errors
    /// * `AnalyzerError::EmptyCollection` - there are no records to average
    pub fn average_amount(&self) -> Result<f64, AnalyzerError> {
        if self.transactions.is_empty() {
            warn!("Average requested over an empty collection");
            return Err(AnalyzerError::EmptyCollection);
        }
        Ok(self.total_amount() / self.transactions.len() as f64)
    }

    /// Records with `min <= amount <= max`
    pub fn by_amount_range(&self, min: f64, max: f64) -> Vec<&Arc<Transaction>> {
        self.filter(|tx| tx.transaction_amount >= min && tx.transaction_amount <= max)
    }

    /// Sum of amounts over "debit" records
    pub fn total_debit_amount(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.is_debit())
            .map(|tx| tx.transaction_amount)
            .sum()
    }

    /// Busiest calendar month over the whole collection
    pub fn most_frequent_month(&self) -> Option<MonthFrequency> {
        frequency::most_frequent_month(&self.transactions)
    }

    /// Busiest calendar month over a caller-chosen subset
    pub fn most_frequent_month_in<I, T>(&self, subset: I) -> Option<MonthFrequency>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Transaction>,
    {
        frequency::most_frequent_month(subset)
    }

    /// Busiest calendar month over "debit" records
    pub fn most_frequent_debit_month(&self) -> Option<MonthFrequency> {
        self.most_frequent_month_in(self.transactions.iter().filter(|tx| tx.is_debit()))
    }

    /// Number of records carrying the given type label
    pub fn count_of_type(&self, label: &str) -> usize {
        self.transactions
            .iter()
            .filter(|tx| tx.is_type(label))
            .count()
    }

    /// Compare debit and credit counts; other types are ignored
    pub fn dominant_type(&self) -> DominantType {
        let debits = self.transactions.iter().filter(|tx| tx.is_debit()).count();
        let credits = self.transactions.iter().filter(|tx| tx.is_credit()).count();
        DominantType::from_counts(debits, credits)
    }

    /// Records dated strictly before `cutoff`
    pub fn before_date(&self, cutoff: NaiveDate) -> Vec<&Arc<Transaction>> {
        self.filter(|tx| tx.transaction_date < cutoff)
    }

    /// First record with the given identifier
    pub fn find_by_id(&self, id: &TransactionId) -> Option<&Arc<Transaction>> {
        self.transactions.iter().find(|tx| tx.transaction_id == *id)
    }

    /// Descriptions of all records, in sequence order
    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .map(|tx| tx.transaction_description.as_str())
            .collect()
    }

    /// Order-preserving filter shared by the subsequence queries
    ///
    /// **Private** - internal helper
    fn filter<P>(&self, predicate: P) -> Vec<&Arc<Transaction>>
    where
        P: Fn(&Transaction) -> bool,
    {
        let matched: Vec<&Arc<Transaction>> = self
            .transactions
            .iter()
            .filter(|tx| predicate(tx))
            .collect();
        debug!(
            "Filter matched {} of {} transactions",
            matched.len(),
            self.transactions.len()
        );
        matched
    }
}

impl From<Vec<Transaction>> for TransactionAnalyzer {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: &str, amount: f64, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            transaction_id: TransactionId::Number(id.into()),
            transaction_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            transaction_amount: amount,
            transaction_type: kind.to_string(),
            merchant_name: format!("Merchant{}", id % 2),
            transaction_description: format!("Purchase {}", id),
        }
    }

    fn ids(records: &[&Arc<Transaction>]) -> Vec<String> {
        records
            .iter()
            .map(|tx| tx.transaction_id.to_string())
            .collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut analyzer = TransactionAnalyzer::default();
        analyzer.push(tx(2, "debit", 1.0, (2019, 1, 1)));
        analyzer.push(tx(1, "debit", 1.0, (2019, 1, 1)));

        assert_eq!(analyzer.len(), 2);
        assert_eq!(analyzer.transactions()[0].transaction_id, TransactionId::Number(2.into()));
    }

    #[test]
    fn test_unique_of_type_dedupes_identity_only() {
        let shared = Arc::new(tx(1, "debit", 10.0, (2019, 1, 1)));
        let mut analyzer = TransactionAnalyzer::new(vec![
            Arc::clone(&shared),
            Arc::new(tx(1, "debit", 10.0, (2019, 1, 1))),
            Arc::new(tx(2, "credit", 5.0, (2019, 1, 1))),
        ]);
        analyzer.push(Arc::clone(&shared));

        let debits = analyzer.unique_of_type("debit");
        // The shared record once, plus its structurally equal twin
        assert_eq!(debits.len(), 2);
        assert!(debits.iter().all(|d| d.is_debit()));
    }

    #[test]
    fn test_total_amount_on_date_normalizes() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 10.0, (2019, 5, 1)),
            tx(2, "debit", 15.0, (2019, 5, 1)),
            tx(3, "debit", 99.0, (2019, 4, 30)),
        ]);

        assert_eq!(analyzer.total_amount_on_date(2019, 5, 1), 25.0);
        assert_eq!(analyzer.total_amount_on_date(2019, 4, 31), 25.0);
        assert_eq!(analyzer.total_amount_on_date(2019, 4, 30), 99.0);
        assert_eq!(analyzer.total_amount_on_date(2019, 6, 1), 0.0);
    }

    #[test]
    fn test_date_range_inclusive_and_before_exclusive() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 1.0, (2019, 1, 4)),
            tx(2, "debit", 1.0, (2019, 1, 5)),
            tx(3, "debit", 1.0, (2019, 1, 6)),
            tx(4, "debit", 1.0, (2019, 1, 7)),
        ]);
        let start = NaiveDate::from_ymd_opt(2019, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2019, 1, 6).unwrap();

        assert_eq!(ids(&analyzer.in_date_range(start, end)), vec!["2", "3"]);
        assert!(analyzer.in_date_range(end, start).is_empty());
        assert_eq!(ids(&analyzer.before_date(end)), vec!["1", "2"]);
    }

    #[test]
    fn test_average_empty_is_error() {
        let analyzer = TransactionAnalyzer::default();
        assert_eq!(analyzer.average_amount(), Err(AnalyzerError::EmptyCollection));
        assert_eq!(analyzer.total_amount(), 0.0);
    }

    #[test]
    fn test_dominant_type_ignores_other_labels() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 1.0, (2019, 1, 1)),
            tx(2, "fee", 1.0, (2019, 1, 1)),
            tx(3, "fee", 1.0, (2019, 1, 1)),
        ]);
        assert_eq!(analyzer.dominant_type(), DominantType::Debit);
        assert_eq!(analyzer.count_of_type("fee"), 2);
    }

    #[test]
    fn test_most_frequent_debit_month() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 1.0, (2019, 2, 1)),
            tx(2, "credit", 1.0, (2019, 3, 1)),
            tx(3, "credit", 1.0, (2019, 3, 2)),
        ]);
        assert_eq!(analyzer.most_frequent_month(), Some(MonthFrequency::Single(3)));
        assert_eq!(analyzer.most_frequent_debit_month(), Some(MonthFrequency::Single(2)));
    }

    #[test]
    fn test_most_frequent_month_in_subset() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 1.0, (2019, 2, 1)),
            tx(2, "debit", 1.0, (2019, 3, 1)),
            tx(3, "debit", 1.0, (2019, 3, 2)),
        ]);
        let odd_ids = analyzer.by_merchant("Merchant1");
        assert_eq!(
            analyzer.most_frequent_month_in(odd_ids),
            Some(MonthFrequency::Tied([2, 3].into_iter().collect()))
        );
    }

    #[test]
    fn test_render_all_one_per_record() {
        let analyzer = TransactionAnalyzer::new(vec![
            tx(1, "debit", 1.0, (2019, 2, 1)),
            tx(2, "credit", 2.5, (2019, 3, 1)),
        ]);
        let rendered = analyzer.render_all();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[1].contains("\"transaction_amount\":2.5"));
    }
}
