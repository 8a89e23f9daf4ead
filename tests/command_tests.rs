use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use transaction_analyzer::analyzer::build_summary;
use transaction_analyzer::commands::{
    execute_query, execute_summary, inspect_transactions_file, load_analyzer, run_query, Query,
    QueryArgs, SummaryArgs,
};
use transaction_analyzer::output::read_summary;
use transaction_analyzer::{DominantType, MonthFrequency, TransactionId};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/transaction.json")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn query_ids(query: Query) -> Vec<String> {
    let analyzer = load_analyzer(&fixture()).unwrap();
    let result = run_query(&analyzer, &query).unwrap();
    result
        .as_array()
        .unwrap()
        .iter()
        .map(|tx| tx["transaction_id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_fixture_aggregates() {
    let analyzer = load_analyzer(&fixture()).unwrap();

    assert_eq!(analyzer.len(), 8);
    assert_eq!(analyzer.total_amount(), 642.75);
    assert_eq!(analyzer.total_debit_amount(), 362.75);
    assert_eq!(analyzer.average_amount(), Ok(80.34375));
    assert_eq!(analyzer.total_amount_on_date(2019, 4, 30), 120.0);
    assert_eq!(analyzer.dominant_type(), DominantType::Debit);
    assert_eq!(
        analyzer.most_frequent_month(),
        Some(MonthFrequency::Tied([1, 4].into_iter().collect()))
    );
}

#[test]
fn test_fixture_queries() {
    assert_eq!(
        query_ids(Query::Merchant {
            name: "DoughnutShop789".to_string()
        }),
        vec!["6", "7"]
    );
    assert_eq!(
        query_ids(Query::AmountRange {
            min: 80.0,
            max: 100.0
        }),
        vec!["1", "5", "7"]
    );
    assert_eq!(
        query_ids(Query::Before {
            cutoff: date(2019, 1, 6)
        }),
        vec!["1", "2", "3"]
    );
    assert_eq!(
        query_ids(Query::DateRange {
            start: date(2019, 4, 28),
            end: date(2019, 12, 31)
        }),
        vec!["6", "7", "8"]
    );
    assert_eq!(
        query_ids(Query::UniqueOfType {
            kind: "credit".to_string()
        }),
        vec!["2", "4", "8"]
    );
}

#[test]
fn test_find_numeric_id_matches_string_id() {
    let analyzer = load_analyzer(&fixture()).unwrap();

    let found = run_query(&analyzer, &Query::Find { id: TransactionId::Number(4.into()) }).unwrap();
    assert_eq!(found["merchant_name"], json!("EmployerCo"));

    let missing = run_query(&analyzer, &Query::Find { id: TransactionId::Number(26.into()) }).unwrap();
    assert!(missing.is_null());
}

#[test]
fn test_first_of_type_missing_is_null() {
    let analyzer = load_analyzer(&fixture()).unwrap();
    let result = run_query(
        &analyzer,
        &Query::FirstOfType {
            kind: "transfer".to_string(),
        },
    )
    .unwrap();
    assert!(result.is_null());
}

#[test]
fn test_execute_query_writes_output_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out/descriptions.json");

    execute_query(QueryArgs {
        input: fixture(),
        query: Query::Descriptions,
        output: Some(output.clone()),
    })
    .unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.as_array().map(Vec::len), Some(8));
    assert_eq!(written[0], json!("Payment for groceries"));
}

#[test]
fn test_execute_summary_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("summary.json");

    execute_summary(SummaryArgs {
        input: fixture(),
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    let summary = read_summary(&output).unwrap();
    assert_eq!(summary.transaction_count, 8);
    assert_eq!(summary.debit_count, 5);
    assert_eq!(summary.credit_count, 3);
    assert_eq!(summary.first_date, Some(date(2019, 1, 1)));
    assert_eq!(summary.last_date, Some(date(2019, 4, 30)));
    assert_eq!(summary.merchants[0].merchant, "EmployerCo");
    assert_eq!(summary.merchants[1].merchant, "DoughnutShop789");
    assert_eq!(summary.merchants[1].count, 2);
}

#[test]
fn test_summary_matches_library() {
    let analyzer = load_analyzer(&fixture()).unwrap();
    let summary = build_summary(&analyzer, "fixture");

    assert_eq!(summary.total_amount, analyzer.total_amount());
    assert_eq!(summary.average_amount, analyzer.average_amount().ok());
    assert_eq!(summary.busiest_debit_month, analyzer.most_frequent_debit_month());
}

#[test]
fn test_inspect_transactions_file() {
    let report = inspect_transactions_file(&fixture()).unwrap();

    assert_eq!(report.transaction_count, 8);
    assert_eq!(report.by_type.get("debit"), Some(&5));
    assert_eq!(report.by_type.get("credit"), Some(&3));
}

#[test]
fn test_malformed_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[{\"transaction_id\": 1,").unwrap();

    let err = load_analyzer(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load transactions from"));
}

#[test]
fn test_average_query_on_empty_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();

    let result = execute_query(QueryArgs {
        input: file.path().to_path_buf(),
        query: Query::Average,
        output: None,
    });
    assert!(result.is_err());
}
