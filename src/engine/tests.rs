use super::{CsvImporter, EngineError, ImportReport, PeriodReport, ReportEngine};

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::actors::StoreActor;
use crate::aggregation::Granularity;
use crate::models::{demo_transactions, Category, PaymentSource, Transaction, TransactionType};
use crate::storage::TransactionStore;
use crate::types::Money;

const HEADER: &str = "type,amount,category,description,date,source";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

fn date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

fn phone_bill() -> Result<Transaction> {
    Ok(Transaction::new(
        TransactionType::Expense,
        Money::from_str("60.00")?,
        Category::Bills,
        "Phone bill",
        NaiveDateTime::parse_from_str("2025-03-20T08:00:00", "%Y-%m-%dT%H:%M:%S")?,
        PaymentSource::Debit
    )?)
}

#[test]
fn test_engine_without_store_fails_fast() {
    let result = ReportEngine::builder().with_cache_capacity(8).build();

    assert!(matches!(result, Err(EngineError::ContextNotInitialized)));
}

#[tokio::test]
async fn test_report_for_demo_month() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    let report = engine.report(date("2025-03-18")?, Granularity::Month).await?;

    assert_eq!(report.period.label(), "March 2025");
    assert_eq!(report.summary.income.to_string(), "2500.00");
    assert_eq!(report.summary.expenses.to_string(), "194.00");
    assert_eq!(report.summary.balance.to_string(), "2306.00");

    let categories: Vec<_> = report.categories.iter().map(|entry| entry.category).collect();
    assert_eq!(categories, [Category::Shopping, Category::Transport, Category::Food]);

    let days: Vec<_> = report.days.iter().map(|group| group.day).collect();
    assert_eq!(days, [date("2025-03-24")?, date("2025-03-15")?, date("2025-03-10")?, date("2025-03-05")?, date("2025-03-01")?]);

    let percents: Vec<_> = report.shares().iter().map(|share| share.percent).collect();
    assert_eq!(percents, [Decimal::from_str("61.86")?, Decimal::from_str("23.20")?, Decimal::from_str("14.95")?]);

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_report_for_empty_period_is_zeroed() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    let report = engine.report(date("2025-04-02")?, Granularity::Week).await?;

    assert!(report.summary.income.is_zero());
    assert!(report.categories.is_empty());
    assert!(report.days.is_empty());

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_reports_are_memoized_until_the_store_changes() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    let first = engine.report(date("2025-03-01")?, Granularity::Month).await?;
    let second = engine.report(date("2025-03-31")?, Granularity::Month).await?;

    assert!(Arc::ptr_eq(&first, &second));

    engine.add(phone_bill()?)?;

    let third = engine.report(date("2025-03-31")?, Granularity::Month).await?;

    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.summary.expenses.to_string(), "254.00");
    assert_eq!(third.categories[0].category, Category::Shopping);
    assert_eq!(third.categories[1].category, Category::Bills);

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_cache_time_eviction_rebuilds_equal_report() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let engine = ReportEngine::builder()
        .store(actor.handle())
        .with_cache_timeout(Duration::from_millis(50))
        .build()?;

    let first = engine.report(date("2025-03-01")?, Granularity::Year).await?;

    tokio::time::sleep(Duration::from_millis(150)).await;

    let second = engine.report(date("2025-03-01")?, Granularity::Year).await?;

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_engine_summary_recent_and_trend() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    engine.add(phone_bill()?)?;

    let summary = engine.summary().await?;
    assert_eq!(summary.balance.to_string(), "2246.00");

    let recent = engine.recent(2).await?;
    let descriptions: Vec<_> = recent.iter().map(Transaction::description).collect();
    assert_eq!(descriptions, ["McDonalds", "Phone bill"]);

    let trend = engine.trend(date("2025-04-10")?, 2).await?;
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].summary.expenses.to_string(), "254.00");
    assert!(trend[1].summary.expenses.is_zero());

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_engine_reports_unavailable_store() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::new());
    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    actor.despawn().await?;

    assert!(matches!(engine.add(phone_bill()?), Err(EngineError::Store(_))));
    assert!(matches!(engine.summary().await, Err(EngineError::Store(_))));

    Ok(())
}

#[test]
fn test_period_report_build_is_pure() -> Result<()> {
    let transactions = TransactionStore::with_demo_data().all().to_vec();
    let report = PeriodReport::build(&transactions, date("2025-03-12")?, Granularity::Week);

    assert_eq!(report.period.label(), "Mar 10 - Mar 16, 2025");
    assert_eq!(report.summary.expenses.to_string(), "70.50");
    assert_eq!(report.days.len(), 2);
    assert_eq!(report, PeriodReport::build(&transactions, date("2025-03-16")?, Granularity::Week));

    Ok(())
}

#[tokio::test]
async fn test_import_stores_valid_rows_and_skips_the_rest() -> Result<()> {
    let file = create_temporary_csv(&[
        "expense,25.50,Food,Lunch at Cafe,2025-03-15T14:30:00,credit",
        "income,2500.00,Salary,Monthly Salary,2025-03-01T09:00:00,debit",
        "expense,-4.00,Food,Broken refund,2025-03-02T09:00:00,cash",
        "transfer,1.00,Food,Unknown type,2025-03-02T09:00:00,cash",
        "expense,abc,Food,Bad amount,2025-03-02T09:00:00,cash",
        "expense,45.00,Transport,Uber Ride,2025-03-10T16:45:00,credit",
    ])?;

    let actor = StoreActor::spawn(TransactionStore::new());
    let report = CsvImporter::new(actor.handle()).with_backpressure(2).run(file.path()).await?;

    assert_eq!(report, ImportReport { imported: 3, rejected: 1, malformed: 2 });

    let store = actor.despawn().await?;
    let descriptions: Vec<_> = store.all().iter().map(Transaction::description).collect();

    assert_eq!(descriptions, ["Lunch at Cafe", "Uber Ride", "Monthly Salary"]);

    Ok(())
}

#[tokio::test]
async fn test_import_of_missing_file_fails() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::new());
    let result = CsvImporter::new(actor.handle()).run(std::path::Path::new("does-not-exist.csv")).await;

    assert!(matches!(result, Err(EngineError::Csv(_))));

    let store = actor.despawn().await?;
    assert!(store.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_imported_rows_match_demo_seed() -> Result<()> {
    let file = create_temporary_csv(&[
        "expense,25.50,Food,Lunch at Cafe,2025-03-15T14:30:00,credit",
        "income,2500.00,Salary,Monthly Salary,2025-03-01T09:00:00,debit",
        "expense,3.50,Food,McDonalds,2025-03-24T14:30:00,debit",
        "expense,45.00,Transport,Uber Ride,2025-03-10T16:45:00,credit",
        "expense,120.00,Shopping,Groceries,2025-03-05T11:20:00,cash",
    ])?;

    let actor = StoreActor::spawn(TransactionStore::new());
    CsvImporter::new(actor.handle()).run(file.path()).await?;
    let store = actor.despawn().await?;

    assert_eq!(store.all(), TransactionStore::from_transactions(demo_transactions()).all());

    Ok(())
}
