use super::{StoreActor, StoreError};
use crate::models::{Category, PaymentSource, Transaction, TransactionType};
use crate::storage::TransactionStore;
use crate::types::Money;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::str::FromStr;

fn create_transaction(description: &str, amount: &str, date: &str) -> Result<Transaction> {
    Ok(Transaction::new(
        TransactionType::Expense,
        Money::from_str(amount)?,
        Category::Food,
        description,
        NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")?,
        PaymentSource::Credit
    )?)
}

#[tokio::test]
async fn test_snapshot_observes_every_prior_add_in_sorted_order() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::with_demo_data());
    let handle = actor.handle();

    assert!(handle.add(create_transaction("Late dinner", "30.00", "2025-03-20T21:00:00")?));
    assert!(handle.add(create_transaction("Early snack", "2.00", "2025-02-01T10:00:00")?));

    let snapshot = handle.snapshot().await?;

    assert_eq!(snapshot.version, 2);
    assert_eq!(snapshot.transactions.len(), 7);
    assert_eq!(snapshot.transactions[0].description(), "McDonalds");
    assert_eq!(snapshot.transactions[1].description(), "Late dinner");
    assert_eq!(snapshot.transactions[6].description(), "Early snack");

    actor.despawn().await?;

    Ok(())
}

#[tokio::test]
async fn test_concurrent_writers_are_serialized() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::new());
    let mut writers = Vec::new();

    for writer in 0..4u32 {
        let handle = actor.handle();
        let transactions = (0..25u32)
            .map(|index| create_transaction(&format!("w{writer}-{index}"), "1.00", &format!("2025-03-{:02}T{:02}:00:00", index + 1, writer)))
            .collect::<Result<Vec<_>>>()?;

        writers.push(tokio::spawn(async move {
            for transaction in transactions {
                handle.add(transaction);
            }
        }));
    }

    for writer in writers {
        writer.await?;
    }

    let store = actor.despawn().await?;

    assert_eq!(store.len(), 100);
    assert_eq!(store.version(), 100);
    assert!(store.all().windows(2).all(|pair| pair[0].date() >= pair[1].date()));

    Ok(())
}

#[tokio::test]
async fn test_despawn_drains_queue_and_returns_store() -> Result<()> {
    let actor = StoreActor::spawn(TransactionStore::new());
    let handle = actor.handle();

    handle.add(create_transaction("Queued", "5.00", "2025-03-10T12:00:00")?);

    let store = actor.despawn().await?;

    assert_eq!(store.len(), 1);
    assert!(!handle.is_running());
    assert!(!handle.add(create_transaction("Too late", "5.00", "2025-03-11T12:00:00")?));
    assert!(matches!(handle.snapshot().await, Err(StoreError::Unavailable)));

    Ok(())
}
