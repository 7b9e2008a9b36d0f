use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::TransactionError;
use crate::models::{Category, PaymentSource, TransactionType};
use crate::types::Money;

/// Largest amount, in whole units, a single transaction may carry.
///
/// Totals over any collection that fits in memory stay far below the range of
/// `Money`, so aggregation never overflows.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// A single recorded income or expense event.
///
/// Fields are private so that every value in circulation has passed the
/// construction checks: the amount is a non-negative magnitude and its effect
/// on a balance is decided by `transaction_type` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    transaction_type: TransactionType,
    amount: Money,
    category: Category,
    description: String,
    date: NaiveDateTime,
    source: PaymentSource
}

impl Transaction {
    /// Creates a transaction, rejecting negative or oversized amounts.
    ///
    /// # Errors
    /// Returns `TransactionError::NegativeAmount` if `amount` is below zero and
    /// `TransactionError::AmountTooLarge` if it exceeds [`MAX_AMOUNT_UNITS`].
    pub fn new(
        transaction_type: TransactionType,
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDateTime,
        source: PaymentSource
    ) -> Result<Self, TransactionError> {
        let description = description.into();

        if amount.is_negative() {
            return Err(TransactionError::NegativeAmount { description, amount })
        }

        if amount.as_decimal() > Decimal::from(MAX_AMOUNT_UNITS) {
            return Err(TransactionError::AmountTooLarge { description, amount })
        }

        Ok(Self {
            transaction_type,
            amount,
            category,
            description,
            date,
            source
        })
    }

    /// Builds a transaction from values already known to satisfy the amount checks.
    pub(super) fn trusted(
        transaction_type: TransactionType,
        amount: Money,
        category: Category,
        description: &str,
        date: NaiveDateTime,
        source: PaymentSource
    ) -> Self {
        Self {
            transaction_type,
            amount,
            category,
            description: description.to_string(),
            date,
            source
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn source(&self) -> PaymentSource {
        self.source
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Represents a single row from an input CSV file.
///
/// This is the unvalidated shape handed over by an outer layer; it becomes a
/// [`Transaction`] through `TryFrom`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Money,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDateTime,
    pub source: PaymentSource
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::new(
            record.transaction_type,
            record.amount,
            record.category,
            record.description,
            record.date,
            record.source
        )
    }
}
