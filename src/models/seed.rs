use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Category, PaymentSource, Transaction, TransactionType};
use crate::types::Money;

struct SeedRow {
    transaction_type: TransactionType,
    minor: i64,
    category: Category,
    description: &'static str,
    timestamp: (i32, u32, u32, u32, u32),
    source: PaymentSource
}

const DEMO_ROWS: [SeedRow; 5] = [
    SeedRow {
        transaction_type: TransactionType::Expense,
        minor: 2550,
        category: Category::Food,
        description: "Lunch at Cafe",
        timestamp: (2025, 3, 15, 14, 30),
        source: PaymentSource::Credit
    },
    SeedRow {
        transaction_type: TransactionType::Income,
        minor: 250_000,
        category: Category::Salary,
        description: "Monthly Salary",
        timestamp: (2025, 3, 1, 9, 0),
        source: PaymentSource::Debit
    },
    SeedRow {
        transaction_type: TransactionType::Expense,
        minor: 350,
        category: Category::Food,
        description: "McDonalds",
        timestamp: (2025, 3, 24, 14, 30),
        source: PaymentSource::Debit
    },
    SeedRow {
        transaction_type: TransactionType::Expense,
        minor: 4500,
        category: Category::Transport,
        description: "Uber Ride",
        timestamp: (2025, 3, 10, 16, 45),
        source: PaymentSource::Credit
    },
    SeedRow {
        transaction_type: TransactionType::Expense,
        minor: 12_000,
        category: Category::Shopping,
        description: "Groceries",
        timestamp: (2025, 3, 5, 11, 20),
        source: PaymentSource::Cash
    }
];

fn timestamp((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// The fixed list of demo transactions a fresh store starts with, in declaration order.
pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_ROWS
        .iter()
        .filter_map(|row| {
            Some(Transaction::trusted(
                row.transaction_type,
                Money::from_minor(row.minor),
                row.category,
                row.description,
                timestamp(row.timestamp)?,
                row.source
            ))
        })
        .collect()
}
