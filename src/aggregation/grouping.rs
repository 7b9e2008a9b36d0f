use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::Transaction;

/// All transactions that happened on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub transactions: Vec<Transaction>
}

impl DayGroup {
    /// e.g. `Saturday, March 15`
    pub fn heading(&self) -> String {
        self.day.format("%A, %B %-d").to_string()
    }
}

/// Buckets transactions by the date part of their timestamp.
///
/// Buckets come out most recent day first. Inside a bucket, transactions keep
/// their input order, so a date-descending input yields date-descending buckets.
pub fn group_by_day(transactions: &[Transaction]) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for transaction in transactions {
        let day = transaction.date().date();

        match index.get(&day) {
            Some(&position) => days[position].transactions.push(transaction.clone()),
            None => {
                index.insert(day, days.len());
                days.push(DayGroup {
                    day,
                    transactions: vec![transaction.clone()]
                });
            }
        }
    }

    days.sort_by(|a, b| b.day.cmp(&a.day));
    days
}
