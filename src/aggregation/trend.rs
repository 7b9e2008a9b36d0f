use chrono::NaiveDate;

use crate::aggregation::period::{select_period, shift, Direction, Granularity, Period};
use crate::aggregation::summary::{summarize, Summary};
use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub period: Period,
    pub summary: Summary
}

/// Income and expenses for `months` consecutive calendar months ending with the
/// month of `reference`, oldest month first.
///
/// Stops early at the start of the supported calendar, so the result may hold
/// fewer than `months` entries.
pub fn monthly_trend(transactions: &[Transaction], reference: NaiveDate, months: usize) -> Vec<MonthlyTotals> {
    let mut trend = Vec::new();
    let mut anchor = reference;

    for _ in 0..months {
        let period = Period::containing(anchor, Granularity::Month);
        let in_month = select_period(transactions, anchor, Granularity::Month);

        trend.push(MonthlyTotals {
            period,
            summary: summarize(&in_month)
        });

        let previous = shift(period.start, Granularity::Month, Direction::Previous);

        if previous == period.start {
            break;
        }

        anchor = previous;
    }

    trend.reverse();
    trend
}
