use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::models::Transaction;

/// The calendar unit used to filter and page through transactions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Granularity {
    Week,
    Month,
    Year
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Previous,
    Next
}

/// A calendar-aligned span of days, both ends inclusive.
///
/// Weeks run Monday through Sunday. Membership is decided on the date part of a
/// transaction's timestamp, so the whole of the last day is inside the period.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Period {
    pub granularity: Granularity,
    pub start: NaiveDate,
    pub end: NaiveDate
}

impl Period {
    /// The period of the given granularity that contains `reference`.
    pub fn containing(reference: NaiveDate, granularity: Granularity) -> Self {
        let (start, end) = match granularity {
            Granularity::Week => {
                let offset = u64::from(reference.weekday().num_days_from_monday());
                let start = reference.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
                (start, end)
            }
            Granularity::Month => {
                let start = reference.with_day(1).unwrap_or(reference);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next_month| next_month.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                (start, end)
            }
            Granularity::Year => {
                let start = NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference);
                let end = NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference);
                (start, end)
            }
        };

        Self { granularity, start, end }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let day = timestamp.date();
        self.start <= day && day <= self.end
    }

    /// The neighbouring period in `direction`.
    pub fn shifted(&self, direction: Direction) -> Self {
        Period::containing(shift(self.start, self.granularity, direction), self.granularity)
    }

    /// A human readable heading, e.g. `March 2025`.
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Week => format!("{} - {}", self.start.format("%b %-d"), self.end.format("%b %-d, %Y")),
            Granularity::Month => self.start.format("%B %Y").to_string(),
            Granularity::Year => self.start.format("%Y").to_string()
        }
    }
}

/// Returns the transactions whose date falls inside the period around `reference`.
///
/// Input order is preserved.
pub fn select_period(transactions: &[Transaction], reference: NaiveDate, granularity: Granularity) -> Vec<Transaction> {
    let period = Period::containing(reference, granularity);

    transactions
        .iter()
        .filter(|transaction| period.contains(transaction.date()))
        .cloned()
        .collect()
}

/// Moves `reference` one unit of `granularity` in `direction`.
///
/// Month and year steps keep the day of month when the target month has it and
/// otherwise clamp to that month's last day, so Jan 31 moves to Feb 28 (or 29)
/// and Feb 29 moves a year to Feb 28. Week steps are exactly seven days.
pub fn shift(reference: NaiveDate, granularity: Granularity, direction: Direction) -> NaiveDate {
    let shifted = match (granularity, direction) {
        (Granularity::Week, Direction::Previous) => reference.checked_sub_days(Days::new(7)),
        (Granularity::Week, Direction::Next) => reference.checked_add_days(Days::new(7)),
        (Granularity::Month, Direction::Previous) => reference.checked_sub_months(Months::new(1)),
        (Granularity::Month, Direction::Next) => reference.checked_add_months(Months::new(1)),
        (Granularity::Year, Direction::Previous) => reference.checked_sub_months(Months::new(12)),
        (Granularity::Year, Direction::Next) => reference.checked_add_months(Months::new(12))
    };

    shifted.unwrap_or_else(|| {
        warn!("Cannot move [{reference}] by one {granularity:?} in direction [{direction:?}], keeping it");
        reference
    })
}
