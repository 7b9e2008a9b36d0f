//! Pure, deterministic transformations over a collection of transactions.
//!
//! Nothing here touches the store; callers pass the slice they want summarised,
//! usually a period-filtered view of a store snapshot.

mod category;
mod grouping;
mod period;
mod summary;
mod trend;

pub use category::{by_category, category_shares, CategoryShare, CategoryTotal};
pub use grouping::{group_by_day, DayGroup};
pub use period::{select_period, shift, Direction, Granularity, Period};
pub use summary::{summarize, Summary};
pub use trend::{monthly_trend, MonthlyTotals};
