//! Transaction store and aggregation core for a personal-finance tracker.
//!
//! [`storage::TransactionStore`] keeps the canonical date-descending list,
//! [`aggregation`] holds the pure summary, period, category and day-grouping
//! functions, and [`actors`] plus [`engine`] wrap the store for concurrent
//! consumers with memoized period reports.

pub mod actors;
pub mod aggregation;
pub mod engine;
pub mod models;
pub mod storage;
pub mod types;
