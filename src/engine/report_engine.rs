use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;
use tracing::debug;

use crate::actors::{StoreError, StoreHandle};
use crate::aggregation::{
    by_category, category_shares, group_by_day, monthly_trend, select_period, summarize, CategoryShare, CategoryTotal, DayGroup,
    Granularity, MonthlyTotals, Period, Summary
};
use crate::engine::EngineError;
use crate::models::Transaction;
use crate::types::Version;

const DEFAULT_CACHE_CAPACITY: u64 = 64;
const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(300);

type ReportKey = (Version, Granularity, NaiveDate);

/// Everything a period screen shows: totals, the expense breakdown and the day list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReport {
    pub period: Period,
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
    pub days: Vec<DayGroup>
}

impl PeriodReport {
    pub fn build(transactions: &[Transaction], reference: NaiveDate, granularity: Granularity) -> Self {
        let period = Period::containing(reference, granularity);
        let selected = select_period(transactions, reference, granularity);

        Self {
            period,
            summary: summarize(&selected),
            categories: by_category(&selected),
            days: group_by_day(&selected)
        }
    }

    pub fn shares(&self) -> Vec<CategoryShare> {
        category_shares(&self.categories)
    }
}

/// Read side over a running store actor.
///
/// Period reports are memoized per store version, so repeated reads of an
/// unchanged store reuse the same report.
pub struct ReportEngine {
    store: StoreHandle,
    cache: Cache<ReportKey, Arc<PeriodReport>>
}

pub struct ReportEngineBuilder {
    store: Option<StoreHandle>,
    cache_capacity: u64,
    cache_timeout: Duration
}

impl ReportEngine {
    pub fn builder() -> ReportEngineBuilder {
        ReportEngineBuilder {
            store: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_timeout: DEFAULT_CACHE_TIMEOUT
        }
    }

    /// Queues `transaction` for the store and drops every memoized report.
    pub fn add(&self, transaction: Transaction) -> Result<(), EngineError> {
        if !self.store.add(transaction) {
            return Err(StoreError::Unavailable.into())
        }

        self.cache.invalidate_all();

        Ok(())
    }

    /// The full store, most recent first.
    pub async fn transactions(&self) -> Result<Arc<Vec<Transaction>>, EngineError> {
        Ok(self.store.snapshot().await?.transactions)
    }

    pub async fn recent(&self, limit: usize) -> Result<Vec<Transaction>, EngineError> {
        let transactions = self.transactions().await?;
        Ok(transactions.iter().take(limit).cloned().collect())
    }

    /// Totals over the whole store.
    pub async fn summary(&self) -> Result<Summary, EngineError> {
        Ok(summarize(&self.transactions().await?))
    }

    pub async fn report(&self, reference: NaiveDate, granularity: Granularity) -> Result<Arc<PeriodReport>, EngineError> {
        let snapshot = self.store.snapshot().await?;
        let period = Period::containing(reference, granularity);
        let key = (snapshot.version, granularity, period.start);

        let report = self
            .cache
            .get_with(key, async move {
                debug!("Building {granularity:?} report for [{}] at version [{}]", period.label(), snapshot.version);
                Arc::new(PeriodReport::build(&snapshot.transactions, reference, granularity))
            })
            .await;

        Ok(report)
    }

    pub async fn trend(&self, reference: NaiveDate, months: usize) -> Result<Vec<MonthlyTotals>, EngineError> {
        Ok(monthly_trend(&self.transactions().await?, reference, months))
    }
}

impl ReportEngineBuilder {
    pub fn store(mut self, store: StoreHandle) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// # Errors
    /// Returns `EngineError::ContextNotInitialized` if no store handle was supplied.
    pub fn build(self) -> Result<ReportEngine, EngineError> {
        let store = self.store.ok_or(EngineError::ContextNotInitialized)?;

        let cache = Cache::builder()
            .max_capacity(self.cache_capacity)
            .time_to_live(self.cache_timeout)
            .build();

        Ok(ReportEngine { store, cache })
    }
}
