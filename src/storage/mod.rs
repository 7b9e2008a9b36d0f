mod transaction_store;

use std::sync::Arc;

use crate::models::Transaction;
use crate::types::Version;

pub use transaction_store::{TransactionStore, RECENT_TRANSACTIONS_LIMIT};

/// An immutable view of the store at a given version.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub version: Version,
    pub transactions: Arc<Vec<Transaction>>
}

pub trait Storage: Send + 'static {
    fn add(&mut self, transaction: Transaction);
    fn snapshot(&self) -> Snapshot;
}
