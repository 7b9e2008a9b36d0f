use std::sync::Arc;

use tracing::debug;

use crate::models::{demo_transactions, Transaction};
use crate::storage::{Snapshot, Storage};
use crate::types::Version;

/// How many transactions the home screen lists as "recent".
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// The canonical, date-descending list of transactions.
///
/// Ordering among equal dates is stable: a newly added transaction goes after
/// every existing one that shares its timestamp, which is exactly what appending
/// and then stable-sorting would produce.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Arc<Vec<Transaction>>,
    version: Version
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `transactions`, sorted most recent first.
    pub fn from_transactions(mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| b.date().cmp(&a.date()));

        Self {
            transactions: Arc::new(transactions),
            version: 0
        }
    }

    pub fn with_demo_data() -> Self {
        Self::from_transactions(demo_transactions())
    }

    /// Inserts `transaction` at its date-descending position.
    pub fn add(&mut self, transaction: Transaction) {
        let date = transaction.date();
        let transactions = Arc::make_mut(&mut self.transactions);
        let index = transactions.partition_point(|existing| existing.date() >= date);

        debug!("Transaction [{}]:[{:?}] stored at index [{index}]", transaction.description(), transaction.transaction_type());

        transactions.insert(index, transaction);
        self.version += 1;
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The first `limit` transactions, i.e. the most recent ones.
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl Storage for TransactionStore {
    fn add(&mut self, transaction: Transaction) {
        TransactionStore::add(self, transaction);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            transactions: Arc::clone(&self.transactions)
        }
    }
}
