use thiserror::Error;
use tokio::task::JoinError;

use crate::actors::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Report engine was built without a transaction store")]
    ContextNotInitialized,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("CSV ingestion failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV reader task failed: {0}")]
    Reader(#[from] JoinError)
}
