use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store actor is no longer running")]
    Unavailable,
    #[error("Store actor did not shut down cleanly: {0}")]
    Join(#[from] JoinError)
}
