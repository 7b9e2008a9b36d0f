use crate::types::Money;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Amount must not be negative for transaction [{description}]: [{amount}]")]
    NegativeAmount {
        description: String,
        amount: Money
    },
    #[error("Amount exceeds the per-transaction limit for transaction [{description}]: [{amount}]")]
    AmountTooLarge {
        description: String,
        amount: Money
    }
}
