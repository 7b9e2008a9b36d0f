mod errors;
mod seed;
mod transaction;

use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::TransactionError;
pub use seed::demo_transactions;
pub use transaction::{Transaction, TransactionRecord, MAX_AMOUNT_UNITS};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

/// The fixed set of labels a transaction can be filed under.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Salary,
    Investment
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Salary,
        Category::Investment
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Salary => "Salary",
            Category::Investment => "Investment"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// How a transaction was paid. Carried for display only.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSource {
    Credit,
    Debit,
    Cash
}
