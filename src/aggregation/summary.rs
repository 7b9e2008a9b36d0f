use crate::models::{Transaction, TransactionType};
use crate::types::Money;

/// Income, expenses and their difference over some set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money
}

/// Totals every income and expense amount in `transactions`.
///
/// Accumulation is exact, so the result does not depend on input order.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = Money::ZERO;
    let mut expenses = Money::ZERO;

    for transaction in transactions {
        match transaction.transaction_type() {
            TransactionType::Income => income += transaction.amount(),
            TransactionType::Expense => expenses += transaction.amount()
        }
    }

    let mut balance = income;
    balance -= expenses;

    Summary {
        income,
        expenses,
        balance
    }
}
