use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Transaction, TransactionType};
use crate::types::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money
}

/// A category's slice of the breakdown, as a percentage with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    pub percent: Decimal
}

/// Sums expenses per category, largest total first.
///
/// Income is left out of the breakdown. Categories with equal totals keep the
/// order in which they were first seen in `transactions`.
pub fn by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<Category, usize> = HashMap::new();

    for transaction in transactions {
        match transaction.transaction_type() {
            TransactionType::Income => continue,
            TransactionType::Expense => {}
        }

        match index.get(&transaction.category()) {
            Some(&position) => totals[position].total += transaction.amount(),
            None => {
                index.insert(transaction.category(), totals.len());
                totals.push(CategoryTotal {
                    category: transaction.category(),
                    total: transaction.amount()
                });
            }
        }
    }

    // `sort_by` is stable, which is what gives first-seen order among ties.
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Converts a breakdown into percentages of its overall total.
///
/// A breakdown whose total is zero yields zero shares.
pub fn category_shares(breakdown: &[CategoryTotal]) -> Vec<CategoryShare> {
    let overall: Money = breakdown.iter().map(|entry| entry.total).sum();

    breakdown
        .iter()
        .map(|entry| {
            let percent = if overall.is_zero() {
                Decimal::ZERO
            } else {
                (entry.total.as_decimal() * Decimal::ONE_HUNDRED / overall.as_decimal())
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            };

            CategoryShare {
                category: entry.category,
                total: entry.total,
                percent
            }
        })
        .collect()
}
