//! This file defines the `Summary` type, the aggregate view over all
//! transactions.

use serde::{Deserialize, Serialize};

/// The aggregate of all transactions: total income, total expenses and
/// their difference.
///
/// Transactions whose type is neither `"income"` nor `"expense"` count
/// towards neither total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,

    /// The sum of the amounts of all expense transactions.
    pub total_expenses: f64,

    /// Total income minus total expenses.
    pub balance: f64,
}
