//! This file defines `Transaction`, the core type of the application, and
//! `NewTransaction`, the validated request payload used to create or
//! overwrite one.

use serde::{Deserialize, Serialize};

use crate::{Error, models::DatabaseID};

/// An income or expense record, i.e. an event where money was either earned
/// or spent.
///
/// The `transaction_type` field is serialized as `type` and is expected to
/// be `"income"` or `"expense"`, but no enumeration is enforced: other
/// values are stored as-is and simply count towards neither summary total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: DatabaseID,

    /// Whether the transaction is an `"income"` or an `"expense"`.
    #[serde(rename = "type")]
    pub transaction_type: String,

    /// A free-text category, e.g. "groceries". Not linked to the
    /// `categories` table.
    pub category: String,

    /// The amount of money earned or spent.
    pub amount: f64,

    /// When the transaction happened, as a caller-supplied string. The
    /// format is not validated.
    pub date: String,

    /// An optional text description of what the transaction was for.
    pub description: Option<String>,
}

/// The fields needed to create a transaction or overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether the transaction is an `"income"` or an `"expense"`.
    #[serde(rename = "type")]
    pub transaction_type: String,

    /// A free-text category, e.g. "groceries".
    pub category: String,

    /// The amount of money earned or spent.
    pub amount: f64,

    /// When the transaction happened, as a caller-supplied string.
    pub date: String,

    /// An optional text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    /// Check that the fields can form a well-formed transaction.
    ///
    /// The transaction type enumeration is deliberately left open, so any
    /// non-empty type string passes. The date string is accepted as-is.
    ///
    /// # Errors
    /// Returns an [Error::InvalidTransaction] describing the first offending
    /// field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.transaction_type.is_empty() {
            return Err(Error::InvalidTransaction(
                "type must not be empty".to_owned(),
            ));
        }

        if self.category.is_empty() {
            return Err(Error::InvalidTransaction(
                "category must not be empty".to_owned(),
            ));
        }

        if !self.amount.is_finite() {
            return Err(Error::InvalidTransaction(
                "amount must be a finite number".to_owned(),
            ));
        }

        Ok(())
    }
}
