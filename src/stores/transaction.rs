//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, NewTransaction, Summary, Transaction},
};

/// Handles the creation, retrieval and removal of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store from `new_transaction`.
    ///
    /// Returns the stored transaction with its assigned ID.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store by its `id`.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error>;

    /// Retrieve all transactions, in the order they are stored.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Overwrite all fields of the transaction with `id` using
    /// `new_transaction`.
    ///
    /// Implementers should return [Error::NotFound] if no transaction has
    /// `id`.
    fn update(&mut self, id: DatabaseID, new_transaction: NewTransaction) -> Result<(), Error>;

    /// Remove the transaction with `id` from the store.
    ///
    /// Implementers should return [Error::NotFound] if no transaction has
    /// `id`.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;

    /// Compute the income and expense totals over all transactions.
    fn summary(&self) -> Result<Summary, Error>;
}
