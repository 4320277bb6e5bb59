//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewTransaction, Summary, Transaction},
    stores::TransactionStore,
};

/// Stores transactions in a SQLite database.
///
/// All requests share one connection behind a mutex; SQLite serializes the
/// writes itself.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO transactions (type, category, amount, date, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, type, category, amount, date, description",
            )?
            .query_row(
                (
                    &new_transaction.transaction_type,
                    &new_transaction.category,
                    new_transaction.amount,
                    &new_transaction.date,
                    &new_transaction.description,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, type, category, amount, date, description
                 FROM transactions WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    /// Retrieve all transactions in the database, in storage order.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Overwrite all fields of the transaction with `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn update(&mut self, id: DatabaseID, new_transaction: NewTransaction) -> Result<(), Error> {
        let rows_affected = self.connection.lock().unwrap().execute(
            "UPDATE transactions
             SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
             WHERE id = ?6",
            (
                &new_transaction.transaction_type,
                &new_transaction.category,
                new_transaction.amount,
                &new_transaction.date,
                &new_transaction.description,
                id,
            ),
        )?;

        match rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    /// Remove the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    /// Compute the income and expense totals over all transactions.
    ///
    /// A single aggregate query keeps the two totals consistent with each
    /// other under concurrent writes. Transactions whose type is neither
    /// 'income' nor 'expense' count towards neither total.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn summary(&self) -> Result<Summary, Error> {
        let summary = self.connection.lock().unwrap().query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN type = 'income' THEN amount END), 0),
                COALESCE(SUM(CASE WHEN type = 'expense' THEN amount END), 0)
             FROM transactions",
            [],
            |row| {
                let total_income: f64 = row.get(0)?;
                let total_expenses: f64 = row.get(1)?;

                Ok(Summary {
                    total_income,
                    total_expenses,
                    balance: total_income - total_expenses,
                })
            },
        )?;

        Ok(summary)
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(offset)?,
            transaction_type: row.get(offset + 1)?,
            category: row.get(offset + 2)?,
            amount: row.get(offset + 3)?,
            date: row.get(offset + 4)?,
            description: row.get(offset + 5)?,
        })
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        models::{NewTransaction, Summary},
        stores::{TransactionStore, sqlite::create_app_state},
    };

    use super::SQLiteTransactionStore;

    fn get_store() -> SQLiteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        create_app_state(connection).unwrap().transaction_store
    }

    fn expense(amount: f64) -> NewTransaction {
        NewTransaction {
            transaction_type: "expense".to_owned(),
            category: "groceries".to_owned(),
            amount,
            date: "2025-10-26".to_owned(),
            description: Some("weekly shop".to_owned()),
        }
    }

    fn income(amount: f64) -> NewTransaction {
        NewTransaction {
            transaction_type: "income".to_owned(),
            category: "salary".to_owned(),
            amount,
            date: "2025-10-01".to_owned(),
            description: None,
        }
    }

    #[test]
    fn create_assigns_positive_id_and_keeps_fields() {
        let mut store = get_store();
        let new_transaction = expense(12.3);

        let transaction = store.create(new_transaction.clone()).unwrap();

        assert!(transaction.id > 0, "want positive ID, got {}", transaction.id);
        assert_eq!(transaction.transaction_type, new_transaction.transaction_type);
        assert_eq!(transaction.category, new_transaction.category);
        assert_eq!(transaction.amount, new_transaction.amount);
        assert_eq!(transaction.date, new_transaction.date);
        assert_eq!(transaction.description, new_transaction.description);
    }

    #[test]
    fn get_returns_created_transaction() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();

        let selected_transaction = store.get(transaction.id);

        assert_eq!(selected_transaction, Ok(transaction));
    }

    #[test]
    fn get_fails_on_invalid_id() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();

        let maybe_transaction = store.get(transaction.id + 654);

        assert_eq!(maybe_transaction, Err(Error::NotFound));
    }

    #[test]
    fn get_all_on_empty_store_returns_no_transactions() {
        let store = get_store();

        let transactions = store.get_all().unwrap();

        assert_eq!(transactions, vec![]);
    }

    #[test]
    fn get_all_returns_all_created_transactions() {
        let mut store = get_store();
        let want = vec![
            store.create(income(100.0)).unwrap(),
            store.create(expense(40.0)).unwrap(),
            store.create(expense(2.5)).unwrap(),
        ];

        let got = store.get_all().unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn update_overwrites_all_fields() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();
        let replacement = NewTransaction {
            transaction_type: "income".to_owned(),
            category: "refund".to_owned(),
            amount: 9.99,
            date: "2025-11-02".to_owned(),
            description: None,
        };

        store.update(transaction.id, replacement.clone()).unwrap();

        let got = store.get(transaction.id).unwrap();
        assert_eq!(got.id, transaction.id);
        assert_eq!(got.transaction_type, replacement.transaction_type);
        assert_eq!(got.category, replacement.category);
        assert_eq!(got.amount, replacement.amount);
        assert_eq!(got.date, replacement.date);
        assert_eq!(got.description, replacement.description);
    }

    #[test]
    fn update_fails_on_invalid_id_and_writes_nothing() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();

        let result = store.update(transaction.id + 654, income(1.0));

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(store.get_all().unwrap(), vec![transaction]);
    }

    #[test]
    fn delete_removes_transaction() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();

        store.delete(transaction.id).unwrap();

        assert_eq!(store.get(transaction.id), Err(Error::NotFound));
        assert_eq!(store.get_all().unwrap(), vec![]);
    }

    #[test]
    fn delete_fails_on_invalid_id() {
        let mut store = get_store();
        let transaction = store.create(expense(12.3)).unwrap();

        let result = store.delete(transaction.id + 654);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn summary_on_empty_store_is_all_zero() {
        let store = get_store();

        let summary = store.summary().unwrap();

        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn summary_totals_income_and_expenses() {
        let mut store = get_store();
        store.create(income(100.0)).unwrap();
        store.create(expense(40.0)).unwrap();

        let summary = store.summary().unwrap();

        assert_eq!(
            summary,
            Summary {
                total_income: 100.0,
                total_expenses: 40.0,
                balance: 60.0,
            }
        );
    }

    #[test]
    fn summary_ignores_other_transaction_types() {
        let mut store = get_store();
        store.create(income(100.0)).unwrap();
        store
            .create(NewTransaction {
                transaction_type: "transfer".to_owned(),
                category: "savings".to_owned(),
                amount: 55.0,
                date: "2025-10-26".to_owned(),
                description: None,
            })
            .unwrap();

        let summary = store.summary().unwrap();

        assert_eq!(
            summary,
            Summary {
                total_income: 100.0,
                total_expenses: 0.0,
                balance: 100.0,
            }
        );
    }
}
