/*! This module defines traits for mapping the domain models to database
tables and the function that sets up the application database. */

use rusqlite::{Connection, Row, Transaction as SqlTransaction};

use crate::{Error, models::Category, stores::sqlite::SQLiteTransactionStore};

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create a table for the model.
    ///
    /// Implementations should use `CREATE TABLE IF NOT EXISTS` so that
    /// repeated application start-up is safe.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping from a `rusqlite::Row` from a SQLite database to a concrete rust type.
///
/// # Examples
/// ```
/// use rusqlite::{Connection, Error, Row};
///
/// use expense_tracker_rs::db::{CreateTable, MapRow};
///
/// struct Foo {
///     id: i64,
///     desc: String,
/// }
///
/// impl CreateTable for Foo {
///     fn create_table(connection: &Connection) -> Result<(), Error> {
///         connection.execute(
///             "CREATE TABLE IF NOT EXISTS foo (id INTEGER PRIMARY KEY, desc TEXT NOT NULL)",
///             (),
///         )?;
///
///         Ok(())
///     }
/// }
///
/// impl MapRow for Foo {
///     type ReturnType = Self;
///
///     fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, Error> {
///         Ok(Self {
///             id: row.get(offset)?,
///             desc: row.get(offset + 1)?,
///         })
///     }
/// }
/// ```
pub trait MapRow {
    /// The type that the row is mapped to.
    type ReturnType;

    /// Map `row` to `Self::ReturnType`, reading columns starting at index zero.
    ///
    /// # Errors
    /// Returns an error if a column is missing or cannot be converted.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Map `row` to `Self::ReturnType`, reading columns starting at `offset`.
    ///
    /// # Errors
    /// Returns an error if a column is missing or cannot be converted.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create the tables for the domain models in the database held by `connection`.
///
/// Table creation is idempotent, so calling this on every start-up is safe.
///
/// # Errors
/// Returns an error if any table could not be created. Callers should treat
/// this as fatal: a database missing its tables cannot serve any request.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    SQLiteTransactionStore::create_table(&transaction)?;
    Category::create_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
