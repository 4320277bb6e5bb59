//! This file defines the `Category` type and its table schema.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{db::CreateTable, models::DatabaseID};

/// A named grouping for transactions, e.g. "groceries" as an expense
/// category.
///
/// The table is created at start-up but no route reads or writes it yet.
/// `Transaction::category` is an independent free-text field, not a
/// reference to a row in this table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category, assigned by the database.
    pub id: DatabaseID,

    /// The name of the category.
    pub name: String,

    /// Whether the category applies to `"income"` or `"expense"`
    /// transactions.
    #[serde(rename = "type")]
    pub category_type: String,
}

impl CreateTable for Category {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL
                )",
            (),
        )?;

        Ok(())
    }
}
