//! This module defines the domain data types.

pub use category::Category;
pub use summary::Summary;
pub use transaction::{NewTransaction, Transaction};

mod category;
mod summary;
mod transaction;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
