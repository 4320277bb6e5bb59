//! The API endpoint URIs.

/// The transaction collection: POST to create, GET to list all.
pub const TRANSACTIONS: &str = "/transactions";
/// A single transaction addressed by its database ID.
pub const TRANSACTION: &str = "/transactions/{id}";
/// The aggregate income, expense and balance totals.
pub const SUMMARY: &str = "/summary";
