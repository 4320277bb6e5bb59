//! The HTTP route handlers for the JSON API.

pub mod summary;
pub mod transaction;
