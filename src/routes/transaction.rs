//! This file defines the routes for creating, reading, updating and
//! deleting transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    models::{DatabaseID, NewTransaction, Transaction},
    stores::TransactionStore,
};

/// The response body confirming a created transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    /// The ID assigned to the new transaction.
    pub id: DatabaseID,
}

/// The response body for listing all transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionList {
    /// Every transaction in the store, in storage order.
    pub transactions: Vec<Transaction>,
}

/// The response body confirming an update or a deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct Confirmation {
    /// A human-readable confirmation of what happened.
    pub message: String,
}

/// A route handler for creating a new transaction.
///
/// The request body is validated before any storage call; a malformed or
/// incomplete body is rejected with a client error.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<Json<CreateResponse>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let Json(new_transaction) = payload?;
    new_transaction.validate()?;

    let transaction = state.transaction_store.create(new_transaction)?;

    Ok(Json(CreateResponse { id: transaction.id }))
}

/// A route handler for listing all transactions.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<TransactionList>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.get_all()?;

    Ok(Json(TransactionList { transactions }))
}

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_store.get(transaction_id).map(Json)
}

/// A route handler for overwriting all fields of a transaction.
///
/// This function will return the status code 404 if no transaction has the
/// given ID; in that case nothing is written.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Path(transaction_id): Path<DatabaseID>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Result<Json<Confirmation>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let Json(new_transaction) = payload?;
    new_transaction.validate()?;

    state
        .transaction_store
        .update(transaction_id, new_transaction)?;

    Ok(Json(Confirmation {
        message: "Transaction updated successfully".to_owned(),
    }))
}

/// A route handler for deleting a transaction by its database ID.
///
/// This function will return the status code 404 if no transaction has the
/// given ID.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<Json<Confirmation>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_store.delete(transaction_id)?;

    Ok(Json(Confirmation {
        message: "Transaction deleted successfully".to_owned(),
    }))
}
