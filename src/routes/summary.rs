//! This file defines the route for the aggregate transaction summary.

use axum::{Json, extract::State};

use crate::{AppState, Error, models::Summary, stores::TransactionStore};

/// A route handler for the income, expense and balance totals over all
/// transactions.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_summary_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Summary>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    state.transaction_store.summary().map(Json)
}

#[cfg(test)]
mod summary_route_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{build_router, create_app_state, endpoints, models::Summary};

    fn new_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(connection).expect("Could not initialize database.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn summary_on_empty_store_is_all_zero() {
        let server = new_test_server();

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Summary>(), Summary::default());
    }

    #[tokio::test]
    async fn summary_totals_income_and_expenses() {
        let server = new_test_server();
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "type": "income",
                "category": "salary",
                "amount": 100.0,
                "date": "2025-10-01"
            }))
            .await
            .assert_status_ok();
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "type": "expense",
                "category": "groceries",
                "amount": 40.0,
                "date": "2025-10-26"
            }))
            .await
            .assert_status_ok();

        let summary = server.get(endpoints::SUMMARY).await.json::<Summary>();

        assert_eq!(
            summary,
            Summary {
                total_income: 100.0,
                total_expenses: 40.0,
                balance: 60.0,
            }
        );
    }
}
