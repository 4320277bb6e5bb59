//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    routes::{
        summary::get_summary_endpoint,
        transaction::{
            create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
            get_transactions_endpoint, update_transaction_endpoint,
        },
    },
    stores::TransactionStore,
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(endpoints::TRANSACTIONS, get(get_transactions_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route(endpoints::TRANSACTION, put(update_transaction_endpoint))
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{build_router, create_app_state};

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let connection = Connection::open_in_memory().unwrap();
        let state = create_app_state(connection).unwrap();
        let server = TestServer::try_new(build_router(state)).unwrap();

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
    }
}
