use std::{env, net::SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker_rs::{build_router, create_app_state, graceful_shutdown};

/// The REST API server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database. The file is created if
    /// it does not exist.
    #[arg(long, default_value = "expense-tracker.db")]
    db_path: String,

    /// The port to serve the API from. Defaults to the PORT environment
    /// variable, or 3000 if that is not set.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let port = args
        .port
        .unwrap_or_else(|| parse_port_or_default("PORT", 3000));
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let conn = Connection::open(&args.db_path).expect("Could not open the database file.");
    let state = create_app_state(conn).expect("Could not initialize the database.");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

/// Parse the port number from the environment variable `env_key`, or return
/// `default` if the variable is unset or not a valid port.
fn parse_port_or_default(env_key: &str, default: u16) -> u16 {
    env::var(env_key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http().make_span_with(|req: &Request| {
        let method = req.method();
        let uri = req.uri();

        let matched_path = req
            .extensions()
            .get::<MatchedPath>()
            .map(|matched_path| matched_path.as_str());

        tracing::debug_span!("request", %method, %uri, matched_path)
    });

    router.layer(tracing_layer)
}
