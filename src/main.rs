use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use person_registry::persons::handlers::{
    handle_count, handle_create, handle_delete, handle_get, handle_list, handle_update,
};
use person_registry::persons::protocol::{ENDPOINT_COUNT, ENDPOINT_ITEMS, ENDPOINT_ITEM_BY_ID};
use person_registry::persons::store::CsvStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut data_path = PathBuf::from("data.csv");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Application starting");

    // 1. Store: create the data file with its header row up front, so the
    //    first request never races file creation against a concurrent one.
    let store = Arc::new(CsvStore::new(&data_path));
    store.ensure_initialized()?;
    tracing::info!("Data file initialized at {}", data_path.display());

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_COUNT, get(handle_count))
        .route(ENDPOINT_ITEMS, post(handle_create).get(handle_list))
        .route(
            ENDPOINT_ITEM_BY_ID,
            get(handle_get).put(handle_update).delete(handle_delete),
        )
        .layer(Extension(store));

    // 3. Serve until Ctrl+C:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Application shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
