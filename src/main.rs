use expense_tracker::{logging, router, AppState, Config, ExpenseStore};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    let config = Config::from_env();
    let store = ExpenseStore::connect(&config).await?;
    info!("using database {}", config.database_url);

    let app = router(AppState::new(store.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Expense Tracking API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(logging::shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}
