use expense_tracker::dashboard::{self, ApiClient, DashboardState};
use expense_tracker::{logging, DashboardConfig};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    let config = DashboardConfig::from_env();
    let client = ApiClient::new(config.api_url.clone());
    info!("dashboard talking to expense API at {}", client.base_url());

    let app = dashboard::router(DashboardState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("dashboard listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(logging::shutdown_signal())
        .await?;

    Ok(())
}
