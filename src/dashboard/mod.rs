//! Web dashboard that edits expenses and shows the category breakdown by
//! calling the expense API over HTTP.

pub mod client;
pub mod form;
pub mod handlers;
pub mod report;
pub mod ui;

pub use client::{ApiClient, ClientError};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct DashboardState {
    pub client: ApiClient,
}

impl DashboardState {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/edit", get(handlers::edit_page).post(handlers::submit_edit))
        .route("/analytics", get(handlers::analytics_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
