pub mod analytics;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;

pub use app::router;
pub use config::{Config, DashboardConfig};
pub use state::AppState;
pub use storage::ExpenseStore;
