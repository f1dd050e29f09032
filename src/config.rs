use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/expenses.db";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const DEFAULT_API_PORT: u16 = 8000;
const DEFAULT_DASHBOARD_PORT: u16 = 8501;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings for the API service, read once at startup and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: parse_var("PORT").unwrap_or(DEFAULT_API_PORT),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .filter(|value| *value > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}

/// Settings for the dashboard client.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    pub port: u16,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let api_url = env::var("EXPENSE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            port: parse_var("PORT").unwrap_or(DEFAULT_DASHBOARD_PORT),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse::<T>().ok())
}
