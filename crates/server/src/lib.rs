pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;

use config::Config;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Config,
}
