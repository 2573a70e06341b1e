use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

pub const SCHEMA: &str = include_str!("schema.sql");

/// Connection options every pool needs: the `REGEXP` function used by
/// substring search is registered here.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?.with_regexp())
}

pub async fn init_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    // Ensure parent directory exists
    if let Some(parent) = Path::new(&config.database_path).parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let options = connect_options(&format!("sqlite:{}", config.database_path))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;

    tracing::info!("Database initialized at {}", config.database_path);
    Ok(pool)
}

/// Run `schema.sql` statement by statement
/// (SQLx doesn't support multi-statement queries directly).
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }
    Ok(())
}
