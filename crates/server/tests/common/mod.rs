#![allow(dead_code)]

use axum::Router;
use chatlog_server::{
    config::{parse_origins, Config, DEFAULT_ALLOWED_ORIGINS},
    db,
    query::timestamp,
    routes, AppState,
};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// Create an in-memory SQLite pool with schema applied.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(db::connect_options("sqlite::memory:").unwrap())
        .await
        .expect("Failed to create in-memory SQLite pool");

    db::apply_schema(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        database_path: ":memory:".into(),
        database_max_connections: 1,
        database_acquire_timeout_secs: 1,
        allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
    }
}

/// Build a test Axum app with the given pool.
pub fn create_test_app(pool: SqlitePool) -> Router {
    let state = Arc::new(AppState {
        db: pool,
        config: test_config(),
    });

    routes::build_router(state)
}

/// `"10:06"` -> `"2024-05-01T10:06:00"` (naive, read as UTC).
pub fn at(hh_mm: &str) -> String {
    format!("2024-05-01T{}:00", hh_mm)
}

/// `"10:06"` in the canonical stored form.
pub fn stored(hh_mm: &str) -> String {
    timestamp::normalize("created_at", &at(hh_mm)).unwrap()
}

/// Insert a chat log row. `created_at` may be any accepted timestamp form.
pub async fn insert_message(
    pool: &SqlitePool,
    channel_name: &str,
    username: &str,
    message: &str,
    created_at: &str,
) -> i64 {
    let created_at = timestamp::normalize("created_at", created_at).unwrap();
    sqlx::query(
        "INSERT INTO chat_logs (channel_name, username, message, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(channel_name)
    .bind(username)
    .bind(message)
    .bind(&created_at)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

/// Insert `count` messages one second apart starting at `start`.
pub async fn insert_series(pool: &SqlitePool, channel_name: &str, start: &str, count: i64) {
    let start = timestamp::parse_instant(start).unwrap();
    for i in 0..count {
        let created_at = timestamp::canonical(start + chrono::Duration::seconds(i));
        insert_message(pool, channel_name, "bot", &format!("msg {}", i), &created_at).await;
    }
}

/// Channel "general" at 10:00, 10:05, 10:10, 10:15 and "random" at 10:07.
pub async fn seed_scenario(pool: &SqlitePool) {
    insert_message(pool, "general", "alice", "good morning", &at("10:00")).await;
    insert_message(pool, "general", "bob", "morning!", &at("10:05")).await;
    insert_message(pool, "random", "carol", "anyone seen this?", &at("10:07")).await;
    insert_message(pool, "general", "alice", "standup in 5", &at("10:10")).await;
    insert_message(pool, "general", "dave", "on my way", &at("10:15")).await;
}

pub fn created_at_of(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|m| m["created_at"].as_str().unwrap().to_string())
        .collect()
}
