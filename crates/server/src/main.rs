use chatlog_server::{config::Config, db, routes, AppState};
use chatlog_shared::constants::APP_NAME;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatlog_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    let pool = db::init_pool(&config)
        .await
        .expect("Failed to initialize database");

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Allowed origins: {:?}", config.allowed_origins);

    let state = Arc::new(AppState { db: pool, config });
    let app = routes::build_router(state);

    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");

    tracing::info!("{} server running on {}", APP_NAME, addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
