//! Error kinds surfaced by the query layer and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Malformed or unsatisfiable caller input. The message is safe to show.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The store could not be reached, or a connection could not be acquired in time.
    #[error("store unavailable")]
    StoreUnavailable,
    /// The store rejected a query.
    #[error("store query failed")]
    StoreQuery,
}

impl QueryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        QueryError::InvalidArgument(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            QueryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            QueryError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            QueryError::StoreQuery => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument(_) => "INVALID_ARGUMENT",
            QueryError::StoreUnavailable => "STORE_UNAVAILABLE",
            QueryError::StoreQuery => "STORE_QUERY_ERROR",
        }
    }
}

impl From<sqlx::Error> for QueryError {
    fn from(e: sqlx::Error) -> Self {
        let unavailable = match &e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::WorkerCrashed => true,
            sqlx::Error::Database(db) => is_lock_contention(&**db),
            _ => false,
        };

        if unavailable {
            tracing::error!(error = %e, "store unavailable");
            QueryError::StoreUnavailable
        } else {
            tracing::error!(error = %e, "store rejected query");
            QueryError::StoreQuery
        }
    }
}

/// SQLITE_BUSY (5) or SQLITE_LOCKED (6), including their extended codes.
fn is_lock_contention(err: &dyn sqlx::error::DatabaseError) -> bool {
    err.code()
        .and_then(|code| code.parse::<i32>().ok())
        .map(|code| matches!(code & 0xff, 5 | 6))
        .unwrap_or(false)
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let message = match &self {
            QueryError::InvalidArgument(msg) => msg.clone(),
            QueryError::StoreUnavailable => "Message store is unavailable".to_string(),
            QueryError::StoreQuery => "Internal error".to_string(),
        };

        (
            self.status(),
            Json(serde_json::json!({"error": message, "code": self.code()})),
        )
            .into_response()
    }
}
