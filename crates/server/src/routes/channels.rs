use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::QueryError;
use crate::query;
use crate::AppState;

/// GET /channels
pub async fn list_channels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, QueryError> {
    let names = query::list_channels(&state.db).await?;
    Ok(Json(names))
}
