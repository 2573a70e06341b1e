use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::error::QueryError;
use crate::models::{AroundTimeQuery, ChatMessage, ListMessagesQuery};
use crate::query;
use crate::AppState;

/// GET /messages
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListMessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<ChatMessage>>, QueryError> {
    let Query(params) = params.map_err(|e| QueryError::invalid(e.body_text()))?;
    let items = query::list_messages(&state.db, &params).await?;
    Ok(Json(items))
}

/// GET /messages_around_time
pub async fn messages_around_time(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AroundTimeQuery>, QueryRejection>,
) -> Result<Json<Vec<ChatMessage>>, QueryError> {
    let Query(params) = params.map_err(|e| QueryError::invalid(e.body_text()))?;
    let items = query::messages_around_time(
        &state.db,
        &params.target_timestamp,
        params.channel_name.as_deref(),
    )
    .await?;
    Ok(Json(items))
}
