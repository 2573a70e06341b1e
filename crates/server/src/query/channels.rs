use sqlx::SqlitePool;

use crate::error::QueryError;

/// Every distinct channel name, sorted.
pub async fn list_channels(pool: &SqlitePool) -> Result<Vec<String>, QueryError> {
    let mut conn = pool.acquire().await?;
    let names = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT channel_name FROM chat_logs ORDER BY channel_name",
    )
    .fetch_all(&mut *conn)
    .await?;

    tracing::debug!(count = names.len(), "listed channels");
    Ok(names)
}
