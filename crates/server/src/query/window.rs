//! Messages surrounding an anchor timestamp.
//!
//! Two independently capped halves are read on one connection: the newest
//! `WINDOW_HALF_SIZE` rows at or before the anchor, and the oldest
//! `WINDOW_HALF_SIZE` rows strictly after it. `<=` against `>` keeps the halves
//! disjoint, so the merge is a plain concatenation followed by an ascending sort.

use sqlx::SqlitePool;

use chatlog_shared::constants::WINDOW_HALF_SIZE;

use super::filter::{MessageFilter, Predicate};
use super::{select_page, timestamp, Direction};
use crate::error::QueryError;
use crate::models::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPlan {
    /// Canonical anchor.
    pub target: String,
    pub before: MessageFilter,
    pub after: MessageFilter,
}

impl WindowPlan {
    pub fn new(target_timestamp: &str, channel_name: Option<&str>) -> Result<Self, QueryError> {
        let target = timestamp::normalize("target_timestamp", target_timestamp)?;

        let before = MessageFilter::new()
            .with(Predicate::CreatedAtOrBefore(target.clone()))
            .channel(channel_name)?;
        let after = MessageFilter::new()
            .with(Predicate::CreatedAfter(target.clone()))
            .channel(channel_name)?;

        Ok(Self { target, before, after })
    }
}

pub async fn messages_around_time(
    pool: &SqlitePool,
    target_timestamp: &str,
    channel_name: Option<&str>,
) -> Result<Vec<ChatMessage>, QueryError> {
    let plan = WindowPlan::new(target_timestamp, channel_name)?;
    tracing::debug!(anchor = %plan.target, channel = ?channel_name, "messages around time");

    let mut conn = pool.acquire().await?;

    let mut before_qb = select_page(&plan.before, Direction::Descending, WINDOW_HALF_SIZE);
    let before = before_qb
        .build_query_as::<ChatMessage>()
        .fetch_all(&mut *conn)
        .await?;

    let mut after_qb = select_page(&plan.after, Direction::Ascending, WINDOW_HALF_SIZE);
    let after = after_qb
        .build_query_as::<ChatMessage>()
        .fetch_all(&mut *conn)
        .await?;

    tracing::debug!(before = before.len(), after = after.len(), "window halves fetched");
    Ok(merge_halves(before, after))
}

/// Concatenate both halves and order ascending by `(created_at, id)`.
pub fn merge_halves(before: Vec<ChatMessage>, after: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut items = before;
    items.extend(after);
    items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    items
}
