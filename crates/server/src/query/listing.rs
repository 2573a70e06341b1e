use sqlx::SqlitePool;

use chatlog_shared::constants::MESSAGE_PAGE_SIZE;

use super::filter::{MessageFilter, Predicate};
use super::{select_page, timestamp, Direction};
use crate::error::QueryError;
use crate::models::{ChatMessage, ListMessagesQuery};

/// A validated listing request: what to match and which way to page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPlan {
    pub filter: MessageFilter,
    pub direction: Direction,
}

impl ListingPlan {
    /// Newest first by default. An `after_timestamp` pages forward (oldest first)
    /// and wins over `before_timestamp` when both are given; both bounds still apply.
    pub fn from_query(query: &ListMessagesQuery) -> Result<Self, QueryError> {
        let mut filter = MessageFilter::new()
            .channel(query.channel_name.as_deref())?
            .username_contains(query.username.as_deref())?
            .message_contains(query.message_text.as_deref())?;
        let mut direction = Direction::Descending;

        if let Some(raw) = present(&query.before_timestamp) {
            let before = timestamp::normalize("before_timestamp", raw)?;
            filter = filter.with(Predicate::CreatedBefore(before));
        }

        if let Some(raw) = present(&query.after_timestamp) {
            let after = timestamp::normalize("after_timestamp", raw)?;
            filter = filter.with(Predicate::CreatedAfter(after));
            direction = Direction::Ascending;
        }

        Ok(Self { filter, direction })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Up to one page of messages matching `query`.
pub async fn list_messages(
    pool: &SqlitePool,
    query: &ListMessagesQuery,
) -> Result<Vec<ChatMessage>, QueryError> {
    let plan = ListingPlan::from_query(query)?;
    tracing::debug!(?plan, "listing messages");

    let mut conn = pool.acquire().await?;
    let mut qb = select_page(&plan.filter, plan.direction, MESSAGE_PAGE_SIZE);
    let items = qb
        .build_query_as::<ChatMessage>()
        .fetch_all(&mut *conn)
        .await?;

    tracing::debug!(count = items.len(), "listed messages");
    Ok(items)
}
