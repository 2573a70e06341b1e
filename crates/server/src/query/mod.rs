pub mod channels;
pub mod filter;
pub mod listing;
pub mod timestamp;
pub mod window;

pub use channels::list_channels;
pub use filter::{MessageFilter, Predicate};
pub use listing::{list_messages, ListingPlan};
pub use window::{merge_halves, messages_around_time, WindowPlan};

use sqlx::{QueryBuilder, Sqlite};

const SELECT_MESSAGES: &str =
    "SELECT id, channel_name, username, message, created_at FROM chat_logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// `id` breaks ties between equal `created_at` values.
    pub fn order_by(self) -> &'static str {
        match self {
            Direction::Ascending => " ORDER BY created_at ASC, id ASC",
            Direction::Descending => " ORDER BY created_at DESC, id DESC",
        }
    }
}

/// `SELECT ... WHERE <filter> ORDER BY <direction> LIMIT <limit>`
pub fn select_page<'args>(
    filter: &MessageFilter,
    direction: Direction,
    limit: i64,
) -> QueryBuilder<'args, Sqlite> {
    let mut qb = QueryBuilder::new(SELECT_MESSAGES);
    filter.push_where(&mut qb);
    qb.push(direction.order_by());
    qb.push(" LIMIT ");
    qb.push_bind(limit);
    qb
}
