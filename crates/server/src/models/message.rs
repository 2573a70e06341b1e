use serde::{Deserialize, Serialize};

/// A row of `chat_logs`. `created_at` is held in canonical UTC text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub channel_name: String,
    pub username: String,
    pub message: String,
    pub created_at: String,
}
