mod message;

pub use message::*;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListMessagesQuery {
    pub channel_name: Option<String>,
    pub username: Option<String>,
    pub message_text: Option<String>,
    pub before_timestamp: Option<String>,
    pub after_timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AroundTimeQuery {
    pub target_timestamp: String,
    pub channel_name: Option<String>,
}
