pub const APP_NAME: &str = "Chatlog";

// Paging
pub const MESSAGE_PAGE_SIZE: i64 = 50;
pub const WINDOW_HALF_SIZE: i64 = 50;

// Limits
pub const MAX_CHANNEL_NAME_LENGTH: usize = 100;
pub const MAX_SEARCH_TERM_LENGTH: usize = 200;
pub const MAX_TIMESTAMP_LENGTH: usize = 64;
