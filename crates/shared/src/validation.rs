use crate::constants::*;

pub fn validate_channel_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_CHANNEL_NAME_LENGTH {
        return Err(format!(
            "channel_name must be at most {} characters",
            MAX_CHANNEL_NAME_LENGTH
        ));
    }
    Ok(())
}

/// Substring search terms (`username`, `message_text`).
pub fn validate_search_term(field: &str, term: &str) -> Result<(), String> {
    if term.len() > MAX_SEARCH_TERM_LENGTH {
        return Err(format!(
            "{} must be at most {} characters",
            field, MAX_SEARCH_TERM_LENGTH
        ));
    }
    if term.chars().any(|c| c.is_control()) {
        return Err(format!("{} must not contain control characters", field));
    }
    Ok(())
}

pub fn validate_timestamp_input(field: &str, raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    if trimmed.len() > MAX_TIMESTAMP_LENGTH {
        return Err(format!("{} is not a valid timestamp", field));
    }
    Ok(())
}
