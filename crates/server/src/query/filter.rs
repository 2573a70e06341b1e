//! Composable, parameterized WHERE fragments over `chat_logs`.
//!
//! Clause text only ever comes from the static strings in [`Predicate::parts`];
//! every caller supplied value travels as a bound parameter.

use sqlx::{QueryBuilder, Sqlite};

use chatlog_shared::validation;

use crate::error::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `channel_name = ?`
    ChannelIs(String),
    /// Case-insensitive substring of `username`.
    UsernameContains(String),
    /// Case-insensitive substring of `message`.
    MessageContains(String),
    /// `created_at < ?` (canonical timestamp)
    CreatedBefore(String),
    /// `created_at <= ?` (canonical timestamp)
    CreatedAtOrBefore(String),
    /// `created_at > ?` (canonical timestamp)
    CreatedAfter(String),
}

impl Predicate {
    /// SQL before and after the placeholder.
    fn parts(&self) -> (&'static str, &'static str) {
        match self {
            Predicate::ChannelIs(_) => ("channel_name = ", ""),
            // REGEXP is registered per connection by `with_regexp()`.
            Predicate::UsernameContains(_) => ("username REGEXP ", ""),
            Predicate::MessageContains(_) => ("message REGEXP ", ""),
            Predicate::CreatedBefore(_) => ("created_at < ", ""),
            Predicate::CreatedAtOrBefore(_) => ("created_at <= ", ""),
            Predicate::CreatedAfter(_) => ("created_at > ", ""),
        }
    }

    /// The value bound in place of the placeholder.
    pub fn param(&self) -> String {
        match self {
            Predicate::UsernameContains(term) | Predicate::MessageContains(term) => {
                substring_pattern(term)
            }
            Predicate::ChannelIs(v)
            | Predicate::CreatedBefore(v)
            | Predicate::CreatedAtOrBefore(v)
            | Predicate::CreatedAfter(v) => v.clone(),
        }
    }

    pub fn clause(&self) -> String {
        let (head, tail) = self.parts();
        format!("{}?{}", head, tail)
    }
}

/// Unicode case-insensitive regex matching `term` literally anywhere.
pub fn substring_pattern(term: &str) -> String {
    format!("(?i){}", regex::escape(term))
}

/// An ordered AND of predicates. Empty matches every row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageFilter {
    predicates: Vec<Predicate>,
}

impl MessageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Exact channel match. Absent or empty names add nothing.
    pub fn channel(self, name: Option<&str>) -> Result<Self, QueryError> {
        match non_empty(name) {
            Some(name) => {
                validation::validate_channel_name(name).map_err(QueryError::invalid)?;
                Ok(self.with(Predicate::ChannelIs(name.to_string())))
            }
            None => Ok(self),
        }
    }

    pub fn username_contains(self, term: Option<&str>) -> Result<Self, QueryError> {
        match non_empty(term) {
            Some(term) => {
                validation::validate_search_term("username", term).map_err(QueryError::invalid)?;
                Ok(self.with(Predicate::UsernameContains(term.to_string())))
            }
            None => Ok(self),
        }
    }

    pub fn message_contains(self, term: Option<&str>) -> Result<Self, QueryError> {
        match non_empty(term) {
            Some(term) => {
                validation::validate_search_term("message_text", term)
                    .map_err(QueryError::invalid)?;
                Ok(self.with(Predicate::MessageContains(term.to_string())))
            }
            None => Ok(self),
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn clauses(&self) -> Vec<String> {
        self.predicates.iter().map(Predicate::clause).collect()
    }

    /// Parameters, positionally matching [`Self::clauses`].
    pub fn params(&self) -> Vec<String> {
        self.predicates.iter().map(Predicate::param).collect()
    }

    /// Append ` WHERE a AND b ...` to `qb`, or nothing for an empty filter.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            let (head, tail) = predicate.parts();
            qb.push(head);
            qb.push_bind(predicate.param());
            qb.push(tail);
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
