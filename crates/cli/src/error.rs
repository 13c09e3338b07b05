// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::query::{Field, SortKey};

/// All possible errors that can occur in the tixrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'tix init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("issue already exists: {0}")]
    IssueExists(String),

    #[error("ambiguous issue ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("invalid status transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("invalid issue type: '{0}'\n  hint: valid types are: bug, feature, task, chore, epic")]
    InvalidIssueType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, closed")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, critical")]
    InvalidPriority(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    // Query parser errors
    #[error("unknown search field '{field}'\n  hint: valid fields are: {}", Field::valid_names())]
    QueryUnknownField { field: String },

    #[error("invalid date in '{token}'\n  hint: use [op]YYYY-MM-DD or [op]N(d|w|m|y), op is one of > >= < <= =")]
    QueryInvalidDate { token: String },

    #[error("invalid limit in '{token}'\n  hint: limit must be a non-negative integer")]
    QueryInvalidLimit { token: String },

    #[error("invalid sort direction in '{token}'\n  hint: use sort:<field>:asc or sort:<field>:desc (fields: {})", SortKey::valid_names())]
    QueryInvalidSort { token: String },

    #[error("NOT must precede a field filter, found '{token}'\n  hint: text search cannot be negated")]
    QueryInvalidNegation { token: String },

    #[error("missing value for '{field}:'")]
    QueryMissingValue { field: String },

    #[error("cannot mix AND and OR in one query\n  hint: a query uses a single operator for all terms")]
    QueryMixedOperators,

    // Saved queries
    #[error("saved query not found: '{name}'\n  hint: run 'tix query list' to see saved queries")]
    SavedQueryNotFound { name: String },

    #[error("invalid query name '{name}': must be non-empty without whitespace")]
    InvalidQueryName { name: String },

    // Command validation
    #[error("unknown attribute '{attr}'\n  hint: valid attributes are: title, description, type, priority, assignee")]
    UnknownAttribute { attr: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    // Git
    #[error("issue {id} has no branch\n  hint: run 'tix branch {id}' first")]
    NoBranch { id: String },

    #[error("not a git repository: {0}")]
    NotAGitRepo(String),

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for tixrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<tix_core::Error> for Error {
    fn from(e: tix_core::Error) -> Self {
        match e {
            tix_core::Error::InvalidTransition {
                from,
                to,
                valid_targets,
            } => Error::InvalidTransition {
                from,
                to,
                valid_targets,
            },
            tix_core::Error::InvalidIssueType(s) => Error::InvalidIssueType(s),
            tix_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            tix_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            tix_core::Error::Json(e) => Error::Json(e),
            tix_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
