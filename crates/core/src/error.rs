// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tk-core operations.

use thiserror::Error;

use crate::policy::{Denial, Permission};
use crate::workflow::{Event, State};

/// All possible errors that can occur in tk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(i64),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("comment not found: {0}")]
    CommentNotFound(i64),

    #[error("todo item not found: {0}")]
    TodoNotFound(i64),

    #[error("invalid transition: cannot {event} an issue that is {state}\n  hint: from '{state}' you can: {valid}")]
    InvalidTransition {
        state: State,
        event: Event,
        valid: String,
    },

    #[error("issue {id} changed underneath you: expected {expected}, found {actual}\n  hint: reload the issue and try again")]
    StaleState {
        id: i64,
        expected: State,
        actual: State,
    },

    #[error("permission denied: cannot {permission}: {reason}")]
    PermissionDenied {
        permission: Permission,
        reason: Denial,
    },

    #[error("invalid state: '{0}'\n  hint: valid states are: open, working_on, finished, invalid, closed, ignored, reopened")]
    InvalidState(String),

    #[error("invalid event: '{0}'\n  hint: valid events are: work_on, mark_invalid, ignore, close, mark_finished, continue, reopen")]
    InvalidEvent(String),

    #[error("unknown role: '{0}'\n  hint: valid roles are: ProjectManager, Developer")]
    UnknownRole(String),

    #[error("unknown locale: '{0}'\n  hint: supported locales are: en, zh-CN")]
    UnknownLocale(String),

    #[error("email already taken: {0}")]
    DuplicateEmail(String),

    #[error("name already taken: {0}")]
    DuplicateName(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} is too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for tk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
