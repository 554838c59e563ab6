// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the tk issue tracker.
//!
//! This module contains the entities that hang off a project: Issue,
//! Comment and TodoItem, plus the inputs used to create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::user::User;
use crate::validate::validate_issue_content;
use crate::workflow::{self, Event, State, Transition};

/// Content stored for issues created without any.
pub const DEFAULT_CONTENT: &str = "记录在Todo里。";

/// A container that issues belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Database-assigned identifier.
    pub id: i64,
    /// Unique project name.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// The primary entity representing a tracked work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Database-assigned identifier.
    pub id: i64,
    /// The project this issue belongs to.
    pub project_id: i64,
    /// The user who reported the issue.
    pub creator_id: i64,
    /// Short description of the problem.
    pub title: String,
    /// Body text. Never empty.
    pub content: String,
    /// Current workflow state.
    pub state: State,
    /// The user currently responsible, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an open, unassigned issue with default content.
    pub fn new(
        id: i64,
        project_id: i64,
        creator_id: i64,
        title: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            project_id,
            creator_id,
            title,
            content: DEFAULT_CONTENT.to_string(),
            state: State::Open,
            assignee_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn is_creator(&self, user: &User) -> bool {
        self.creator_id == user.id
    }

    pub fn is_assignee(&self, user: &User) -> bool {
        self.assignee_id == Some(user.id)
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee_id.is_some()
    }

    /// Check whether `event` may fire from the current state.
    pub fn can_fire(&self, event: Event) -> bool {
        workflow::can_fire(self.state, event)
    }

    /// Events that may fire from the current state.
    pub fn events(&self) -> Vec<Event> {
        self.state.events()
    }

    /// Work out the transition `event` would cause without applying it.
    pub fn plan(&self, event: Event) -> Result<Transition> {
        let to = workflow::next_state(self.state, event)?;
        Ok(Transition {
            issue_id: self.id,
            event,
            from: self.state,
            to,
        })
    }

    /// Fire `event` in memory only. The issue is untouched on error.
    pub fn apply(&mut self, event: Event) -> Result<Transition> {
        let transition = self.plan(event)?;
        self.state = transition.to;
        self.updated_at = Utc::now();
        Ok(transition)
    }
}

/// Fields required to open an issue.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub project_id: i64,
    pub creator_id: i64,
    pub title: String,
    pub content: Option<String>,
}

impl NewIssue {
    pub fn new(project_id: i64, creator_id: i64, title: impl Into<String>) -> Self {
        NewIssue {
            project_id,
            creator_id,
            title: title.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The content to store: the trimmed text, or [`DEFAULT_CONTENT`] when blank.
    pub fn resolved_content(&self) -> Result<String> {
        validate_issue_content(self.content.as_deref())
    }
}

/// A remark left on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this comment belongs to.
    pub issue_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A checklist entry owned by an issue's assignee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this item belongs to.
    pub issue_id: i64,
    pub content: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
