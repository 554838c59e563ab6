// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence seam used by the workflow engine.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::issue::Issue;
use crate::workflow::{State, Transition};

/// What the workflow engine needs from storage.
pub trait IssueStore {
    /// Load an issue with its current state and assignment.
    fn load_issue(&self, id: i64) -> Result<Issue>;

    /// Atomically move the issue from `transition.from` to `transition.to`
    /// and log it against `actor_id`. Returns the timestamp written as the
    /// issue's `updated_at`.
    ///
    /// Fails with [`Error::StaleState`](crate::Error::StaleState) when the
    /// stored state is no longer `transition.from`, leaving storage untouched.
    fn write_state(&self, transition: &Transition, actor_id: i64) -> Result<DateTime<Utc>>;
}

/// State predicate for issue queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    /// No constraint.
    #[default]
    Any,
    /// Issues in exactly this state.
    Only(State),
    /// Issues in any state but this one.
    Except(State),
}

impl StateFilter {
    pub fn matches(&self, state: State) -> bool {
        match self {
            StateFilter::Any => true,
            StateFilter::Only(s) => state == *s,
            StateFilter::Except(s) => state != *s,
        }
    }
}

/// Filter for listing issues.
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    pub project_id: Option<i64>,
    pub state: StateFilter,
    pub assignee_id: Option<i64>,
}

impl IssueQuery {
    pub fn in_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_state(mut self, state: StateFilter) -> Self {
        self.state = state;
        self
    }

    pub fn assigned_to(mut self, user_id: i64) -> Self {
        self.assignee_id = Some(user_id);
        self
    }
}
