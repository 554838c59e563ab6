// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Who may do what to an issue.
//!
//! Every check is a pure function of the actor and a snapshot of the issue
//! taken at evaluation time. Nothing is cached across transitions, so callers
//! must re-check after firing an event.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::issue::{Comment, Issue};
use crate::user::{Role, User};
use crate::workflow::State;

/// Assign or reassign an issue: its creator, or any project manager.
pub fn can_assign_issue(actor: &User, issue: &Issue) -> bool {
    if issue.is_creator(actor) {
        return true;
    }
    match actor.role {
        Role::ProjectManager => true,
        Role::Developer => false,
    }
}

/// Fire workflow events on an issue.
///
/// Nobody may change state before the issue has an assignee. After that the
/// creator, the assignee and project managers may.
pub fn can_change_state(actor: &User, issue: &Issue) -> bool {
    if !issue.is_assigned() {
        return false;
    }
    if issue.is_creator(actor) || issue.is_assignee(actor) {
        return true;
    }
    match actor.role {
        Role::ProjectManager => true,
        Role::Developer => false,
    }
}

/// Add, tick or remove todo items: only the assignee, and only until closed.
pub fn can_manage_todo(actor: &User, issue: &Issue) -> bool {
    issue.is_assignee(actor) && issue.state != State::Closed
}

/// Edit or delete the issue itself: only the creator, and only until closed.
pub fn can_manage_issue(actor: &User, issue: &Issue) -> bool {
    issue.is_creator(actor) && issue.state != State::Closed
}

/// Edit or delete a comment. Decided by the comment's owning issue.
pub fn can_manage_comment(actor: &User, comment: &Comment, issue: &Issue) -> bool {
    comment.issue_id == issue.id && can_manage_issue(actor, issue)
}

/// The action categories the policy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    AssignIssue,
    ChangeState,
    ManageTodo,
    ManageIssue,
    ManageComment,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::AssignIssue => "assign issue",
            Permission::ChangeState => "change issue state",
            Permission::ManageTodo => "manage todo items",
            Permission::ManageIssue => "manage issue",
            Permission::ManageComment => "manage comment",
        };
        write!(f, "{s}")
    }
}

/// Why a check came back `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    /// The issue has no assignee yet.
    MissingAssignment,
    /// Only the creator may do this.
    NotCreator,
    /// Only the assignee may do this.
    NotAssignee,
    /// The actor's role does not grant it.
    InsufficientRole,
    /// The issue is closed.
    IssueClosed,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Denial::MissingAssignment => "issue is not assigned yet",
            Denial::NotCreator => "only the issue's creator may do this",
            Denial::NotAssignee => "only the assigned user may do this",
            Denial::InsufficientRole => "the actor's role does not allow it",
            Denial::IssueClosed => "issue is closed",
        };
        write!(f, "{s}")
    }
}

/// Evaluate `permission`, explaining a denial.
///
/// `ManageComment` is decided by `issue`, which must be the comment's owner;
/// use [`can_manage_comment`] when the comment itself is at hand.
pub fn check(
    actor: &User,
    issue: &Issue,
    permission: Permission,
) -> std::result::Result<(), Denial> {
    let allowed = match permission {
        Permission::AssignIssue => can_assign_issue(actor, issue),
        Permission::ChangeState => can_change_state(actor, issue),
        Permission::ManageTodo => can_manage_todo(actor, issue),
        Permission::ManageIssue | Permission::ManageComment => can_manage_issue(actor, issue),
    };
    if allowed {
        return Ok(());
    }
    Err(explain(actor, issue, permission))
}

fn explain(actor: &User, issue: &Issue, permission: Permission) -> Denial {
    match permission {
        Permission::AssignIssue => Denial::InsufficientRole,
        Permission::ChangeState if !issue.is_assigned() => Denial::MissingAssignment,
        Permission::ChangeState => Denial::InsufficientRole,
        Permission::ManageTodo if !issue.is_assigned() => Denial::MissingAssignment,
        Permission::ManageTodo if !issue.is_assignee(actor) => Denial::NotAssignee,
        Permission::ManageTodo => Denial::IssueClosed,
        Permission::ManageIssue | Permission::ManageComment if !issue.is_creator(actor) => {
            Denial::NotCreator
        }
        Permission::ManageIssue | Permission::ManageComment => Denial::IssueClosed,
    }
}

/// Like [`check`], but as a crate error suitable for `?`.
pub fn authorize(actor: &User, issue: &Issue, permission: Permission) -> Result<()> {
    check(actor, issue, permission).map_err(|reason| {
        tracing::debug!(
            actor = %actor.name,
            issue = issue.id,
            %permission,
            %reason,
            "permission denied"
        );
        Error::PermissionDenied { permission, reason }
    })
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
