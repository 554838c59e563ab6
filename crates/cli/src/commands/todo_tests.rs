// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;
use tk_core::{Denial, Event, Role};
use yare::parameterized;

#[test]
fn test_assignee_manages_todos() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let dev = ctx.user("lily", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");
    ctx.assign(&issue, &dev);

    add_impl(&ctx.db, Some("lily"), issue.id, "Reproduce").unwrap();
    let todo = ctx.db.list_todos(issue.id).unwrap().remove(0);
    assert!(!todo.done);

    set_done_impl(&ctx.db, Some("lily"), todo.id, true).unwrap();
    assert!(ctx.db.get_todo(todo.id).unwrap().done);
    set_done_impl(&ctx.db, Some("lily"), todo.id, false).unwrap();
    assert!(!ctx.db.get_todo(todo.id).unwrap().done);

    remove_impl(&ctx.db, Some("lily"), todo.id).unwrap();
    assert!(ctx.db.list_todos(issue.id).unwrap().is_empty());
}

#[parameterized(
    creator = { "daqing", Denial::NotAssignee },
    manager = { "pm", Denial::NotAssignee },
)]
fn test_non_assignees_denied(actor: &str, reason: Denial) {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let dev = ctx.user("lily", Role::Developer);
    ctx.user("pm", Role::ProjectManager);
    let issue = ctx.issue(&creator, "Login fails");
    ctx.assign(&issue, &dev);

    let err = add_impl(&ctx.db, Some(actor), issue.id, "Sneaky").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tk_core::Error::PermissionDenied {
            permission: Permission::ManageTodo,
            reason: r,
        }) if r == reason
    ));
}

#[test]
fn test_unassigned_issue_has_no_todo_manager() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");

    let err = add_impl(&ctx.db, Some("daqing"), issue.id, "Nobody").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tk_core::Error::PermissionDenied {
            reason: Denial::MissingAssignment,
            ..
        })
    ));
}

/// Creator A, assignee B: once closed, B loses todos and A loses the issue.
#[test]
fn test_closing_revokes_management() {
    let ctx = TestContext::new();
    let a = ctx.user("daqing", Role::Developer);
    let b = ctx.user("lily", Role::Developer);
    let issue = ctx.issue(&a, "Login fails");
    ctx.assign(&issue, &b);
    add_impl(&ctx.db, Some("lily"), issue.id, "Reproduce").unwrap();
    let todo = ctx.db.list_todos(issue.id).unwrap().remove(0);

    for event in [Event::WorkOn, Event::MarkFinished, Event::Close] {
        crate::commands::fire::run_impl(&ctx.db, Some("lily"), issue.id, event).unwrap();
    }

    let err = set_done_impl(&ctx.db, Some("lily"), todo.id, true).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tk_core::Error::PermissionDenied {
            reason: Denial::IssueClosed,
            ..
        })
    ));
    assert!(
        crate::commands::edit::run_impl(&ctx.db, Some("daqing"), issue.id, Some("x"), None)
            .is_err()
    );
}

#[test]
fn test_listing() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");
    ctx.db.add_todo(issue.id, "Reproduce").unwrap();

    list_impl(&ctx.db, issue.id, OutputFormat::Text).unwrap();
    list_impl(&ctx.db, issue.id, OutputFormat::Json).unwrap();
    assert!(matches!(
        set_done_impl(&ctx.db, Some("daqing"), 404, true),
        Err(Error::Core(tk_core::Error::TodoNotFound(404)))
    ));
}
