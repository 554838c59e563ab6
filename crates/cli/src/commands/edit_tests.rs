// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use tk_core::{Denial, Event, Role, DEFAULT_CONTENT};

#[test]
fn test_creator_edits_title_and_content() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");

    run_impl(&ctx.db, Some("daqing"), issue.id, Some("Login fails on Safari"), None).unwrap();
    run_impl(&ctx.db, Some("daqing"), issue.id, None, Some("Only on 17.2")).unwrap();

    let issue = ctx.reload(&issue);
    assert_eq!(issue.title, "Login fails on Safari");
    assert_eq!(issue.content, "Only on 17.2");

    run_impl(&ctx.db, Some("daqing"), issue.id, None, Some("  ")).unwrap();
    assert_eq!(ctx.reload(&issue).content, DEFAULT_CONTENT);
}

#[test]
fn test_edit_without_changes() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");
    assert!(matches!(
        run_impl(&ctx.db, Some("daqing"), issue.id, None, None),
        Err(Error::NothingToEdit)
    ));
}

#[test]
fn test_manager_cannot_edit_someone_elses_issue() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    ctx.user("pm", Role::ProjectManager);
    let issue = ctx.issue(&creator, "Login fails");

    let err = run_impl(&ctx.db, Some("pm"), issue.id, Some("Hijacked"), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tk_core::Error::PermissionDenied {
            permission: Permission::ManageIssue,
            reason: Denial::NotCreator,
        })
    ));
    assert_eq!(ctx.reload(&issue).title, "Login fails");
}

#[test]
fn test_closed_issue_is_frozen_for_creator() {
    let ctx = TestContext::new();
    let creator = ctx.user("daqing", Role::Developer);
    let issue = ctx.issue(&creator, "Login fails");
    ctx.fire(&issue, &creator, &[Event::Close]);

    let err = run_impl(&ctx.db, Some("daqing"), issue.id, Some("Retitled"), None).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(tk_core::Error::PermissionDenied {
            reason: Denial::IssueClosed,
            ..
        })
    ));
    assert!(delete_impl(&ctx.db, Some("daqing"), issue.id).is_err());

    // Reopening lifts the freeze
    ctx.fire(&issue, &creator, &[Event::Reopen]);
    delete_impl(&ctx.db, Some("daqing"), issue.id).unwrap();
    assert!(ctx.db.get_issue(issue.id).is_err());
}
