// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::DEFAULT_CONTENT;
use crate::validate::MAX_CONTENT_LENGTH;
use crate::workflow::{Event, State, Workflow};
use tempfile::TempDir;

struct Fixture {
    db: Database,
    creator: User,
    dev: User,
    project: Project,
}

fn fixture() -> Fixture {
    let db = Database::open_in_memory().unwrap();
    let creator = db
        .create_user(&NewUser::new("daqing", "daqing@example.com"))
        .unwrap();
    let dev = db
        .create_user(&NewUser::new("two", "two@example.com"))
        .unwrap();
    let project = db.create_project("tracker").unwrap();
    Fixture {
        db,
        creator,
        dev,
        project,
    }
}

impl Fixture {
    fn issue(&self, title: &str) -> Issue {
        self.db
            .create_issue(&NewIssue::new(self.project.id, self.creator.id, title))
            .unwrap()
    }
}

// Users

#[test]
fn create_and_find_user() {
    let f = fixture();
    let pm = f
        .db
        .create_user(&NewUser::new("boss", "boss@example.com").with_role(Role::ProjectManager))
        .unwrap();

    assert_eq!(f.db.get_user(pm.id).unwrap(), pm);
    assert_eq!(f.db.find_user("boss").unwrap().role, Role::ProjectManager);
    assert_eq!(f.db.list_users().unwrap().len(), 3);
}

#[test]
fn emails_must_be_unique() {
    let f = fixture();
    let err = f
        .db
        .create_user(&NewUser::new("another", "daqing@example.com"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateEmail(_)));
}

#[test]
fn names_must_be_unique() {
    let f = fixture();
    let err = f
        .db
        .create_user(&NewUser::new("daqing", "other@example.com"))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
}

#[test]
fn user_requires_valid_email() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.create_user(&NewUser::new("daqing", "abc")),
        Err(Error::InvalidEmail(_))
    ));
    assert!(matches!(
        db.create_user(&NewUser::new("", "a@example.com")),
        Err(Error::FieldEmpty { field: "Name" })
    ));
}

#[test]
fn unknown_stored_role_reads_as_developer() {
    let f = fixture();
    f.db.conn
        .execute(
            "UPDATE users SET role = 'projectmanager' WHERE id = ?1",
            params![f.dev.id],
        )
        .unwrap();
    assert_eq!(f.db.get_user(f.dev.id).unwrap().role, Role::Developer);
}

#[test]
fn missing_user_is_not_found() {
    let f = fixture();
    assert!(matches!(f.db.get_user(999), Err(Error::UserNotFound(_))));
    assert!(matches!(f.db.find_user("nobody"), Err(Error::UserNotFound(_))));
}

// Projects

#[test]
fn create_and_find_project() {
    let f = fixture();
    assert_eq!(f.db.find_project("tracker").unwrap(), f.project);
    assert!(matches!(
        f.db.create_project("tracker"),
        Err(Error::DuplicateName(_))
    ));
    assert_eq!(f.db.list_projects().unwrap().len(), 1);
}

// Issues

#[test]
fn create_and_get_issue() {
    let f = fixture();
    let issue = f.issue("Login page crashes");

    let retrieved = f.db.get_issue(issue.id).unwrap();
    assert_eq!(retrieved, issue);
    assert_eq!(retrieved.state, State::Open);
    assert_eq!(retrieved.content, DEFAULT_CONTENT);
    assert!(retrieved.assignee_id.is_none());
}

#[test]
fn create_issue_keeps_given_content() {
    let f = fixture();
    let issue = f
        .db
        .create_issue(&NewIssue::new(f.project.id, f.creator.id, "Crash").with_content("Stack trace"))
        .unwrap();
    assert_eq!(issue.content, "Stack trace");
}

#[test]
fn issue_content_is_trimmed_alike_on_create_and_edit() {
    let f = fixture();
    let created = f
        .db
        .create_issue(&NewIssue::new(f.project.id, f.creator.id, "Crash").with_content("  body  "))
        .unwrap();
    assert_eq!(created.content, "body");

    let edited = f.db.update_issue(created.id, None, Some("  body  ")).unwrap();
    assert_eq!(edited.content, created.content);
    assert_eq!(f.db.get_issue(created.id).unwrap().content, "body");
}

#[test]
fn over_long_issue_content_rejected() {
    let f = fixture();
    let huge = "x".repeat(MAX_CONTENT_LENGTH + 1);

    let err = f
        .db
        .create_issue(&NewIssue::new(f.project.id, f.creator.id, "Crash").with_content(huge.clone()))
        .unwrap_err();
    assert!(matches!(err, Error::FieldTooLong { field: "Content", .. }));
    assert!(f.db.list_issues(&IssueQuery::default()).unwrap().is_empty());

    let issue = f.issue("Crash");
    assert!(matches!(
        f.db.update_issue(issue.id, None, Some(&huge)),
        Err(Error::FieldTooLong { .. })
    ));
    assert_eq!(f.db.get_issue(issue.id).unwrap().content, DEFAULT_CONTENT);
    assert!(matches!(
        f.db.add_comment(issue.id, f.creator.id, &huge),
        Err(Error::FieldTooLong { .. })
    ));
}

#[test]
fn create_issue_validates_references() {
    let f = fixture();
    assert!(matches!(
        f.db.create_issue(&NewIssue::new(999, f.creator.id, "x")),
        Err(Error::ProjectNotFound(_))
    ));
    assert!(matches!(
        f.db.create_issue(&NewIssue::new(f.project.id, 999, "x")),
        Err(Error::UserNotFound(_))
    ));
    assert!(matches!(
        f.db.create_issue(&NewIssue::new(f.project.id, f.creator.id, "  ")),
        Err(Error::FieldEmpty { field: "Title" })
    ));
}

#[test]
fn get_missing_issue() {
    let f = fixture();
    assert!(matches!(f.db.get_issue(42), Err(Error::IssueNotFound(42))));
}

#[test]
fn update_issue_title_and_content() {
    let f = fixture();
    let issue = f.issue("Old title");

    let updated = f
        .db
        .update_issue(issue.id, Some("New title"), Some("Details"))
        .unwrap();
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "Details");

    let cleared = f.db.update_issue(issue.id, None, Some("")).unwrap();
    assert_eq!(cleared.title, "New title");
    assert_eq!(cleared.content, DEFAULT_CONTENT);
    assert_eq!(f.db.get_issue(issue.id).unwrap().content, DEFAULT_CONTENT);
}

#[test]
fn delete_issue_removes_dependents() {
    let f = fixture();
    let issue = f.issue("Doomed");
    f.db.assign_issue(issue.id, f.dev.id).unwrap();
    f.db.add_comment(issue.id, f.dev.id, "hello").unwrap();
    f.db.add_todo(issue.id, "step one").unwrap();
    Workflow::new(&f.db)
        .fire_by_id(issue.id, &f.dev, Event::WorkOn)
        .unwrap();

    f.db.delete_issue(issue.id).unwrap();

    assert!(matches!(
        f.db.get_issue(issue.id),
        Err(Error::IssueNotFound(_))
    ));
    assert!(f.db.list_comments(issue.id).unwrap().is_empty());
    assert!(f.db.list_todos(issue.id).unwrap().is_empty());
    assert!(f.db.list_transitions(issue.id).unwrap().is_empty());
    assert!(matches!(
        f.db.delete_issue(issue.id),
        Err(Error::IssueNotFound(_))
    ));
}

// State queries

#[test]
fn list_issues_by_state_filter() {
    let f = fixture();
    let a = f.issue("A");
    let b = f.issue("B");
    let c = f.issue("C");
    let mut b_issue = f.db.get_issue(b.id).unwrap();
    f.db.assign_issue(b.id, f.dev.id).unwrap();
    b_issue.assignee_id = Some(f.dev.id);
    Workflow::new(&f.db)
        .fire(&mut b_issue, &f.dev, Event::WorkOn)
        .unwrap();

    let ids = |filter: StateFilter| -> Vec<i64> {
        let issues = f
            .db
            .list_issues(&IssueQuery::default().with_state(filter))
            .unwrap();
        assert!(issues.iter().all(|i| filter.matches(i.state)));
        issues.iter().map(|i| i.id).collect()
    };

    assert_eq!(ids(StateFilter::Any), vec![a.id, b.id, c.id]);
    assert_eq!(ids(StateFilter::Only(State::Open)), vec![a.id, c.id]);
    assert_eq!(ids(StateFilter::Only(State::WorkingOn)), vec![b.id]);
    assert_eq!(ids(StateFilter::Except(State::Open)), vec![b.id]);
    assert!(ids(StateFilter::Only(State::Closed)).is_empty());
}

#[test]
fn list_issues_by_project_and_assignee() {
    let f = fixture();
    let other = f.db.create_project("other").unwrap();
    let a = f.issue("A");
    let b = f
        .db
        .create_issue(&NewIssue::new(other.id, f.creator.id, "B"))
        .unwrap();
    f.db.assign_issue(b.id, f.dev.id).unwrap();

    let in_tracker = f
        .db
        .list_issues(&IssueQuery::default().in_project(f.project.id))
        .unwrap();
    assert_eq!(in_tracker.len(), 1);
    assert_eq!(in_tracker[0].id, a.id);

    let mine = f
        .db
        .list_issues(&IssueQuery::default().assigned_to(f.dev.id))
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, b.id);
}

// Assignment

#[test]
fn assign_replace_and_clear() {
    let f = fixture();
    let issue = f.issue("Assign me");

    f.db.assign_issue(issue.id, f.dev.id).unwrap();
    assert_eq!(f.db.get_issue(issue.id).unwrap().assignee_id, Some(f.dev.id));

    f.db.assign_issue(issue.id, f.creator.id).unwrap();
    assert_eq!(
        f.db.get_issue(issue.id).unwrap().assignee_id,
        Some(f.creator.id)
    );

    assert!(f.db.unassign_issue(issue.id).unwrap());
    assert!(f.db.get_issue(issue.id).unwrap().assignee_id.is_none());
    assert!(!f.db.unassign_issue(issue.id).unwrap());
}

#[test]
fn assign_requires_existing_user() {
    let f = fixture();
    let issue = f.issue("Assign me");
    assert!(matches!(
        f.db.assign_issue(issue.id, 999),
        Err(Error::UserNotFound(_))
    ));
}

// Comments and todo items

#[test]
fn comment_crud() {
    let f = fixture();
    let issue = f.issue("Talk about it");

    let comment = f.db.add_comment(issue.id, f.dev.id, "needs a fix").unwrap();
    assert_eq!(f.db.get_comment(comment.id).unwrap(), comment);

    let edited = f.db.update_comment(comment.id, "fixed upstream").unwrap();
    assert_eq!(edited.content, "fixed upstream");
    assert_eq!(f.db.list_comments(issue.id).unwrap(), vec![edited]);

    f.db.delete_comment(comment.id).unwrap();
    assert!(matches!(
        f.db.get_comment(comment.id),
        Err(Error::CommentNotFound(_))
    ));
    assert!(matches!(
        f.db.delete_comment(comment.id),
        Err(Error::CommentNotFound(_))
    ));
}

#[test]
fn todo_crud() {
    let f = fixture();
    let issue = f.issue("Do things");

    let first = f.db.add_todo(issue.id, "reproduce").unwrap();
    let second = f.db.add_todo(issue.id, "fix").unwrap();
    assert!(!first.done);

    let ticked = f.db.set_todo_done(first.id, true).unwrap();
    assert!(ticked.done);
    assert!(!f.db.set_todo_done(first.id, false).unwrap().done);

    f.db.delete_todo(second.id).unwrap();
    let remaining = f.db.list_todos(issue.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first.id);

    assert!(matches!(
        f.db.set_todo_done(second.id, true),
        Err(Error::TodoNotFound(_))
    ));
    assert!(matches!(f.db.add_todo(issue.id, ""), Err(Error::FieldEmpty { .. })));
}

// Store

#[test]
fn write_state_logs_transition() {
    let f = fixture();
    let issue = f.issue("Move me");
    let transition = issue.plan(Event::Close).unwrap();

    f.db.write_state(&transition, f.creator.id).unwrap();

    assert_eq!(f.db.load_issue(issue.id).unwrap().state, State::Closed);
    assert!(f.db.load_issue(issue.id).unwrap().state.is_settled());
    let log = f.db.list_transitions(issue.id).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].actor_id, f.creator.id);
    assert_eq!(log[0].event, Event::Close);
    assert_eq!((log[0].from, log[0].to), (State::Open, State::Closed));
}

#[test]
fn fired_issue_matches_stored_timestamp() {
    let f = fixture();
    let mut issue = f.issue("Stamp");
    f.db.assign_issue(issue.id, f.dev.id).unwrap();
    issue.assignee_id = Some(f.dev.id);

    Workflow::new(&f.db)
        .fire(&mut issue, &f.dev, Event::WorkOn)
        .unwrap();

    assert_eq!(f.db.get_issue(issue.id).unwrap().updated_at, issue.updated_at);
    let log = f.db.list_transitions(issue.id).unwrap();
    assert_eq!(log[0].created_at, issue.updated_at);
}

#[test]
fn write_state_rejects_stale_expectation() {
    let f = fixture();
    let issue = f.issue("Race");
    let close = issue.plan(Event::Close).unwrap();
    let ignore = issue.plan(Event::Ignore).unwrap();

    f.db.write_state(&close, f.creator.id).unwrap();
    let err = f.db.write_state(&ignore, f.creator.id).unwrap_err();

    assert!(matches!(
        err,
        Error::StaleState {
            expected: State::Open,
            actual: State::Closed,
            ..
        }
    ));
    assert_eq!(f.db.get_issue(issue.id).unwrap().state, State::Closed);
    assert_eq!(f.db.list_transitions(issue.id).unwrap().len(), 1);
}

#[test]
fn write_state_on_missing_issue() {
    let f = fixture();
    let mut ghost = f.issue("Ghost");
    ghost.id = 999;
    let transition = ghost.plan(Event::Close).unwrap();
    assert!(matches!(
        f.db.write_state(&transition, f.creator.id),
        Err(Error::IssueNotFound(999))
    ));
}

#[test]
fn concurrent_connections_serialize_through_state_guard() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("issues.db");

    let first = Database::open(&path).unwrap();
    let user = first
        .create_user(&NewUser::new("daqing", "daqing@example.com"))
        .unwrap();
    let project = first.create_project("tracker").unwrap();
    let issue = first
        .create_issue(&NewIssue::new(project.id, user.id, "Shared"))
        .unwrap();

    let second = Database::open(&path).unwrap();
    let mut seen_by_first = first.get_issue(issue.id).unwrap();
    let mut seen_by_second = second.get_issue(issue.id).unwrap();

    Workflow::new(&first)
        .fire(&mut seen_by_first, &user, Event::MarkInvalid)
        .unwrap();
    let err = Workflow::new(&second)
        .fire(&mut seen_by_second, &user, Event::Ignore)
        .unwrap_err();

    assert!(matches!(err, Error::StaleState { .. }));
    assert_eq!(seen_by_second.state, State::Open);
    assert_eq!(second.get_issue(issue.id).unwrap().state, State::Invalid);
}
