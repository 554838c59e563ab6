// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use tk_core::{
    Comment, Database, Event, Issue, Labels, Localizer, State, TodoItem, TransitionRecord,
};

use crate::cli::OutputFormat;
use crate::display::{format_event, format_state, format_time, format_todo};
use crate::error::Result;

use super::{name_of, open_db, print_json, user_names};

/// An event that can be fired from the issue's current state.
#[derive(Debug, Serialize)]
pub(crate) struct EventView {
    pub event: Event,
    pub label: String,
    pub to: State,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransitionView {
    #[serde(flatten)]
    pub record: TransitionRecord,
    pub actor: String,
}

/// Everything `show` renders about one issue.
#[derive(Debug, Serialize)]
pub(crate) struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    pub project: String,
    pub creator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub state_label: String,
    pub events: Vec<EventView>,
    pub todos: Vec<TodoItem>,
    pub comments: Vec<CommentView>,
    pub transitions: Vec<TransitionView>,
}

pub(crate) fn event_views(issue: &Issue, labels: &dyn Localizer) -> Vec<EventView> {
    issue
        .events()
        .into_iter()
        .filter_map(|event| {
            let to = issue.state.transition(event)?;
            Some(EventView {
                event,
                label: event.label(labels).to_string(),
                to,
            })
        })
        .collect()
}

pub(crate) fn comment_views(db: &Database, issue_id: i64) -> Result<Vec<CommentView>> {
    let names = user_names(db)?;
    Ok(db
        .list_comments(issue_id)?
        .into_iter()
        .map(|comment| CommentView {
            author: name_of(&names, comment.author_id),
            comment,
        })
        .collect())
}

pub(crate) fn transition_views(db: &Database, issue_id: i64) -> Result<Vec<TransitionView>> {
    let names = user_names(db)?;
    Ok(db
        .list_transitions(issue_id)?
        .into_iter()
        .map(|record| TransitionView {
            actor: name_of(&names, record.actor_id),
            record,
        })
        .collect())
}

pub(crate) fn load_details(db: &Database, labels: &Labels, id: i64) -> Result<IssueDetails> {
    let issue = db.get_issue(id)?;
    let names = user_names(db)?;
    let project = db.get_project(issue.project_id)?;

    Ok(IssueDetails {
        project: project.name,
        creator: name_of(&names, issue.creator_id),
        assignee: issue.assignee_id.map(|id| name_of(&names, id)),
        state_label: issue.state.label(labels).to_string(),
        events: event_views(&issue, labels),
        todos: db.list_todos(id)?,
        comments: comment_views(db, id)?,
        transitions: transition_views(db, id)?,
        issue,
    })
}

pub fn run(id: i64, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, &ctx.labels, id, format)
}

/// Internal implementation that accepts db and labels for testing.
pub(crate) fn run_impl(db: &Database, labels: &Labels, id: i64, format: OutputFormat) -> Result<()> {
    let details = load_details(db, labels, id)?;
    match format {
        OutputFormat::Text => print!("{}", format_details(&details, labels)),
        OutputFormat::Json => print_json(&details)?,
    }
    Ok(())
}

pub(crate) fn format_details(details: &IssueDetails, labels: &Labels) -> String {
    let issue = &details.issue;
    let mut out = String::new();

    out.push_str(&format!("#{} {}\n", issue.id, issue.title));
    out.push_str(&format!(
        "State:    {}\n",
        format_state(issue.state, labels)
    ));
    out.push_str(&format!("Project:  {}\n", details.project));
    out.push_str(&format!("Creator:  {}\n", details.creator));
    out.push_str(&format!(
        "Assignee: {}\n",
        details.assignee.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("Created:  {}\n", format_time(&issue.created_at)));
    out.push_str(&format!("Updated:  {}\n", format_time(&issue.updated_at)));

    out.push('\n');
    for line in issue.content.lines() {
        out.push_str(&format!("    {}\n", line));
    }

    out.push_str("\nEvents:\n");
    for view in &details.events {
        if let Some(line) = format_event(issue.state, view.event, labels) {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !details.todos.is_empty() {
        out.push_str("\nTodos:\n");
        for todo in &details.todos {
            out.push_str(&format!("  {}\n", format_todo(todo)));
        }
    }

    if !details.comments.is_empty() {
        out.push_str("\nComments:\n");
        for view in &details.comments {
            out.push_str(&format!(
                "  [{}] {} ({}): {}\n",
                view.comment.id,
                view.author,
                format_time(&view.comment.created_at),
                view.comment.content
            ));
        }
    }

    if !details.transitions.is_empty() {
        out.push_str("\nHistory:\n");
        for view in &details.transitions {
            let record = &view.record;
            out.push_str(&format!(
                "  {} {}: {} -> {} ({})\n",
                format_time(&record.created_at),
                view.actor,
                record.from,
                record.to,
                record.event
            ));
        }
    }

    out
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
