// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use tk_core::{Event, Issue, Localizer, State, TodoItem, Transition};

/// Timestamp format used in text output.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}

/// One-line issue summary: `3: [Working on] Login fails`.
pub fn format_issue_line(issue: &Issue, labels: &dyn Localizer) -> String {
    format!(
        "{}: [{}] {}",
        issue.id,
        issue.state.label(labels),
        issue.title
    )
}

/// State with its label when the two differ: `Working on (working_on)`.
pub fn format_state(state: State, labels: &dyn Localizer) -> String {
    let label = state.label(labels);
    if label == state.as_str() {
        label.to_string()
    } else {
        format!("{} ({})", label, state)
    }
}

/// A fired transition: `3: open -> working_on (work_on)`.
pub fn format_transition(transition: &Transition) -> String {
    format!(
        "{}: {} -> {} ({})",
        transition.issue_id, transition.from, transition.to, transition.event
    )
}

/// An available event and where it leads: `work_on  Start working -> working_on`.
///
/// Returns `None` when the event is not defined for `from`.
pub fn format_event(from: State, event: Event, labels: &dyn Localizer) -> Option<String> {
    let to = from.transition(event)?;
    Some(format!(
        "{:<14} {} -> {}",
        event.as_str(),
        event.label(labels),
        to
    ))
}

/// Todo item with a checkbox: `[x] 4: Write test`.
pub fn format_todo(todo: &TodoItem) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("[{}] {}: {}", mark, todo.id, todo.content)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
