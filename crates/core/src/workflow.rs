// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue lifecycle state machine.
//!
//! The whole workflow is the [`TRANSITIONS`] table: every legal move is a
//! `(state, event, target)` row and anything not listed is rejected with
//! [`Error::InvalidTransition`]. [`Workflow`] binds the table to an
//! [`IssueStore`] so that a successful fire is persisted before the
//! in-memory issue changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::labels::{LabelKind, Localizer};
use crate::store::IssueStore;
use crate::user::User;

/// Lifecycle stage of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Freshly reported. Initial state for new issues.
    Open,
    /// Someone is actively working on it.
    WorkingOn,
    /// Work is done and waiting to be closed or continued.
    Finished,
    /// Not a real problem.
    Invalid,
    /// Resolved and closed.
    Closed,
    /// Deliberately left alone.
    Ignored,
    /// Brought back from a settled state.
    Reopened,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 7] = [
        State::Open,
        State::WorkingOn,
        State::Finished,
        State::Invalid,
        State::Closed,
        State::Ignored,
        State::Reopened,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::WorkingOn => "working_on",
            State::Finished => "finished",
            State::Invalid => "invalid",
            State::Closed => "closed",
            State::Ignored => "ignored",
            State::Reopened => "reopened",
        }
    }

    /// Target state reached by firing `event` from here, if the table allows it.
    pub fn transition(&self, event: Event) -> Option<State> {
        TRANSITIONS
            .iter()
            .find(|(from, ev, _)| from == self && *ev == event)
            .map(|(_, _, to)| *to)
    }

    /// Events that may fire from this state, in table order.
    pub fn events(&self) -> Vec<Event> {
        TRANSITIONS
            .iter()
            .filter(|(from, _, _)| from == self)
            .map(|(_, event, _)| *event)
            .collect()
    }

    /// Settled states only move again through `reopen`.
    pub fn is_settled(&self) -> bool {
        matches!(self, State::Closed | State::Invalid | State::Ignored)
    }

    /// Display label for this state.
    pub fn label<'a>(&self, localizer: &'a dyn Localizer) -> &'a str {
        localizer.label_for(LabelKind::State, self.as_str())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(State::Open),
            "working_on" => Ok(State::WorkingOn),
            "finished" => Ok(State::Finished),
            "invalid" => Ok(State::Invalid),
            "closed" => Ok(State::Closed),
            "ignored" => Ok(State::Ignored),
            "reopened" => Ok(State::Reopened),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// Named trigger that moves an issue between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    WorkOn,
    MarkInvalid,
    Ignore,
    Close,
    MarkFinished,
    Continue,
    Reopen,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: [Event; 7] = [
        Event::WorkOn,
        Event::MarkInvalid,
        Event::Ignore,
        Event::Close,
        Event::MarkFinished,
        Event::Continue,
        Event::Reopen,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::WorkOn => "work_on",
            Event::MarkInvalid => "mark_invalid",
            Event::Ignore => "ignore",
            Event::Close => "close",
            Event::MarkFinished => "mark_finished",
            Event::Continue => "continue",
            Event::Reopen => "reopen",
        }
    }

    /// Display label for this event.
    pub fn label<'a>(&self, localizer: &'a dyn Localizer) -> &'a str {
        localizer.label_for(LabelKind::Event, self.as_str())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "work_on" => Ok(Event::WorkOn),
            "mark_invalid" => Ok(Event::MarkInvalid),
            "ignore" => Ok(Event::Ignore),
            "close" => Ok(Event::Close),
            "mark_finished" => Ok(Event::MarkFinished),
            "continue" => Ok(Event::Continue),
            "reopen" => Ok(Event::Reopen),
            _ => Err(Error::InvalidEvent(s.to_string())),
        }
    }
}

/// The complete transition table: `(from, event, to)`.
pub const TRANSITIONS: &[(State, Event, State)] = &[
    (State::Open, Event::WorkOn, State::WorkingOn),
    (State::Open, Event::MarkInvalid, State::Invalid),
    (State::Open, Event::Ignore, State::Ignored),
    (State::Open, Event::Close, State::Closed),
    (State::WorkingOn, Event::MarkFinished, State::Finished),
    (State::Finished, Event::Continue, State::WorkingOn),
    (State::Finished, Event::Close, State::Closed),
    (State::Invalid, Event::Reopen, State::Reopened),
    (State::Closed, Event::Reopen, State::Reopened),
    (State::Ignored, Event::Reopen, State::Reopened),
    (State::Reopened, Event::WorkOn, State::WorkingOn),
];

/// Check whether `event` may fire from `state`.
pub fn can_fire(state: State, event: Event) -> bool {
    state.transition(event).is_some()
}

/// Resolve the target of firing `event` from `state`.
///
/// # Errors
///
/// Returns [`Error::InvalidTransition`] if the table has no such row.
pub fn next_state(state: State, event: Event) -> Result<State> {
    state.transition(event).ok_or_else(|| Error::InvalidTransition {
        state,
        event,
        valid: format_events(&state.events()),
    })
}

/// Shortest sequence of events leading from `from` to `to`.
///
/// Returns an empty vector when the states are equal and `None` when `to`
/// cannot be reached.
pub fn path(from: State, to: State) -> Option<Vec<Event>> {
    let mut came_from: HashMap<State, (State, Event)> = HashMap::new();
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut events = Vec::new();
            let mut cursor = current;
            while let Some(&(prev, event)) = came_from.get(&cursor) {
                events.push(event);
                cursor = prev;
            }
            events.reverse();
            return Some(events);
        }
        for event in current.events() {
            if let Some(next) = current.transition(event) {
                if next != from && !came_from.contains_key(&next) {
                    came_from.insert(next, (current, event));
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

fn format_events(events: &[Event]) -> String {
    events
        .iter()
        .map(Event::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single move through the table, planned or applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub issue_id: i64,
    pub event: Event,
    pub from: State,
    pub to: State,
}

/// A persisted transition, as read back from the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Database-assigned identifier.
    pub id: i64,
    pub issue_id: i64,
    /// The user who fired the event.
    pub actor_id: i64,
    pub event: Event,
    pub from: State,
    pub to: State,
    pub created_at: DateTime<Utc>,
}

/// Workflow engine bound to a persistence collaborator.
///
/// The engine performs no locking. Concurrent fires on the same issue are
/// resolved by the store's conditional write: the loser gets
/// [`Error::StaleState`] and nothing changes in memory.
pub struct Workflow<'s, S: IssueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: IssueStore + ?Sized> Workflow<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Workflow { store }
    }

    /// Non-mutating query: could `event` fire on this issue right now?
    pub fn can_fire(&self, issue: &Issue, event: Event) -> bool {
        issue.can_fire(event)
    }

    /// Fire `event` on `issue` on behalf of `actor`.
    ///
    /// The new state is written to the store first; `issue` is only updated
    /// once the write succeeded.
    pub fn fire(&self, issue: &mut Issue, actor: &User, event: Event) -> Result<Transition> {
        let transition = issue.plan(event)?;
        let written_at = self.store.write_state(&transition, actor.id)?;

        issue.state = transition.to;
        issue.updated_at = written_at;

        tracing::info!(
            issue = issue.id,
            actor = %actor.name,
            event = %event,
            from = %transition.from,
            to = %transition.to,
            "transition fired"
        );
        Ok(transition)
    }

    /// Load an issue by id and fire `event` on it.
    pub fn fire_by_id(&self, id: i64, actor: &User, event: Event) -> Result<Issue> {
        let mut issue = self.store.load_issue(id)?;
        self.fire(&mut issue, actor, event)?;
        Ok(issue)
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
