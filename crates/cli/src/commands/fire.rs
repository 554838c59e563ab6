// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::policy::authorize;
use tk_core::workflow::path;
use tk_core::{Database, Event, Labels, Permission, State, Workflow};

use crate::cli::OutputFormat;
use crate::display::{format_event, format_transition};
use crate::error::{Error, Result};

use super::show::{event_views, EventView};
use super::{open_db, print_json, resolve_actor};

pub fn run(actor: Option<&str>, id: i64, event: Event) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, actor, id, event)
}

/// Authorize against a fresh snapshot, then fire through the engine.
pub(crate) fn run_impl(db: &Database, actor: Option<&str>, id: i64, event: Event) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let mut issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::ChangeState)?;

    let transition = Workflow::new(db).fire(&mut issue, &actor, event)?;
    println!("{}", format_transition(&transition));
    Ok(())
}

pub fn events(id: i64, to: Option<State>, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    match to {
        Some(target) => route_impl(&ctx.db, &ctx.labels, id, target, format),
        None => events_impl(&ctx.db, &ctx.labels, id, format),
    }
}

pub(crate) fn events_impl(
    db: &Database,
    labels: &Labels,
    id: i64,
    format: OutputFormat,
) -> Result<()> {
    let issue = db.get_issue(id)?;
    match format {
        OutputFormat::Text => {
            for event in issue.events() {
                if let Some(line) = format_event(issue.state, event, labels) {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Json => print_json(&event_views(&issue, labels))?,
    }
    Ok(())
}

/// Print the shortest event sequence taking the issue to `target`.
pub(crate) fn route_impl(
    db: &Database,
    labels: &Labels,
    id: i64,
    target: State,
    format: OutputFormat,
) -> Result<()> {
    let issue = db.get_issue(id)?;
    let events = path(issue.state, target).ok_or(Error::Unreachable {
        from: issue.state,
        to: target,
    })?;

    let mut state = issue.state;
    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        let to = state.transition(event).ok_or(Error::Unreachable {
            from: state,
            to: target,
        })?;
        steps.push((
            state,
            EventView {
                event,
                label: event.label(labels).to_string(),
                to,
            },
        ));
        state = to;
    }

    match format {
        OutputFormat::Text => {
            if steps.is_empty() {
                println!("{}: already {}", issue.id, target.label(labels));
            }
            for (from, step) in &steps {
                if let Some(line) = format_event(*from, step.event, labels) {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Json => {
            let views: Vec<EventView> = steps.into_iter().map(|(_, view)| view).collect();
            print_json(&views)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "fire_tests.rs"]
mod tests;
