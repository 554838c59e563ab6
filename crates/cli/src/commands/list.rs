// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::{Database, IssueQuery, Labels, State, StateFilter};

use crate::cli::OutputFormat;
use crate::display::format_issue_line;
use crate::error::Result;

use super::{open_db, print_json};

/// Filters for `tk list`, as given on the command line.
#[derive(Debug, Default)]
pub struct ListFilter<'a> {
    pub project: Option<&'a str>,
    pub state: Option<State>,
    pub except: Option<State>,
    pub assignee: Option<&'a str>,
}

pub fn run(filter: &ListFilter<'_>, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, &ctx.labels, filter, format)
}

/// Internal implementation that accepts db and labels for testing.
pub(crate) fn run_impl(
    db: &Database,
    labels: &Labels,
    filter: &ListFilter<'_>,
    format: OutputFormat,
) -> Result<()> {
    let query = build_query(db, filter)?;
    let issues = db.list_issues(&query)?;

    match format {
        OutputFormat::Text => {
            for issue in &issues {
                println!("{}", format_issue_line(issue, labels));
            }
        }
        OutputFormat::Json => print_json(&issues)?,
    }
    Ok(())
}

/// Resolve names to ids and fold the state options into one filter.
pub(crate) fn build_query(db: &Database, filter: &ListFilter<'_>) -> Result<IssueQuery> {
    let state = match (filter.state, filter.except) {
        (Some(state), _) => StateFilter::Only(state),
        (None, Some(state)) => StateFilter::Except(state),
        (None, None) => StateFilter::Any,
    };
    let mut query = IssueQuery::default().with_state(state);

    if let Some(name) = filter.project {
        query = query.in_project(db.find_project(name)?.id);
    }
    if let Some(name) = filter.assignee {
        query = query.assigned_to(db.find_user(name)?.id);
    }
    Ok(query)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
