// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::{Database, NewIssue};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_db, print_json, resolve_actor};

pub fn run(
    actor: Option<&str>,
    project: &str,
    title: &str,
    content: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, actor, project, title, content, format)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    actor: Option<&str>,
    project: &str,
    title: &str,
    content: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let creator = resolve_actor(db, actor)?;
    let project = db.find_project(project)?;

    let mut new = NewIssue::new(project.id, creator.id, title);
    if let Some(content) = content {
        new = new.with_content(content);
    }
    let issue = db.create_issue(&new)?;

    match format {
        OutputFormat::Text => println!("Created issue {}: {}", issue.id, issue.title),
        OutputFormat::Json => print_json(&issue)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
