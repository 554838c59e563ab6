// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::policy::authorize;
use tk_core::{Database, Permission};

use crate::error::{Error, Result};

use super::{open_db, resolve_actor};

pub fn run(actor: Option<&str>, id: i64, title: Option<&str>, content: Option<&str>) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, actor, id, title, content)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    actor: Option<&str>,
    id: i64,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        return Err(Error::NothingToEdit);
    }
    let actor = resolve_actor(db, actor)?;
    let issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::ManageIssue)?;

    let issue = db.update_issue(issue.id, title, content)?;
    println!("Updated issue {}: {}", issue.id, issue.title);
    Ok(())
}

pub fn delete(actor: Option<&str>, id: i64) -> Result<()> {
    let ctx = open_db()?;
    delete_impl(&ctx.db, actor, id)
}

pub(crate) fn delete_impl(db: &Database, actor: Option<&str>, id: i64) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::ManageIssue)?;

    db.delete_issue(issue.id)?;
    println!("Deleted issue {}", issue.id);
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
