// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::policy::authorize;
use tk_core::{Database, Permission};

use crate::error::Result;

use super::{open_db, resolve_actor};

pub fn assign(actor: Option<&str>, id: i64, user: &str) -> Result<()> {
    let ctx = open_db()?;
    assign_impl(&ctx.db, actor, id, user)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn assign_impl(db: &Database, actor: Option<&str>, id: i64, user: &str) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::AssignIssue)?;

    let assignee = db.find_user(user)?;
    db.assign_issue(issue.id, assignee.id)?;
    println!("Assigned {} to {}", issue.id, assignee.name);
    Ok(())
}

pub fn unassign(actor: Option<&str>, id: i64) -> Result<()> {
    let ctx = open_db()?;
    unassign_impl(&ctx.db, actor, id)
}

pub(crate) fn unassign_impl(db: &Database, actor: Option<&str>, id: i64) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::AssignIssue)?;

    if db.unassign_issue(issue.id)? {
        println!("Unassigned {}", issue.id);
    } else {
        println!("{} was not assigned", issue.id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod tests;
