// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::policy::authorize;
use tk_core::{Database, Permission};

use crate::cli::OutputFormat;
use crate::display::format_time;
use crate::error::Result;

use super::show::comment_views;
use super::{open_db, print_json, resolve_actor};

pub fn add(actor: Option<&str>, id: i64, content: &str) -> Result<()> {
    let ctx = open_db()?;
    add_impl(&ctx.db, actor, id, content)
}

/// Any registered user may comment.
pub(crate) fn add_impl(db: &Database, actor: Option<&str>, id: i64, content: &str) -> Result<()> {
    let author = resolve_actor(db, actor)?;
    let comment = db.add_comment(id, author.id, content)?;
    println!("Added comment {} to issue {}", comment.id, comment.issue_id);
    Ok(())
}

pub fn edit(actor: Option<&str>, comment_id: i64, content: &str) -> Result<()> {
    let ctx = open_db()?;
    edit_impl(&ctx.db, actor, comment_id, content)
}

pub(crate) fn edit_impl(
    db: &Database,
    actor: Option<&str>,
    comment_id: i64,
    content: &str,
) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let comment = db.get_comment(comment_id)?;
    let issue = db.get_issue(comment.issue_id)?;
    authorize(&actor, &issue, Permission::ManageComment)?;

    db.update_comment(comment.id, content)?;
    println!("Updated comment {}", comment.id);
    Ok(())
}

pub fn remove(actor: Option<&str>, comment_id: i64) -> Result<()> {
    let ctx = open_db()?;
    remove_impl(&ctx.db, actor, comment_id)
}

pub(crate) fn remove_impl(db: &Database, actor: Option<&str>, comment_id: i64) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let comment = db.get_comment(comment_id)?;
    let issue = db.get_issue(comment.issue_id)?;
    authorize(&actor, &issue, Permission::ManageComment)?;

    db.delete_comment(comment.id)?;
    println!("Removed comment {}", comment.id);
    Ok(())
}

pub fn list(id: i64, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    list_impl(&ctx.db, id, format)
}

pub(crate) fn list_impl(db: &Database, id: i64, format: OutputFormat) -> Result<()> {
    db.get_issue(id)?;
    let comments = comment_views(db, id)?;
    match format {
        OutputFormat::Text => {
            for view in &comments {
                println!(
                    "[{}] {} ({}): {}",
                    view.comment.id,
                    view.author,
                    format_time(&view.comment.created_at),
                    view.comment.content
                );
            }
        }
        OutputFormat::Json => print_json(&comments)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
