// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::policy::authorize;
use tk_core::{Database, Issue, Permission, TodoItem};

use crate::cli::OutputFormat;
use crate::display::format_todo;
use crate::error::Result;

use super::{open_db, print_json, resolve_actor};

pub fn add(actor: Option<&str>, id: i64, content: &str) -> Result<()> {
    let ctx = open_db()?;
    add_impl(&ctx.db, actor, id, content)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(db: &Database, actor: Option<&str>, id: i64, content: &str) -> Result<()> {
    let actor = resolve_actor(db, actor)?;
    let issue = db.get_issue(id)?;
    authorize(&actor, &issue, Permission::ManageTodo)?;

    let todo = db.add_todo(issue.id, content)?;
    println!("Added todo {} to issue {}", todo.id, issue.id);
    Ok(())
}

pub fn set_done(actor: Option<&str>, todo_id: i64, done: bool) -> Result<()> {
    let ctx = open_db()?;
    set_done_impl(&ctx.db, actor, todo_id, done)
}

pub(crate) fn set_done_impl(
    db: &Database,
    actor: Option<&str>,
    todo_id: i64,
    done: bool,
) -> Result<()> {
    let (_, todo) = authorized_todo(db, actor, todo_id)?;
    let todo = db.set_todo_done(todo.id, done)?;
    println!("{}", format_todo(&todo));
    Ok(())
}

pub fn remove(actor: Option<&str>, todo_id: i64) -> Result<()> {
    let ctx = open_db()?;
    remove_impl(&ctx.db, actor, todo_id)
}

pub(crate) fn remove_impl(db: &Database, actor: Option<&str>, todo_id: i64) -> Result<()> {
    let (issue, todo) = authorized_todo(db, actor, todo_id)?;
    db.delete_todo(todo.id)?;
    println!("Removed todo {} from issue {}", todo.id, issue.id);
    Ok(())
}

pub fn list(id: i64, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    list_impl(&ctx.db, id, format)
}

pub(crate) fn list_impl(db: &Database, id: i64, format: OutputFormat) -> Result<()> {
    db.get_issue(id)?;
    let todos = db.list_todos(id)?;
    match format {
        OutputFormat::Text => {
            for todo in &todos {
                println!("{}", format_todo(todo));
            }
        }
        OutputFormat::Json => print_json(&todos)?,
    }
    Ok(())
}

/// Load a todo item and check the actor may manage its issue.
fn authorized_todo(db: &Database, actor: Option<&str>, todo_id: i64) -> Result<(Issue, TodoItem)> {
    let actor = resolve_actor(db, actor)?;
    let todo = db.get_todo(todo_id)?;
    let issue = db.get_issue(todo.issue_id)?;
    authorize(&actor, &issue, Permission::ManageTodo)?;
    Ok((issue, todo))
}

#[cfg(test)]
#[path = "todo_tests.rs"]
mod tests;
