// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod assign;
pub mod comment;
pub mod edit;
pub mod fire;
pub mod init;
pub mod list;
pub mod log;
pub mod new;
pub mod project;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod todo;
pub mod user;

use std::collections::HashMap;

use serde::Serialize;
use tk_core::{Database, Labels, User};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// What every command needs once the project is located.
pub struct Context {
    pub db: Database,
    pub labels: Labels,
}

/// Helper to open the database and label table from the current context.
pub fn open_db() -> Result<Context> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let labels = config.labels()?;
    let db_path = get_db_path(&work_dir, &config);
    let db = Database::open(&db_path)?;
    tracing::debug!(db = %db_path.display(), locale = %config.locale, "opened project");
    Ok(Context { db, labels })
}

/// Look up the acting user named by `--as` or `TK_USER`.
pub(crate) fn resolve_actor(db: &Database, actor: Option<&str>) -> Result<User> {
    let name = actor.ok_or(Error::ActorRequired)?;
    Ok(db.find_user(name)?)
}

/// User id to name, for rendering authors and actors.
pub(crate) fn user_names(db: &Database) -> Result<HashMap<i64, String>> {
    Ok(db
        .list_users()?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect())
}

pub(crate) fn name_of(names: &HashMap<i64, String>, id: i64) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("#{id}"))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
