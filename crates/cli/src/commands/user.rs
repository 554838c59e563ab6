// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::{Database, NewUser, Role, User};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_db, print_json};

pub fn add(name: &str, email: &str, role: &str) -> Result<()> {
    let ctx = open_db()?;
    add_impl(&ctx.db, name, email, role)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(db: &Database, name: &str, email: &str, role: &str) -> Result<()> {
    // Roles typed by a person are parsed strictly
    let role: Role = role.parse()?;
    let user = db.create_user(&NewUser::new(name, email).with_role(role))?;
    println!("Created user {}", format_user(&user));
    Ok(())
}

pub fn list(format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    list_impl(&ctx.db, format)
}

pub(crate) fn list_impl(db: &Database, format: OutputFormat) -> Result<()> {
    let users = db.list_users()?;
    match format {
        OutputFormat::Text => {
            for user in &users {
                println!("{}", format_user(user));
            }
        }
        OutputFormat::Json => print_json(&users)?,
    }
    Ok(())
}

fn format_user(user: &User) -> String {
    format!("{}: {} <{}> ({})", user.id, user.name, user.email, user.role)
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
