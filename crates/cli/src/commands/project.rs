// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::Database;

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_db, print_json};

pub fn add(name: &str) -> Result<()> {
    let ctx = open_db()?;
    add_impl(&ctx.db, name)
}

pub(crate) fn add_impl(db: &Database, name: &str) -> Result<()> {
    let project = db.create_project(name)?;
    println!("Created project {}: {}", project.id, project.name);
    Ok(())
}

pub fn list(format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    list_impl(&ctx.db, format)
}

pub(crate) fn list_impl(db: &Database, format: OutputFormat) -> Result<()> {
    let projects = db.list_projects()?;
    match format {
        OutputFormat::Text => {
            for project in &projects {
                println!("{}: {}", project.id, project.name);
            }
        }
        OutputFormat::Json => print_json(&projects)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
