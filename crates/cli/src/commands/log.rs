// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tk_core::Database;

use crate::cli::OutputFormat;
use crate::display::format_time;
use crate::error::Result;

use super::show::transition_views;
use super::{open_db, print_json};

pub fn run(id: i64, format: OutputFormat) -> Result<()> {
    let ctx = open_db()?;
    run_impl(&ctx.db, id, format)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, id: i64, format: OutputFormat) -> Result<()> {
    db.get_issue(id)?;
    let history = transition_views(db, id)?;
    match format {
        OutputFormat::Text => {
            for view in &history {
                let record = &view.record;
                println!(
                    "{} {}: {} -> {} ({})",
                    format_time(&record.created_at),
                    view.actor,
                    record.from,
                    record.to,
                    record.event
                );
            }
        }
        OutputFormat::Json => print_json(&history)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
