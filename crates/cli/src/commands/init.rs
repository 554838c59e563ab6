// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use tk_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(locale: &str) -> Result<()> {
    let target_path = std::env::current_dir()?;
    run_impl(&target_path, locale)
}

/// Internal implementation that takes the target directory for testing.
pub(crate) fn run_impl(path: &Path, locale: &str) -> Result<()> {
    let work_dir = init_work_dir(path, locale)?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;

    tracing::info!(path = %work_dir.display(), locale, "initialized");
    println!("Initialized tk at {}", work_dir.display());
    println!("Locale: {}", config.locale);
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
