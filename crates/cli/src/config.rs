// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.tk/config.toml` and includes:
//! - `locale`: Which built-in label table to display states and events with
//! - `workspace`: Optional path to store the database in a different location
//! - `[labels.state]` / `[labels.event]`: Per-identifier label overrides

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tk_core::{LabelKind, Labels};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".tk";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "issues.db";
pub const DEFAULT_LOCALE: &str = "en";

/// Project configuration stored in `.tk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale tag for the built-in labels (`en`, `zh-CN`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "LabelOverrides::is_empty")]
    pub labels: LabelOverrides,
}

/// Label overrides keyed by state or event identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub state: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub event: BTreeMap<String, String>,
}

impl LabelOverrides {
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.event.is_empty()
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Config {
    /// Creates a new config for the given locale.
    ///
    /// # Errors
    ///
    /// Returns [`tk_core::Error::UnknownLocale`] if no built-in table exists.
    pub fn new(locale: &str) -> Result<Self> {
        Labels::for_locale(locale)?;
        Ok(Config {
            locale: locale.to_string(),
            workspace: None,
            labels: LabelOverrides::default(),
        })
    }

    /// Loads configuration from the given `.tk/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.tk/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Builds the label table: the locale's built-in labels with the
    /// configured overrides applied on top.
    pub fn labels(&self) -> Result<Labels> {
        let labels = Labels::for_locale(&self.locale)?
            .with_overrides(LabelKind::State, self.labels.state.clone())?
            .with_overrides(LabelKind::Event, self.labels.event.clone())?;
        Ok(labels)
    }
}

/// Find the .tk directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Find the .tk directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(DB_FILE_NAME)
            } else {
                // Relative to the project root
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(DB_FILE_NAME)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .tk directory at the given path
pub fn init_work_dir(path: &Path, locale: &str) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let config = Config::new(locale)?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
