// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging for the CLI.
//!
//! Output goes to stderr so stdout stays parseable. The filter comes from
//! `TK_LOG` using `EnvFilter` directive syntax (`debug`, `tk_core=trace`).

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `TK_LOG`, falling back to [`DEFAULT_FILTER`] when
/// the variable is unset or does not parse.
pub fn filter() -> EnvFilter {
    env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
