// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized\n  hint: run 'tk init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no acting user\n  hint: pass --as <user> or set TK_USER")]
    ActorRequired,

    #[error("nothing to change\n  hint: pass --title and/or --content")]
    NothingToEdit,

    #[error("{to} cannot be reached from {from}")]
    Unreachable {
        from: tk_core::State,
        to: tk_core::State,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] tk_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
