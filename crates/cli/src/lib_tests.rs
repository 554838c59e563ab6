// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the public `run()` function.
//!
//! Most commands need a `.tk/` directory found from the current directory,
//! so they are covered by the integration tests that run the binary. Here we
//! only cover variants that never touch the project.

use super::*;
use clap_complete::Shell;

#[test]
fn test_completion_runs_without_project() {
    assert!(run(Command::Completion { shell: Shell::Bash }, None).is_ok());
}

#[test]
fn test_cli_command_is_consistent() {
    Cli::command().debug_assert();
}
