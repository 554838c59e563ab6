// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tk_core::{Event, State};

use crate::config::DEFAULT_LOCALE;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_state(s: &str) -> Result<State, String> {
    s.parse().map_err(|e: tk_core::Error| e.to_string())
}

fn parse_event(s: &str) -> Result<Event, String> {
    s.parse().map_err(|e: tk_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

#[derive(Parser)]
#[command(name = "tk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Issue tracker with a guarded open-to-closed workflow")]
#[command(
    long_about = "Issue tracker with a guarded open-to-closed workflow.\n\n\
    Issues move through open, working_on, finished and closed (or invalid and ignored) \
    by firing events. Who may fire them depends on the acting user's role and relation \
    to the issue."
)]
pub struct Cli {
    /// Run as if tk was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Act as this user (defaults to $TK_USER)
    #[arg(long = "as", global = true, value_name = "user")]
    pub actor: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize tk in the current directory
    Init {
        /// Locale for state and event labels (en, zh-CN)
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
    },

    /// Manage users
    #[command(subcommand)]
    User(UserCommand),

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommand),

    // ─────────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────────
    /// Create a new issue in the open state
    New {
        /// Project name
        project: String,

        /// Issue title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Issue content (defaults to a placeholder when blank)
        #[arg(long)]
        content: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show issue details, available events, todos, comments and history
    Show {
        id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List issues
    List {
        /// Only issues in this project
        #[arg(long, short)]
        project: Option<String>,

        /// Only issues in this state
        #[arg(long, short, value_parser = parse_state, conflicts_with = "except")]
        state: Option<State>,

        /// Only issues not in this state
        #[arg(long, value_parser = parse_state)]
        except: Option<State>,

        /// Only issues assigned to this user
        #[arg(long, short)]
        assignee: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit an issue's title or content
    Edit {
        id: i64,

        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete an issue with its comments, todos and history
    Delete { id: i64 },

    // ─────────────────────────────────────────────────────────────────────────
    // Workflow
    // ─────────────────────────────────────────────────────────────────────────
    /// Assign an issue to a user
    Assign {
        id: i64,
        /// User name
        user: String,
    },

    /// Remove an issue's assignee
    Unassign { id: i64 },

    /// Fire a workflow event on an issue
    #[command(after_help = "\
Events:
  work_on         open, reopened -> working_on
  mark_finished   working_on     -> finished
  continue        finished       -> working_on
  close           open, finished -> closed
  mark_invalid    open           -> invalid
  ignore          open           -> ignored
  reopen          invalid, closed, ignored -> reopened")]
    Fire {
        id: i64,
        #[arg(value_parser = parse_event)]
        event: Event,
    },

    /// List the events that can be fired from an issue's current state
    Events {
        id: i64,

        /// Show the shortest event sequence to this state instead
        #[arg(long, value_parser = parse_state)]
        to: Option<State>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show an issue's transition history
    Log {
        id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Manage comments on an issue
    #[command(subcommand)]
    Comment(CommentCommand),

    /// Manage an issue's todo items
    #[command(subcommand)]
    Todo(TodoCommand),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a user
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,
        email: String,
        /// ProjectManager or Developer
        #[arg(long, default_value = "Developer")]
        role: String,
    },
    /// List users
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a project
    Add {
        #[arg(value_parser = non_empty_string)]
        name: String,
    },
    /// List projects
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
pub enum CommentCommand {
    /// Comment on an issue
    Add {
        id: i64,
        #[arg(value_parser = non_empty_string)]
        content: String,
    },
    /// Rewrite a comment
    Edit {
        comment_id: i64,
        #[arg(value_parser = non_empty_string)]
        content: String,
    },
    /// Remove a comment
    Rm { comment_id: i64 },
    /// List an issue's comments
    List {
        id: i64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand)]
pub enum TodoCommand {
    /// Add a todo item to an issue
    Add {
        id: i64,
        #[arg(value_parser = non_empty_string)]
        content: String,
    },
    /// Mark a todo item done
    Done { todo_id: i64 },
    /// Mark a todo item not done
    Undo { todo_id: i64 },
    /// Remove a todo item
    Rm { todo_id: i64 },
    /// List an issue's todo items
    List {
        id: i64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
