// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tkrs - Command-line front end for the tk issue tracker.
//!
//! This crate wires the [`tk_core`] workflow and policy into the `tk` binary:
//! it locates the project's `.tk/` directory, resolves the acting user, checks
//! the policy and only then mutates.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument parsing
//! - [`Config`] - Project configuration (locale, label overrides, workspace location)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use tkrs::{init_work_dir, find_work_dir, get_db_path, Config};
//! use tk_core::Database;
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."), "en")?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;
mod env;

pub mod config;
pub mod error;
pub mod logging;

pub use cli::{
    Cli, Command, CommentCommand, OutputArgs, OutputFormat, ProjectCommand, TodoCommand,
    UserCommand,
};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::list::ListFilter;

/// Apply the global options, then run the command.
pub fn run_cli(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }
    let actor = cli.actor.or_else(env::default_actor);
    run(cli.command, actor.as_deref())
}

/// Execute a CLI command on behalf of `actor`. This is the main entry point
/// for library users and provides a testable way to run commands without
/// process execution.
pub fn run(command: Command, actor: Option<&str>) -> Result<()> {
    match command {
        Command::Init { locale } => commands::init::run(&locale),
        Command::User(cmd) => match cmd {
            UserCommand::Add { name, email, role } => commands::user::add(&name, &email, &role),
            UserCommand::List { output } => commands::user::list(output.output),
        },
        Command::Project(cmd) => match cmd {
            ProjectCommand::Add { name } => commands::project::add(&name),
            ProjectCommand::List { output } => commands::project::list(output.output),
        },
        Command::New {
            project,
            title,
            content,
            output,
        } => commands::new::run(actor, &project, &title, content.as_deref(), output.output),
        Command::Show { id, output } => commands::show::run(id, output.output),
        Command::List {
            project,
            state,
            except,
            assignee,
            output,
        } => {
            let filter = ListFilter {
                project: project.as_deref(),
                state,
                except,
                assignee: assignee.as_deref(),
            };
            commands::list::run(&filter, output.output)
        }
        Command::Edit { id, title, content } => {
            commands::edit::run(actor, id, title.as_deref(), content.as_deref())
        }
        Command::Delete { id } => commands::edit::delete(actor, id),
        Command::Assign { id, user } => commands::assign::assign(actor, id, &user),
        Command::Unassign { id } => commands::assign::unassign(actor, id),
        Command::Fire { id, event } => commands::fire::run(actor, id, event),
        Command::Events { id, to, output } => commands::fire::events(id, to, output.output),
        Command::Log { id, output } => commands::log::run(id, output.output),
        Command::Comment(cmd) => match cmd {
            CommentCommand::Add { id, content } => commands::comment::add(actor, id, &content),
            CommentCommand::Edit {
                comment_id,
                content,
            } => commands::comment::edit(actor, comment_id, &content),
            CommentCommand::Rm { comment_id } => commands::comment::remove(actor, comment_id),
            CommentCommand::List { id, output } => commands::comment::list(id, output.output),
        },
        Command::Todo(cmd) => match cmd {
            TodoCommand::Add { id, content } => commands::todo::add(actor, id, &content),
            TodoCommand::Done { todo_id } => commands::todo::set_done(actor, todo_id, true),
            TodoCommand::Undo { todo_id } => commands::todo::set_done(actor, todo_id, false),
            TodoCommand::Rm { todo_id } => commands::todo::remove(actor, todo_id),
            TodoCommand::List { id, output } => commands::todo::list(id, output.output),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tk", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
