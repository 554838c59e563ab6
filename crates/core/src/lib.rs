// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tk-core: Issue workflow and authorization for the tk issue tracker
//!
//! This crate provides the issue lifecycle state machine, the permission
//! rules deciding who may drive it, and the SQLite store both write through.
//! The `tk` CLI composes them: authorize first, then fire.

pub mod db;
pub mod error;
pub mod issue;
pub mod labels;
pub mod policy;
pub mod store;
pub mod user;
pub mod validate;
pub mod workflow;

pub use db::Database;
pub use error::{Error, Result};
pub use issue::{Comment, Issue, NewIssue, Project, TodoItem, DEFAULT_CONTENT};
pub use labels::{LabelKind, Labels, Localizer};
pub use policy::{Denial, Permission};
pub use store::{IssueQuery, IssueStore, StateFilter};
pub use user::{NewUser, Role, User};
pub use workflow::{Event, State, Transition, TransitionRecord, Workflow};
