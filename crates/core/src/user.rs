// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Users and their roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// What a user is allowed to do beyond their own issues.
///
/// The set is closed on purpose: every policy function matches on it
/// exhaustively, so a new role has to be handled everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// May assign and move any issue once it is assigned.
    ProjectManager,
    /// Baseline role. Unknown stored roles are read as this.
    #[default]
    Developer,
}

impl Role {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ProjectManager => "ProjectManager",
            Role::Developer => "Developer",
        }
    }

    /// Read a role string from storage, failing closed.
    ///
    /// Matching is exact and case-sensitive; anything unrecognized is the
    /// least privileged role.
    pub fn from_stored(s: &str) -> Role {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(role = s, "unknown stored role, treating as Developer");
            Role::Developer
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ProjectManager" => Ok(Role::ProjectManager),
            "Developer" => Ok(Role::Developer),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

/// A person acting on issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier.
    pub id: i64,
    /// Display and lookup name.
    pub name: String,
    /// Unique contact address.
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Test helper: a user with the given id and role and a generated name.
    #[cfg(test)]
    pub fn stub(id: i64, role: Role) -> Self {
        User {
            id,
            name: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role,
            created_at: Utc::now(),
        }
    }
}

/// Fields required to register a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        NewUser {
            name: name.into(),
            email: email.into(),
            role: Role::Developer,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
