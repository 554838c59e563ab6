// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for issue storage.
//!
//! The [`Database`] struct provides all data access operations for users,
//! projects, issues, assignments, comments, todo items and the transition
//! log. It is also the [`IssueStore`] the workflow engine writes through.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::issue::{Comment, Issue, NewIssue, Project, TodoItem};
use crate::store::{IssueQuery, IssueStore, StateFilter};
use crate::user::{NewUser, Role, User};
use crate::validate::{
    validate_content, validate_email, validate_issue_content, validate_name, validate_title,
};
use crate::workflow::{Transition, TransitionRecord};

/// SQL schema for the issue tracker database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    role TEXT NOT NULL DEFAULT 'Developer',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL,
    creator_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    state TEXT NOT NULL DEFAULT 'open',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects(id),
    FOREIGN KEY (creator_id) REFERENCES users(id)
);

-- At most one assignee per issue
CREATE TABLE IF NOT EXISTS issue_assignments (
    issue_id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id),
    FOREIGN KEY (user_id) REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id INTEGER NOT NULL,
    author_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id),
    FOREIGN KEY (author_id) REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

-- Workflow audit trail
CREATE TABLE IF NOT EXISTS transitions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id INTEGER NOT NULL,
    actor_id INTEGER NOT NULL,
    event TEXT NOT NULL,
    from_state TEXT NOT NULL,
    to_state TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id),
    FOREIGN KEY (actor_id) REFERENCES users(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_state ON issues(state);
CREATE INDEX IF NOT EXISTS idx_issues_project ON issues(project_id);
CREATE INDEX IF NOT EXISTS idx_assignments_user ON issue_assignments(user_id);
CREATE INDEX IF NOT EXISTS idx_comments_issue ON comments(issue_id);
CREATE INDEX IF NOT EXISTS idx_todo_items_issue ON todo_items(issue_id);
CREATE INDEX IF NOT EXISTS idx_transitions_issue ON transitions(issue_id);
"#;

const ISSUE_COLUMNS: &str = "i.id, i.project_id, i.creator_id, i.title, i.content, i.state,
     a.user_id, i.created_at, i.updated_at
     FROM issues i LEFT JOIN issue_assignments a ON a.issue_id = i.id";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let state_str: String = row.get(5)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;
    Ok(Issue {
        id: row.get(0)?,
        project_id: row.get(1)?,
        creator_id: row.get(2)?,
        title: row.get(3)?,
        content: row.get(4)?,
        state: parse_db(&state_str, "state")?,
        assignee_id: row.get(6)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

fn user_from_row(row: &Row<'_>) -> std::result::Result<User, rusqlite::Error> {
    let role_str: String = row.get(3)?;
    let created_str: String = row.get(4)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        role: Role::from_stored(&role_str),
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn project_from_row(row: &Row<'_>) -> std::result::Result<Project, rusqlite::Error> {
    let created_str: String = row.get(2)?;
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn comment_from_row(row: &Row<'_>) -> std::result::Result<Comment, rusqlite::Error> {
    let created_str: String = row.get(4)?;
    Ok(Comment {
        id: row.get(0)?,
        issue_id: row.get(1)?,
        author_id: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn todo_from_row(row: &Row<'_>) -> std::result::Result<TodoItem, rusqlite::Error> {
    let created_str: String = row.get(4)?;
    Ok(TodoItem {
        id: row.get(0)?,
        issue_id: row.get(1)?,
        content: row.get(2)?,
        done: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with issue tracker operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    fn exists(&self, sql: &str, value: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(sql, params![value], |row| row.get(0))?;
        Ok(count > 0)
    }

    // Users

    /// Register a user. Names and emails must be unique.
    pub fn create_user(&self, new: &NewUser) -> Result<User> {
        let name = validate_name(&new.name)?;
        let email = validate_email(&new.email)?;

        if self.exists("SELECT COUNT(*) FROM users WHERE email = ?1", &email)? {
            return Err(Error::DuplicateEmail(email));
        }
        if self.exists("SELECT COUNT(*) FROM users WHERE name = ?1", &name)? {
            return Err(Error::DuplicateName(name));
        }

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO users (name, email, role, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, email, new.role.as_str(), created_at.to_rfc3339()],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, %name, role = %new.role, "user created");

        Ok(User {
            id,
            name,
            email,
            role: new.role,
            created_at,
        })
    }

    /// Get a user by ID.
    pub fn get_user(&self, id: i64) -> Result<User> {
        self.conn
            .query_row(
                "SELECT id, name, email, role, created_at FROM users WHERE id = ?1",
                params![id],
                user_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::UserNotFound(id.to_string()))
    }

    /// Get a user by name.
    pub fn find_user(&self, name: &str) -> Result<User> {
        self.conn
            .query_row(
                "SELECT id, name, email, role, created_at FROM users WHERE name = ?1",
                params![name],
                user_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::UserNotFound(name.to_string()))
    }

    /// List all users in registration order.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, role, created_at FROM users ORDER BY id")?;
        let users = stmt
            .query_map([], user_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(users)
    }

    // Projects

    /// Create a project with a unique name.
    pub fn create_project(&self, name: &str) -> Result<Project> {
        let name = validate_name(name)?;
        if self.exists("SELECT COUNT(*) FROM projects WHERE name = ?1", &name)? {
            return Err(Error::DuplicateName(name));
        }

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO projects (name, created_at) VALUES (?1, ?2)",
            params![name, created_at.to_rfc3339()],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, %name, "project created");

        Ok(Project {
            id,
            name,
            created_at,
        })
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: i64) -> Result<Project> {
        self.conn
            .query_row(
                "SELECT id, name, created_at FROM projects WHERE id = ?1",
                params![id],
                project_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    /// Get a project by name.
    pub fn find_project(&self, name: &str) -> Result<Project> {
        self.conn
            .query_row(
                "SELECT id, name, created_at FROM projects WHERE name = ?1",
                params![name],
                project_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::ProjectNotFound(name.to_string()))
    }

    /// List all projects in creation order.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM projects ORDER BY id")?;
        let projects = stmt
            .query_map([], project_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    // Issues

    /// Open a new issue. Blank content is replaced with the default text.
    pub fn create_issue(&self, new: &NewIssue) -> Result<Issue> {
        let title = validate_title(&new.title)?;
        let content = new.resolved_content()?;
        // Surface missing references as not-found rather than FK failures
        self.get_project(new.project_id)?;
        self.get_user(new.creator_id)?;

        let now = Utc::now();
        let mut issue = Issue::new(0, new.project_id, new.creator_id, title, now);
        issue.content = content;

        self.conn.execute(
            "INSERT INTO issues (project_id, creator_id, title, content, state,
             created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                issue.project_id,
                issue.creator_id,
                issue.title,
                issue.content,
                issue.state.as_str(),
                issue.created_at.to_rfc3339(),
                issue.updated_at.to_rfc3339(),
            ],
        )?;
        issue.id = self.conn.last_insert_rowid();
        tracing::info!(
            id = issue.id,
            project = issue.project_id,
            creator = issue.creator_id,
            "issue created"
        );
        Ok(issue)
    }

    /// Get an issue by ID, including its assignee.
    pub fn get_issue(&self, id: i64) -> Result<Issue> {
        let sql = format!("SELECT {ISSUE_COLUMNS} WHERE i.id = ?1");
        self.conn
            .query_row(&sql, params![id], issue_from_row)
            .optional()?
            .ok_or(Error::IssueNotFound(id))
    }

    /// List issues matching a query, oldest first.
    pub fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        let mut sql = format!("SELECT {ISSUE_COLUMNS}");
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(project_id) = query.project_id {
            conditions.push("i.project_id = ?");
            params_vec.push(Box::new(project_id));
        }

        match query.state {
            StateFilter::Any => {}
            StateFilter::Only(state) => {
                conditions.push("i.state = ?");
                params_vec.push(Box::new(state.as_str()));
            }
            StateFilter::Except(state) => {
                conditions.push("i.state != ?");
                params_vec.push(Box::new(state.as_str()));
            }
        }

        if let Some(user_id) = query.assignee_id {
            conditions.push("a.user_id = ?");
            params_vec.push(Box::new(user_id));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY i.id");

        let mut stmt = self.conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let issues = stmt
            .query_map(params_refs.as_slice(), issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Update an issue's title and/or content. Blank content restores the default.
    pub fn update_issue(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Issue> {
        let mut issue = self.get_issue(id)?;
        if let Some(title) = title {
            issue.title = validate_title(title)?;
        }
        if let Some(content) = content {
            issue.content = validate_issue_content(Some(content))?;
        }
        issue.updated_at = Utc::now();

        self.conn.execute(
            "UPDATE issues SET title = ?1, content = ?2, updated_at = ?3 WHERE id = ?4",
            params![issue.title, issue.content, issue.updated_at.to_rfc3339(), id],
        )?;
        Ok(issue)
    }

    /// Delete an issue with its assignment, comments, todo items and history.
    pub fn delete_issue(&self, id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for table in ["issue_assignments", "comments", "todo_items", "transitions"] {
            tx.execute(
                &format!("DELETE FROM {table} WHERE issue_id = ?1"),
                params![id],
            )?;
        }
        let affected = tx.execute("DELETE FROM issues WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::IssueNotFound(id));
        }
        tx.commit()?;
        tracing::info!(id, "issue deleted");
        Ok(())
    }

    // Assignment

    /// Make `user_id` responsible for the issue, replacing any previous assignee.
    pub fn assign_issue(&self, issue_id: i64, user_id: i64) -> Result<()> {
        self.get_issue(issue_id)?;
        self.get_user(user_id)?;
        self.conn.execute(
            "INSERT INTO issue_assignments (issue_id, user_id, created_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(issue_id) DO UPDATE SET
                 user_id = excluded.user_id,
                 created_at = excluded.created_at",
            params![issue_id, user_id, Utc::now().to_rfc3339()],
        )?;
        tracing::info!(issue = issue_id, user = user_id, "issue assigned");
        Ok(())
    }

    /// Clear the assignment. Returns false if the issue was not assigned.
    pub fn unassign_issue(&self, issue_id: i64) -> Result<bool> {
        self.get_issue(issue_id)?;
        let affected = self.conn.execute(
            "DELETE FROM issue_assignments WHERE issue_id = ?1",
            params![issue_id],
        )?;
        if affected > 0 {
            tracing::info!(issue = issue_id, "issue unassigned");
        }
        Ok(affected > 0)
    }

    // Comments

    /// Add a comment to an issue.
    pub fn add_comment(&self, issue_id: i64, author_id: i64, content: &str) -> Result<Comment> {
        let content = validate_content(content)?;
        self.get_issue(issue_id)?;
        self.get_user(author_id)?;

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO comments (issue_id, author_id, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![issue_id, author_id, content, created_at.to_rfc3339()],
        )?;
        Ok(Comment {
            id: self.conn.last_insert_rowid(),
            issue_id,
            author_id,
            content,
            created_at,
        })
    }

    /// Get a comment by ID.
    pub fn get_comment(&self, id: i64) -> Result<Comment> {
        self.conn
            .query_row(
                "SELECT id, issue_id, author_id, content, created_at
                 FROM comments WHERE id = ?1",
                params![id],
                comment_from_row,
            )
            .optional()?
            .ok_or(Error::CommentNotFound(id))
    }

    /// Get all comments for an issue, oldest first.
    pub fn list_comments(&self, issue_id: i64) -> Result<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, author_id, content, created_at
             FROM comments WHERE issue_id = ?1 ORDER BY id",
        )?;
        let comments = stmt
            .query_map(params![issue_id], comment_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    /// Replace a comment's text.
    pub fn update_comment(&self, id: i64, content: &str) -> Result<Comment> {
        let content = validate_content(content)?;
        let affected = self.conn.execute(
            "UPDATE comments SET content = ?1 WHERE id = ?2",
            params![content, id],
        )?;
        if affected == 0 {
            return Err(Error::CommentNotFound(id));
        }
        self.get_comment(id)
    }

    /// Delete a comment.
    pub fn delete_comment(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::CommentNotFound(id));
        }
        Ok(())
    }

    // Todo items

    /// Add an open todo item to an issue.
    pub fn add_todo(&self, issue_id: i64, content: &str) -> Result<TodoItem> {
        let content = validate_content(content)?;
        self.get_issue(issue_id)?;

        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO todo_items (issue_id, content, done, created_at)
             VALUES (?1, ?2, 0, ?3)",
            params![issue_id, content, created_at.to_rfc3339()],
        )?;
        Ok(TodoItem {
            id: self.conn.last_insert_rowid(),
            issue_id,
            content,
            done: false,
            created_at,
        })
    }

    /// Get a todo item by ID.
    pub fn get_todo(&self, id: i64) -> Result<TodoItem> {
        self.conn
            .query_row(
                "SELECT id, issue_id, content, done, created_at
                 FROM todo_items WHERE id = ?1",
                params![id],
                todo_from_row,
            )
            .optional()?
            .ok_or(Error::TodoNotFound(id))
    }

    /// Get all todo items for an issue, oldest first.
    pub fn list_todos(&self, issue_id: i64) -> Result<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, content, done, created_at
             FROM todo_items WHERE issue_id = ?1 ORDER BY id",
        )?;
        let todos = stmt
            .query_map(params![issue_id], todo_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    /// Tick or untick a todo item.
    pub fn set_todo_done(&self, id: i64, done: bool) -> Result<TodoItem> {
        let affected = self.conn.execute(
            "UPDATE todo_items SET done = ?1 WHERE id = ?2",
            params![done, id],
        )?;
        if affected == 0 {
            return Err(Error::TodoNotFound(id));
        }
        self.get_todo(id)
    }

    /// Delete a todo item.
    pub fn delete_todo(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM todo_items WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::TodoNotFound(id));
        }
        Ok(())
    }

    // Transitions

    /// Get the transition history for an issue, oldest first.
    pub fn list_transitions(&self, issue_id: i64) -> Result<Vec<TransitionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, actor_id, event, from_state, to_state, created_at
             FROM transitions WHERE issue_id = ?1 ORDER BY id",
        )?;
        let records = stmt
            .query_map(params![issue_id], |row| {
                let event_str: String = row.get(3)?;
                let from_str: String = row.get(4)?;
                let to_str: String = row.get(5)?;
                let created_str: String = row.get(6)?;
                Ok(TransitionRecord {
                    id: row.get(0)?,
                    issue_id: row.get(1)?,
                    actor_id: row.get(2)?,
                    event: parse_db(&event_str, "event")?,
                    from: parse_db(&from_str, "from_state")?,
                    to: parse_db(&to_str, "to_state")?,
                    created_at: parse_timestamp(&created_str, "created_at")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

impl IssueStore for Database {
    fn load_issue(&self, id: i64) -> Result<Issue> {
        self.get_issue(id)
    }

    fn write_state(&self, transition: &Transition, actor_id: i64) -> Result<DateTime<Utc>> {
        let tx = self.conn.unchecked_transaction()?;
        let written_at = Utc::now();
        let now = written_at.to_rfc3339();

        // Conditional update: only succeeds if nobody moved the issue meanwhile
        let affected = tx.execute(
            "UPDATE issues SET state = ?1, updated_at = ?2 WHERE id = ?3 AND state = ?4",
            params![
                transition.to.as_str(),
                now,
                transition.issue_id,
                transition.from.as_str()
            ],
        )?;

        if affected == 0 {
            let actual: Option<String> = tx
                .query_row(
                    "SELECT state FROM issues WHERE id = ?1",
                    params![transition.issue_id],
                    |row| row.get(0),
                )
                .optional()?;
            return match actual {
                None => Err(Error::IssueNotFound(transition.issue_id)),
                Some(state) => Err(Error::StaleState {
                    id: transition.issue_id,
                    expected: transition.from,
                    actual: state
                        .parse()
                        .map_err(|_| Error::CorruptedData(format!("invalid state '{state}'")))?,
                }),
            };
        }

        tx.execute(
            "INSERT INTO transitions (issue_id, actor_id, event, from_state, to_state, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                transition.issue_id,
                actor_id,
                transition.event.as_str(),
                transition.from.as_str(),
                transition.to.as_str(),
                now,
            ],
        )?;
        tx.commit()?;
        Ok(written_at)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
