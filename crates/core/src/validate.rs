// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field validation applied before anything reaches the database.
//!
//! Each validator trims its input and returns the value to store.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::issue::DEFAULT_CONTENT;

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MAX_CONTENT_LENGTH: usize = 200_000;

// Pattern is a compile-time constant known to be valid, so unreachable!() is safe here.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

fn required(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(trimmed.to_string())
}

/// Validate an issue title.
pub fn validate_title(title: &str) -> Result<String> {
    required("Title", title, MAX_TITLE_LENGTH)
}

/// Validate a user or project name.
pub fn validate_name(name: &str) -> Result<String> {
    required("Name", name, MAX_NAME_LENGTH)
}

/// Validate comment, todo or issue body text.
pub fn validate_content(content: &str) -> Result<String> {
    required("Content", content, MAX_CONTENT_LENGTH)
}

/// Validate an issue body. Blank or missing text becomes [`DEFAULT_CONTENT`].
pub fn validate_issue_content(content: Option<&str>) -> Result<String> {
    match content {
        Some(c) if !c.trim().is_empty() => validate_content(c),
        _ => Ok(DEFAULT_CONTENT.to_string()),
    }
}

/// Validate an email address (shape only, no delivery check).
pub fn validate_email(email: &str) -> Result<String> {
    let email = required("Email", email, MAX_EMAIL_LENGTH)?;
    if !EMAIL_RE.is_match(&email) {
        return Err(Error::InvalidEmail(email));
    }
    Ok(email)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
