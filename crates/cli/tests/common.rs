// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `tk` binary with a clean environment.
pub fn tk() -> Command {
    let mut cmd = cargo_bin_cmd!("tk");
    cmd.env_remove("TK_USER").env_remove("TK_LOG");
    cmd
}

/// `tk` run inside `temp` as `actor`.
pub fn tk_as(temp: &TempDir, actor: &str) -> Command {
    let mut cmd = tk();
    cmd.current_dir(temp.path()).arg("--as").arg(actor);
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    init_temp_with_locale("en")
}

pub fn init_temp_with_locale(locale: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    tk().arg("init")
        .arg("--locale")
        .arg(locale)
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Initialized directory with a `web` project, creator `daqing`, developer
/// `lily` and project manager `pm`.
pub fn init_team() -> TempDir {
    let temp = init_temp();
    add_user(&temp, "daqing", "Developer");
    add_user(&temp, "lily", "Developer");
    add_user(&temp, "pm", "ProjectManager");
    tk().args(["project", "add", "web"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

pub fn add_user(temp: &TempDir, name: &str, role: &str) {
    tk().args(["user", "add", name, &format!("{name}@example.com"), "--role", role])
        .current_dir(temp.path())
        .assert()
        .success();
}

/// Helper to create an issue in `web` and return its ID
pub fn create_issue(temp: &TempDir, actor: &str, title: &str) -> String {
    let output = tk_as(temp, actor)
        .args(["new", "web", title])
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);

    // "Created issue 3: title"
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .nth(2)
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}

/// Fire an event and assert it succeeded.
pub fn fire(temp: &TempDir, actor: &str, id: &str, event: &str) {
    tk_as(temp, actor)
        .args(["fire", id, event])
        .assert()
        .success();
}

/// Parse `show -o json` output.
pub fn show_json(temp: &TempDir, id: &str) -> serde_json::Value {
    let output = tk()
        .args(["show", id, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}
