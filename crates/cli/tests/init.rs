// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn init_creates_work_dir() {
    let temp = TempDir::new().unwrap();
    tk().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized tk"))
        .stdout(predicate::str::contains("Locale: en"));

    assert!(temp.path().join(".tk/config.toml").is_file());
    assert!(temp.path().join(".tk/issues.db").is_file());
}

#[test]
fn init_twice_fails() {
    let temp = init_temp();
    tk().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn init_unknown_locale_fails() {
    let temp = TempDir::new().unwrap();
    tk().args(["init", "--locale", "fr"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale"));
}

#[test]
fn commands_outside_project_fail() {
    let temp = TempDir::new().unwrap();
    tk().arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: not initialized"));
}

#[test]
fn subdirectory_finds_project() {
    let temp = init_team();
    let nested = temp.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    tk().args(["project", "list"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("web"));
}

#[test]
fn directory_flag_changes_project() {
    let temp = init_team();
    let elsewhere = TempDir::new().unwrap();

    tk().arg("-C")
        .arg(temp.path())
        .args(["user", "list"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("daqing"));
}

#[test]
fn workspace_config_moves_database() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".tk/config.toml"),
        "locale = \"en\"\nworkspace = \"shared\"\n",
    )
    .unwrap();

    tk().args(["project", "add", "web"])
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(temp.path().join("shared/issues.db").is_file());
}

#[test]
fn user_add_rejects_unknown_role() {
    let temp = init_temp();
    tk().args(["user", "add", "x", "x@example.com", "--role", "Admin"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}

#[test]
fn completion_bash() {
    tk().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tk"));
}
