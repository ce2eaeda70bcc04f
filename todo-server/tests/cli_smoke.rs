//! Smoke tests for the todo-server binary's argument handling

use assert_cmd::Command;
use predicates::prelude::*;

fn todo_server() -> Command {
    let mut cmd = Command::cargo_bin("todo-server").unwrap();
    for var in [
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
        "DB_SSLMODE",
        "DB_MAX_CONNECTIONS",
        "TODO_BIND",
        "TODO_CORS_PERMISSIVE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_database_flags() {
    todo_server()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--db-sslmode"))
        .stdout(predicate::str::contains("DB_PASSWORD"));
}

#[test]
fn version_flag() {
    todo_server()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_user_and_database_fail_fast() {
    todo_server()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--db-user"))
        .stderr(predicate::str::contains("--db-name"));
}

#[test]
fn rejects_invalid_bind_address() {
    todo_server()
        .args(["--db-user", "todo", "--db-name", "todos", "--bind", "not-an-addr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
