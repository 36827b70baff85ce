use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_ls_long"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ls_long"))
        .stdout(predicate::str::contains("<DIR>"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_ls_long"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lists_current_directory() {
    Command::new(env!("CARGO_BIN_EXE_ls_long"))
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cargo.toml"));
}
