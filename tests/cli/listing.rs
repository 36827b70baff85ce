use std::{
    fs::{self, File},
    path::Path,
    time::{Duration, SystemTime},
};

use assert_cmd::Command;
use predicates::prelude::*;

fn ls_long() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ls_long"))
}

fn set_mtime(path: &Path, age: Duration) {
    let when = SystemTime::now() - age;
    File::open(path).unwrap().set_modified(when).unwrap();
}

fn stdout_lines(dir: &Path) -> Vec<String> {
    let output = ls_long().arg(dir).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn missing_argument_is_a_usage_error() {
    ls_long().assert().code(1).stdout(predicate::str::is_empty());
}

#[test]
fn two_arguments_are_a_usage_error() {
    ls_long()
        .args([".", "."])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_path_exits_with_path_error() {
    let dir = tempfile::tempdir().unwrap();
    ls_long()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not exist or inaccessible"));
}

#[test]
fn regular_file_argument_cannot_be_opened_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "hello").unwrap();
    ls_long()
        .arg(&file)
        .assert()
        .code(254)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not open directory"));
}

#[test]
fn empty_directory_succeeds_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    ls_long().arg(dir.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn newest_entry_is_listed_first() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    let file = dir.path().join("f.txt");
    fs::create_dir(&sub).unwrap();
    fs::write(&file, "0123456789").unwrap();
    set_mtime(&sub, Duration::from_secs(3600));
    set_mtime(&file, Duration::from_secs(60));

    let lines = stdout_lines(dir.path());
    assert_eq!(lines.len(), 2);

    assert!(lines[0].ends_with("\x1b[0mf.txt\x1b[0m"), "{:?}", lines[0]);
    assert!(lines[0].contains("    10B "), "{:?}", lines[0]);
    assert!(lines[0].starts_with('-'));

    assert!(lines[1].ends_with("\x1b[1;34msub\x1b[0m"), "{:?}", lines[1]);
    assert!(lines[1].starts_with('d'));
}

#[cfg(unix)]
#[test]
fn owner_executable_file_is_red_and_mode_is_rendered() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("run.sh");
    fs::write(&script, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o754)).unwrap();

    let lines = stdout_lines(dir.path());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("-rwxr-xr--"), "{:?}", lines[0]);
    assert!(lines[0].ends_with("\x1b[0;31mrun.sh\x1b[0m"), "{:?}", lines[0]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("real"), "x").unwrap();
    std::os::unix::fs::symlink("missing-target", dir.path().join("dangling")).unwrap();

    let lines = stdout_lines(dir.path());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("real\x1b[0m"));
}

#[cfg(target_os = "linux")]
#[test]
fn undecodable_file_name_is_still_listed() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ok.txt"), "a").unwrap();
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname")), "b").unwrap();

    let lines = stdout_lines(dir.path());
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines.iter().any(|line| line.ends_with("bad\u{fffd}name\x1b[0m")), "{lines:?}");
    assert!(lines.iter().all(|line| line.contains("     1B ")), "{lines:?}");
}

#[test]
fn many_entries_are_sorted_by_mtime() {
    let dir = tempfile::tempdir().unwrap();
    for (name, age_secs) in [("a", 100), ("b", 300), ("c", 200)] {
        let path = dir.path().join(name);
        fs::write(&path, name).unwrap();
        set_mtime(&path, Duration::from_secs(age_secs));
    }

    let lines = stdout_lines(dir.path());
    let order: Vec<_> = lines.iter().map(|line| line.trim_end_matches("\x1b[0m").chars().last().unwrap()).collect();
    assert_eq!(order, vec!['a', 'c', 'b']);
}
