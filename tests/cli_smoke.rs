use assert_cmd::prelude::*;
use gitlog::model::CommitRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn init_git_repo(dir: &Path) {
    // init and basic identity
    assert!(Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "core.autocrlf", "false"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.email", "you@example.com"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.name", "Your Name"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

#[test]
fn csv_outputs_header_and_one_row_per_commit() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_file(dir.path(), "src/a.rs", "fn a(){}\n", "add a");
    commit_file(dir.path(), "src/b.rs", "fn b(){}\n", "add b");

    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.arg("csv").arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Author,Message,Added,Removed,Files affected");
    assert_eq!(lines.len(), 3);
    // newest commit first, one file each, one line added
    assert!(lines[1].contains("Your Name <you@example.com>"));
    assert!(lines[1].ends_with(",add b,1,0,1"));
    assert!(lines[2].ends_with(",add a,1,0,1"));
}

#[test]
fn yaml_outputs_full_commit_detail() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_file(dir.path(), "lib.rs", "pub fn hi(){}\n", "add lib");
    commit_file(
        dir.path(),
        "lib.rs",
        "pub fn hi(){ println!(\"hi\"); }\n",
        "print greeting",
    );

    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.arg("yaml").arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();

    let records: Vec<CommitRecord> = serde_yaml::from_slice(&out).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "print greeting");
    assert_eq!(records[0].author, "Your Name <you@example.com>");
    assert_eq!(records[0].changes.len(), 1);
    assert_eq!(records[0].changes[0].file, "lib.rs");
    assert_eq!(records[1].message, "add lib");
    assert_eq!(records[1].id.len(), 40);
}

#[test]
fn scan_summarizes_every_repo_under_a_tree() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let one = dir.path().join("one");
    let two = dir.path().join("sub/two");
    fs::create_dir_all(&one).unwrap();
    fs::create_dir_all(&two).unwrap();
    init_git_repo(&one);
    init_git_repo(&two);
    commit_file(&one, "a.txt", "a\n", "first in one");
    commit_file(&two, "b.txt", "b\n", "first in two");

    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.arg("scan").arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("first in one"));
    assert!(text.contains("first in two"));
    assert_eq!(
        text.matches("Date,Author,Message,Added,Removed,Files affected")
            .count(),
        2
    );
}

#[test]
fn scan_skips_broken_repos_and_continues() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let good = dir.path().join("good");
    let broken = dir.path().join("broken");
    fs::create_dir_all(&good).unwrap();
    // an empty .git directory git refuses to read
    fs::create_dir_all(broken.join(".git")).unwrap();
    init_git_repo(&good);
    commit_file(&good, "a.txt", "a\n", "good commit");

    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.arg("scan").arg(dir.path());
    let assert = cmd.assert().success();
    let output = assert.get_output();

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("good commit"));
    assert!(stderr.contains("skipped"));
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.arg("bogus");
    cmd.assert().failure();
}

#[test]
fn missing_subcommand_fails_with_usage() {
    let mut cmd = Command::cargo_bin("gitlog").unwrap();
    cmd.assert().failure();
}
