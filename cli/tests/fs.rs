//! # pkgkit CLI Filesystem Integration Tests
//!
//! File: cli/tests/fs.rs
//!
//! ## Overview
//!
//! Integration tests for `pkgkit fs` (`exists`, `mtime`, `children`,
//! `descendants`, `copy`) against temporary directory trees.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_fs_exists_tracks_creation_and_removal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("probe.txt");

    pkgkit_cmd().args(["fs", "exists", arg(&file)]).assert().success().stdout("false\n");
    fs::write(&file, "x").unwrap();
    pkgkit_cmd().args(["fs", "exists", arg(&file)]).assert().success().stdout("true\n");
    fs::remove_file(&file).unwrap();
    pkgkit_cmd().args(["fs", "exists", arg(&file)]).assert().success().stdout("false\n");
}

#[test]
fn test_fs_mtime_missing_is_epoch() {
    let dir = tempdir().unwrap();
    pkgkit_cmd()
        .args(["fs", "mtime", arg(&dir.path().join("nope"))])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1970-01-01T00:00:00"));
}

#[test]
fn test_fs_mtime_existing_file_is_recent() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("fresh.txt");
    fs::write(&file, "x").unwrap();
    pkgkit_cmd()
        .args(["fs", "mtime", arg(&file)])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1970").not());
}

#[test]
fn test_fs_children_skips_hidden_and_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    pkgkit_cmd()
        .args(["fs", "children", arg(dir.path())])
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_fs_children_of_missing_dir_fails() {
    let dir = tempdir().unwrap();
    pkgkit_cmd()
        .args(["fs", "children", arg(&dir.path().join("missing"))])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_fs_descendants_finds_every_ancestor_match() {
    let dir = tempdir().unwrap();
    for sub in ["x/pkgs/p1", "x/pkgs/p2", "y/pkgs/p3", "y/.hidden/pkgs/p4"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    let out = pkgkit_cmd()
        .args(["fs", "descendants", arg(dir.path()), "pkgs"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let mut names: Vec<String> = String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    names.sort();
    assert_eq!(names, ["p1", "p2", "p3"]);
}

#[test]
fn test_fs_descendants_full_path() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("apps/blinky")).unwrap();
    let expected = format!("{}\n", dir.path().join("apps").join("blinky").display());
    pkgkit_cmd()
        .args(["fs", "descendants", arg(dir.path()), "apps", "--full-path"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_fs_descendants_missing_root_is_empty() {
    let dir = tempdir().unwrap();
    pkgkit_cmd()
        .args(["fs", "descendants", arg(&dir.path().join("none")), "pkgs"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_fs_copy_directory_into_existing_directory() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("tmpl");
    let dest = dir.path().join("out");
    fs::create_dir_all(src.join("src")).unwrap();
    fs::write(src.join("src/main.c"), "int main;").unwrap();
    fs::create_dir(&dest).unwrap();

    pkgkit_cmd().args(["fs", "copy", arg(&src), arg(&dest)]).assert().success();
    assert_eq!(
        fs::read_to_string(dest.join("tmpl/src/main.c")).unwrap(),
        "int main;"
    );
}
