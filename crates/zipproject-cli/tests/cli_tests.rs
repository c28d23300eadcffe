//! Integration tests for zipproject-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn zipproject_cmd() -> Command {
    cargo_bin_cmd!("zipproject")
}

fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

fn archive_names(output: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(output).unwrap()).unwrap();
    let mut names: Vec<_> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_version_flag() {
    zipproject_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zipproject"));
}

#[test]
fn test_help_lists_flags() {
    zipproject_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn test_zips_directory_with_single_dash_flags() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("project");
    write_tree(
        &root,
        &[
            ("src/main.rs", "fn main() {}"),
            ("target/debug/app", "binary"),
            ("debug.log", "log"),
        ],
    );
    fs::write(root.join(".zipignore"), "# build output\ntarget\n*.log\n").unwrap();
    let output = temp.path().join("project.zip");

    zipproject_cmd()
        .arg("-dir")
        .arg(&root)
        .arg("-out")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Items to zip:"))
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("Outputting to:"))
        .stdout(predicate::str::contains("All files successfully written to:"))
        .stdout(predicate::str::contains("debug.log").not());

    assert_eq!(archive_names(&output), vec!["src/main.rs"]);
}

#[test]
fn test_default_dir_and_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path();
    write_tree(root, &[("a.txt", "a"), ("b/c.txt", "c")]);
    fs::write(root.join(".zipignore"), "").unwrap();

    zipproject_cmd().current_dir(root).assert().success();

    let output = root.join("project.zip");
    assert!(output.exists());
    assert_eq!(archive_names(&output), vec!["a.txt", "b/c.txt"]);
}

#[test]
fn test_second_run_skips_previous_archive_when_ignored() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path();
    write_tree(root, &[("a.txt", "a")]);
    fs::write(root.join(".zipignore"), "project.zip\n").unwrap();

    zipproject_cmd().current_dir(root).assert().success();
    assert_eq!(archive_names(&root.join("project.zip")), vec!["a.txt"]);

    zipproject_cmd()
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("project.zip").count(2));
    assert_eq!(archive_names(&root.join("project.zip")), vec!["a.txt"]);
}

#[test]
fn test_verbose_prints_summary() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("proj");
    write_tree(&root, &[("a.txt", "aaaa"), ("b.txt", "bb")]);
    fs::write(root.join(".zipignore"), "").unwrap();
    let output = temp.path().join("out.zip");

    zipproject_cmd()
        .arg("-v")
        .arg("-dir")
        .arg(&root)
        .arg("-out")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 2, bytes: 6 (avg 3 per file)"));
}

#[test]
fn test_explicit_ignore_file() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("src_tree");
    write_tree(&root, &[("keep.rs", "k"), ("skip.bak", "s")]);
    let ignore = temp.path().join("custom.ignore");
    fs::write(&ignore, "*.bak\n").unwrap();
    let output = temp.path().join("out.zip");

    zipproject_cmd()
        .arg(format!("-file={}", ignore.display()))
        .arg("--dir")
        .arg(&root)
        .arg("--out")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(archive_names(&output), vec!["keep.rs"]);
}

#[test]
fn test_missing_ignore_file_fails_without_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("bare");
    write_tree(&root, &[("file.txt", "x")]);
    let output = temp.path().join("never.zip");

    zipproject_cmd()
        .arg("-dir")
        .arg(&root)
        .arg("-out")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ignore file not found"))
        .stdout(predicate::str::contains("Items to zip:").not());

    assert!(!output.exists());
}

#[test]
fn test_missing_directory_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let ignore = temp.path().join(".zipignore");
    fs::write(&ignore, "").unwrap();

    zipproject_cmd()
        .arg("-file")
        .arg(&ignore)
        .arg("-dir")
        .arg(temp.path().join("missing"))
        .arg("-out")
        .arg(temp.path().join("out.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("proj");
    write_tree(&root, &[("x.txt", "x")]);
    fs::write(root.join(".zipignore"), "").unwrap();

    zipproject_cmd()
        .arg("-dir")
        .arg(&root)
        .arg("-out")
        .arg(temp.path().join("no_such_dir").join("out.zip"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Items to zip:"))
        .stderr(predicate::str::contains("Error writing archive"));
}
