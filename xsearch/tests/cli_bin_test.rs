//! End-to-end tests of the compiled binary.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn xsearch() -> Command {
    Command::cargo_bin("xsearch").unwrap()
}

#[test]
fn test_help_shows_usage() {
    xsearch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("FILTER_XPATH"));
}

#[test]
fn test_missing_filter_fails() {
    xsearch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILTER_XPATH"));
}

#[test]
fn test_nonexistent_dir_fails_with_message() {
    xsearch()
        .args(["-d", "/nonexistent/path", "//r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_report_on_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r><x>1</x></r>").unwrap();
    fs::write(dir.path().join("b.xml"), "<r><x>2</x></r>").unwrap();

    xsearch()
        .args(["-d"])
        .arg(dir.path())
        .args(["--quiet", "//r", "x/text()"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x/text()\n1\n2\n"));
}

#[test]
fn test_zero_matches_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r/>").unwrap();

    xsearch()
        .args(["-d"])
        .arg(dir.path())
        .args(["--quiet", "//nomatch"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_corrupt_file_warns_but_succeeds() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r><x>1</x></r>").unwrap();
    fs::write(dir.path().join("broken.xml"), "<r><oops>").unwrap();

    xsearch()
        .args(["-d"])
        .arg(dir.path())
        .args(["--quiet", "//r", "x/text()"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"))
        .stderr(predicate::str::contains("broken.xml"));
}

#[test]
fn test_invalid_xpath_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r/>").unwrap();

    xsearch()
        .args(["-d"])
        .arg(dir.path())
        .args(["//r["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid XPath expression"));
}
