use crate::common::textfile;
use predicates::prelude::*;

#[test]
fn shows_help() {
    textfile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("textfile"));
}

#[test]
fn no_subcommand_prints_usage() {
    textfile()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("view"));
}

#[test]
fn rejects_unknown_template() {
    textfile()
        .args(["create", "x.txt", "--template", "letter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
