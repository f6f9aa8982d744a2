//! Tests against real GitHub repositories.
//!
//! These need network access and a `git` executable, so they only run with
//! `cargo test --features integration-tests`.

#![cfg(feature = "integration-tests")]

mod common;

use common::prelude::*;
use sew_source::error::Error;
use sew_source::repository::RepositoryFetcher;

#[test]
fn test_clone_public_repository() {
    let temp = TempDir::new().unwrap();

    let location = RepositoryFetcher::new()
        .fetch("https://github.com/octocat/Spoon-Knife.git", temp.path())
        .unwrap();

    assert_eq!(location.name, "Spoon-Knife");
    assert!(location.path.join("README.md").is_file());
}

#[test]
fn test_clone_missing_repository_is_classified() {
    let temp = TempDir::new().unwrap();

    let err = RepositoryFetcher::new()
        .fetch(
            "https://github.com/octocat/this-repository-does-not-exist-4c1d",
            temp.path(),
        )
        .unwrap_err();

    // GitHub may answer with an auth challenge or a 404 depending on the
    // client, so only the error kind is checked.
    assert!(matches!(err, Error::Fetch { .. }), "unexpected: {err:?}");
}

#[test]
fn test_cli_end_to_end() {
    let temp = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("sew-source");

    cmd.arg("-r")
        .arg("https://github.com/octocat/Spoon-Knife")
        .arg("-o")
        .arg(temp.path())
        .arg("--color")
        .arg("never")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[OK] Done!"));

    temp.child("Spoon-Knife/1_Spoon-Knife.txt")
        .assert(predicate::str::contains("Source File 1: README.md"));
}
