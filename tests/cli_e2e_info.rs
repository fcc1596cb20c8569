//! End-to-end tests for the `info` subcommand.
//!
//! These tests invoke the actual CLI binary against the stub flatpak script
//! and validate the behavior of the `info` subcommand from a user's
//! perspective, including its exit codes.

#![cfg(unix)]

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_info_prints_the_full_record() {
    let temp = assert_fs::TempDir::new().unwrap();
    let stub = common::write_flatpak_stub(temp.path());

    let mut cmd = cargo_bin_cmd!("flatpak-remote");
    cmd.arg("--flatpak-command")
        .arg(&stub)
        .arg("info")
        .arg("flathub")
        .arg("x86_64")
        .arg("org.gnome.Recipes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ref: app/org.gnome.Recipes/x86_64/stable",
        ))
        .stdout(predicate::str::contains(common::STUB_COMMIT))
        .stdout(predicate::str::contains("Collection ID: org.flathub.Stable"))
        .stdout(predicate::str::contains("History (2 entries):"));
}

#[test]
fn test_info_json_includes_history_chain() {
    let temp = assert_fs::TempDir::new().unwrap();
    let stub = common::write_flatpak_stub(temp.path());

    let mut cmd = cargo_bin_cmd!("flatpak-remote");
    let assert = cmd
        .arg("--flatpak-command")
        .arg(&stub)
        .arg("info")
        .arg("flathub")
        .arg("x86_64")
        .arg("org.gnome.Recipes")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(record["ref"], "app/org.gnome.Recipes/x86_64/stable");
    assert_eq!(record["commit"], common::STUB_COMMIT);

    let history = record["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    // Entry 0 is parented on entry 1 and carries the owner's identity.
    assert_eq!(history[0]["parent_commit"], history[1]["commit"]);
    assert_eq!(history[0]["id"], "org.gnome.Recipes");
    // Metadata rides along verbatim.
    assert!(record["metadata"]
        .as_str()
        .unwrap()
        .starts_with("[Application]"));
}

#[test]
fn test_info_unknown_ref_exits_nonzero() {
    let temp = assert_fs::TempDir::new().unwrap();
    let stub = common::write_flatpak_stub(temp.path());

    let mut cmd = cargo_bin_cmd!("flatpak-remote");
    cmd.arg("--flatpak-command")
        .arg(&stub)
        .arg("info")
        .arg("flathub")
        .arg("x86_64")
        .arg("org.not.Listed")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_info_metadata_prints_raw_blob() {
    let temp = assert_fs::TempDir::new().unwrap();
    let stub = common::write_flatpak_stub(temp.path());

    let mut cmd = cargo_bin_cmd!("flatpak-remote");
    cmd.arg("--flatpak-command")
        .arg(&stub)
        .arg("info")
        .arg("flathub")
        .arg("x86_64")
        .arg("org.gnome.Recipes")
        .arg("--metadata")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[Application]"))
        .stdout(predicate::str::contains("name=org.gnome.Recipes"));
}

#[test]
fn test_info_missing_args_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("flatpak-remote");
    cmd.arg("info").arg("flathub").assert().code(2);
}
