//! CLI end-to-end tests
//!
//! Tests for the strive-images command-line interface.

mod common;

use assert_cmd::prelude::*;
use common::{category_image, images_at, total_images, TestStore};
use predicates::prelude::*;
use std::process::Command;

/// Get a command for the strive-images binary
#[allow(deprecated)]
fn strive_cmd() -> Command {
    Command::cargo_bin("strive-images").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = strive_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = strive_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("strive-images"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = strive_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strive-images"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = strive_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_run_help() {
    let mut cmd = strive_cmd();
    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--write-mode"));
}

#[test]
fn test_cli_run_rejects_unknown_mode() {
    let mut cmd = strive_cmd();
    cmd.args(["run", "--mode", "psychic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_resolve_pattern_key() {
    let mut cmd = strive_cmd();
    cmd.args(["resolve", "Men's Jackets_on.jpg", "çadır_iç.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpine Explorer Insulated Jacket"))
        .stdout(predicate::str::contains("View: front"))
        .stdout(predicate::str::contains("Explorer 4-Person Tent"))
        .stdout(predicate::str::contains("View: inside"));
}

#[test]
fn test_cli_resolve_unresolved_and_generated() {
    let mut cmd = strive_cmd();
    cmd.args(["resolve", "holiday.jpg", "product_7_3.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: unresolved"))
        .stdout(predicate::str::contains("Generated: product 7 order 3"));
}

#[test]
fn test_cli_resolve_json() {
    let mut cmd = strive_cmd();
    let output = cmd
        .args(["resolve", "--json", "IMG_0423.jpg"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["file"], "IMG_0423.jpg");
    assert_eq!(json[0]["resolution"]["strategy"], "special_case");
    assert_eq!(json[0]["resolution"]["view"], "inside");
    assert_eq!(json[0]["display_order"], 2);
    assert!(json[0]["generated"].is_null());
}

#[test]
fn test_cli_validate_defaults() {
    let mut cmd = strive_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("Category mappings: 6"));
}

#[test]
fn test_cli_validate_config_file() {
    let store = TestStore::new();
    let config = store.write_config("[products]\nmode = \"generated\"\n");

    let mut cmd = strive_cmd();
    cmd.arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Product mode: generated (replace)"));
}

#[test]
fn test_cli_validate_rejects_bad_config() {
    let store = TestStore::new();
    let config = store.write_config("[products.view_orders]\nback = 0\n");

    let mut cmd = strive_cmd();
    cmd.arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_cli_run_commits() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    store.add_image("ayakkabı_yan.jpg");
    let config = store.write_config("");

    let mut cmd = strive_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Categories: 1 updated"))
        .stdout(predicate::str::contains("1 imported"))
        .stdout(predicate::str::contains("Database changes committed"));

    let conn = store.conn();
    assert_eq!(images_at(&conn, 3, 2), 1);
    let (data, _) = category_image(&conn, "Men's Jackets");
    assert!(data.is_some());
}

#[test]
fn test_cli_run_overrides_and_json() {
    let store = TestStore::new();
    store.add_image("product_6_1.jpg");

    let mut cmd = strive_cmd();
    let output = cmd
        .arg("run")
        .arg("--database")
        .arg(&store.db_path)
        .arg("--images")
        .arg(&store.images)
        .args(["--mode", "generated", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["products"]["mode"], "generated");
    assert_eq!(json["products"]["imported"], 1);
    assert_eq!(json["schema"]["executed"], 4);
    assert_eq!(json["committed"], true);

    assert_eq!(images_at(&store.conn(), 6, 1), 1);
}

#[test]
fn test_cli_run_dry_run_writes_nothing() {
    let store = TestStore::new();
    store.add_image("tamir seti.jpg");

    let mut cmd = strive_cmd();
    cmd.arg("run")
        .arg("--database")
        .arg(&store.db_path)
        .arg("--images")
        .arg(&store.images)
        .args(["--no-schema", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema: not applied"))
        .stdout(predicate::str::contains("rolled back"));

    assert_eq!(total_images(&store.conn()), 0);
}

#[test]
fn test_cli_run_fails_without_database() {
    let store = TestStore::new();
    let missing = store.path().join("no-such-dir").join("strive.db");

    let mut cmd = strive_cmd();
    cmd.arg("run")
        .arg("--database")
        .arg(&missing)
        .arg("--images")
        .arg(&store.images)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Summary").not())
        .stderr(predicate::str::contains("Database connection failed"));
}

#[test]
fn test_cli_apply_schema_bundled() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("fresh.db");

    let mut cmd = strive_cmd();
    cmd.arg("apply-schema")
        .arg("--database")
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 executed, 0 failed"));

    assert!(db_path.exists());
}

#[test]
fn test_cli_apply_schema_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = strive_cmd();
    cmd.arg("apply-schema")
        .arg(dir.path().join("missing.sql"))
        .arg("--database")
        .arg(dir.path().join("fresh.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("SQL file not readable"));
}

#[test]
fn test_cli_run_failed_commit_exits_non_zero() {
    let store = TestStore::new();
    store.add_image("1.jpg");
    let schema = store.write_deferred_violation_schema();

    let mut cmd = strive_cmd();
    cmd.arg("run")
        .arg("--database")
        .arg(&store.db_path)
        .arg("--images")
        .arg(&store.images)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("NOT committed"))
        .stderr(predicate::str::contains("not committed"));

    let (data, _) = category_image(&store.conn(), "Men's Jackets");
    assert!(data.is_none());
}
