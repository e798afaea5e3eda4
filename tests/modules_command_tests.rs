//! Modules command integration tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn viltkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("viltkit").unwrap();
    // Always ignore any developer VILTKIT_PROJECT overrides during tests
    cmd.env_remove("VILTKIT_PROJECT");
    cmd
}

const PANEL_MANIFEST: &str = r#"{
    "name": "viltkit/panel",
    "version": "1.2.0",
    "description": "Admin panel core",
    "require": {"php": "^8.2"}
}"#;

// ============================================================================
// Empty-state tests
// ============================================================================

#[test]
fn test_modules_reports_missing_modules_directory() {
    let project = common::TestProject::new();

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No viltkit modules directory found.",
        ));
}

#[test]
fn test_modules_reports_empty_modules_directory() {
    let project = common::TestProject::new();
    project.write_file("packages/viltkit/.gitkeep", "");

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("No viltkit modules found."));
}

// ============================================================================
// Listing tests
// ============================================================================

#[test]
fn test_modules_lists_manifest_fields() {
    let project = common::TestProject::new();
    project.add_module("panel", Some(PANEL_MANIFEST));

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed modules (1):"))
        .stdout(predicate::str::contains("panel"))
        .stdout(predicate::str::contains("Package: viltkit/panel"))
        .stdout(predicate::str::contains("Version: 1.2.0"))
        .stdout(predicate::str::contains("Description: Admin panel core"));
}

#[test]
fn test_modules_lists_in_name_order() {
    let project = common::TestProject::new();
    project.add_module("widgets", Some(r#"{"name": "viltkit/widgets"}"#));
    project.add_module("panel", Some(PANEL_MANIFEST));

    let assert = viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed modules (2):"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let panel_at = stdout.find("panel").unwrap();
    let widgets_at = stdout.find("widgets").unwrap();
    assert!(panel_at < widgets_at, "expected panel before widgets");
}

#[test]
fn test_modules_skips_directories_without_manifest() {
    let project = common::TestProject::new();
    project.add_module("panel", Some(PANEL_MANIFEST));
    project.add_module("scratch", None);

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed modules (1):"))
        .stdout(predicate::str::contains("scratch").not());
}

#[test]
fn test_modules_defaults_missing_fields_to_na() {
    let project = common::TestProject::new();
    project.add_module("bare", Some(r#"{"name": "viltkit/bare"}"#));

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: N/A"))
        .stdout(predicate::str::contains("Description: N/A"));
}

#[test]
fn test_modules_fails_on_malformed_manifest() {
    let project = common::TestProject::new();
    project.add_module("broken", Some("{ not json"));

    viltkit_cmd()
        .current_dir(&project.path)
        .arg("modules")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}
