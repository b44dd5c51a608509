//! Integration tests for the sitecheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MARKER: &str = r#"{"vertical":"hvac","name":"Acme","category":"home-services","initializedAt":"2024-01-01"}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup_workspace(site_config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".vertical", MARKER);
    write(temp.path(), "src/config/vertical.ts", "export const verticalConfig = {};");
    write(temp.path(), "src/config/site.ts", site_config);
    write(temp.path(), "public/favicon.svg", "<svg/>");
    temp
}

fn sitecheck(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("readiness"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("sitecheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_uninitialized_workspace_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    sitecheck(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[missing-initialization]"))
        .stdout(predicate::str::contains("Run: npm run launch <vertical>"));
    Ok(())
}

#[test]
fn cli_placeholders_pass_with_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace(r#"export const siteConfig = { url: "https://example.com" };"#);
    sitecheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertical:    Acme (hvac)"))
        .stderr(predicate::str::contains(
            "warning[placeholder-detected]: Contains placeholder: example.com domain",
        ))
        .stderr(predicate::str::contains("Validation PASSED with warnings"));
    Ok(())
}

#[test]
fn cli_strict_fails_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace(r#"export const siteConfig = { url: "https://example.com" };"#);
    sitecheck(temp.path()).arg("--strict").assert().failure().code(1);
    Ok(())
}

#[test]
fn cli_clean_workspace_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace(r#"export const siteConfig = { url: "https://acme.test" };"#);
    write(temp.path(), "public/images/logo.png", "png");
    write(temp.path(), "public/og-image.png", "png");

    sitecheck(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Validation PASSED"))
        .stderr(predicate::str::contains("warning").not());
    Ok(())
}

#[test]
fn cli_missing_required_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    fs::remove_file(temp.path().join("public/favicon.svg"))?;

    sitecheck(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error[missing-required-file]: Favicon is missing (required)",
        ))
        .stderr(predicate::str::contains("Validation FAILED"));
    Ok(())
}

#[test]
fn cli_missing_vertical_config_names_force_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    fs::remove_file(temp.path().join("src/config/vertical.ts"))?;

    sitecheck(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[missing-vertical-config]"))
        .stdout(predicate::str::contains("Run: npm run launch hvac --force"));
    Ok(())
}

#[test]
fn cli_malformed_marker_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    write(temp.path(), ".vertical", "{ not json");

    sitecheck(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed vertical marker"));
    Ok(())
}

#[test]
fn cli_unreadable_project_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    sitecheck(temp.path())
        .args(["--project", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read workspace"));
    Ok(())
}

#[test]
fn cli_project_flag_selects_workspace() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = setup_workspace("export const siteConfig = {};");
    let elsewhere = TempDir::new()?;

    sitecheck(elsewhere.path())
        .arg("--project")
        .arg(workspace.path())
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace(r#"phone: "(555) 010-0000""#);
    let output = sitecheck(temp.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["outcome"], "pass_with_warnings");
    assert_eq!(parsed["marker"]["vertical"], "hvac");
    assert_eq!(parsed["summary"]["warnings"], 3);
    assert_eq!(parsed["findings"][2]["category"], "placeholder-detected");
    Ok(())
}

#[test]
fn cli_bad_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    write(temp.path(), ".sitecheck.yml", "unknown_key: true\n");

    sitecheck(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_json_strict_reports_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace(r#"export const siteConfig = { url: "https://example.com" };"#);
    let output = sitecheck(temp.path())
        .args(["--format", "json", "--strict"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["outcome"], "pass_with_warnings");
    assert_eq!(parsed["success"], false);
    assert_eq!(parsed["exit_code"], 1);
    Ok(())
}

#[test]
fn cli_json_malformed_marker_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    write(temp.path(), ".vertical", "{");

    let output = sitecheck(temp.path())
        .args(["--format", "json"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["outcome"], "fail");
    assert_eq!(parsed["suggestion"], "Run: npm run launch <vertical> --force");
    Ok(())
}

#[test]
fn cli_json_ignores_silent_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_workspace("export const siteConfig = {};");
    let output = sitecheck(temp.path())
        .args(["--format", "json", "-qq"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["marker"]["vertical"], "hvac");
    Ok(())
}
