//! Integration tests for the Lattice CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a lattice command
fn lattice() -> Command {
    Command::cargo_bin("lattice").unwrap()
}

/// Helper to initialize a single-project setup in a temp directory
fn setup_single_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .args(["init", "--defaults"])
        .assert()
        .success();
    tmp
}

/// Helper to lay out a pnpm monorepo with a root lattice.json
fn setup_monorepo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("package.json"),
        r#"{"name": "repo", "private": true}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("pnpm-workspace.yaml"),
        "packages:\n  - 'packages/*'\n  - 'apps/*'\n",
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("apps/web")).unwrap();
    lattice()
        .current_dir(tmp.path())
        .args(["init", "--defaults"])
        .assert()
        .success();
    tmp
}

fn patch_config<F: FnOnce(&mut serde_json::Value)>(dir: &Path, patch: F) {
    let path = dir.join("lattice.json");
    let mut config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    patch(&mut config);
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    lattice()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("component scaffolding"));
}

#[test]
fn test_version_displays() {
    lattice()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lattice"));
}

#[test]
fn test_unknown_command_fails() {
    lattice()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_no_subcommand_prints_overview() {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands"));
}

#[test]
fn test_completions_generate() {
    lattice()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lattice"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_defaults_creates_single_project_structure() {
    let tmp = TempDir::new().unwrap();

    lattice()
        .current_dir(tmp.path())
        .args(["init", "--defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lattice.json"));

    assert!(tmp.path().join("lattice.json").exists());
    assert!(tmp.path().join("src/components/ui").is_dir());
    assert!(tmp.path().join("src/lib").is_dir());
    assert!(tmp.path().join("src/styles/globals.css").exists());

    let config = fs::read_to_string(tmp.path().join("lattice.json")).unwrap();
    assert!(config.contains("\"@/components\""));
    assert!(config.contains("\"@/lib/utils\""));
}

#[test]
fn test_init_defaults_uses_v4_globals() {
    let tmp = setup_single_project();
    let css = fs::read_to_string(tmp.path().join("src/styles/globals.css")).unwrap();
    assert!(css.contains("@import \"tailwindcss\""));
}

#[test]
fn test_init_v3_uses_tailwind_directives() {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .args(["init", "--tailwind-version", "3"])
        .assert()
        .success();

    let css = fs::read_to_string(tmp.path().join("src/styles/globals.css")).unwrap();
    assert!(css.contains("@tailwind base;"));

    let config = fs::read_to_string(tmp.path().join("lattice.json")).unwrap();
    assert!(config.contains("\"version\": \"3\""));
    assert!(config.contains("tailwind.config.js"));
}

#[test]
fn test_init_without_force_keeps_existing_config() {
    let tmp = setup_single_project();
    patch_config(tmp.path(), |config| {
        config["style"] = serde_json::json!("custom");
    });

    lattice()
        .current_dir(tmp.path())
        .args(["init", "--defaults"])
        .assert()
        .success();

    let config = fs::read_to_string(tmp.path().join("lattice.json")).unwrap();
    assert!(config.contains("custom"));
}

#[test]
fn test_init_force_overwrites_config() {
    let tmp = setup_single_project();
    patch_config(tmp.path(), |config| {
        config["style"] = serde_json::json!("custom");
    });

    lattice()
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let config = fs::read_to_string(tmp.path().join("lattice.json")).unwrap();
    assert!(!config.contains("custom"));
}

#[test]
fn test_init_in_monorepo_creates_ui_package() {
    let tmp = setup_monorepo();

    assert!(tmp.path().join("packages/ui/src/components").is_dir());
    assert!(tmp.path().join("packages/ui/src/hooks").is_dir());
    assert!(tmp.path().join("packages/ui/package.json").exists());
    assert!(tmp
        .path()
        .join("packages/ui/src/styles/globals.css")
        .exists());

    let config = fs::read_to_string(tmp.path().join("lattice.json")).unwrap();
    assert!(config.contains("@workspace/ui/components"));
}

#[test]
fn test_init_monorepo_flag_without_markers() {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .args(["init", "--monorepo"])
        .assert()
        .success();

    assert!(tmp.path().join("packages/ui/package.json").exists());
}

#[test]
fn test_init_appends_to_existing_css_without_force() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src/styles")).unwrap();
    fs::write(
        tmp.path().join("src/styles/globals.css"),
        "/* my existing styles */\n",
    )
    .unwrap();

    lattice()
        .current_dir(tmp.path())
        .args(["init", "--defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual integration required"));

    let css = fs::read_to_string(tmp.path().join("src/styles/globals.css")).unwrap();
    assert!(css.contains("my existing styles"));
    assert!(css.contains("@import \"tailwindcss\""));
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_add_without_config_fails() {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .args(["add", "spinner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lattice init"));
}

#[test]
fn test_add_unknown_component_fails() {
    let tmp = setup_single_project();
    lattice()
        .current_dir(tmp.path())
        .args(["add", "carousel-of-doom", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an available component"));
}

#[test]
fn test_add_copies_component_and_registry_dependencies() {
    let tmp = setup_single_project();

    lattice()
        .current_dir(tmp.path())
        .args(["add", "kbd", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kbd.tsx"));

    // kbd itself lands at the ui alias, its utils dependency at the lib alias
    assert!(tmp.path().join("src/components/ui/kbd.tsx").exists());
    assert!(tmp.path().join("src/lib/utils.ts").exists());
}

#[test]
fn test_add_spinner_appends_keyframes_once() {
    let tmp = setup_single_project();
    let css_path = tmp.path().join("src/styles/globals.css");

    lattice()
        .current_dir(tmp.path())
        .args(["add", "spinner", "--skip-install"])
        .assert()
        .success();

    let css = fs::read_to_string(&css_path).unwrap();
    assert!(css.contains("/* spinner keyframes */"));
    assert!(css.contains("@keyframes ring"));

    // Re-adding must not duplicate the block
    lattice()
        .current_dir(tmp.path())
        .args(["add", "spinner", "--skip-install"])
        .assert()
        .success();

    let css = fs::read_to_string(&css_path).unwrap();
    assert_eq!(css.matches("/* spinner keyframes */").count(), 1);
}

#[test]
fn test_add_keeps_use_client_when_rsc_enabled() {
    let tmp = setup_single_project();
    // --defaults enables RSC
    lattice()
        .current_dir(tmp.path())
        .args(["add", "dots", "--skip-install"])
        .assert()
        .success();

    let dots = fs::read_to_string(tmp.path().join("src/components/ui/dots.tsx")).unwrap();
    assert!(dots.starts_with("'use client'"));
}

#[test]
fn test_add_strips_use_client_when_rsc_disabled() {
    let tmp = setup_single_project();
    patch_config(tmp.path(), |config| {
        config["rsc"] = serde_json::json!(false);
    });

    lattice()
        .current_dir(tmp.path())
        .args(["add", "dots", "--skip-install"])
        .assert()
        .success();

    let dots = fs::read_to_string(tmp.path().join("src/components/ui/dots.tsx")).unwrap();
    assert!(!dots.contains("use client"));
    assert!(dots.starts_with("import * as React"));
}

#[test]
fn test_add_in_monorepo_targets_shared_ui_package() {
    let tmp = setup_monorepo();

    // Invoked from a sub-package, the files still land in packages/ui
    lattice()
        .current_dir(tmp.path().join("apps/web"))
        .args(["add", "kbd", "--skip-install"])
        .assert()
        .success();

    assert!(tmp.path().join("packages/ui/components/ui/kbd.tsx").exists());
    assert!(tmp.path().join("packages/ui/lib/utils.ts").exists());
}

#[test]
fn test_add_in_monorepo_prints_import_hint() {
    let tmp = setup_monorepo();

    lattice()
        .current_dir(tmp.path())
        .args(["add", "kbd", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@workspace/ui/components/ui/kbd"));
}

// ============================================================================
// List / Setup Command Tests
// ============================================================================

#[test]
fn test_list_shows_shipped_components() {
    lattice()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("spinner"))
        .stdout(predicate::str::contains("kbd"))
        .stdout(predicate::str::contains("dots"))
        .stdout(predicate::str::contains("utils"));
}

#[test]
fn test_list_plain_prints_names_only() {
    lattice()
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dots\nkbd\nspinner\nutils"));
}

#[test]
fn test_setup_without_tailwind_suggests_install() {
    let tmp = TempDir::new().unwrap();
    lattice()
        .current_dir(tmp.path())
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("TailwindCSS not found"));
}

#[test]
fn test_setup_detects_installed_tailwind() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), r#"{"name": "p"}"#).unwrap();
    let tw = tmp.path().join("node_modules/tailwindcss");
    fs::create_dir_all(&tw).unwrap();
    fs::write(
        tw.join("package.json"),
        r#"{"name": "tailwindcss", "version": "4.0.6"}"#,
    )
    .unwrap();

    lattice()
        .current_dir(tmp.path())
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("v4.x detected"));
}

#[test]
fn test_cwd_flag_redirects_detection() {
    let tmp = setup_single_project();

    lattice()
        .args(["--cwd", tmp.path().to_str().unwrap(), "add", "dots", "--skip-install"])
        .assert()
        .success();

    assert!(tmp.path().join("src/components/ui/dots.tsx").exists());
}
