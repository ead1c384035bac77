//! Integration tests for the `pb` CLI.
//!
//! Each test runs `pb` as a subprocess against a temp data directory and
//! verifies stdout and/or the files it leaves behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `pb` binary.
fn pb_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("pb");
    path
}

/// Run `pb` with the given args against `data_dir`, asserting success.
fn pb(data_dir: &Path, args: &[&str]) -> String {
    let output = Command::new(pb_bin())
        .arg("-D")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("failed to run pb");
    assert!(
        output.status.success(),
        "pb {:?} failed:\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Run `pb` expecting a non-zero exit, returning stderr.
fn pb_err(data_dir: &Path, args: &[&str]) -> String {
    let output = Command::new(pb_bin())
        .arg("-D")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("failed to run pb");
    assert!(!output.status.success(), "pb {:?} unexpectedly succeeded", args);
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Create a project and return its id.
fn create_project(data_dir: &Path, name: &str) -> String {
    let out = pb(data_dir, &["new", name, "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    parsed["id"].as_str().unwrap().to_string()
}

/// Add a node and return its id.
fn add_node(data_dir: &Path, project: &str, name: &str, parent: Option<&str>) -> String {
    let mut args = vec!["add", project, name, "--json"];
    if let Some(p) = parent {
        args.push("--parent");
        args.push(p);
    }
    let out = pb(data_dir, &args);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    parsed["id"].as_str().unwrap().to_string()
}

#[test]
fn new_then_projects_lists_the_project() {
    let tmp = TempDir::new().unwrap();
    let id = create_project(tmp.path(), "Hausbau");
    assert!(id.starts_with("proj_"));

    let out = pb(tmp.path(), &["projects", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], id);
    assert_eq!(rows[0]["name"], "Hausbau");
    assert_eq!(rows[0]["progress"], 0);
}

#[test]
fn show_prints_numbered_tree() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);
    let task = add_node(tmp.path(), &project, "Grundriss", Some(&phase));
    add_node(tmp.path(), &project, "Skizze", Some(&task));

    let out = pb(tmp.path(), &["show", &project]);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("Hausbau"));
    assert_eq!(lines[1], "1. Planung");
    assert_eq!(lines[2], "  1.1. Grundriss");
    assert_eq!(lines[3], "    1.1.1. Skizze");
}

#[test]
fn show_on_empty_project_prints_info_row() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Leer");

    let out = pb(tmp.path(), &["show", &project]);
    // Header plus exactly one informational row
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("Phasen"));
}

#[test]
fn rename_changes_the_stored_name() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planug", None);

    pb(tmp.path(), &["rename", &project, &phase, "Planung"]);

    let out = pb(tmp.path(), &["show", &project]);
    assert!(out.contains("1. Planung"));
    assert!(!out.contains("Planug"));
}

#[test]
fn done_toggles_and_marks_the_tree() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);
    let task = add_node(tmp.path(), &project, "Grundriss", Some(&phase));

    let out = pb(tmp.path(), &["done", &project, &task]);
    assert!(out.contains("done"));
    let out = pb(tmp.path(), &["show", &project]);
    assert!(out.contains("Grundriss \u{2713}"));

    let out = pb(tmp.path(), &["done", &project, &task]);
    assert!(out.contains("reopened"));
    let out = pb(tmp.path(), &["show", &project]);
    assert!(!out.contains('\u{2713}'));
}

#[test]
fn done_on_a_phase_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);

    let err = pb_err(tmp.path(), &["done", &project, &phase]);
    assert!(err.contains("done flag"));
}

#[test]
fn comment_lands_in_json_output_with_default_author() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);

    pb(tmp.path(), &["comment", &project, &phase, "sieht gut aus"]);

    let out = pb(tmp.path(), &["show", &project, "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let comments = parsed["phases"][0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["author"], "Gast");
    assert_eq!(comments[0]["text"], "sieht gut aus");
    assert!(comments[0]["timestamp"].as_i64().unwrap() > 0);
}

#[test]
fn subtask_nesting_is_capped() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);
    let task = add_node(tmp.path(), &project, "Grundriss", Some(&phase));
    let subtask = add_node(tmp.path(), &project, "Skizze", Some(&task));

    let err = pb_err(tmp.path(), &["add", &project, "Zu tief", "--parent", &subtask]);
    assert!(err.contains("cannot have children"));
}

#[test]
fn delete_removes_only_that_project() {
    let tmp = TempDir::new().unwrap();
    let first = create_project(tmp.path(), "Hausbau");
    let second = create_project(tmp.path(), "Umzug");

    pb(tmp.path(), &["delete", &first]);

    let out = pb(tmp.path(), &["projects", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], second);
}

#[test]
fn reset_force_wipes_projects_but_keeps_settings() {
    let tmp = TempDir::new().unwrap();
    create_project(tmp.path(), "Hausbau");
    fs::write(tmp.path().join("settings.toml"), "theme = \"dark\"\nlanguage = \"de\"\n").unwrap();

    let out = pb(tmp.path(), &["reset", "--force"]);
    assert!(out.contains("gel\u{f6}scht"));

    assert!(!tmp.path().join("projects.json").exists());
    assert!(tmp.path().join("settings.toml").exists());

    let list = pb(tmp.path(), &["projects", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert!(parsed.as_array().unwrap().is_empty());
}

#[test]
fn projects_file_keeps_browser_field_names() {
    let tmp = TempDir::new().unwrap();
    let project = create_project(tmp.path(), "Hausbau");
    let phase = add_node(tmp.path(), &project, "Planung", None);
    add_node(tmp.path(), &project, "Grundriss", Some(&phase));

    let raw = fs::read_to_string(tmp.path().join("projects.json")).unwrap();
    assert!(raw.contains("\"projectName\""));
    assert!(raw.contains("\"phaseName\""));
    assert!(raw.contains("\"taskName\""));
}

#[test]
fn unknown_project_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    let err = pb_err(tmp.path(), &["show", "proj_missing"]);
    assert!(err.contains("proj_missing"));
}
