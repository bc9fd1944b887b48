//! End-to-end integration tests for the timeline CLI.
//!
//! Drives the real binary through the full flow: init → add → views →
//! export → import, with the blob file location injected through the
//! environment.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tl_binary() -> String {
    env!("CARGO_BIN_EXE_tl").to_string()
}

/// Runs `tl` against the given timeline file.
fn tl(timeline: &Path, args: &[&str]) -> Output {
    Command::new(tl_binary())
        .env("TL_TIMELINE_PATH", timeline)
        .args(args)
        .output()
        .expect("failed to run tl")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: {}",
        stderr_of(output)
    );
}

/// Seeds a timeline with two overlapping labeled entries and one bare one.
fn seed(timeline: &Path) {
    assert_success(&tl(timeline, &["init", "--name", "Career"]));
    assert_success(&tl(
        timeline,
        &[
            "add", "--name", "Old job", "--start", "2020-01", "--end", "2020-06", "--label",
            "work", "--note", "first role",
        ],
    ));
    assert_success(&tl(
        timeline,
        &[
            "add", "--name", "New job", "--start", "2020-05", "--end", "2020-12", "--label",
            "work", "--label", "remote",
        ],
    ));
    assert_success(&tl(
        timeline,
        &["add", "--name", "Sabbatical", "--start", "2021-02", "--end", "2021-04"],
    ));
}

#[test]
fn test_init_creates_file_and_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");

    let output = tl(&timeline, &["init", "--name", "Career"]);
    assert_success(&output);
    assert!(stdout_of(&output).contains("Created timeline \"Career\""));
    assert!(timeline.exists());

    let again = tl(&timeline, &["init"]);
    assert!(!again.status.success());
    assert!(stderr_of(&again).contains("already exists"));
}

#[test]
fn test_list_shows_entries_sorted_with_durations() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    let output = tl(&timeline, &["list"]);
    assert_success(&output);
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Career"));
    assert!(stdout.contains("Jan 2020 - Jun 2020"));
    assert!(stdout.contains("6m"));
    assert!(stdout.contains("May 2020 - Dec 2020"));
    assert!(stdout.contains("8m"));
    assert!(stdout.contains("work, remote / —"));
    assert!(stdout.contains("first role"));

    // Sorted by start month, not insertion order.
    let old = stdout.find("Old job").unwrap();
    let new = stdout.find("New job").unwrap();
    let sabbatical = stdout.find("Sabbatical").unwrap();
    assert!(old < new && new < sabbatical);
}

#[test]
fn test_add_rejects_malformed_input() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");

    let bad_month = tl(
        &timeline,
        &["add", "--name", "Job", "--start", "January 2020"],
    );
    assert!(!bad_month.status.success());
    assert!(stderr_of(&bad_month).contains("invalid --start"));

    let reversed = tl(
        &timeline,
        &["add", "--name", "Job", "--start", "2020-06", "--end", "2020-01"],
    );
    assert!(!reversed.status.success());
    assert!(stderr_of(&reversed).contains("before start"));

    // Nothing was persisted.
    let list = tl(&timeline, &["list"]);
    assert_success(&list);
    assert!(stdout_of(&list).contains("No entries"));
}

#[test]
fn test_summary_merges_overlapping_label_ranges() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    let output = tl(&timeline, &["summary"]);
    assert_success(&output);
    let stdout = stdout_of(&output);

    // "work" spans Jan..Dec 2020 merged: 1y, not 6m + 8m.
    assert!(stdout.contains("work"), "{stdout}");
    assert!(stdout.contains("1y"), "{stdout}");
    assert!(!stdout.contains("1y2m"), "{stdout}");
    assert!(stdout.contains("remote"), "{stdout}");
    assert!(stdout.contains("8m"), "{stdout}");
}

#[test]
fn test_calendar_and_line_render_bars() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    let calendar = tl(&timeline, &["calendar"]);
    assert_success(&calendar);
    let calendar = stdout_of(&calendar);
    assert!(calendar.contains("2020"));
    assert!(calendar.contains("2021"));
    assert!(calendar.contains('█'));
    assert!(calendar.contains("Old job"));

    let line = tl(&timeline, &["line"]);
    assert_success(&line);
    let line = stdout_of(&line);
    assert!(line.contains("Old job (6m)"));
    assert!(line.contains("Sabbatical (3m)"));

    let vertical = tl(&timeline, &["line", "--vertical"]);
    assert_success(&vertical);
    let vertical = stdout_of(&vertical);
    assert!(vertical.contains("Jan 2020"));
    assert!(vertical.contains('█'));
}

#[test]
fn test_export_import_round_trip() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    let exported = tl(&timeline, &["export"]);
    assert_success(&exported);
    let blob = stdout_of(&exported);
    let blob = blob.trim();
    assert!(!blob.is_empty());

    // Import the blob into a fresh timeline file.
    let copy = temp.path().join("copy.tl");
    let imported = tl(&copy, &["import", blob]);
    assert_success(&imported);
    assert!(stdout_of(&imported).contains("Imported \"Career\" (3 entries)"));

    // Field-for-field: both stores list identically.
    let original_list = stdout_of(&tl(&timeline, &["list", "--json"]));
    let copy_list = stdout_of(&tl(&copy, &["list", "--json"]));
    assert_eq!(original_list, copy_list);
}

#[test]
fn test_import_rejects_garbage() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");

    let output = tl(&timeline, &["import", "!!not-a-blob!!"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("invalid timeline blob"));
}

#[test]
fn test_corrupt_store_falls_back_to_empty() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    std::fs::write(&timeline, "garbage bytes, not a blob").unwrap();

    let output = tl(&timeline, &["list"]);
    assert_success(&output);
    assert!(stdout_of(&output).contains("No entries"));
}

#[test]
fn test_edit_and_remove_accept_id_prefixes() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    // Pull a real id out of the JSON listing.
    let json = stdout_of(&tl(&timeline, &["list", "--json"]));
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    let id = rows[0]["id"].as_str().unwrap().to_string();
    let prefix = &id[..8];

    let edited = tl(&timeline, &["edit", prefix, "--name", "Renamed role"]);
    assert_success(&edited);
    let listed = stdout_of(&tl(&timeline, &["list"]));
    assert!(listed.contains("Renamed role"));
    assert!(!listed.contains("Old job"));

    let removed = tl(&timeline, &["remove", prefix]);
    assert_success(&removed);
    let listed = stdout_of(&tl(&timeline, &["list"]));
    assert!(!listed.contains("Renamed role"));
    assert!(listed.contains("New job"));
}

#[test]
fn test_rename_changes_the_list_header() {
    let temp = TempDir::new().unwrap();
    let timeline = temp.path().join("timeline.tl");
    seed(&timeline);

    assert_success(&tl(&timeline, &["rename", "Work History"]));
    let listed = stdout_of(&tl(&timeline, &["list"]));
    assert!(listed.contains("Work History"));
}
