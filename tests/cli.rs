//! End-to-end tests for the studyflow binary.
//!
//! Each test runs against its own temporary HOME so the session snapshot
//! and config never touch the real user directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyflow").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn add_then_list_shows_session() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["add", "Linear algebra", "--focus", "25m", "--cycles", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session created: Linear algebra"));

    studyflow(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Linear algebra"))
        .stdout(predicate::str::contains("25m × 0/2"));
}

#[test]
fn add_rejects_invalid_focus() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["add", "Bad", "--focus", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid focus duration"));

    studyflow(&home)
        .args(["add", "Bad", "--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 cycle"));
}

#[test]
fn add_without_home_fails_cleanly() {
    // Config and snapshot must resolve the same root; without HOME the
    // command errors instead of writing into the working directory.
    Command::cargo_bin("studyflow")
        .unwrap()
        .env_remove("HOME")
        .args(["add", "Math"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("home directory"));
}

#[test]
fn stats_rejects_unknown_period() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["stats", "--period", "weeek"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn list_empty_shows_hint() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No study sessions yet"));
}

#[test]
fn add_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".studyflow");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.yaml"),
        "timer:\n  focus_minutes: 50\n  total_cycles: 3\n",
    )
    .unwrap();

    studyflow(&home).args(["add", "Deep work"]).assert().success();

    studyflow(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("50m × 0/3"));
}

#[test]
fn json_output_round_trips_through_snapshot() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["add", "Math", "--category", "school", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focusTime\": 25"));

    let output = studyflow(&home)
        .args(["list", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["items"][0]["title"], "Math");
    assert_eq!(parsed["items"][0]["category"], "school");
    assert_eq!(parsed["items"][0]["completedCycles"], 0);

    // The snapshot file itself holds the same camelCase records.
    let snapshot =
        std::fs::read_to_string(home.path().join(".studyflow").join("sessions.json")).unwrap();
    assert!(snapshot.contains("\"focusTime\": 25"));
}

#[test]
fn delete_removes_session() {
    let home = TempDir::new().unwrap();

    let output = studyflow(&home)
        .args(["add", "Read", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = parsed["id"].as_str().unwrap().to_string();

    studyflow(&home)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    studyflow(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No study sessions yet"));
}

#[test]
fn delete_by_unique_prefix() {
    let home = TempDir::new().unwrap();

    let output = studyflow(&home)
        .args(["add", "Read", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let prefix = &parsed["id"].as_str().unwrap()[..8];

    studyflow(&home)
        .args(["delete", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
}

#[test]
fn delete_unknown_id_is_not_an_error() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["delete", "deadbeef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));
}

#[test]
fn show_displays_session_detail() {
    let home = TempDir::new().unwrap();

    let output = studyflow(&home)
        .args(["add", "Math", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let prefix = &parsed["id"].as_str().unwrap()[..8];

    studyflow(&home)
        .args(["show", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("Math"))
        .stdout(predicate::str::contains("25 minutes focus"));
}

#[test]
fn show_unknown_id_fails() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No session matching"));
}

#[test]
fn stats_counts_completed_minutes() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".studyflow");
    std::fs::create_dir_all(&config_dir).unwrap();

    // Seed a snapshot with recorded progress directly.
    let now = chrono::Utc::now().to_rfc3339();
    std::fs::write(
        config_dir.join("sessions.json"),
        format!(
            r#"[{{
                "id": "4f4df3e4-6f86-4f30-9b59-a9f08e1ba17e",
                "title": "Math",
                "category": "school",
                "focusTime": 25,
                "breakTime": 5,
                "totalCycles": 4,
                "completedCycles": 2,
                "completed": false,
                "createdAt": "{now}"
            }}]"#
        ),
    )
    .unwrap();

    studyflow(&home)
        .args(["stats", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Studied: 50 minutes"))
        .stdout(predicate::str::contains("school"));

    let output = studyflow(&home)
        .args(["stats", "--period", "all", "--output", "json"])
        .output()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_minutes"], 50);
    assert_eq!(parsed["by_category"]["school"], 50);
}

#[test]
fn legacy_snapshot_records_get_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".studyflow");
    std::fs::create_dir_all(&config_dir).unwrap();

    // Records written before cycles and categories existed.
    std::fs::write(
        config_dir.join("sessions.json"),
        r#"[{
            "id": "4f4df3e4-6f86-4f30-9b59-a9f08e1ba17e",
            "title": "Old session",
            "focusTime": 30,
            "breakTime": 5,
            "createdAt": "2025-06-01T10:00:00Z"
        }]"#,
    )
    .unwrap();

    studyflow(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Old session"))
        .stdout(predicate::str::contains("30m × 0/1"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studyflow"));
}
