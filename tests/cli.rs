#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn slots_lists_the_whole_week() {
    Command::cargo_bin("creneaux-cli")
        .unwrap()
        .arg("slots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday - Morning"))
        .stdout(predicate::str::contains("Sunday - Evening"));
}

#[test]
fn generate_prints_a_row_per_employee() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("schedule.json");
    Command::cargo_bin("creneaux-cli")
        .unwrap()
        .args([
            "generate",
            "--pref",
            "Alice=Monday - Morning;Monday - Afternoon",
            "--pref",
            "Bob=Monday-Morning",
            "--seed",
            "42",
            "--out-json",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice | "))
        .stdout(predicate::str::contains("Bob | Monday - Morning"));
    assert!(fs::read_to_string(&out).unwrap().contains("Alice"));
}

#[test]
fn generate_without_preferences_warns() {
    Command::cargo_bin("creneaux-cli")
        .unwrap()
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no preferences"));
}

#[test]
fn check_reports_unrequested_slot() {
    let dir = tempdir().unwrap();
    let prefs = dir.path().join("prefs.csv");
    let schedule = dir.path().join("schedule.json");
    fs::write(&prefs, "name,slots\nAlice,Monday - Morning\n").unwrap();
    fs::write(&schedule, r#"{ "Alice": ["Friday - Evening"] }"#).unwrap();

    Command::cargo_bin("creneaux-cli")
        .unwrap()
        .arg("check")
        .arg("--prefs")
        .arg(&prefs)
        .arg("--assignment")
        .arg(&schedule)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("slot not requested | Alice | Friday - Evening"));
}
