//! Integration tests for workout, stretch and coach commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{bracketed_id, init, wellnest_at, wellnest_cmd};

const TODAY: &str = "2025-09-01";

/// Exercise ids of a `show` listing, in display order
fn listed_ids(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim_start();
            let rest = line
                .strip_prefix("[x] ")
                .or_else(|| line.strip_prefix("[ ] "))
                .or_else(|| line.split_once(". ").map(|(_, rest)| rest))?;
            rest.split_whitespace().next().map(str::to_string)
        })
        .collect()
}

fn show(temp: &TempDir, what: &str) -> Vec<u8> {
    wellnest_at(temp.path(), TODAY)
        .args([what, "show"])
        .output()
        .unwrap()
        .stdout
}

#[test]
fn test_completing_all_exercises_completes_workout() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let ids = listed_ids(&show(&temp, "workout"));
    assert_eq!(ids.len(), 4);

    for id in &ids[..3] {
        wellnest_at(temp.path(), TODAY)
            .args(["workout", "done", id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Workout complete!").not());
    }
    wellnest_at(temp.path(), TODAY)
        .args(["workout", "done", &ids[3]])
        .assert()
        .success()
        .stdout(predicate::str::contains("4/4 done"))
        .stdout(predicate::str::contains("Workout complete!"));

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "done", &ids[0], "--undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3/4 done"))
        .stdout(predicate::str::contains("Workout complete!").not());
}

#[test]
fn test_unknown_exercise_is_not_found() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "done", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No exercise with id 'nope'"));
}

#[test]
fn test_add_and_select_workout() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let output = wellnest_at(temp.path(), TODAY)
        .args(["workout", "add", "Legs"])
        .args(["--exercise", "Squats:60:3:12", "--exercise", "Lunges:45"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = bracketed_id(&output.stdout);

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "select", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current workout: Legs"));

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Legs"))
        .stdout(predicate::str::contains("3x12"))
        .stdout(predicate::str::contains("0:45"));

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "select", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Full Body"));

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "select", "missing"])
        .assert()
        .code(4);
}

#[test]
fn test_bad_exercise_argument_is_rejected() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    wellnest_at(temp.path(), TODAY)
        .args(["workout", "add", "Legs", "--exercise", "Squats"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("NAME:SECONDS"));
}

#[test]
fn test_timer_completes_exercise() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let output = wellnest_at(temp.path(), TODAY)
        .args(["workout", "add", "Quick", "--exercise", "Blink:1"])
        .output()
        .unwrap();
    let routine_id = bracketed_id(&output.stdout);
    wellnest_at(temp.path(), TODAY)
        .args(["workout", "select", &routine_id])
        .assert()
        .success();

    let exercise_id = listed_ids(&show(&temp, "workout"))[0].clone();
    wellnest_at(temp.path(), TODAY)
        .args(["workout", "timer", &exercise_id, "--complete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blink complete!"))
        .stdout(predicate::str::contains("Workout complete!"));
}

#[test]
fn test_stretch_move_renumbers() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let ids = listed_ids(&show(&temp, "stretch"));
    assert_eq!(ids.len(), 4);

    let output = wellnest_at(temp.path(), TODAY)
        .args(["stretch", "move", &ids[0], &ids[2]])
        .output()
        .unwrap();
    assert!(output.status.success());
    let moved = listed_ids(&output.stdout);
    assert_eq!(
        moved,
        vec![ids[1].clone(), ids[2].clone(), ids[0].clone(), ids[3].clone()]
    );

    let raw = fs::read_to_string(temp.path().join(".wellnest/wellness-storage.json")).unwrap();
    for order in 0..4 {
        assert!(raw.contains(&format!("\"order\": {}", order)));
    }

    wellnest_at(temp.path(), TODAY)
        .args(["stretch", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ").and(predicate::str::contains("Shoulder Rolls")));
}

#[test]
fn test_stretch_add_select_and_run() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let output = wellnest_at(temp.path(), TODAY)
        .args(["stretch", "add", "Desk", "--exercise", "Wrist Circles:1"])
        .output()
        .unwrap();
    let id = bracketed_id(&output.stdout);

    wellnest_at(temp.path(), TODAY)
        .args(["stretch", "select", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current stretch routine: Desk"));

    wellnest_at(temp.path(), TODAY)
        .args(["stretch", "run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrist Circles"))
        .stdout(predicate::str::contains("Stretch routine complete!"));
}

#[test]
fn test_coach_canned_reply() {
    wellnest_cmd()
        .args(["coach", "Hello", "coach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I support your wellness today?"));
}

#[test]
fn test_coach_without_backend_fails() {
    wellnest_cmd()
        .args(["coach", "which", "stretch", "helps", "my", "back?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no completion backend is configured"));
}
