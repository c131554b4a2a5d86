//! CLI integration tests.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dusk() -> Command {
    Command::cargo_bin("dusk").unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_is_reproducible_with_seed() {
    let first = dusk()
        .args(["roll", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = dusk()
        .args(["roll", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn roll_shows_both_dice_and_a_verdict() {
    dusk()
        .args(["roll", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hope "))
        .stdout(predicate::str::contains("Fear "))
        .stdout(predicate::str::contains("against difficulty 12"));
}

#[test]
fn roll_accepts_named_tier() {
    dusk()
        .args(["roll", "--seed", "3", "--tier", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("against difficulty 15"));
}

#[test]
fn roll_rejects_unknown_tier() {
    dusk()
        .args(["roll", "--tier", "impossible"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tier"));
}

#[test]
fn roll_applies_modifier() {
    // Same seed, shifted threshold: the modifier changes the total line.
    dusk()
        .args(["roll", "--seed", "3", "--modifier", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(modifier +2)"));
}

// ---------------------------------------------------------------------------
// new / sheet
// ---------------------------------------------------------------------------

#[test]
fn new_then_sheet_roundtrips() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");
    let data = data.to_str().unwrap();

    dusk()
        .args([
            "new", "Kael", "--class", "warrior", "--ancestry", "orc", "--data", data,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Character created."))
        .stdout(predicate::str::contains("Kael"));

    dusk()
        .args(["sheet", "--data", data])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kael"))
        .stdout(predicate::str::contains("warrior"))
        .stdout(predicate::str::contains("Combat Mastery"));
}

#[test]
fn new_character_supersedes_previous() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");
    let data = data.to_str().unwrap();

    dusk()
        .args([
            "new", "Old", "--class", "wizard", "--ancestry", "human", "--data", data,
        ])
        .assert()
        .success();
    dusk()
        .args([
            "new", "New", "--class", "ranger", "--ancestry", "elf", "--data", data,
        ])
        .assert()
        .success();

    dusk()
        .args(["sheet", "--data", data])
        .assert()
        .success()
        .stdout(predicate::str::contains("New"))
        .stdout(predicate::str::contains("Old").not());
}

#[test]
fn new_rejects_unknown_class() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");

    dusk()
        .args([
            "new",
            "Kael",
            "--class",
            "bard",
            "--ancestry",
            "orc",
            "--data",
            data.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown class"));
}

#[test]
fn sheet_without_character_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");

    dusk()
        .args(["sheet", "--data", data.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active character"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_opens_a_session_and_quits() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");
    let data = data.to_str().unwrap();

    dusk()
        .args([
            "new", "Kael", "--class", "warrior", "--ancestry", "orc", "--data", data,
        ])
        .assert()
        .success();

    dusk()
        .args(["play", "--data", data, "--seed", "1"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The adventure begins"))
        .stdout(predicate::str::contains("Farewell."));
}

#[test]
fn play_classifies_an_attack_and_rolls() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");
    let data = data.to_str().unwrap();

    dusk()
        .args([
            "new", "Kael", "--class", "warrior", "--ancestry", "orc", "--data", data,
        ])
        .assert()
        .success();

    dusk()
        .args(["play", "--data", data, "--seed", "1"])
        .write_stdin("I attack the orc\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A combat roll is called for (difficulty 12).",
        ))
        .stdout(predicate::str::contains("against difficulty 12"));
}

#[test]
fn play_travel_changes_the_scene() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");
    let data = data.to_str().unwrap();

    dusk()
        .args([
            "new", "Kael", "--class", "warrior", "--ancestry", "orc", "--data", data,
        ])
        .assert()
        .success();

    dusk()
        .args(["play", "--data", data, "--seed", "1"])
        .write_stdin("go to the tavern\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- The Tavern ---"))
        .stdout(predicate::str::contains("Scene: The Tavern"));
}

#[test]
fn play_without_character_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("duskfall.json");

    dusk()
        .args(["play", "--data", data.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active character"));
}
