//! End-to-end tests for the agrisense binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command wired to an isolated data directory
fn agrisense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agrisense").unwrap();
    cmd.env("AGRISENSE_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn guides_lists_every_guide() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .arg("guides")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvest-timing"))
        .stdout(predicate::str::contains("pest-management"))
        .stdout(predicate::str::contains("soil-moisture"))
        .stdout(predicate::str::contains("weed-control"))
        .stdout(predicate::str::contains("fertilizer-use"))
        .stdout(predicate::str::contains("crop-rotation"));
}

#[test]
fn guides_honors_language_flag() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["guides", "--lang", "tl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mga gabay na makukuha"));
}

#[test]
fn show_prints_all_steps() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["show", "harvest-timing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 / 5"))
        .stdout(predicate::str::contains("Step 5 / 5"));
}

#[test]
fn show_single_step_in_tagalog() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["show", "soil-moisture", "--lang", "tl", "--step", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hakbang 1 / 5"));
}

#[test]
fn show_unknown_guide_fails() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["show", "irrigation"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("irrigation"));
}

#[test]
fn show_out_of_range_step_fails() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["show", "harvest-timing", "--step", "99"])
        .assert()
        .failure();
}

#[test]
fn unknown_language_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .args(["guides", "--lang", "de"])
        .assert()
        .failure();
}

#[test]
fn faq_prints_questions_and_contacts() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .arg("faq")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q:"))
        .stdout(predicate::str::contains("mailto:support@agrisense.ph"));
}

#[test]
fn config_shows_isolated_paths() {
    let dir = TempDir::new().unwrap();
    agrisense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn saved_locale_preference_is_used_by_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"locale":"tl"}"#).unwrap();
    agrisense(&dir)
        .arg("guides")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mga gabay na makukuha"));
}
