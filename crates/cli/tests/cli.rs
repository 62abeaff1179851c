//! Command-line behavior of the `gilded-rose` driver.

mod common;

use common::gilded_rose;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_inventory(tmp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = tmp.path().join("inventory.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_displays() {
    gilded_rose()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--days"));
}

#[test]
fn default_run_prints_two_days() {
    gilded_rose()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OMGHAI!\n"))
        .stdout(predicate::str::contains("-------- day 1 --------"))
        .stdout(predicate::str::contains("-------- day 2 --------").not())
        .stdout(predicate::str::contains("Conjured Mana Cake, 2, 4"));
}

#[test]
fn days_can_come_from_the_environment() {
    gilded_rose()
        .env("GILDED_ROSE_DAYS", "3")
        .assert()
        .success()
        .stdout(predicate::str::contains("-------- day 3 --------"));
}

#[test]
fn runs_an_inventory_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_inventory(
        &tmp,
        r#"[{"name": "Backstage passes to a TAFKAL80ETC concert", "sellIn": 1, "quality": 10}]"#,
    );

    gilded_rose()
        .arg("--inventory")
        .arg(&path)
        .args(["--days", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Backstage passes to a TAFKAL80ETC concert, 0, 13",
        ))
        .stdout(predicate::str::contains(
            "Backstage passes to a TAFKAL80ETC concert, -1, 0",
        ));
}

#[test]
fn json_format_emits_one_entry_per_day() {
    let tmp = TempDir::new().unwrap();
    let path = write_inventory(&tmp, r#"[["Aged Brie", 0, 10]]"#);

    let output = gilded_rose()
        .arg("--inventory")
        .arg(&path)
        .args(["--days", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        reports,
        serde_json::json!([
            {"day": 0, "items": [{"name": "Aged Brie", "sell_in": 0, "quality": 10}]},
            {"day": 1, "items": [{"name": "Aged Brie", "sell_in": -1, "quality": 12}]},
        ])
    );
}

#[test]
fn empty_inventory_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_inventory(&tmp, "[]");

    gilded_rose()
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("items must not be empty"));
}

#[test]
fn mixed_inventory_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_inventory(&tmp, r#"[["Valid", 10, 10], "invalid"]"#);

    gilded_rose()
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("all elements must be valid items"));
}

#[test]
fn missing_inventory_file_fails() {
    let tmp = TempDir::new().unwrap();

    gilded_rose()
        .arg("--inventory")
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read inventory file"));
}

#[test]
fn logs_stay_off_stdout() {
    gilded_rose()
        .env("RUST_LOG", "debug")
        .env("GILDED_ROSE_LOG_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("OMGHAI!\n"))
        .stderr(predicate::str::contains("advancing inventory by one day"));
}
