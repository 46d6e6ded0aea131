#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FEED: &str = r#"{
  "success": true,
  "items": [
    {"id": 1, "name": "Granola", "category": "snacks", "quantity": 4, "condition": "new", "expiration_date": "2024-06-30", "status": "pending"},
    {"id": 2, "name": "Tomato Soup", "category": "canned", "quantity": 2, "condition": "near", "expiration_date": "2024-05-04", "status": "pending"},
    {"id": 3, "name": "Chickpeas", "category": "canned", "quantity": 6, "condition": "new", "expiration_date": "2024-05-04", "status": "on_hold"},
    {"id": 4, "name": "Orange Juice", "category": "beverages", "quantity": 1, "condition": "new", "expiration_date": "2024-05-15", "status": "redistributed"}
  ],
  "current_page": 1,
  "total_pages": 1
}"#;

const HEALTHY_FEED: &str = r#"[
  {"name": "Pasta", "category": "packaged", "condition": "new", "expiration_date": "2025-01-01"}
]"#;

fn write_feed(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("items.json");
    fs::write(&path, content).expect("feed should write");
    path
}

/// Runs with HOME pointed at `home` so a developer's global config is never read.
fn triage(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("triage").expect("binary should compile");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_markdown_orders_queue_by_urgency() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, FEED);

    let output = triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Expiry Triage"))
        .stdout(predicate::str::contains(
            "| Critical | Tomato Soup | Canned Foods | Near Expiry | 3 days | 20% | Immediate distribution required |",
        ))
        .stdout(predicate::str::contains(
            "| High | Chickpeas | Canned Foods | New/Unused | 3 days | 40% | Distribute within 24 hours |",
        ))
        .stdout(predicate::str::contains(
            "Canned Foods is the most common category (2 items).",
        ))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout should be utf-8");
    let soup = stdout.find("Tomato Soup").expect("soup should be listed");
    let chickpeas = stdout.find("| Chickpeas").expect("chickpeas should be listed");
    let juice = stdout.find("| Orange Juice").expect("juice should be listed");
    let granola = stdout.find("| Granola").expect("granola should be listed");
    assert!(soup < chickpeas);
    assert!(chickpeas < juice);
    assert!(juice < granola);
}

#[test]
fn report_json_exposes_scored_fields() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, FEED);

    triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"quality_score\": 20"))
        .stdout(predicate::str::contains("\"priority\": \"Critical\""))
        .stdout(predicate::str::contains("\"days_until_expiry\": 3"))
        .stdout(predicate::str::contains("\"critical\": 1"));
}

#[test]
fn open_only_skips_redistributed_items() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, FEED);

    triage(dir.path())
        .arg("queue")
        .arg(&feed)
        .args(["--today", "2024-05-01", "--open-only"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Tomato Soup"))
        .stdout(predicate::str::contains("Orange Juice").not());
}

#[test]
fn queue_respects_min_priority() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, FEED);

    triage(dir.path())
        .arg("queue")
        .arg(&feed)
        .args(["--today", "2024-05-01", "--min-priority", "critical"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[Critical] Tomato Soup (Canned Foods, Near Expiry) - 3 days - score 20 - Immediate distribution required",
        ))
        .stdout(predicate::str::contains("Chickpeas").not());
}

#[test]
fn insights_lists_counts_and_recommendations() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, FEED);

    triage(dir.path())
        .arg("insights")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("items: 4"))
        .stdout(predicate::str::contains("critical: 1"))
        .stdout(predicate::str::contains("warning: 1"))
        .stdout(predicate::str::contains("good: 2"))
        .stdout(predicate::str::contains(
            "- 1 items require immediate attention. Prioritize distribution of these items.",
        ))
        .stdout(predicate::str::contains(
            "- Plan distribution for 2 items expiring within 7 days.",
        ));
}

#[test]
fn healthy_feed_exits_successfully() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, HEALTHY_FEED);

    triage(dir.path())
        .arg("queue")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[Low] Pasta"))
        .stdout(predicate::str::contains("Regular monitoring"));
}

#[test]
fn unsuccessful_feed_renders_empty_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, r#"{"success": false}"#);

    triage(dir.path())
        .arg("insights")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("items: 0"))
        .stdout(predicate::str::contains("recommendations: none"));
}

#[test]
fn reads_feed_from_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");
    triage(dir.path())
        .current_dir(dir.path())
        .args(["queue", "-", "--today", "2024-05-01"])
        .write_stdin(HEALTHY_FEED)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Pasta"));
}

#[test]
fn config_next_to_feed_sets_title() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, HEALTHY_FEED);
    fs::write(
        dir.path().join("triage.toml"),
        r#"
[project]
name = "Downtown Pantry"

[report]
format = "md"
"#,
    )
    .expect("config should write");

    triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Downtown Pantry"));
}

#[test]
fn global_config_is_read_from_home() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, HEALTHY_FEED);
    let global = dir.path().join(".config/triage");
    fs::create_dir_all(&global).expect("global config dir should create");
    fs::write(
        global.join("config.toml"),
        r#"
[report]
format = "json"
"#,
    )
    .expect("global config should write");

    triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"quality_score\": 100"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, HEALTHY_FEED);
    fs::write(
        dir.path().join("triage.toml"),
        r#"
[report]
min_priority = "urgent"
"#,
    )
    .expect("config should write");

    triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("report.min_priority"));
}

#[test]
fn malformed_feed_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let feed = write_feed(&dir, "{ not json");

    triage(dir.path())
        .arg("report")
        .arg(&feed)
        .args(["--today", "2024-05-01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("feed parse error"));
}
