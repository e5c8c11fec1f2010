//! Binary-level tests for the `sse` CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sse(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sse").unwrap();
    cmd.env("SSE_STORE_DIR", store.path())
        .env("SSE_CONFIG", store.path().join("missing.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn predict_example_as_json() {
    let store = tempfile::tempdir().unwrap();
    let output = sse(&store)
        .args(["--output", "json", "predict", "--example", "exam_cheating"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["predicted_outcome"]["id"], "no_cheat_internal_conflict");
    assert_eq!(value["mode"], "A");
    assert_eq!(value["horizon"], "hours");
    assert!(value.get("alternatives").is_none());
}

#[test]
fn predict_situation_table() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args([
            "predict",
            "--situation",
            "A government raises fuel taxes for commuters.",
            "--alternatives",
            "--depth",
            "deep",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prediction"))
        .stdout(predicate::str::contains("Alternatives"))
        .stdout(predicate::str::contains("Factors:"));
}

#[test]
fn predict_requires_input() {
    let store = tempfile::tempdir().unwrap();
    sse(&store).arg("predict").assert().failure();
    sse(&store)
        .args(["predict", "--situation", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("situation text is required"));
}

#[test]
fn unknown_example_fails() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args(["predict", "--example", "moon_landing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("example 'moon_landing'"));
}

#[test]
fn invalid_depth_rejected() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args(["predict", "--situation", "x", "--depth", "verbose"])
        .assert()
        .failure();
}

#[test]
fn examples_list() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("platform_algorithm_change"))
        .stdout(predicate::str::contains("quiet_job_search"));
}

#[test]
fn profile_mentions_resolve_before_prediction() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args([
            "profile",
            "add",
            "Ana Ruiz",
            "--tag",
            "ana",
            "--type",
            "person",
            "--description",
            "A senior employee.",
            "--attr",
            "team=platform",
        ])
        .assert()
        .success();

    sse(&store)
        .args(["--output", "json", "profile", "show", "@ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"ana\""));

    sse(&store)
        .args([
            "predict",
            "--situation",
            "@ana was denied a promotion.",
            "--resolve-mentions",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Ruiz was denied a promotion."))
        .stdout(predicate::str::contains("Profile context:"));
}

#[test]
fn tracking_round_trip() {
    let store = tempfile::tempdir().unwrap();
    let output = sse(&store)
        .args([
            "predict",
            "--example",
            "workplace_promotion",
            "--track",
            "--expected-at",
            "2026-03-01T09:00:00+00:00",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|l| l.split("Tracking prediction as ").nth(1))
        .unwrap()
        .trim()
        .to_string();

    sse(&store)
        .args(["track", "vote", &id, "inaccurate", "--actual-outcome", "They resigned."])
        .assert()
        .success();

    let shown = sse(&store)
        .args(["--output", "json", "track", "show", &id])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&shown.stdout).unwrap();
    assert_eq!(value["status"], "resolved");
    assert_eq!(value["vote"], "inaccurate");
    assert_eq!(value["actual_outcome"], "They resigned.");
    assert_eq!(value["expected_at"], "2026-03-01T09:00:00Z");
}

#[test]
fn tracking_list_seeds_empty_store() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args(["track", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dummy-tracking-item-001"));
}

#[test]
fn vote_on_unknown_item_fails() {
    let store = tempfile::tempdir().unwrap();
    sse(&store)
        .args(["track", "vote", "nope", "accurate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn compare_reports_delta() {
    let store = tempfile::tempdir().unwrap();
    let output = sse(&store)
        .args([
            "--output",
            "json",
            "compare",
            "A student considers cheating during an exam.",
            "A government raises fuel taxes for commuters.",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["comparison"]["confidence_delta"].is_number());
    assert_eq!(value["base"]["mode"], "A");
    assert_eq!(value["variant"]["mode"], "C");
}
