//! E2E tests for `parkade run` and `parkade trace`.
//!
//! Covers: reference results, output modes, config file loading with flag
//! overrides, and rejection of invalid configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

fn parkade_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("parkade"));
    cmd.current_dir(dir);
    cmd.env("PARKADE_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = parkade_cmd(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("parkade should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON output")
}

// ---------------------------------------------------------------------------
// parkade run
// ---------------------------------------------------------------------------

#[test]
fn reference_run_json() {
    let dir = TempDir::new().unwrap();
    let json = run_json(dir.path(), &["run"]);

    assert_eq!(json["seed"], 314_159);
    assert_eq!(json["days"], 31);
    assert_eq!(json["total_hours"], 744);

    let lots = json["lots"].as_array().expect("lots array");
    let capacities: Vec<u64> = lots.iter().map(|l| l["capacity"].as_u64().unwrap()).collect();
    assert_eq!(capacities, vec![50, 100, 150, 200, 250]);

    assert_eq!(lots[0]["admitted"], 960);
    assert_eq!(lots[0]["refused"], 348);
    assert_eq!(lots[0]["total_parked_hours"], 33_233);
    assert_eq!(lots[0]["total_revenue"], 34_485);
    let avg = lots[0]["average_hours"].as_f64().expect("average");
    assert!((avg - 34.617_708).abs() < 1e-4);

    assert_eq!(lots[4]["refused"], 0);
}

#[test]
fn run_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = parkade_cmd(dir.path())
        .args(["run", "--format", "text", "--days", "5"])
        .output()
        .unwrap();
    let second = parkade_cmd(dir.path())
        .args(["run", "--format", "text", "--days", "5"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn pretty_table_groups_thousands() {
    let dir = TempDir::new().unwrap();
    parkade_cmd(dir.path())
        .args(["run", "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("744 hours per lot (31 days and 0 hours)"))
        .stdout(predicate::str::contains("34,485"))
        .stdout(predicate::str::contains("34.62"));
}

#[test]
fn zero_capacity_average_is_undefined() {
    let dir = TempDir::new().unwrap();
    parkade_cmd(dir.path())
        .args(["run", "--format", "text", "--lots", "0", "--days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "lot capacity=0 paid=0 admitted=0 refused=15 hours=0 average_hours=undefined",
        ));

    let json = run_json(dir.path(), &["run", "--lots", "0", "--days", "1"]);
    assert!(json["lots"][0]["average_hours"].is_null());
}

#[test]
fn zero_days_yields_zero_statistics() {
    let dir = TempDir::new().unwrap();
    let json = run_json(dir.path(), &["run", "--lots", "10,20", "--days", "0"]);
    for lot in json["lots"].as_array().unwrap() {
        assert_eq!(lot["admitted"], 0);
        assert_eq!(lot["refused"], 0);
        assert!(lot["average_hours"].is_null());
    }
    assert_eq!(json["final_state"], 314_159);
}

#[test]
fn config_file_is_loaded_and_flags_override() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("parkade.toml"),
        "lot_capacities = [5, 10]\ndays = 2\n",
    )
    .unwrap();

    let json = run_json(dir.path(), &["run"]);
    let lots = json["lots"].as_array().unwrap();
    assert_eq!(lots.len(), 2);
    assert_eq!(lots[0]["admitted"], 8);
    assert_eq!(lots[1]["admitted"], 17);
    assert_eq!(lots[1]["total_revenue"], 226);

    let json = run_json(dir.path(), &["run", "--lots", "5"]);
    assert_eq!(json["lots"].as_array().unwrap().len(), 1);
    assert_eq!(json["days"], 2);
}

#[test]
fn explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.toml");
    std::fs::write(&path, "lot_capacities = [1]\ndays = 1\n").unwrap();

    let json = run_json(dir.path(), &["run", "--config", path.to_str().unwrap()]);
    assert_eq!(json["lots"][0]["admitted"], 1);
    assert_eq!(json["lots"][0]["refused"], 15);
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("parkade.toml"), "days = \"many\"\n").unwrap();

    parkade_cmd(dir.path())
        .args(["run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn invalid_seed_fails() {
    let dir = TempDir::new().unwrap();
    parkade_cmd(dir.path())
        .args(["run", "--seed", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("seed must be in"));
}

// ---------------------------------------------------------------------------
// parkade trace
// ---------------------------------------------------------------------------

#[test]
fn trace_of_uncongested_lot() {
    let dir = TempDir::new().unwrap();
    let json = run_json(dir.path(), &["trace", "--lots", "1000", "--days", "1"]);

    assert_eq!(json["capacity"], 1000);
    assert_eq!(json["start_state"], 314_159);
    assert_eq!(json["stats"]["admitted"], 87);
    assert_eq!(json["stats"]["refused"], 0);
    assert_eq!(json["unfinished"], 78);

    let hours = json["hours"].as_array().unwrap();
    assert_eq!(hours.len(), 24);
    assert_eq!(hours[6]["arrivals"], 7);
    assert_eq!(hours[6]["occupied"], 7);
    assert_eq!(hours[5]["arrivals"], 0);
}

#[test]
fn trace_replays_later_lot_with_shared_stream() {
    let dir = TempDir::new().unwrap();
    let run = run_json(dir.path(), &["run", "--lots", "5,10", "--days", "2"]);
    let trace = run_json(
        dir.path(),
        &["trace", "--lot", "1", "--lots", "5,10", "--days", "2"],
    );
    assert_eq!(trace["capacity"], 10);
    assert_eq!(trace["stats"]["admitted"], run["lots"][1]["admitted"]);
    assert_eq!(
        trace["stats"]["total_revenue"],
        run["lots"][1]["total_revenue"]
    );
    assert_ne!(trace["start_state"], 314_159);
}

#[test]
fn trace_active_only_skips_idle_hours() {
    let dir = TempDir::new().unwrap();
    let json = run_json(
        dir.path(),
        &["trace", "--lots", "1000", "--days", "1", "--active-only"],
    );
    let hours = json["hours"].as_array().unwrap();
    // 15 admission hours, plus overnight hours with departures.
    assert!(hours.len() >= 15);
    assert!(hours.iter().all(|h| h["hour_of_day"].as_u64().unwrap() >= 6));
}

#[test]
fn trace_lot_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    parkade_cmd(dir.path())
        .args(["trace", "--lot", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lot index 9 out of range"));
}
