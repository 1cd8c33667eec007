//! End-to-end runs of the `nivesh` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn nivesh() -> Command {
    let mut cmd = Command::cargo_bin("nivesh").unwrap();
    cmd.env_remove("NIVESH_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json(args: &[&str]) -> serde_json::Value {
    let output = nivesh().args(args).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn sip_json() {
    let value = json(&["sip", "--amount", "25000", "--rate", "12", "--years", "10"]);
    assert_eq!(value["instrument"], "sip");
    assert_eq!(value["result"]["months"], 120);
    assert_eq!(value["result"]["total_invested"], 3_000_000.0);
    assert_eq!(value["validation"]["monthly_amount"]["error"], false);
}

#[test]
fn sip_table() {
    nivesh()
        .args(["sip", "--amount", "25000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SIP Calculator"))
        .stdout(predicate::str::contains("Maturity Value"));
}

#[test]
fn verbose_logs_to_stderr() {
    let output = nivesh()
        .args(["--verbose", "ppf", "-f", "minimal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("limits ready"), "{stderr}");
    assert!(stderr.contains("evaluated"), "{stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("evaluated"));
}

#[test]
fn gratuity_minimal() {
    nivesh()
        .args(["gratuity", "--salary", "60000", "--years", "20", "-f", "minimal"])
        .assert()
        .success()
        .stdout("692308\n");

    nivesh()
        .args(["gratuity", "--salary", "100000", "--years", "50", "-f", "minimal"])
        .assert()
        .success()
        .stdout("1000000\n");
}

#[test]
fn below_minimum_warns_and_uses_minimum() {
    let output = nivesh()
        .args(["lumpsum", "--principal", "", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Minimum value is 500"), "{stderr}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["inputs"]["principal"], 0.0);
    assert_eq!(value["safe"]["principal"], 500.0);
    assert_eq!(value["validation"]["principal"]["error"], true);
}

#[test]
fn negative_input_canonicalizes_to_zero() {
    let value = json(&["ppf", "--years", "-3"]);
    assert_eq!(value["inputs"]["years"], 0.0);
    assert_eq!(value["safe"]["years"], 15.0);
}

#[test]
fn compound_frequency() {
    let value = json(&["compound", "--frequency", "quarterly"]);
    assert_eq!(value["instrument"], "compound-interest");
    assert_eq!(value["result"]["n"], 4);
}

#[test]
fn nsc_rejects_quarterly() {
    nivesh()
        .args(["nsc", "--frequency", "quarterly"])
        .assert()
        .failure();
}

#[test]
fn swp_schedule_csv() {
    let output = nivesh()
        .args(["swp", "--years", "1", "--schedule", "-f", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("month,opening,growth,withdrawal,closing")
    );
    assert_eq!(lines.count(), 12);
}

#[test]
fn limits_csv() {
    nivesh()
        .args(["limits", "ppf", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("instrument,parameter,min,max,default"))
        .stdout(predicate::str::contains("ppf,years,15,50,15"));
}

#[test]
fn limits_file_overrides_ceiling() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("limits.toml");
    fs::write(&path, "[sip.years]\nmax = 20\n").unwrap();
    let path = path.to_str().unwrap();

    let value = json(&["--config", path, "sip", "--years", "30"]);
    assert_eq!(value["inputs"]["years"], 20.0);
    assert_eq!(value["result"]["months"], 240);

    nivesh()
        .args(["--config", path, "config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn invalid_limits_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("limits.toml");
    fs::write(&path, "[sip.years]\nmin = 50\n").unwrap();

    nivesh()
        .args(["config", "validate"])
        .env("NIVESH_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sip.years"));

    nivesh()
        .args(["sip"])
        .env("NIVESH_CONFIG", &path)
        .assert()
        .failure();
}

#[test]
fn oversized_swp_horizon_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("limits.toml");
    fs::write(&path, "[swp.years]\nmax = 1e12\n").unwrap();
    let path = path.to_str().unwrap();

    nivesh()
        .args(["--config", path, "swp", "--years", "1e12", "--schedule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("swp.years"));
}

#[test]
fn config_validate_without_file() {
    nivesh()
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No limits file"));
}

#[test]
fn config_show_renders_standard_limits() {
    nivesh()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[compound-interest.principal]"));
}
