//! Integration tests for the `tripplanner` binary.
//!
//! These run the compiled CLI with `assert_cmd` and check stdout, stderr,
//! and exit codes for each subcommand.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/andes_catalog.json")
        .canonicalize()
        .expect("fixture catalog present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("tripplanner");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("TRIPPLANNER_CATALOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command runs");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn search_prints_direct_route_within_budget() {
    cli()
        .args(["search", "--from", "Lima", "--to", "Arequipa", "--budget", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cheapest: Lima -> Arequipa (779.70 km, cost 194.93, CO2 194.93 kg, 2.47 h)",
        ))
        .stdout(predicate::str::contains("Candidates (1):"));
}

#[test]
fn search_without_affordable_route_still_succeeds() {
    cli()
        .args(["search", "--from", "Lima", "--to", "Arequipa", "--budget", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route from Lima to Arequipa within budget 100.00.",
        ));
}

#[test]
fn search_json_matches_wire_format() {
    let value = stdout_json(cli().args([
        "--format", "json", "search", "--from", "Lima", "--to", "Arequipa", "--budget", "1000",
    ]));
    assert_eq!(value["cheapest"]["path"], serde_json::json!(["Lima", "Arequipa"]));
    assert_eq!(value["shortest"]["total_duration_h"], serde_json::json!(2.47));
    assert_eq!(value["all_routes"].as_array().map(Vec::len), Some(3));
}

#[test]
fn search_json_prints_null_when_nothing_fits() {
    cli()
        .args(["search", "--from", "Lima", "--to", "Cusco", "--budget", "10", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn search_limit_and_stops_are_applied() {
    let value = stdout_json(cli().args([
        "--format",
        "json",
        "search",
        "--from",
        "Lima",
        "--to",
        "Arequipa",
        "--budget",
        "inf",
        "--max-stops",
        "1",
        "--limit",
        "50",
    ]));
    // direct plus one route through each of the seven other cities
    assert_eq!(value["all_routes"].as_array().map(Vec::len), Some(8));
}

#[test]
fn unknown_city_fails_with_suggestion() {
    cli()
        .args(["search", "--from", "Lima", "--to", "Cuzco", "--budget", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown city name: Cuzco"))
        .stderr(predicate::str::contains("Did you mean 'Cusco'?"));
}

#[test]
fn negative_budget_is_rejected() {
    cli()
        .args(["search", "--from", "Lima", "--to", "Cusco", "--budget", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid budget -5"));
}

#[test]
fn recommend_lists_cheapest_destination_first() {
    cli()
        .args(["recommend", "--from", "Lima", "--budget", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Destinations from Lima (budget 1000.00):"))
        .stdout(predicate::str::contains("  1. Trujillo: Lima -> Trujillo"))
        .stdout(predicate::str::contains("  8. Iquitos: Lima -> Iquitos"))
        .stdout(predicate::str::contains("-> Lima ").not());
}

#[test]
fn recommend_json_respects_budget() {
    let value = stdout_json(cli().args([
        "recommend", "--from", "Lima", "--budget", "200", "--format", "json",
    ]));
    let routes = value["recommendations"].as_array().expect("array");
    assert_eq!(routes.len(), 4);
    assert!(routes
        .iter()
        .all(|route| route["total_cost"].as_f64().unwrap() <= 200.0));
}

#[test]
fn recommend_with_zero_budget_is_empty() {
    cli()
        .args(["recommend", "--from", "Lima", "--budget", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No destinations from Lima"));
}

#[test]
fn cities_lists_catalog() {
    cli()
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cities (9):"))
        .stdout(predicate::str::contains(" - Chiclayo (-6.7714, -79.8395)"))
        .stdout(predicate::str::contains(" - Tacna - Arequipa").not())
        .stdout(predicate::str::contains(" - Arequipa - Tacna"));
}

#[test]
fn catalog_flag_loads_a_json_catalog() {
    cli()
        .arg("--catalog")
        .arg(fixture_catalog())
        .args(["search", "--from", "Quito", "--to", "Loja", "--budget", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheapest: Quito -> Loja"))
        .stdout(predicate::str::contains("Fastest:  Quito -> Loja"));
}

#[test]
fn catalog_env_var_is_honoured() {
    cli()
        .env("TRIPPLANNER_CATALOG", fixture_catalog())
        .args(["--format", "json", "cities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Guayaquil\""));
}

#[test]
fn missing_catalog_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    cli()
        .arg("--catalog")
        .arg(dir.path().join("nope.json"))
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog not found"));
}

#[test]
fn invalid_catalog_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("dupes.json");
    fs::write(
        &path,
        r#"{"cities": ["A", "A"], "coords": {"A": [0.0, 0.0]}}"#,
    )
    .expect("write catalog");
    cli()
        .arg("--catalog")
        .arg(&path)
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate city name encountered: A"));
}
