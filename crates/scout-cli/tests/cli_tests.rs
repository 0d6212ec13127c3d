//! End-to-end tests for the `scout` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_data(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("funds.csv"),
        "GP,Fund,Strategy,Geography,Vintage,FundSize,Currency\n\
         Acme Capital,Acme Fund III,Buyout,North America,2019,500,USD\n\
         Borealis Partners,Borealis Growth II,Growth,Europe,2021,320.5,EUR\n\
         Lone Pine Ventures,Lone Pine I,Venture,Asia,2022,75.5,SGD\n",
    )
    .unwrap();
    fs::write(
        dir.join("track_records.csv"),
        "GP,Fund,Vintage,FundSize,Currency,CalledPct,DPIpct,RVPIpct,MOIC,IRR,AsOfDate\n\
         Acme Capital,Acme Fund I,2012,250,USD,100,180,15,1.95,17.2,2024-06-30\n\
         Acme Capital,Acme Fund II,2015,400,USD,98,120,60,1.8,15.1,2024-06-30\n",
    )
    .unwrap();
    fs::write(
        dir.join("portfolio.csv"),
        "Fund,Company,EntryDate,Industry,Status,Website\n\
         Acme Fund III,Widget Works,2020-03-15,Industrials,Active,https://widgets.example\n",
    )
    .unwrap();
    fs::write(
        dir.join("lps.csv"),
        "Fund,LP,Type,Role\nAcme Fund III,State Pension Plan,Pension,Anchor\n",
    )
    .unwrap();
    fs::write(
        dir.join("contacts.csv"),
        "GP,Name,Title,Email,LinkedIn\n\
         Acme Capital,Jane Doe,Managing Partner,jane@acme.example,https://linkedin.example/jane\n",
    )
    .unwrap();
    fs::write(
        dir.join("news.csv"),
        "Date,Headline,Implication,Source\n\
         2024-10-01,Acme closes Fund IV,Fresh capital for follow-ons,PE Wire\n\
         2024-11-12,Borealis hires CFO,Stronger reporting,FT\n",
    )
    .unwrap();
}

/// A working directory with `data/` populated and no config file.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_data(&dir.path().join("data"));
    dir
}

fn scout(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scout").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SCOUT_CONFIG")
        .env_remove("SCOUT_DATA_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

// =============================================================================
// SHORTLIST
// =============================================================================

#[test]
fn test_shortlist_table() {
    let dir = workspace();
    scout(&dir)
        .arg("shortlist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Capital — Acme Fund III (2019)"))
        .stdout(predicate::str::contains("Lone Pine I"));
}

#[test]
fn test_shortlist_filters() {
    let dir = workspace();
    let output = scout(&dir)
        .args(["--format", "json", "shortlist", "--strategy", "Growth", "--from", "2020"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Fund"], "Borealis Growth II");
    assert_eq!(rows[0]["Size"], "320.5 EUR");
}

#[test]
fn test_shortlist_csv() {
    let dir = workspace();
    scout(&dir)
        .args(["--format", "csv", "shortlist", "--geography", "Asia"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "GP,Fund,Strategy,Geography,Vintage,Size,Selection\n",
        ))
        .stdout(predicate::str::contains("Lone Pine Ventures,Lone Pine I,Venture,Asia,2022"));
}

#[test]
fn test_shortlist_choices() {
    let dir = workspace();
    let output = scout(&dir)
        .args(["--format", "json", "shortlist", "--choices"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["geographies"],
        serde_json::json!(["Asia", "Europe", "North America"])
    );
    assert_eq!(value["vintage_range"], serde_json::json!([2019, 2022]));
}

// =============================================================================
// BRIEF
// =============================================================================

#[test]
fn test_brief_writes_markdown_file() {
    let dir = workspace();
    scout(&dir)
        .args(["brief", "--gp", "Acme Capital", "--fund", "Acme Fund III"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Briefing written to"));

    let path = dir
        .path()
        .join("output")
        .join("Acme Capital - Acme Fund III - Briefing.md");
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("# Fairview Capital Group"));
    assert!(content.contains("| Remaining Value | ~350.0 USD |"));
    assert!(content.contains("| Acme Fund II | 2015 | 400 USD |"));
}

#[test]
fn test_brief_json_to_custom_dir() {
    let dir = workspace();
    scout(&dir)
        .args([
            "--format",
            "json",
            "--quiet",
            "brief",
            "--gp",
            "Lone Pine Ventures",
            "--fund",
            "Lone Pine I",
            "--output-dir",
            "briefings",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let path = dir
        .path()
        .join("briefings")
        .join("Lone Pine Ventures - Lone Pine I - Briefing.json");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["sections"].as_array().unwrap().len(), 7);
}

#[test]
fn test_brief_markdown_stdout() {
    let dir = workspace();
    scout(&dir)
        .args([
            "--format",
            "markdown",
            "brief",
            "--gp",
            "Acme Capital",
            "--fund",
            "Acme Fund III",
            "--stdout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## **4. Recent Developments / GP News**"))
        .stdout(predicate::str::contains("| 2024-11-12 | Borealis hires CFO |"));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_brief_table_stdout() {
    let dir = workspace();
    scout(&dir)
        .args(["brief", "--gp", "Lone Pine Ventures", "--fund", "Lone Pine I", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Fund Overview"))
        .stdout(predicate::str::contains("~52.85 SGD"))
        .stdout(predicate::str::contains("No prior fund data available in demo dataset."));
}

#[test]
fn test_brief_unknown_fund() {
    let dir = workspace();
    scout(&dir)
        .args(["brief", "--gp", "Acme Capital", "--fund", "Acme Fund IX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fund not found: Acme Capital — Acme Fund IX"));
}

#[test]
fn test_brief_csv_is_rejected() {
    let dir = workspace();
    scout(&dir)
        .args(["--format", "csv", "brief", "--gp", "Acme Capital", "--fund", "Acme Fund III"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support --format csv"));
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = workspace();
    fs::write(
        dir.path().join("data").join("lps.csv"),
        "Fund,LP,Role\nAcme Fund III,State Pension Plan,Anchor\n",
    )
    .unwrap();

    scout(&dir)
        .args(["brief", "--gp", "Acme Capital", "--fund", "Acme Fund III"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column 'Type'"));
    assert!(!dir.path().join("output").exists());
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_file_changes_cover_and_paths() {
    let dir = tempfile::tempdir().unwrap();
    write_data(&dir.path().join("snapshot"));
    fs::write(
        dir.path().join("scout.toml"),
        "data_dir = \"snapshot\"\norganization = \"Northwind Secondaries\"\n",
    )
    .unwrap();

    scout(&dir)
        .args([
            "--format",
            "markdown",
            "brief",
            "--gp",
            "Acme Capital",
            "--fund",
            "Acme Fund III",
            "--stdout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Northwind Secondaries"))
        .stdout(predicate::str::contains("### Secondary Candidate Briefing"));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    scout(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("scout.toml").exists());

    scout(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    scout(&dir).args(["config", "init", "--force"]).assert().success();

    let output = scout(&dir)
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["organization"], "Fairview Capital Group");
    assert_eq!(value["data_dir"], "data");
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = workspace();
    scout(&dir)
        .args(["--config", "missing.toml", "shortlist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
