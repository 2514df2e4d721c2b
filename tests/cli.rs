use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SALES: &str = "Order Date,Sales,Profit,Category\n\
                     2023-01-15,100,20,A\n\
                     2023-01-20,50,-10,B\n\
                     2023-02-03,200,40,A\n";

fn salesdash(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("salesdash").unwrap();
    cmd.env("SALESDASH_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn report_prints_every_section() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(&temp_dir, "sales.csv", SALES.as_bytes());

    salesdash(temp_dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Clean data! No missing values found."))
        .stdout(predicate::str::contains("$350.00"))
        .stdout(predicate::str::contains("14.29%"))
        .stdout(predicate::str::contains("Performance by Category"))
        .stdout(predicate::str::contains("2023-01-31"));
}

#[test]
fn report_decodes_latin1() {
    let temp_dir = TempDir::new().unwrap();
    let mut contents = b"Order Date,Sales,Profit,Category\n2023-01-15,100,20,Caf".to_vec();
    contents.push(0xE9);
    contents.push(b'\n');
    let file = write(&temp_dir, "latin1.csv", &contents);

    salesdash(temp_dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Café"));
}

#[test]
fn report_missing_column_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(
        &temp_dir,
        "sales.csv",
        b"Order Date,Sales,Category\n2023-01-15,100,A\n",
    );

    salesdash(temp_dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column(s): Profit"))
        .stdout(predicate::str::contains("Business Summary").not());
}

#[test]
fn report_rejects_non_csv() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(&temp_dir, "sales.txt", SALES.as_bytes());

    salesdash(temp_dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load data"));
}

#[test]
fn report_zero_sales_margin_is_na() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(
        &temp_dir,
        "sales.csv",
        b"Order Date,Sales,Profit,Category\n2023-01-15,0,5,A\n",
    );

    salesdash(temp_dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn export_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(&temp_dir, "sales.csv", SALES.as_bytes());

    let output = salesdash(temp_dir.path())
        .args(["export", "--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dashboard"]["source"], "sales.csv");
    assert_eq!(value["dashboard"]["summary"]["Ok"]["total_sales"], "350");
}

#[test]
fn export_csv_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = write(&temp_dir, "sales.csv", SALES.as_bytes());
    let out = temp_dir.path().join("dashboard.csv");

    salesdash(temp_dir.path())
        .args(["export", "--format", "csv", "--output"])
        .arg(&out)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard exported as csv"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("category,A,300,60,2"));
}

#[test]
fn config_init_and_custom_settings() {
    let temp_dir = TempDir::new().unwrap();

    salesdash(temp_dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default settings written"));
    assert!(temp_dir.path().join("config.json").exists());

    let custom = write(
        &temp_dir,
        "custom.json",
        br#"{"currency_symbol": "EUR ", "unknown_category_label": "Other"}"#,
    );
    let file = write(
        &temp_dir,
        "sales.csv",
        b"Order Date,Sales,Profit,Category\n2023-01-15,100,20,\n",
    );

    salesdash(temp_dir.path())
        .arg("--config")
        .arg(&custom)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR 100.00"))
        .stdout(predicate::str::contains("Other"));
}
