use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const EXPORT: &str = "\
id,Created date (UTC),Amount,Amount Refunded,Currency,Description,Status
ch_001,2025-07-03 10:15:00,1200.00,0.00,gbp,,Paid
ch_002,2025-07-21 14:02:11,590.00,0.00,gbp,ADHD Assessment Only,Paid
ch_003,2025-07-22 09:00:00,0.50,0.00,gbp,anything,Paid
ch_004,2025-08-02 11:30:00,590.00,590.00,gbp,,Paid
ch_005,2025-08-09 16:45:00,1990.00,0.00,gbp,Premium ADHD package for adult client,Paid
ch_006,2025-08-10 08:12:00,1200.00,0.00,gbp,,Failed
ch_007,2025-08-15 12:00:00,123.45,0.00,gbp,gift voucher,Paid
";

fn cmd() -> Command {
    Command::cargo_bin("revenue-report").unwrap()
}

fn write_export(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("payments.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn text_report_sections() {
    let (_dir, path) = write_export(EXPORT);
    cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("CLINIC REVENUE ANALYSIS REPORT"))
        .stdout(contains("Total Paid Transactions (excl. tests/refunds): 4"))
        .stdout(contains("2025-07      |            2 |       £1,790.00"))
        .stdout(contains("ADHD Premium Package"))
        .stdout(contains("Unknown (£123.45)"))
        .stdout(contains("performance_2025: {"))
        .stdout(contains("      revenue: 1790.00,"))
        .stdout(contains("Test Transaction").not());
}

#[test]
fn json_export() {
    let (_dir, path) = write_export(EXPORT);
    let output = cmd()
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["2025"]["july"]["patients"], 2);
    assert_eq!(value["2025"]["july"]["revenue"], 1790.0);
    assert_eq!(value["2025"]["july"]["status"], "actual");
    assert_eq!(value["2025"]["august"]["patients"], 2);
    assert_eq!(
        value["2025"]["august"]["breakdown"]["ADHD Premium Package"],
        1
    );
}

#[test]
fn currency_override() {
    let (_dir, path) = write_export(EXPORT);
    cmd()
        .arg(&path)
        .args(["--currency", "$"])
        .assert()
        .success()
        .stdout(contains("Total Revenue: $3,903.45"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("I/O error"));
}

#[test]
fn missing_column_fails() {
    let (_dir, path) = write_export("id,Created date (UTC),Amount,Status\nch_1,2025-07-03,590,Paid\n");
    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Schema error"));
}

#[test]
fn bad_amount_fails_without_partial_output() {
    let export = format!("{}ch_008,2025-09-01 10:00:00,lots,0,gbp,,Paid\n", EXPORT);
    let (_dir, path) = write_export(&export);
    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("row 8"));
}

#[test]
fn default_input_path() {
    let (dir, _path) = write_export(EXPORT);
    fs::write(dir.path().join("unified_payments.csv"), EXPORT).unwrap();
    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("Total Revenue: £3,903.45"));
}

#[test]
fn catalog_listing() {
    cmd()
        .arg("catalog")
        .assert()
        .success()
        .stdout(contains("ADHD Complete Care Package"))
        .stdout(contains("Child 12-Month Treatment Plan"))
        .stdout(contains("1. autism"));
}

#[test]
fn classify_text_rule_over_price() {
    cmd()
        .args(["classify", "1990", "Premium ADHD package for adult client"])
        .assert()
        .success()
        .stdout(contains("Matched by:  text:premium"))
        .stdout(contains("Product:     ADHD Premium Package"));
}

#[test]
fn classify_price_and_test() {
    cmd()
        .args(["classify", "1200"])
        .assert()
        .success()
        .stdout(contains("Matched by:  price"))
        .stdout(contains("Category:    adhd_adult"));

    cmd()
        .args(["classify", "0.50", "anything"])
        .assert()
        .success()
        .stdout(contains("Type:        test"));
}

#[test]
fn classify_rejects_bad_amount() {
    cmd()
        .args(["classify", "abc"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}
