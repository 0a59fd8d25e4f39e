//! Integration tests for the statement converter CLI.
//!
//! These tests run the actual binary in a scratch directory and inspect the
//! file it writes there.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OUTPUT_FILE: &str = "nordnet-account-statement.csv";

const HEADER: &str = "Id\tBokføringsdag\tHandelsdag\tTransaksjonstype\tVerdipapir\tBeløp\tValuta\tTransaksjonstekst\tVerifikationsnummer";

/// Writes `rows` under the export header as a UTF-16LE file with BOM.
fn write_statement(dir: &Path, rows: &[&str]) -> PathBuf {
    let text = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\r\n");

    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));

    let path = dir.join("statement.csv");
    fs::write(&path, bytes).unwrap();
    path
}

fn converter(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nordnet-statement").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn sample_rows() -> Vec<&'static str> {
    vec![
        "1\t2024-01-10\t2024-01-10\tKJØPT\tEQUINOR\t-500,50\tNOK\tKjøpt EQUINOR\t1002",
        "2\t2024-01-02\t2024-01-02\tINNSKUDD\t\t1000,00\tNOK\tInnskudd\t1001",
        "3\t2024-01-31\t2024-01-31\tPLATTFORMAVG KORR\t\t10,00\tNOK\tQ1 korr\t1003",
        "4\t2024-01-31\t2024-01-31\tPLATTFORMAVG KORR\t\t5,00\tNOK\tQ1 korr\t1004",
        "5\t2024-01-31\t2024-01-31\tPLATTFORMAVGIFT\t\t-12,00\tNOK\tPlattformavgift\t1005",
        "6\t2024-01-15\t2024-01-15\tUTBYTTE\tEQUINOR\t20,00\tNOK\tUtbytte\t1006",
    ]
}

#[test]
fn test_converts_sample_statement() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), &sample_rows());

    converter(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Transformed file stored at: nordnet-account-statement.csv",
        ));

    let output = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "#,Dato,Inn,Ut,Motpart,Beskrivelse,Kategori,Debetkto,Kreditkto,Bilag,Detaljer,Referanse,Notater,Korteier",
            "1,2024-01-02,\"1000,0\",\"0,0\",,Innskudd,,1920,1925,Ja,-,1001,,",
            "2,2024-01-10,\"0,0\",\"500,5\",EQUINOR,Kjøpt EQUINOR,,1811,1920,Ja,-,1002,,",
            "3,2024-01-15,\"20,0\",\"0,0\",EQUINOR,Utbytte,,,,Ja,-,1006,,",
            "4,2024-01-31,\"15,0\",\"0,0\",Nordnet AS,Q1 korr,,1920,7770,Ja,-,\"1003, 1004\",,",
            "5,2024-01-31,\"0,0\",\"12,0\",Nordnet AS,Plattformavgift,,7770,1920,Ja,-,1005,,",
        ]
    );
}

/// Lines printed between the `start` banner and the next line matching `end`.
fn lines_between<'a>(stdout: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    stdout
        .lines()
        .skip_while(|l| *l != start)
        .skip(1)
        .take_while(|l| !l.starts_with(end))
        .collect()
}

#[test]
fn test_prints_preview_of_first_five_rows() {
    let dir = TempDir::new().unwrap();
    let rows: Vec<String> = (1..=8)
        .map(|day| {
            format!(
                "{day}\t2024-01-0{day}\t2024-01-0{day}\tINNSKUDD\t\t{day}00\tNOK\tInnskudd\t{day}"
            )
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_statement(dir.path(), &rows);

    let assert = converter(dir.path()).arg(&input).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let original = lines_between(&stdout, "Head of original file:", "Head of accounting statement:");
    assert_eq!(original.len(), 6);
    assert!(original[0].starts_with("Bokføringsdag\tTransaksjonstype"));
    assert!(original[5].starts_with("2024-01-05\tINNSKUDD"));

    let converted = lines_between(&stdout, "Head of accounting statement:", "Transformed file stored at:");
    assert_eq!(converted.len(), 6);
    assert!(converted[0].starts_with("#,Dato,Inn,Ut"));
    assert!(converted[5].starts_with("5,2024-01-05,"));

    let output = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
    assert_eq!(output.lines().count(), 9);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), &sample_rows());

    converter(dir.path()).arg(&input).assert().success();
    let first = fs::read(dir.path().join(OUTPUT_FILE)).unwrap();

    converter(dir.path()).arg(&input).assert().success();
    let second = fs::read(dir.path().join(OUTPUT_FILE)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_two_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(dir.path(), &sample_rows());

    converter(dir.path())
        .arg(&input)
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();

    converter(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_missing_file_error() {
    let dir = TempDir::new().unwrap();

    converter(dir.path())
        .arg("nonexistent.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));

    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_utf8_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("statement.csv");
    fs::write(&input, "Bokføringsdag\tTransaksjonstype\tBeløp\n").unwrap();

    converter(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn test_malformed_amount_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_statement(
        dir.path(),
        &["1\t2024-01-02\t2024-01-02\tINNSKUDD\t\tmye\tNOK\tInnskudd\t1"],
    );

    converter(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"));

    assert!(!dir.path().join(OUTPUT_FILE).exists());
}
