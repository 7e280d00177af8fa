//! CLI 実行結果の統合テスト

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn list_simple_prints_sorted_names() {
    let output = Command::cargo_bin("pimport")
        .unwrap()
        .args(["list", "--simple"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();

    assert!(names.contains(&"1password"));
    assert!(names.contains(&"keepass"));

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn list_json_format_filter_excludes_generic_csv() {
    let output = Command::cargo_bin("pimport")
        .unwrap()
        .args(["list", "--format", "csv", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();

    assert!(!rows.is_empty());
    // 汎用CSVフォールバックは絞り込み結果に現れない
    assert!(rows.iter().all(|row| row["name"] != "csv"));
    assert!(rows.iter().all(|row| row["format"] == "csv"));
}

#[test]
fn info_resolves_by_name() {
    Command::cargo_bin("pimport")
        .unwrap()
        .args(["info", "lastpass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lastpass-csv"));
}

#[test]
fn info_resolves_with_format_and_version() {
    Command::cargo_bin("pimport")
        .unwrap()
        .args(["info", "1password", "--format", "csv", "--version", "6", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1password-csv-v6"));
}

#[test]
fn info_unknown_manager_fails() {
    Command::cargo_bin("pimport")
        .unwrap()
        .args(["info", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown password manager: nope"));
}

#[test]
fn formats_prints_priority_order() {
    let output = Command::cargo_bin("pimport")
        .unwrap()
        .args(["formats", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let formats: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["format"].as_str().unwrap())
        .collect();

    assert_eq!(
        formats,
        vec!["csv", "xml", "json", "kdbx", "yaml", "1pif", "html", "keychain"]
    );
}

#[test]
fn formats_decrypt_lists_decrypters() {
    Command::cargo_bin("pimport")
        .unwrap()
        .args(["formats", "--capability", "decrypt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gpg"))
        .stdout(predicate::str::contains("kdbx"));
}
