// Dweve licscan - License Evidence Scanner
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests for the expression commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn licscan_cmd() -> Command {
    Command::cargo_bin("licscan").expect("Failed to find licscan binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    licscan_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SPDX license expression parser"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("parse"));
}

#[test]
fn test_version_output() {
    licscan_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("licscan"));
}

#[test]
fn test_no_subcommand_fails() {
    licscan_cmd().assert().failure();
}

// ===== parse =====

#[test]
fn test_parse_prints_canonical_form() {
    licscan_cmd()
        .args(["parse", "( mit AND (apache-2.0) ) OR gpl-2.0+"])
        .assert()
        .success()
        .stdout("MIT AND Apache-2.0 OR GPL-2.0+\n");
}

#[test]
fn test_parse_json() {
    let output = licscan_cmd()
        .args(["parse", "--json", "--compact", "GPL-3.0-only WITH LLVM-exception"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["conjunction"], "WITH");
    assert_eq!(value["license"]["id"], "GPL-3.0-only");
    assert_eq!(value["exceptionId"], "LLVM-exception");
}

#[test]
fn test_parse_ast() {
    licscan_cmd()
        .args(["parse", "--ast", "MIT OR ISC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Or\""));
}

#[test]
fn test_parse_invalid_expression() {
    licscan_cmd()
        .args(["parse", "MIT Apache-2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid expression 'MIT Apache-2.0'"))
        .stderr(predicate::str::contains("UnexpectedToken"));
}

#[test]
fn test_parse_depth_flag() {
    licscan_cmd()
        .args(["parse", "--max-depth", "1", "((MIT))"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NestingTooDeep"));

    licscan_cmd()
        .args(["parse", "--max-depth", "2", "((MIT))"])
        .assert()
        .success()
        .stdout("MIT\n");
}

#[test]
fn test_parse_length_flag() {
    licscan_cmd()
        .args(["parse", "--max-length", "3", "Apache-2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ExpressionTooLong"));
}

// ===== check =====

#[test]
fn test_check_valid_file() {
    let file = create_temp_file("# licenses\nmit\n(Apache-2.0 OR MIT)\n", ".txt");
    licscan_cmd()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Apache-2.0 OR MIT"));
}

#[test]
fn test_check_reports_every_failure() {
    let file = create_temp_file("MIT\nMIT AND\nNot-A-License\n", ".txt");
    licscan_cmd()
        .args(["check", "--quiet"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(":2 MIT AND"))
        .stdout(predicate::str::contains(":3 Not-A-License"))
        .stdout(predicate::str::contains(":1 MIT").not())
        .stderr(predicate::str::contains("2 of 3 expressions failed"));
}

#[test]
fn test_check_missing_file() {
    licscan_cmd()
        .args(["check", "/nonexistent/expressions.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_check_respects_max_file_size_env() {
    let file = create_temp_file("MIT\nISC\n", ".txt");
    licscan_cmd()
        .env("LICSCAN_MAX_FILE_SIZE", "2")
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== validate =====

#[test]
fn test_validate_records() {
    let file = create_temp_file(
        r#"[{"rawId": "MIT OR ISC", "expression": {"conjunction": "OR", "left": {"id": "MIT"}, "right": {"id": "ISC"}}}]"#,
        ".json",
    );
    licscan_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT OR ISC"))
        .stdout(predicate::str::contains("1 records"));
}

#[test]
fn test_validate_mismatch() {
    let file = create_temp_file(
        r#"[{"rawId": "MIT", "expression": {"id": "ISC"}}, {"rawId": "ISC", "expression": {"id": "ISC"}}]"#,
        ".json",
    );
    licscan_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not match"))
        .stderr(predicate::str::contains("1 of 2 records failed"));
}

#[test]
fn test_validate_not_json() {
    let file = create_temp_file("MIT", ".json");
    licscan_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON"));
}

// ===== licenses =====

#[test]
fn test_licenses_filter() {
    licscan_cmd()
        .args(["licenses", "--filter", "apache-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apache-2.0"))
        .stdout(predicate::str::contains("MIT\n").not());
}

#[test]
fn test_licenses_exceptions() {
    licscan_cmd()
        .args(["licenses", "--exceptions", "-f", "classpath"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classpath-exception-2.0"));
}

// ===== completion =====

#[test]
fn test_completion_bash() {
    licscan_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_licscan()"))
        .stdout(predicate::str::contains("COMPREPLY"));
}

#[test]
fn test_completion_fish() {
    licscan_cmd()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c licscan"));
}

#[test]
fn test_completion_install_instructions() {
    licscan_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~/.zshrc"));
}

#[test]
fn test_completion_unknown_shell() {
    licscan_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
