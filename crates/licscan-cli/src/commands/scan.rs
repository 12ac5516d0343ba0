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

//! Scan command - license evidence report for a directory tree

use super::write_output;
use crate::error::CliError;
use crate::scan::{ScanConfig, ScanReport, Scanner};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Scan `dir` and write the JSON report to `output` (or stdout).
///
/// A summary and every expression that failed to parse go to stderr, so
/// stdout carries only the report.
///
/// # Errors
///
/// Returns `Err` if the root cannot be read or the report cannot be
/// written, and [`CliError::Failures`] if any tagged expression failed to
/// parse (the report is still written first).
pub fn scan(dir: &str, output: Option<&str>, pretty: bool, config: ScanConfig) -> Result<(), CliError> {
    let report = Scanner::new(config).scan(Path::new(dir))?;
    info!(
        files = report.files_scanned,
        licenses = report.records.len(),
        "scanned {}",
        dir
    );

    let value = report.to_json_value();
    let mut json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    json.push('\n');
    write_output(&json, output)?;

    print_summary(&report);

    if report.has_failures() {
        return Err(CliError::failures(
            report.failures.len(),
            report.expressions_seen,
            "license expressions",
        ));
    }
    Ok(())
}

fn print_summary(report: &ScanReport) {
    for failure in &report.failures {
        eprintln!(
            "{} {}:{} {} - {} ({})",
            "✗".red().bold(),
            failure.path,
            failure.line,
            failure.expression,
            failure.error,
            failure.error.kind().dimmed()
        );
    }
    for skipped in &report.skipped {
        eprintln!("{} {} ({})", "-".yellow(), skipped.path, skipped.reason.dimmed());
    }
    eprintln!(
        "{} {} files, {} licenses, {} copyrights, {} errors",
        "Scanned".bright_blue().bold(),
        report.files_scanned,
        report.records.len(),
        report.copyrights.len(),
        report.failures.len()
    );
}
