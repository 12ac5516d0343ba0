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

//! Validate command - license record JSON validation

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use licscan_json::{JsonError, LicenseRecord};
use serde_json::Value as JsonValue;

/// Validate a JSON file of license records.
///
/// The file holds an array of `{"rawId", "expression"}` objects (or a single
/// one). Each record's identifiers are checked against the registries, and its
/// `rawId` must parse to the same tree as its `expression`.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not JSON, or
/// [`CliError::Failures`] after reporting every invalid record.
///
/// # Examples
///
/// ```no_run
/// use licscan_cli::commands::validate;
///
/// # fn main() -> Result<(), licscan_cli::error::CliError> {
/// validate("licenses.json")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    let results = validate_records(&content)?;

    let mut failed = 0;
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(record) => println!("{} [{}] {}", "✓".green().bold(), index, record.raw_id),
            Err(e) => {
                failed += 1;
                println!("{} [{}] {}", "✗".red().bold(), index, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failures(failed, results.len(), "records"));
    }
    println!("{} {} ({} records)", "✓".green().bold(), file, results.len());
    Ok(())
}

pub(crate) fn validate_records(
    content: &str,
) -> Result<Vec<Result<LicenseRecord, JsonError>>, CliError> {
    let value: JsonValue = serde_json::from_str(content).map_err(JsonError::from)?;
    Ok(match &value {
        JsonValue::Array(items) => items.iter().map(LicenseRecord::from_json_value).collect(),
        _ => vec![LicenseRecord::from_json_value(&value)],
    })
}
