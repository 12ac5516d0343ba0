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

//! Check command - validate a file of expressions, one per line

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use licscan_core::{parse_with_options, ParseOptions, SpdxError};

/// Outcome of checking one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineResult {
    pub line: usize,
    pub text: String,
    pub result: Result<String, SpdxError>,
}

/// Parse every non-blank line of `file` that does not start with `#`.
///
/// Valid lines are printed with their canonical form, invalid ones with the
/// error kind.
///
/// # Errors
///
/// Returns [`CliError::Failures`] if any line fails, after every line has
/// been reported.
///
/// # Examples
///
/// ```no_run
/// use licscan_cli::commands::check;
/// use licscan_core::ParseOptions;
///
/// # fn main() -> Result<(), licscan_cli::error::CliError> {
/// check("expressions.txt", false, &ParseOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn check(file: &str, quiet: bool, options: &ParseOptions) -> Result<(), CliError> {
    let content = read_file(file)?;
    let results = check_lines(&content, options);

    let mut failed = 0;
    for line in &results {
        match &line.result {
            Ok(canonical) => {
                if !quiet {
                    println!("{} {}:{} {}", "✓".green().bold(), file, line.line, canonical);
                }
            }
            Err(e) => {
                failed += 1;
                println!(
                    "{} {}:{} {} - {} ({})",
                    "✗".red().bold(),
                    file,
                    line.line,
                    line.text,
                    e,
                    e.kind().dimmed()
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::failures(failed, results.len(), "expressions"));
    }
    Ok(())
}

pub(crate) fn check_lines(content: &str, options: &ParseOptions) -> Vec<LineResult> {
    content
        .lines()
        .enumerate()
        .map(|(index, text)| (index, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(index, text)| LineResult {
            line: index + 1,
            text: text.to_string(),
            result: parse_with_options(text, options).map(|tree| tree.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lines() {
        let content = "# header\nmit\n\nMIT Apache-2.0\n  (isc OR zlib)  \n";
        let results = check_lines(content, &ParseOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].line, 2);
        assert_eq!(results[0].result, Ok("MIT".to_string()));
        assert_eq!(results[1].line, 4);
        assert_eq!(results[1].result, Err(SpdxError::UnexpectedToken));
        assert_eq!(results[2].result, Ok("ISC OR Zlib".to_string()));
    }

    #[test]
    fn test_check_lines_empty() {
        assert!(check_lines("\n# only comments\n", &ParseOptions::default()).is_empty());
    }
}
