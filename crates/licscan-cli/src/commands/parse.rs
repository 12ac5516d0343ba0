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

//! Parse command - canonical form, metadata JSON or raw tree of one expression

use super::write_output;
use crate::error::CliError;
use licscan_core::{parse_with_options, ParseOptions};
use licscan_json::{to_json, ToJsonConfig};
use tracing::debug;

/// What `parse` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseOutput {
    /// Canonical expression text.
    #[default]
    Text,
    /// Nested license metadata JSON.
    Json,
    /// The expression tree as serialized by serde.
    Ast,
}

/// Parse one expression and print it.
///
/// # Errors
///
/// Returns [`CliError::Expression`] if the text is not a valid SPDX
/// expression under `options`.
///
/// # Examples
///
/// ```no_run
/// use licscan_cli::commands::{parse, ParseOutput};
/// use licscan_core::ParseOptions;
///
/// # fn main() -> Result<(), licscan_cli::error::CliError> {
/// parse("mit OR (apache-2.0)", ParseOutput::Text, false, &ParseOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn parse(
    expression: &str,
    output: ParseOutput,
    compact: bool,
    options: &ParseOptions,
) -> Result<(), CliError> {
    let mut rendered = render(expression, output, compact, options)?;
    rendered.push('\n');
    write_output(&rendered, None)
}

fn render(
    expression: &str,
    output: ParseOutput,
    compact: bool,
    options: &ParseOptions,
) -> Result<String, CliError> {
    let tree = parse_with_options(expression, options)
        .map_err(|e| CliError::expression(expression, e))?;
    debug!(?output, conjunction = ?tree.conjunction(), "parsed expression");

    Ok(match output {
        ParseOutput::Text => tree.to_string(),
        ParseOutput::Json => {
            let config = if compact {
                ToJsonConfig::default().compact()
            } else {
                ToJsonConfig::default()
            };
            to_json(&tree, &config)?
        }
        ParseOutput::Ast if compact => serde_json::to_string(&tree)?,
        ParseOutput::Ast => serde_json::to_string_pretty(&tree)?,
    })
}
