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

//! Commands that work on expressions and license records.

use super::LimitArgs;
use crate::commands::{self, ParseOutput};
use crate::error::CliError;
use clap::Subcommand;

/// Expression commands.
#[derive(Subcommand)]
pub enum ExpressionCommands {
    /// Parse an SPDX expression
    ///
    /// Prints the canonical form of the expression, or its license metadata
    /// JSON with --json.
    Parse {
        /// Expression text (quote it)
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Print license metadata JSON
        #[arg(short, long, conflicts_with = "ast")]
        json: bool,

        /// Print the raw expression tree as JSON
        #[arg(long)]
        ast: bool,

        /// Single-line JSON
        #[arg(short, long)]
        compact: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Check a file of expressions, one per line
    ///
    /// Blank lines and lines starting with '#' are ignored. Exits non-zero if
    /// any expression is invalid.
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Only report invalid lines
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Validate a JSON file of license records
    ///
    /// Each record is {"rawId": ..., "expression": ...}; identifiers must be
    /// known and rawId must parse to the same tree as expression.
    Validate {
        /// Input JSON file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// List known license or exception identifiers
    Licenses {
        /// List exception identifiers instead
        #[arg(short, long)]
        exceptions: bool,

        /// Only identifiers containing this text (case-insensitive)
        #[arg(short, long, value_name = "TEXT")]
        filter: Option<String>,
    },
}

impl ExpressionCommands {
    /// Execute the expression command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ExpressionCommands::Parse {
                expression,
                json,
                ast,
                compact,
                limits,
            } => {
                let output = if ast {
                    ParseOutput::Ast
                } else if json {
                    ParseOutput::Json
                } else {
                    ParseOutput::Text
                };
                commands::parse(&expression, output, compact, &limits.parse_options())
            }
            ExpressionCommands::Check {
                file,
                quiet,
                limits,
            } => commands::check(&file, quiet, &limits.parse_options()),
            ExpressionCommands::Validate { file } => commands::validate(&file),
            ExpressionCommands::Licenses { exceptions, filter } => {
                commands::licenses(exceptions, filter.as_deref())
            }
        }
    }
}
