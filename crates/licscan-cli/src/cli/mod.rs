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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by concern and flattened so they all appear at the
//! top level:
//!
//! - [`expression`]: parse, check, validate, licenses
//! - [`scan`]: evidence scanning of a directory tree
//! - [`utility`]: shell completion

mod expression;
mod scan;
mod utility;

use clap::{Args, Subcommand};
use licscan_core::ParseOptions;

use crate::error::CliError;

pub use expression::ExpressionCommands;
pub use scan::ScanCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Expression (parse, check, validate, licenses)
/// ├── Scan (scan)
/// └── Utility (completion)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use licscan_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Expression(ExpressionCommands),

    #[command(flatten)]
    Scan(ScanCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` on I/O failure, invalid input, or when any processed
    /// expression or record is invalid.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Expression(cmd) => cmd.execute(),
            Commands::Scan(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

/// Parser limit flags shared by commands that parse expressions.
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// Maximum parenthesis nesting depth (default: 64)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Maximum expression length in bytes (default: 65536)
    #[arg(long, value_name = "BYTES")]
    pub max_length: Option<usize>,
}

impl LimitArgs {
    /// Parse options with any overridden limits applied.
    pub fn parse_options(&self) -> ParseOptions {
        let mut builder = ParseOptions::builder();
        if let Some(depth) = self.max_depth {
            builder = builder.max_nesting_depth(depth);
        }
        if let Some(length) = self.max_length {
            builder = builder.max_expression_length(length);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use licscan_core::Limits;

    #[test]
    fn test_limit_args_default() {
        assert_eq!(LimitArgs::default().parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_limit_args_override() {
        let args = LimitArgs {
            max_depth: Some(3),
            max_length: None,
        };
        assert_eq!(
            args.parse_options().limits,
            Limits {
                max_nesting_depth: 3,
                ..Limits::default()
            }
        );
    }
}
