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

//! licscan CLI library: command parsing, evidence scanning and command
//! implementations for the `licscan` binary.
//!
//! # Commands
//!
//! - **parse**: canonical form, license metadata JSON or raw tree of one expression
//! - **check**: validate a file of expressions, one per line
//! - **validate**: validate a JSON file of license records
//! - **licenses**: list registry identifiers
//! - **scan**: parallel evidence scan of a directory tree, JSON report
//! - **completion**: shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use licscan_cli::scan::{ScanConfig, Scanner};
//!
//! # fn main() -> Result<(), licscan_cli::error::CliError> {
//! let report = Scanner::new(ScanConfig::default()).scan(".".as_ref())?;
//! println!("{}", serde_json::to_string_pretty(&report.to_json_value())?);
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! - Input files read by `check` and `validate` are bounded by
//!   `LICSCAN_MAX_FILE_SIZE` (default 100 MB).
//! - `scan` skips files above `--max-file-size` (default
//!   `LICSCAN_MAX_FILE_SIZE` or 10 MB).
//! - Every expression is parsed with bounded length and nesting depth.

pub mod cli;
pub mod commands;
pub mod error;
pub mod scan;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// licscan - SPDX license expression parser and evidence scanner
#[derive(Parser)]
#[command(name = "licscan")]
#[command(author, version, about = "licscan - SPDX license expression parser and evidence scanner", long_about = None)]
pub struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: cli::Commands,
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `licscan=debug` with `verbose` and
/// `licscan=warn` without.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "licscan=debug" } else { "licscan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
