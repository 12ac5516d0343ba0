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

//! Evidence scanning command.

use super::LimitArgs;
use crate::commands::{self, max_file_size_from_env};
use crate::error::CliError;
use crate::scan::{ScanConfig, DEFAULT_SCAN_FILE_SIZE};
use clap::Subcommand;

/// Scan commands.
#[derive(Subcommand)]
pub enum ScanCommands {
    /// Scan a directory for license evidence
    ///
    /// Finds LICENSE/LICENCE/COPYING/NOTICE files, SPDX-License-Identifier
    /// tags and copyright lines, parses every tagged expression and prints a
    /// JSON report. Exits non-zero if any tagged expression is invalid.
    Scan {
        /// Directory (or single file) to scan
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Skip files larger than this many bytes
        /// (default: LICSCAN_MAX_FILE_SIZE or 10 MB)
        #[arg(long, value_name = "BYTES")]
        max_file_size: Option<u64>,

        /// Worker threads (default: one per CPU)
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Single-line JSON
        #[arg(short, long)]
        compact: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

impl ScanCommands {
    /// Execute the scan command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ScanCommands::Scan {
                dir,
                output,
                max_file_size,
                threads,
                compact,
                limits,
            } => {
                let config = ScanConfig {
                    max_file_size: max_file_size
                        .unwrap_or_else(|| max_file_size_from_env(DEFAULT_SCAN_FILE_SIZE)),
                    threads,
                    parse_options: limits.parse_options(),
                };
                commands::scan(&dir, output.as_deref(), !compact, config)
            }
        }
    }
}
