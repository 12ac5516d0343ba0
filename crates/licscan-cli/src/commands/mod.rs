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

//! CLI command implementations

mod check;
mod completion;
mod licenses;
mod parse;
mod scan;
mod validate;

pub use check::check;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use licenses::licenses;
pub use parse::{parse, ParseOutput};
pub use scan::scan;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum input file size (100 MB).
/// Can be overridden via the `LICSCAN_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum file size from `LICSCAN_MAX_FILE_SIZE`, or `default` if unset or invalid.
pub fn max_file_size_from_env(default: u64) -> u64 {
    std::env::var("LICSCAN_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Read a UTF-8 file from disk, rejecting files above the size limit.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is larger than
/// `LICSCAN_MAX_FILE_SIZE` (default [`DEFAULT_MAX_FILE_SIZE`]), or the
/// content cannot be read as UTF-8.
///
/// # Examples
///
/// ```no_run
/// use licscan_cli::commands::read_file;
///
/// # fn main() -> Result<(), licscan_cli::error::CliError> {
/// let content = read_file("expressions.txt")?;
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = max_file_size_from_env(DEFAULT_MAX_FILE_SIZE);
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout if `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
