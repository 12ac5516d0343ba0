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

//! Structured error types for the licscan CLI.
//!
//! Every command returns `Result<T, CliError>`; `main` prints the error as
//! `Error: <message>` and exits with a failure status.

use licscan_core::SpdxError;
use licscan_json::JsonError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for licscan CLI operations.
///
/// Implements `Clone` so per-file failures can be collected from parallel
/// scan workers.
///
/// # Examples
///
/// ```rust,no_run
/// use licscan_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, directory walk).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed size in bytes
        max: u64,
        /// The maximum allowed size in MB (for display)
        max_mb: u64,
    },

    /// An SPDX expression failed to parse.
    #[error("invalid expression '{expression}': {source} ({})", .source.kind())]
    Expression {
        /// The offending expression text
        expression: String,
        /// The parser error
        #[source]
        source: SpdxError,
    },

    /// JSON conversion error.
    #[error("JSON conversion error: {0}")]
    Json(#[from] JsonError),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Some inputs failed; details were already reported per item.
    #[error("{failed} of {total} {what} failed")]
    Failures {
        /// Number of failed items
        failed: usize,
        /// Number of items processed
        total: usize,
        /// What was being processed ("expressions", "records", ...)
        what: &'static str,
    },

    /// The rayon thread pool could not be built.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an expression error.
    pub fn expression(expression: impl Into<String>, source: SpdxError) -> Self {
        Self::Expression {
            expression: expression.into(),
            source,
        }
    }

    /// Create a failure summary error.
    pub fn failures(failed: usize, total: usize, what: &'static str) -> Self {
        Self::Failures { failed, total, what }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
