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

//! License evidence scanning over a directory tree.
//!
//! Files are collected with `walkdir` (sequential, sorted), then scanned in
//! parallel with rayon. Each worker reads one file, extracts its evidence and
//! parses every expression it found into its own tree; the per-file results
//! are merged into a [`ScanReport`] in path order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use licscan_cli::scan::{ScanConfig, Scanner};
//!
//! # fn main() -> Result<(), licscan_cli::error::CliError> {
//! let report = Scanner::new(ScanConfig::default()).scan("path/to/project".as_ref())?;
//! for record in &report.records {
//!     println!("{}", record.raw_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod evidence;
pub mod walk;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use licscan_core::{LicenseId, ParseOptions, Spdx, SpdxError};
use licscan_json::LicenseRecord;
use rayon::prelude::*;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, warn};

use crate::error::CliError;
use evidence::{extract, is_license_file, license_from_file_name, Finding};

/// Default per-file size bound for scanning (10 MB).
pub const DEFAULT_SCAN_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Bytes inspected for a NUL byte before a file is treated as binary.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Files larger than this are skipped.
    pub max_file_size: u64,
    /// Worker threads; `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Limits applied to every expression.
    pub parse_options: ParseOptions,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_SCAN_FILE_SIZE,
            threads: None,
            parse_options: ParseOptions::default(),
        }
    }
}

/// A tagged expression that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionFailure {
    /// File path relative to the scan root.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// Expression text after the tag.
    pub expression: String,
    /// Parser error.
    pub error: SpdxError,
}

/// A copyright statement and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightStatement {
    /// File path relative to the scan root.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
    /// Statement text.
    pub text: String,
}

/// A file that was not scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// File path relative to the scan root.
    pub path: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of scanning one file.
#[derive(Debug, Clone)]
struct FileScan {
    path: String,
    license_file: bool,
    named_license: Option<LicenseId>,
    parsed: Vec<(Finding, Spdx)>,
    failures: Vec<ExpressionFailure>,
    copyrights: Vec<Finding>,
}

/// Aggregated scan results.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// The scanned root.
    pub root: PathBuf,
    /// Number of files read (skipped files excluded).
    pub files_scanned: usize,
    /// Number of tagged expressions seen, parsed or not.
    pub expressions_seen: usize,
    /// License files by relative path.
    pub license_files: Vec<String>,
    /// One record per distinct expression, with every file it appeared in.
    pub records: Vec<LicenseRecord>,
    /// Copyright statements in path and line order.
    pub copyrights: Vec<CopyrightStatement>,
    /// Expressions that failed to parse.
    pub failures: Vec<ExpressionFailure>,
    /// Files not scanned (too large, binary, unreadable).
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    /// Returns `true` if any tagged expression failed to parse.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Encode the report as JSON.
    ///
    /// Records use the `{"rawId", "expression"}` shape of [`LicenseRecord`].
    pub fn to_json_value(&self) -> JsonValue {
        json!({
            "root": self.root.display().to_string(),
            "filesScanned": self.files_scanned,
            "expressionsSeen": self.expressions_seen,
            "licenseFiles": self.license_files,
            "licenses": self.records.iter().map(LicenseRecord::to_json_value).collect::<Vec<_>>(),
            "copyrights": self.copyrights.iter().map(|c| json!({
                "file": c.path,
                "line": c.line,
                "text": c.text,
            })).collect::<Vec<_>>(),
            "errors": self.failures.iter().map(|f| json!({
                "file": f.path,
                "line": f.line,
                "expression": f.expression,
                "error": f.error.kind(),
                "message": f.error.to_string(),
            })).collect::<Vec<_>>(),
            "skipped": self.skipped.iter().map(|s| json!({
                "file": s.path,
                "reason": s.reason,
            })).collect::<Vec<_>>(),
        })
    }
}

/// Parallel evidence scanner.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root`, a directory or a single file.
    ///
    /// # Errors
    ///
    /// Fails only if `root` cannot be read or the worker pool cannot start;
    /// per-file problems end up in [`ScanReport::skipped`] and
    /// [`ScanReport::failures`].
    pub fn scan(&self, root: &Path) -> Result<ScanReport, CliError> {
        let files = walk::collect_files(root)?;

        let results = match self.config.threads.filter(|&t| t > 0) {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::ThreadPool(e.to_string()))?
                .install(|| self.scan_files(root, &files)),
            None => self.scan_files(root, &files),
        };

        let mut report = ScanReport {
            root: root.to_path_buf(),
            ..ScanReport::default()
        };
        let mut records: BTreeMap<String, LicenseRecord> = BTreeMap::new();

        for result in results {
            let scan = match result {
                Ok(scan) => scan,
                Err(skipped) => {
                    report.skipped.push(skipped);
                    continue;
                }
            };
            report.files_scanned += 1;
            report.expressions_seen += scan.parsed.len() + scan.failures.len();

            if scan.license_file {
                report.license_files.push(scan.path.clone());
            }
            if let Some(id) = scan.named_license {
                merge(&mut records, id.as_str(), || Spdx::init(id.as_str()), &scan.path);
            }
            for (finding, spdx) in scan.parsed {
                merge(&mut records, &finding.text, || Ok(spdx), &scan.path);
            }
            report.failures.extend(scan.failures);
            report
                .copyrights
                .extend(scan.copyrights.into_iter().map(|finding| CopyrightStatement {
                    path: scan.path.clone(),
                    line: finding.line,
                    text: finding.text,
                }));
        }

        report.records = records.into_values().collect();
        debug!(
            files = report.files_scanned,
            records = report.records.len(),
            failures = report.failures.len(),
            "scan finished"
        );
        Ok(report)
    }

    fn scan_files(&self, root: &Path, files: &[PathBuf]) -> Vec<Result<FileScan, SkippedFile>> {
        files
            .par_iter()
            .map(|path| self.scan_file(root, path))
            .collect()
    }

    fn scan_file(&self, root: &Path, path: &Path) -> Result<FileScan, SkippedFile> {
        let relative = walk::relative_path(root, path);
        let skipped = |reason: String| {
            warn!(path = %relative, %reason, "skipping file");
            SkippedFile {
                path: relative.clone(),
                reason,
            }
        };

        let bytes = read_bounded(path, self.config.max_file_size).map_err(|e| skipped(e.to_string()))?;
        if memchr::memchr(0, &bytes[..bytes.len().min(BINARY_SNIFF_LEN)]).is_some() {
            debug!(path = %relative, "binary file");
            return Err(SkippedFile {
                path: relative,
                reason: "binary file".to_string(),
            });
        }

        let content = String::from_utf8_lossy(&bytes);
        let evidence = extract(&content);
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        let mut parsed = Vec::new();
        let mut failures = Vec::new();
        for finding in evidence.expressions {
            match Spdx::init_with_options(&finding.text, &self.config.parse_options) {
                Ok(spdx) => parsed.push((finding, spdx)),
                Err(error) => {
                    debug!(path = %relative, line = finding.line, kind = error.kind(), "invalid expression");
                    failures.push(ExpressionFailure {
                        path: relative.clone(),
                        line: finding.line,
                        expression: finding.text,
                        error,
                    });
                }
            }
        }

        Ok(FileScan {
            license_file: is_license_file(&name),
            named_license: license_from_file_name(&name),
            path: relative,
            parsed,
            failures,
            copyrights: evidence.copyrights,
        })
    }
}

fn read_bounded(path: &Path, max: u64) -> Result<Vec<u8>, CliError> {
    let metadata = std::fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    std::fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Add `path` as evidence for the expression, keyed by canonical text.
///
/// The first raw text seen for a canonical expression becomes the record's
/// `rawId`.
fn merge(
    records: &mut BTreeMap<String, LicenseRecord>,
    raw_id: &str,
    spdx: impl FnOnce() -> Result<Spdx, SpdxError>,
    path: &str,
) {
    let spdx = match spdx() {
        Ok(spdx) => spdx,
        Err(error) => {
            warn!(raw_id, kind = error.kind(), "dropping unparsable evidence");
            return;
        }
    };
    let record = records
        .entry(spdx.to_string())
        .or_insert_with(|| LicenseRecord {
            raw_id: raw_id.to_string(),
            expression: spdx.into_root(),
            includes: Default::default(),
        });
    record.include_everywhere(path);
}
