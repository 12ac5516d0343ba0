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

//! Directory traversal for evidence scanning.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::CliError;

/// Directory names never descended into.
pub const SKIPPED_DIRS: &[&str] = &[".git", "target", "node_modules"];

fn is_skipped_dir(name: &OsStr) -> bool {
    SKIPPED_DIRS.iter().any(|skipped| name == OsStr::new(skipped))
}

/// Collect every regular file under `root`, sorted by path.
///
/// A `root` that is itself a file yields just that file. Unreadable entries
/// are logged and skipped.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, CliError> {
    let metadata = std::fs::metadata(root).map_err(|e| CliError::io_error(root, e))?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let files: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.depth() > 0 && entry.file_type().is_dir() && is_skipped_dir(entry.file_name());
            if skip {
                debug!(path = %entry.path().display(), "skipping directory");
            }
            !skip
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    debug!(root = %root.display(), files = files.len(), "collected files");
    Ok(files)
}

/// `path` relative to `root`, with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => path.file_name().map(Path::new).unwrap_or(path),
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_skips_vendor_dirs() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::create_dir_all(dir.path().join("target/debug")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("LICENSE"), "MIT").unwrap();
        fs::write(dir.path().join("src/nested/lib.rs"), "").unwrap();
        fs::write(dir.path().join(".git/config"), "").unwrap();
        fs::write(dir.path().join("target/debug/out"), "").unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();

        let files: Vec<String> = collect_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| relative_path(dir.path(), p))
            .collect();
        assert_eq!(files, ["LICENSE", "src/nested/lib.rs"]);
    }

    #[test]
    fn test_collect_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("COPYING");
        fs::write(&file, "").unwrap();
        let files = collect_files(&file).unwrap();
        assert_eq!(files, [file.clone()]);
        assert_eq!(relative_path(&file, &file), "COPYING");
    }

    #[test]
    fn test_collect_missing_root() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            collect_files(&dir.path().join("absent")),
            Err(CliError::Io { .. })
        ));
    }
}
