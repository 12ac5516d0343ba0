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

//! Licenses command - list registry identifiers

use super::write_output;
use crate::error::CliError;
use licscan_core::registry::{EXCEPTION_IDS, LICENSE_IDS};

/// Print the license (or exception) identifiers known to the registry.
///
/// `filter` keeps identifiers containing it, ignoring ASCII case.
pub fn licenses(exceptions: bool, filter: Option<&str>) -> Result<(), CliError> {
    let ids = matching_ids(exceptions, filter);
    let mut out = ids.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    write_output(&out, None)
}

pub(crate) fn matching_ids(exceptions: bool, filter: Option<&str>) -> Vec<&'static str> {
    let table = if exceptions { EXCEPTION_IDS } else { LICENSE_IDS };
    let needle = filter.map(str::to_ascii_lowercase);
    table
        .iter()
        .copied()
        .filter(|id| match &needle {
            Some(needle) => id.to_ascii_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_licenses() {
        assert_eq!(matching_ids(false, None).len(), LICENSE_IDS.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let ids = matching_ids(true, Some("llvm"));
        assert_eq!(ids, ["LLVM-exception"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(matching_ids(false, Some("no-such-license-anywhere")).is_empty());
    }
}
