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

//! Line-level license evidence: SPDX tags, copyright statements and
//! license file names.

use licscan_core::LicenseId;
use memchr::memmem;

/// Tag that introduces an SPDX expression in a source file.
pub const SPDX_TAG: &str = "SPDX-License-Identifier:";

/// File name prefixes (ASCII case-insensitive) that mark a license file.
pub const LICENSE_FILE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "NOTICE"];

const COMMENT_CLOSERS: &[&str] = &["*/", "-->", "*)"];
const COMMENT_LEADERS: &[&str] = &["///", "//!", "//", "/*", "<!--", "(*", "#", "*", ";", "--"];

/// A single line of evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    /// Extracted text.
    pub text: String,
}

/// Everything extracted from one text file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    /// Raw expressions following an SPDX tag, in file order.
    pub expressions: Vec<Finding>,
    /// Copyright statements, in file order.
    pub copyrights: Vec<Finding>,
}

impl Evidence {
    /// Returns `true` if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty() && self.copyrights.is_empty()
    }
}

/// Extract SPDX tag expressions and copyright statements from `content`.
///
/// # Examples
///
/// ```
/// use licscan_cli::scan::evidence::extract;
///
/// let evidence = extract("/* SPDX-License-Identifier: MIT OR Apache-2.0 */\n// Copyright 2024 Jane\n");
/// assert_eq!(evidence.expressions[0].text, "MIT OR Apache-2.0");
/// assert_eq!(evidence.copyrights[0].text, "Copyright 2024 Jane");
/// ```
pub fn extract(content: &str) -> Evidence {
    let finder = memmem::Finder::new(SPDX_TAG);
    let mut evidence = Evidence::default();

    for (index, line) in content.lines().enumerate() {
        if let Some(pos) = finder.find(line.as_bytes()) {
            evidence.expressions.push(Finding {
                line: index + 1,
                text: strip_closers(&line[pos + SPDX_TAG.len()..]).to_string(),
            });
        } else if let Some(statement) = copyright_statement(line) {
            evidence.copyrights.push(Finding {
                line: index + 1,
                text: statement.to_string(),
            });
        }
    }

    evidence
}

/// Trim `text` and drop trailing comment closers such as `*/` and `-->`.
pub fn strip_closers(text: &str) -> &str {
    let mut text = text.trim();
    while let Some(rest) = COMMENT_CLOSERS.iter().find_map(|closer| text.strip_suffix(closer)) {
        text = rest.trim_end();
    }
    text
}

fn strip_leaders(text: &str) -> &str {
    let mut text = text.trim_start();
    while let Some(rest) = COMMENT_LEADERS.iter().find_map(|leader| text.strip_prefix(leader)) {
        text = rest.trim_start();
    }
    text
}

/// The copyright statement on `line`, with comment markers removed.
///
/// A line qualifies if it contains `Copyright`, `©`, or a `(c)` mark
/// followed by a year.
pub fn copyright_statement(line: &str) -> Option<&str> {
    if !(line.contains("Copyright") || line.contains('©') || has_c_mark(line)) {
        return None;
    }
    let text = strip_closers(strip_leaders(line));
    (!text.is_empty()).then_some(text)
}

fn has_c_mark(line: &str) -> bool {
    ["(c)", "(C)"].iter().any(|mark| {
        line.match_indices(mark).any(|(pos, _)| {
            line[pos + mark.len()..]
                .trim_start()
                .starts_with(|c: char| c.is_ascii_digit())
        })
    })
}

/// Returns `true` if `name` starts with one of [`LICENSE_FILE_PREFIXES`].
pub fn is_license_file(name: &str) -> bool {
    license_prefix_len(name).is_some()
}

fn license_prefix_len(name: &str) -> Option<usize> {
    LICENSE_FILE_PREFIXES
        .iter()
        .find(|prefix| {
            name.len() >= prefix.len()
                && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
        })
        .map(|prefix| prefix.len())
}

/// License named by a file such as `LICENSE-MIT` or `COPYING.GPL-2.0-only.txt`.
///
/// ```
/// use licscan_cli::scan::evidence::license_from_file_name;
///
/// assert_eq!(license_from_file_name("LICENSE-mit").map(|id| id.as_str()), Some("MIT"));
/// assert_eq!(license_from_file_name("LICENSE.Apache-2.0.txt").map(|id| id.as_str()), Some("Apache-2.0"));
/// assert_eq!(license_from_file_name("LICENSE"), None);
/// ```
pub fn license_from_file_name(name: &str) -> Option<LicenseId> {
    let rest = &name[license_prefix_len(name)?..];
    let rest = rest.strip_prefix(['-', '.', '_'])?;
    LicenseId::parse(rest).ok().or_else(|| {
        let (stem, _extension) = rest.rsplit_once('.')?;
        LicenseId::parse(stem).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_in_comment_styles() {
        let content = "\
// SPDX-License-Identifier: MIT
# SPDX-License-Identifier: Apache-2.0 OR MIT
/* SPDX-License-Identifier: GPL-2.0+ WITH Classpath-exception-2.0 */
<!-- SPDX-License-Identifier: (MIT) -->
";
        let texts: Vec<_> = extract(content).expressions.into_iter().map(|f| f.text).collect();
        assert_eq!(
            texts,
            [
                "MIT",
                "Apache-2.0 OR MIT",
                "GPL-2.0+ WITH Classpath-exception-2.0",
                "(MIT)"
            ]
        );
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let evidence = extract("fn main() {}\n\n// SPDX-License-Identifier: ISC\n");
        assert_eq!(evidence.expressions[0].line, 3);
    }

    #[test]
    fn test_empty_tag_kept_for_reporting() {
        let evidence = extract("# SPDX-License-Identifier:\n");
        assert_eq!(evidence.expressions[0].text, "");
    }

    #[test]
    fn test_copyright_variants() {
        assert_eq!(
            copyright_statement(" * Copyright (c) 2020 The Authors"),
            Some("Copyright (c) 2020 The Authors")
        );
        assert_eq!(copyright_statement("# © 2019 Someone"), Some("© 2019 Someone"));
        assert_eq!(copyright_statement("-- (C) 1999 Acme --"), Some("(C) 1999 Acme --"));
        assert_eq!(copyright_statement("    is_id_char(c) && ok"), None);
        assert_eq!(copyright_statement("plain text"), None);
        assert_eq!(copyright_statement("//"), None);
    }

    #[test]
    fn test_tag_line_is_not_a_copyright() {
        let evidence = extract("// SPDX-License-Identifier: MIT (c) 2020\n");
        assert_eq!(evidence.expressions.len(), 1);
        assert!(evidence.copyrights.is_empty());
    }

    #[test]
    fn test_is_license_file() {
        assert!(is_license_file("LICENSE"));
        assert!(is_license_file("license.md"));
        assert!(is_license_file("Licence-MIT"));
        assert!(is_license_file("COPYING.LIB"));
        assert!(is_license_file("NOTICE"));
        assert!(!is_license_file("README.md"));
        assert!(!is_license_file("LIC"));
        assert!(!is_license_file("ünicode"));
    }

    #[test]
    fn test_license_from_file_name() {
        assert_eq!(license_from_file_name("LICENSE-MIT").unwrap().as_str(), "MIT");
        assert_eq!(
            license_from_file_name("copying_lgpl-2.1-only").unwrap().as_str(),
            "LGPL-2.1-only"
        );
        assert_eq!(license_from_file_name("LICENSE-APACHE"), None);
        assert_eq!(license_from_file_name("LICENSE.txt"), None);
        assert_eq!(license_from_file_name("README-MIT"), None);
    }
}
