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

//! Expression tree to JSON conversion.

use std::collections::BTreeMap;

use licscan_core::{CompoundExpression, SimpleExpression, SimpleWithException};
use serde_json::{Map, Value as JsonValue};

use crate::error::JsonError;

/// Evidence file paths per identifier.
///
/// Keys are canonical identifiers as rendered by `Display`: a license ID
/// without the `+` suffix (`GPL-2.0`), a full reference
/// (`DocumentRef-a:LicenseRef-b`), or an exception ID.
pub type Includes = BTreeMap<String, Vec<String>>;

/// Configuration for JSON output.
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print the string output (default: true).
    pub pretty: bool,
    /// Paths rendered into `includes` / `exceptionIncludes`.
    pub includes: Includes,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            includes: Includes::new(),
        }
    }
}

impl ToJsonConfig {
    /// Record `path` as evidence for `id`.
    pub fn with_include(mut self, id: impl Into<String>, path: impl Into<String>) -> Self {
        self.includes.entry(id.into()).or_default().push(path.into());
        self
    }

    /// Compact single-line output.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

/// Key under which a simple expression's evidence is stored in [`Includes`].
pub fn include_key(simple: &SimpleExpression<'_>) -> String {
    match simple {
        SimpleExpression::LicenseId(id) | SimpleExpression::LicenseIdOrLater(id) => {
            id.as_str().to_string()
        }
        SimpleExpression::LicenseRef(r) => r.to_string(),
    }
}

/// Convert an expression to a JSON string.
///
/// ```
/// use licscan_json::{to_json, ToJsonConfig};
///
/// let expr = licscan_core::parse("MIT").unwrap();
/// let json = to_json(&expr, &ToJsonConfig::default().compact()).unwrap();
/// assert_eq!(json, r#"{"id":"MIT","includes":[]}"#);
/// ```
pub fn to_json(expr: &CompoundExpression<'_>, config: &ToJsonConfig) -> Result<String, JsonError> {
    let value = to_json_value(expr, config);
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Convert an expression to a `serde_json::Value`.
pub fn to_json_value(expr: &CompoundExpression<'_>, config: &ToJsonConfig) -> JsonValue {
    compound_to_json(expr, &config.includes)
}

pub(crate) fn compound_to_json(expr: &CompoundExpression<'_>, includes: &Includes) -> JsonValue {
    match expr {
        CompoundExpression::Simple(simple) => simple_to_json(simple, includes),
        CompoundExpression::With(with) => with_to_json(with, includes),
        CompoundExpression::And(lhs, rhs) => conjunction_to_json("AND", lhs, rhs, includes),
        CompoundExpression::Or(lhs, rhs) => conjunction_to_json("OR", lhs, rhs, includes),
    }
}

fn paths(includes: &Includes, key: &str) -> JsonValue {
    let list: Vec<JsonValue> = includes
        .get(key)
        .map(|paths| paths.iter().cloned().map(JsonValue::String).collect())
        .unwrap_or_default();
    JsonValue::Array(list)
}

fn simple_to_json(simple: &SimpleExpression<'_>, includes: &Includes) -> JsonValue {
    let mut map = Map::with_capacity(3);
    match simple {
        SimpleExpression::LicenseId(id) => {
            map.insert("id".to_string(), JsonValue::from(id.as_str()));
        }
        SimpleExpression::LicenseIdOrLater(id) => {
            map.insert("id".to_string(), JsonValue::from(id.as_str()));
            map.insert("orLater".to_string(), JsonValue::Bool(true));
        }
        SimpleExpression::LicenseRef(r) => {
            map.insert("licenseRef".to_string(), JsonValue::from(r.license_ref.as_str()));
            if let Some(document_ref) = &r.document_ref {
                map.insert("documentRef".to_string(), JsonValue::from(document_ref.as_str()));
            }
        }
    }
    map.insert("includes".to_string(), paths(includes, &include_key(simple)));
    JsonValue::Object(map)
}

fn with_to_json(with: &SimpleWithException<'_>, includes: &Includes) -> JsonValue {
    let mut map = Map::with_capacity(4);
    map.insert("conjunction".to_string(), JsonValue::from("WITH"));
    map.insert("license".to_string(), simple_to_json(&with.license, includes));
    map.insert("exceptionId".to_string(), JsonValue::from(with.exception.as_str()));
    map.insert(
        "exceptionIncludes".to_string(),
        paths(includes, with.exception.as_str()),
    );
    JsonValue::Object(map)
}

fn conjunction_to_json(
    conjunction: &str,
    lhs: &CompoundExpression<'_>,
    rhs: &CompoundExpression<'_>,
    includes: &Includes,
) -> JsonValue {
    let mut map = Map::with_capacity(3);
    map.insert("conjunction".to_string(), JsonValue::from(conjunction));
    map.insert("left".to_string(), compound_to_json(lhs, includes));
    map.insert("right".to_string(), compound_to_json(rhs, includes));
    JsonValue::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use licscan_core::parse;
    use serde_json::json;

    #[test]
    fn test_simple_license() {
        let expr = parse("MIT").unwrap();
        assert_eq!(
            to_json_value(&expr, &ToJsonConfig::default()),
            json!({"id": "MIT", "includes": []})
        );
    }

    #[test]
    fn test_or_later() {
        let expr = parse("gpl-2.0+").unwrap();
        assert_eq!(
            to_json_value(&expr, &ToJsonConfig::default()),
            json!({"id": "GPL-2.0", "orLater": true, "includes": []})
        );
    }

    #[test]
    fn test_license_ref_with_document() {
        let expr = parse("DocumentRef-Foo:LicenseRef-Bar").unwrap();
        let config = ToJsonConfig::default().with_include("DocumentRef-Foo:LicenseRef-Bar", "NOTICE");
        assert_eq!(
            to_json_value(&expr, &config),
            json!({"licenseRef": "Bar", "documentRef": "Foo", "includes": ["NOTICE"]})
        );
    }

    #[test]
    fn test_with_exception() {
        let expr = parse("GPL-3.0-only WITH LLVM-exception").unwrap();
        let config = ToJsonConfig::default()
            .with_include("GPL-3.0-only", "COPYING")
            .with_include("LLVM-exception", "LICENSE.TXT");
        assert_eq!(
            to_json_value(&expr, &config),
            json!({
                "conjunction": "WITH",
                "license": {"id": "GPL-3.0-only", "includes": ["COPYING"]},
                "exceptionId": "LLVM-exception",
                "exceptionIncludes": ["LICENSE.TXT"]
            })
        );
    }

    #[test]
    fn test_conjunctions() {
        let expr = parse("MIT AND ISC OR Zlib").unwrap();
        assert_eq!(
            to_json_value(&expr, &ToJsonConfig::default()),
            json!({
                "conjunction": "OR",
                "left": {
                    "conjunction": "AND",
                    "left": {"id": "MIT", "includes": []},
                    "right": {"id": "ISC", "includes": []}
                },
                "right": {"id": "Zlib", "includes": []}
            })
        );
    }

    #[test]
    fn test_pretty_and_compact() {
        let expr = parse("MIT").unwrap();
        let pretty = to_json(&expr, &ToJsonConfig::default()).unwrap();
        assert!(pretty.contains('\n'));
        let compact = to_json(&expr, &ToJsonConfig::default().compact()).unwrap();
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_include_key() {
        let expr = parse("GPL-2.0+").unwrap();
        assert_eq!(include_key(expr.simple_expressions()[0]), "GPL-2.0");
    }
}
