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

//! JSON to expression tree conversion.

use licscan_core::{
    CompoundExpression, IdString, LicenseExceptionId, LicenseId, LicenseRef, Limits, SimpleExpression,
    SimpleWithException, SpdxError, DEFAULT_MAX_NESTING_DEPTH,
};
use serde_json::{Map, Value as JsonValue};

use crate::error::JsonError;
use crate::to_json::{include_key, Includes};

/// Default maximum nesting depth of `left`/`right` objects.
///
/// Every parenthesis level of a parsed expression holds at most one `OR`
/// over one `AND`, so a tree accepted by the parser's default limits is at
/// most this deep.
pub const DEFAULT_MAX_DEPTH: usize = object_depth(DEFAULT_MAX_NESTING_DEPTH);

const fn object_depth(paren_depth: usize) -> usize {
    paren_depth.saturating_add(1).saturating_mul(2)
}

/// Configuration for JSON input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// Maximum `AND`/`OR` nesting depth.
    pub max_depth: usize,
}

impl FromJsonConfig {
    /// Depth limit that admits every tree the parser accepts under `limits`.
    pub fn for_limits(limits: &Limits) -> Self {
        Self {
            max_depth: object_depth(limits.max_nesting_depth),
        }
    }
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode a JSON string into an owned expression tree.
///
/// Every identifier is validated against the registries again, so a document
/// naming an unknown license is rejected.
///
/// ```
/// use licscan_json::{from_json, FromJsonConfig};
///
/// let json = r#"{"conjunction": "OR", "left": {"id": "mit"}, "right": {"licenseRef": "X"}}"#;
/// let expr = from_json(json, &FromJsonConfig::default()).unwrap();
/// assert_eq!(expr.to_string(), "MIT OR LicenseRef-X");
/// ```
pub fn from_json(json: &str, config: &FromJsonConfig) -> Result<CompoundExpression<'static>, JsonError> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value, config)
}

/// Decode a `serde_json::Value` into an owned expression tree.
pub fn from_json_value(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<CompoundExpression<'static>, JsonError> {
    decode_with_includes(value, config).map(|(expr, _)| expr)
}

/// Decode a tree and collect the `includes` / `exceptionIncludes` paths it carries.
pub fn decode_with_includes(
    value: &JsonValue,
    config: &FromJsonConfig,
) -> Result<(CompoundExpression<'static>, Includes), JsonError> {
    let mut decoder = Decoder {
        config,
        includes: Includes::new(),
    };
    let expr = decoder.compound(value, "$", 0)?;
    Ok((expr, decoder.includes))
}

struct Decoder<'c> {
    config: &'c FromJsonConfig,
    includes: Includes,
}

impl Decoder<'_> {
    fn compound(
        &mut self,
        value: &JsonValue,
        path: &str,
        depth: usize,
    ) -> Result<CompoundExpression<'static>, JsonError> {
        if depth > self.config.max_depth {
            return Err(JsonError::MaxDepthExceeded(self.config.max_depth));
        }
        let map = as_object(value, path)?;

        let Some(conjunction) = map.get("conjunction") else {
            return self.simple(map, path).map(CompoundExpression::Simple);
        };

        match conjunction.as_str() {
            Some(op @ ("AND" | "OR")) => {
                let lhs = self.compound(required(map, "left", path)?, &format!("{}.left", path), depth + 1)?;
                let rhs = self.compound(required(map, "right", path)?, &format!("{}.right", path), depth + 1)?;
                Ok(if op == "AND" {
                    CompoundExpression::and(lhs, rhs)
                } else {
                    CompoundExpression::or(lhs, rhs)
                })
            }
            Some("WITH") => self.with(map, path).map(CompoundExpression::With),
            Some(other) => Err(JsonError::UnknownConjunction {
                path: path.to_string(),
                conjunction: other.to_string(),
            }),
            None => Err(JsonError::InvalidField {
                path: path.to_string(),
                field: "conjunction",
                expected: "a string",
            }),
        }
    }

    fn with(
        &mut self,
        map: &Map<String, JsonValue>,
        path: &str,
    ) -> Result<SimpleWithException<'static>, JsonError> {
        let license_path = format!("{}.license", path);
        let license_map = as_object(required(map, "license", path)?, &license_path)?;
        if license_map.contains_key("conjunction") {
            return Err(JsonError::InvalidField {
                path: path.to_string(),
                field: "license",
                expected: "a license or license reference",
            });
        }
        let license = self.simple(license_map, &license_path)?;

        let exception_text = string_field(map, "exceptionId", path)?;
        let exception = LicenseExceptionId::parse(exception_text).map_err(|e| identifier(path, e))?;
        self.collect(map, "exceptionIncludes", exception.as_str(), path)?;

        Ok(SimpleWithException { license, exception })
    }

    fn simple(
        &mut self,
        map: &Map<String, JsonValue>,
        path: &str,
    ) -> Result<SimpleExpression<'static>, JsonError> {
        let simple = if let Some(id) = map.get("id") {
            let text = id.as_str().ok_or_else(|| invalid(path, "id", "a string"))?;
            let id = LicenseId::parse(text).map_err(|e| identifier(path, e))?;
            let or_later = match map.get("orLater") {
                None => false,
                Some(flag) => flag.as_bool().ok_or_else(|| invalid(path, "orLater", "a boolean"))?,
            };
            if or_later {
                SimpleExpression::LicenseIdOrLater(id)
            } else {
                SimpleExpression::LicenseId(id)
            }
        } else if let Some(license_ref) = map.get("licenseRef") {
            let text = license_ref
                .as_str()
                .ok_or_else(|| invalid(path, "licenseRef", "a string"))?;
            let license_ref = IdString::parse(text).map_err(|e| identifier(path, e))?.into_owned();
            let document_ref = match map.get("documentRef") {
                None => None,
                Some(doc) => {
                    let text = doc.as_str().ok_or_else(|| invalid(path, "documentRef", "a string"))?;
                    Some(IdString::parse(text).map_err(|e| identifier(path, e))?.into_owned())
                }
            };
            SimpleExpression::LicenseRef(LicenseRef {
                document_ref,
                license_ref,
            })
        } else {
            return Err(JsonError::UnrecognizedNode(path.to_string()));
        };

        self.collect(map, "includes", &include_key(&simple), path)?;
        Ok(simple)
    }

    fn collect(
        &mut self,
        map: &Map<String, JsonValue>,
        field: &'static str,
        key: &str,
        path: &str,
    ) -> Result<(), JsonError> {
        let Some(value) = map.get(field) else {
            return Ok(());
        };
        let items = value
            .as_array()
            .ok_or_else(|| invalid(path, field, "an array of strings"))?;
        if items.is_empty() {
            return Ok(());
        }

        let entry = self.includes.entry(key.to_string()).or_default();
        for item in items {
            let file = item
                .as_str()
                .ok_or_else(|| invalid(path, field, "an array of strings"))?;
            if !entry.iter().any(|existing| existing == file) {
                entry.push(file.to_string());
            }
        }
        Ok(())
    }
}

fn as_object<'v>(value: &'v JsonValue, path: &str) -> Result<&'v Map<String, JsonValue>, JsonError> {
    value
        .as_object()
        .ok_or_else(|| JsonError::ExpectedObject(path.to_string()))
}

fn required<'v>(
    map: &'v Map<String, JsonValue>,
    field: &'static str,
    path: &str,
) -> Result<&'v JsonValue, JsonError> {
    map.get(field).ok_or_else(|| JsonError::MissingField {
        path: path.to_string(),
        field,
    })
}

fn string_field<'v>(
    map: &'v Map<String, JsonValue>,
    field: &'static str,
    path: &str,
) -> Result<&'v str, JsonError> {
    required(map, field, path)?
        .as_str()
        .ok_or_else(|| invalid(path, field, "a string"))
}

fn invalid(path: &str, field: &'static str, expected: &'static str) -> JsonError {
    JsonError::InvalidField {
        path: path.to_string(),
        field,
        expected,
    }
}

fn identifier(path: &str, source: SpdxError) -> JsonError {
    JsonError::Identifier {
        path: path.to_string(),
        source,
    }
}
