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

//! License metadata records: a raw expression string plus its decoded tree.

use licscan_core::{CompoundExpression, Spdx};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::JsonError;
use crate::from_json::{decode_with_includes, FromJsonConfig};
use crate::to_json::{compound_to_json, include_key, Includes};

/// One license finding.
///
/// Encoded as `{"rawId": <text>, "expression": <tree>}` where the tree's
/// `includes` arrays carry [`LicenseRecord::includes`].
///
/// # Examples
///
/// ```
/// use licscan_json::LicenseRecord;
///
/// let record = LicenseRecord::parse("mit OR Apache-2.0")
///     .unwrap()
///     .with_include("MIT", "LICENSE-MIT");
/// let json = record.to_json_value();
/// assert_eq!(json["rawId"], "mit OR Apache-2.0");
/// assert_eq!(json["expression"]["left"]["includes"][0], "LICENSE-MIT");
///
/// let back = LicenseRecord::from_json_value(&json).unwrap();
/// assert_eq!(back, record);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    /// The expression text as found in the evidence.
    pub raw_id: String,
    /// The parsed expression.
    pub expression: CompoundExpression<'static>,
    /// Evidence file paths per identifier.
    pub includes: Includes,
}

impl LicenseRecord {
    /// Parse `raw_id` into a record with no evidence paths.
    pub fn parse(raw_id: impl Into<String>) -> Result<Self, JsonError> {
        let raw_id = raw_id.into();
        match Spdx::init(&raw_id) {
            Ok(spdx) => Ok(Self {
                expression: spdx.into_root(),
                raw_id,
                includes: Includes::new(),
            }),
            Err(source) => Err(JsonError::InvalidRawId { raw_id, source }),
        }
    }

    /// Record `path` as evidence for identifier `id`.
    pub fn with_include(mut self, id: impl Into<String>, path: impl Into<String>) -> Self {
        self.add_include(id, path);
        self
    }

    /// Record `path` as evidence for identifier `id`, ignoring duplicates.
    pub fn add_include(&mut self, id: impl Into<String>, path: impl Into<String>) {
        let path = path.into();
        let paths = self.includes.entry(id.into()).or_default();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    /// Record `path` as evidence for every identifier in the expression.
    pub fn include_everywhere(&mut self, path: &str) {
        let mut keys: Vec<String> = self.expression.simple_expressions().into_iter().map(include_key).collect();
        keys.extend(self.expression.exceptions().iter().map(|e| e.as_str().to_string()));
        for key in keys {
            self.add_include(key, path);
        }
    }

    /// Encode as `{"rawId", "expression"}`.
    pub fn to_json_value(&self) -> JsonValue {
        let mut map = Map::with_capacity(2);
        map.insert("rawId".to_string(), JsonValue::from(self.raw_id.as_str()));
        map.insert(
            "expression".to_string(),
            compound_to_json(&self.expression, &self.includes),
        );
        JsonValue::Object(map)
    }

    /// Decode a record, checking that `rawId` parses to the same tree as `expression`.
    pub fn from_json_value(value: &JsonValue) -> Result<Self, JsonError> {
        let map = value
            .as_object()
            .ok_or_else(|| JsonError::ExpectedObject("$".to_string()))?;
        let raw_id = map
            .get("rawId")
            .ok_or(JsonError::MissingField {
                path: "$".to_string(),
                field: "rawId",
            })?
            .as_str()
            .ok_or(JsonError::InvalidField {
                path: "$".to_string(),
                field: "rawId",
                expected: "a string",
            })?;
        let encoded = map.get("expression").ok_or(JsonError::MissingField {
            path: "$".to_string(),
            field: "expression",
        })?;

        let (expression, includes) = decode_with_includes(encoded, &FromJsonConfig::default())?;
        let record = Self::parse(raw_id)?;
        if record.expression != expression {
            return Err(JsonError::RawIdMismatch {
                raw_id: record.raw_id,
                expression: expression.to_string(),
            });
        }

        Ok(Self { includes, ..record })
    }
}

impl Serialize for LicenseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LicenseRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        LicenseRecord::from_json_value(&value).map_err(D::Error::custom)
    }
}

/// Encode records as a JSON array.
pub fn records_to_json(records: &[LicenseRecord], pretty: bool) -> Result<String, JsonError> {
    let text = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(text)
}

/// Decode a JSON array of records, or a single record object.
pub fn records_from_json(json: &str) -> Result<Vec<LicenseRecord>, JsonError> {
    let value: JsonValue = serde_json::from_str(json)?;
    match &value {
        JsonValue::Array(items) => items.iter().map(LicenseRecord::from_json_value).collect(),
        _ => LicenseRecord::from_json_value(&value).map(|record| vec![record]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use licscan_core::SpdxError;
    use serde_json::json;

    #[test]
    fn test_parse_invalid_raw_id() {
        let err = LicenseRecord::parse("MIT AND").unwrap_err();
        assert_eq!(
            err,
            JsonError::InvalidRawId {
                raw_id: "MIT AND".to_string(),
                source: SpdxError::UnexpectedToken
            }
        );
    }

    #[test]
    fn test_raw_id_mismatch() {
        let value = json!({"rawId": "MIT", "expression": {"id": "ISC", "includes": []}});
        assert_eq!(
            LicenseRecord::from_json_value(&value).unwrap_err(),
            JsonError::RawIdMismatch {
                raw_id: "MIT".to_string(),
                expression: "ISC".to_string()
            }
        );
    }

    #[test]
    fn test_raw_id_whitespace_and_case_are_normalized() {
        let value = json!({"rawId": "( mit )", "expression": {"id": "MIT", "includes": ["LICENSE"]}});
        let record = LicenseRecord::from_json_value(&value).unwrap();
        assert_eq!(record.raw_id, "( mit )");
        assert_eq!(record.includes["MIT"], ["LICENSE"]);
    }

    #[test]
    fn test_include_everywhere() {
        let mut record = LicenseRecord::parse("GPL-2.0+ WITH Classpath-exception-2.0 OR LicenseRef-X").unwrap();
        record.include_everywhere("COPYING");
        record.include_everywhere("COPYING");
        assert_eq!(record.includes["GPL-2.0"], ["COPYING"]);
        assert_eq!(record.includes["Classpath-exception-2.0"], ["COPYING"]);
        assert_eq!(record.includes["LicenseRef-X"], ["COPYING"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let records = vec![
            LicenseRecord::parse("MIT").unwrap().with_include("MIT", "LICENSE"),
            LicenseRecord::parse("Apache-2.0 WITH LLVM-exception").unwrap(),
        ];
        let text = records_to_json(&records, false).unwrap();
        let back: Vec<LicenseRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, records);
        assert_eq!(records_from_json(&text).unwrap(), records);
    }

    #[test]
    fn test_records_from_single_object() {
        let records = records_from_json(r#"{"rawId": "ISC", "expression": {"id": "ISC"}}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            LicenseRecord::from_json_value(&json!({"expression": {"id": "MIT"}})).unwrap_err(),
            JsonError::MissingField { field: "rawId", .. }
        ));
        assert!(matches!(
            LicenseRecord::from_json_value(&json!({"rawId": "MIT"})).unwrap_err(),
            JsonError::MissingField { field: "expression", .. }
        ));
    }
}
