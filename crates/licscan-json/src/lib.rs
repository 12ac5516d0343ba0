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

//! licscan JSON Conversion
//!
//! Converts SPDX expression trees to and from the nested JSON shape used by
//! license metadata:
//!
//! - license: `{"id": "MIT", "includes": [...]}`, plus `"orLater": true` for `+`
//! - reference: `{"licenseRef": "X", "documentRef"?: "D", "includes": [...]}`
//! - exception: `{"conjunction": "WITH", "license": {...}, "exceptionId": "...", "exceptionIncludes": [...]}`
//! - compound: `{"conjunction": "AND" | "OR", "left": {...}, "right": {...}}`
//!
//! Decoding validates every identifier against the registries, and a
//! [`LicenseRecord`] additionally checks its `rawId` text against the
//! decoded tree.
//!
//! # Examples
//!
//! ```rust
//! use licscan_json::{expression_to_json, json_to_expression};
//!
//! let expr = licscan_core::parse("GPL-2.0+ WITH Classpath-exception-2.0 OR MIT").unwrap();
//! let json = expression_to_json(&expr).unwrap();
//! let back = json_to_expression(&json).unwrap();
//! assert_eq!(back, expr);
//! ```

mod error;
mod from_json;
mod record;
mod to_json;

pub use error::JsonError;
pub use from_json::{decode_with_includes, from_json, from_json_value, FromJsonConfig, DEFAULT_MAX_DEPTH};
pub use record::{records_from_json, records_to_json, LicenseRecord};
pub use to_json::{include_key, to_json, to_json_value, Includes, ToJsonConfig};

use licscan_core::CompoundExpression;

/// Convert an expression to pretty-printed JSON with empty `includes`.
pub fn expression_to_json(expr: &CompoundExpression<'_>) -> Result<String, JsonError> {
    to_json(expr, &ToJsonConfig::default())
}

/// Convert JSON to an owned expression with default limits.
pub fn json_to_expression(json: &str) -> Result<CompoundExpression<'static>, JsonError> {
    from_json(json, &FromJsonConfig::default())
}
