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

//! Errors for JSON encoding and decoding.

use licscan_core::SpdxError;

/// Errors that can occur while converting between JSON and expression trees.
///
/// Paths use JSONPath notation rooted at `$`, e.g. `$.left.license`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JsonError {
    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// A node was not a JSON object.
    #[error("expected a JSON object at {0}")]
    ExpectedObject(String),

    /// A node had neither `conjunction`, `id` nor `licenseRef`.
    #[error("expected 'conjunction', 'id' or 'licenseRef' at {0}")]
    UnrecognizedNode(String),

    /// A required field was absent.
    #[error("missing field '{field}' at {path}")]
    MissingField {
        /// Location of the node.
        path: String,
        /// Name of the field.
        field: &'static str,
    },

    /// A field had the wrong JSON type or shape.
    #[error("field '{field}' at {path} must be {expected}")]
    InvalidField {
        /// Location of the node.
        path: String,
        /// Name of the field.
        field: &'static str,
        /// What the field should hold.
        expected: &'static str,
    },

    /// `conjunction` was not `AND`, `OR` or `WITH`.
    #[error("unknown conjunction '{conjunction}' at {path}")]
    UnknownConjunction {
        /// Location of the node.
        path: String,
        /// The offending value.
        conjunction: String,
    },

    /// An identifier failed validation.
    #[error("invalid identifier at {path}: {source}")]
    Identifier {
        /// Location of the node.
        path: String,
        /// Why the identifier was rejected.
        #[source]
        source: SpdxError,
    },

    /// The tree is nested deeper than allowed.
    #[error("maximum nesting depth ({0}) exceeded")]
    MaxDepthExceeded(usize),

    /// A record's `rawId` is not a valid expression.
    #[error("invalid rawId '{raw_id}': {source}")]
    InvalidRawId {
        /// The raw expression text.
        raw_id: String,
        /// Why it failed to parse.
        #[source]
        source: SpdxError,
    },

    /// A record's `rawId` parses to a different tree than its `expression`.
    #[error("rawId '{raw_id}' does not match the encoded expression '{expression}'")]
    RawIdMismatch {
        /// The raw expression text.
        raw_id: String,
        /// Canonical rendering of the decoded `expression`.
        expression: String,
    },
}

impl JsonError {
    /// The underlying SPDX error, if any.
    pub fn spdx_error(&self) -> Option<SpdxError> {
        match self {
            JsonError::Identifier { source, .. } | JsonError::InvalidRawId { source, .. } => {
                Some(*source)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::ParseError(err.to_string())
    }
}
