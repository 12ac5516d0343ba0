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

//! Resource limits for expression parsing.

/// Default maximum expression length in bytes.
pub const DEFAULT_MAX_EXPRESSION_LENGTH: usize = 64 * 1024;

/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Configurable limits for parser safety.
///
/// Recursion depth of the grammar follows the parenthesis nesting of the
/// input, so untrusted input must be bounded before it reaches the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length in bytes (default: 64 KiB).
    pub max_expression_length: usize,
    /// Maximum parenthesis nesting depth (default: 64).
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expression_length: DEFAULT_MAX_EXPRESSION_LENGTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_expression_length: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }
}

/// Options for [`crate::parse_with_options`].
///
/// # Examples
///
/// ```
/// use licscan_core::{parse_with_options, ParseOptions, SpdxError};
///
/// let opts = ParseOptions::builder().max_nesting_depth(1).build();
/// assert!(parse_with_options("(MIT)", &opts).is_ok());
/// assert_eq!(
///     parse_with_options("((MIT))", &opts).unwrap_err(),
///     SpdxError::NestingTooDeep
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Start building options from the defaults.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Fluent builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Set the maximum expression length in bytes.
    pub fn max_expression_length(mut self, length: usize) -> Self {
        self.limits.max_expression_length = length;
        self
    }

    /// Set the maximum parenthesis nesting depth.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.limits.max_nesting_depth = depth;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Finish building.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}
