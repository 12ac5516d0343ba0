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

//! Expression parsing entry points.

use crate::error::{SpdxError, SpdxResult};
use crate::expression::CompoundExpression;
use crate::grammar::Grammar;
use crate::lex::Tokenizer;
use crate::limits::ParseOptions;

/// Parse an SPDX license expression with default limits.
///
/// The returned tree borrows `LicenseRef` identifiers from `text`; call
/// [`CompoundExpression::into_owned`] or use [`crate::Spdx`] to detach it.
///
/// # Examples
///
/// ```
/// use licscan_core::{parse, CompoundExpression, SpdxError};
///
/// let expr = parse("LGPL-2.1-only AND BSD-3-Clause OR MIT").unwrap();
/// assert!(matches!(expr, CompoundExpression::Or(..)));
///
/// assert_eq!(parse("MIT Apache-2.0").unwrap_err(), SpdxError::UnexpectedToken);
/// ```
pub fn parse(text: &str) -> SpdxResult<CompoundExpression<'_>> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse an SPDX license expression with custom options.
pub fn parse_with_options<'a>(
    text: &'a str,
    options: &ParseOptions,
) -> SpdxResult<CompoundExpression<'a>> {
    if text.len() > options.limits.max_expression_length {
        return Err(SpdxError::ExpressionTooLong);
    }

    let grammar = Grammar::new(&options.limits);
    let (expr, rest) = grammar.compound(Tokenizer::new(text), 0)?;

    if !rest.is_exhausted() {
        return Err(SpdxError::UnexpectedToken);
    }
    Ok(expr)
}
