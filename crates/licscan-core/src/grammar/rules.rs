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

//! The SPDX expression grammar.
//!
//! ```text
//! simple-expression     := license-id-and-plus | license-id | license-ref
//! simple-with-exception := simple-expression "WITH" license-exception-id
//! primary               := simple-with-exception | simple-expression | "(" compound ")"
//! and-level             := primary [ "AND" primary ]
//! compound              := and-level [ "OR" and-level ]
//! ```
//!
//! Each level takes at most one operator, so `A AND B AND C` stops after
//! `A AND B` and the caller sees a leftover token.

use super::combinators::{and_then, any_token, choice, literal, map, maybe, one_of, sequence, FailurePolicy, Step};
use crate::error::SpdxError;
use crate::expression::{CompoundExpression, SimpleExpression, SimpleWithException};
use crate::ident::{LicenseExceptionId, LicenseId, LicenseRef};
use crate::lex::{Token, Tokenizer};
use crate::limits::Limits;

/// A registry ID followed by `+`, in one token.
pub fn license_id_and_plus<'a>(input: Tokenizer<'a>) -> Step<'a, SimpleExpression<'a>> {
    and_then(any_token, |token: Token<'a>| {
        let id = token.text.strip_suffix('+').ok_or(SpdxError::UnexpectedToken)?;
        LicenseId::parse(id).map(SimpleExpression::LicenseIdOrLater)
    })(input)
}

/// A registry license ID.
pub fn license_id<'a>(input: Tokenizer<'a>) -> Step<'a, SimpleExpression<'a>> {
    and_then(any_token, |token: Token<'a>| {
        LicenseId::parse(token.text).map(SimpleExpression::LicenseId)
    })(input)
}

/// `[DocumentRef-id:]LicenseRef-id`, in one token.
pub fn license_ref<'a>(input: Tokenizer<'a>) -> Step<'a, SimpleExpression<'a>> {
    and_then(any_token, |token: Token<'a>| {
        LicenseRef::parse(token.text).map(SimpleExpression::LicenseRef)
    })(input)
}

/// A registry exception ID.
pub fn license_exception_id<'a>(input: Tokenizer<'a>) -> Step<'a, LicenseExceptionId> {
    and_then(any_token, |token: Token<'a>| LicenseExceptionId::parse(token.text))(input)
}

/// One license term. Fails with [`SpdxError::InvalidSimpleExpression`]
/// whatever the individual alternatives reported.
pub fn simple_expression<'a>(input: Tokenizer<'a>) -> Step<'a, SimpleExpression<'a>> {
    choice(
        FailurePolicy::Collapse(SpdxError::InvalidSimpleExpression),
        (license_id_and_plus, license_id, license_ref),
    )(input)
}

/// `simple-expression WITH license-exception-id`.
pub fn simple_with_exception<'a>(input: Tokenizer<'a>) -> Step<'a, SimpleWithException<'a>> {
    map(
        sequence((simple_expression, literal("WITH"), license_exception_id)),
        |(license, _, exception)| SimpleWithException { license, exception },
    )(input)
}

/// The recursive part of the grammar, carrying the nesting limit.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    max_nesting_depth: usize,
}

impl Grammar {
    /// Grammar bounded by `limits`.
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_nesting_depth: limits.max_nesting_depth,
        }
    }

    /// `and-level [ "OR" and-level ]` at paren depth `depth`.
    pub fn compound<'a>(&self, input: Tokenizer<'a>, depth: usize) -> Step<'a, CompoundExpression<'a>> {
        let operand = |input: Tokenizer<'a>| self.and_level(input, depth);
        map(
            sequence((operand, maybe(sequence((literal("OR"), operand))))),
            |(lhs, rhs)| match rhs {
                Some((_, rhs)) => CompoundExpression::or(lhs, rhs),
                None => lhs,
            },
        )(input)
    }

    /// `primary [ "AND" primary ]`.
    fn and_level<'a>(&self, input: Tokenizer<'a>, depth: usize) -> Step<'a, CompoundExpression<'a>> {
        let operand = |input: Tokenizer<'a>| self.primary(input, depth);
        map(
            sequence((operand, maybe(sequence((literal("AND"), operand))))),
            |(lhs, rhs)| match rhs {
                Some((_, rhs)) => CompoundExpression::and(lhs, rhs),
                None => lhs,
            },
        )(input)
    }

    fn primary<'a>(&self, input: Tokenizer<'a>, depth: usize) -> Step<'a, CompoundExpression<'a>> {
        one_of((
            map(simple_with_exception, CompoundExpression::With),
            map(simple_expression, CompoundExpression::Simple),
            |input: Tokenizer<'a>| self.parenthesized(input, depth),
        ))(input)
    }

    fn parenthesized<'a>(&self, input: Tokenizer<'a>, depth: usize) -> Step<'a, CompoundExpression<'a>> {
        let nested = |input: Tokenizer<'a>| {
            if depth >= self.max_nesting_depth {
                return Err(SpdxError::NestingTooDeep);
            }
            self.compound(input, depth + 1)
        };
        map(
            sequence((literal("("), nested, literal(")"))),
            |(_, expr, _)| expr,
        )(input)
    }
}
