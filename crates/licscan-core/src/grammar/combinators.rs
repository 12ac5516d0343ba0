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

//! Parser combinators over an immutable [`Tokenizer`] cursor.
//!
//! A rule is any `Fn(Tokenizer<'a>) -> Step<'a, T>`: it receives a cursor by
//! value and, on success, returns the value together with the cursor
//! positioned after it. A failed rule returns only the error, so the caller's
//! cursor is never disturbed and backtracking needs no restore step.

use crate::error::{SpdxError, SpdxResult};
use crate::lex::{Token, Tokenizer};

/// Result of applying a rule: the value and the advanced cursor.
pub type Step<'a, T> = Result<(T, Tokenizer<'a>), SpdxError>;

/// How an ordered choice reports failure when every alternative failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the error of the last alternative tried.
    KeepLast,
    /// Report one fixed error, discarding what the alternatives said.
    Collapse(SpdxError),
}

impl FailurePolicy {
    /// Final error once every alternative has failed with `last` last.
    #[inline]
    pub fn resolve(self, last: SpdxError) -> SpdxError {
        match self {
            FailurePolicy::KeepLast => last,
            FailurePolicy::Collapse(error) => error,
        }
    }
}

/// Match one token equal to `expected`.
///
/// Fails with [`SpdxError::EndOfInput`] if no token remains and with
/// [`SpdxError::UnexpectedToken`] if the next token differs.
pub fn literal<'a>(expected: &'static str) -> impl Fn(Tokenizer<'a>) -> Step<'a, Token<'a>> {
    move |mut input: Tokenizer<'a>| match input.advance() {
        Some(token) if token.text == expected => Ok((token, input)),
        Some(_) => Err(SpdxError::UnexpectedToken),
        None => Err(SpdxError::EndOfInput),
    }
}

/// Consume exactly one token, whatever it is.
pub fn any_token<'a>(mut input: Tokenizer<'a>) -> Step<'a, Token<'a>> {
    input
        .advance()
        .map(|token| (token, input))
        .ok_or(SpdxError::EndOfInput)
}

/// Apply `rule` to `*input`, committing the cursor only if it succeeds.
pub fn try_parse<'a, T, R>(rule: &R, input: &mut Tokenizer<'a>) -> SpdxResult<T>
where
    R: Fn(Tokenizer<'a>) -> Step<'a, T> + ?Sized,
{
    let (value, rest) = rule(*input)?;
    *input = rest;
    Ok(value)
}

/// Transform the value produced by `rule`.
pub fn map<'a, T, U, R, F>(rule: R, f: F) -> impl Fn(Tokenizer<'a>) -> Step<'a, U>
where
    R: Fn(Tokenizer<'a>) -> Step<'a, T>,
    F: Fn(T) -> U,
{
    move |input| rule(input).map(|(value, rest)| (f(value), rest))
}

/// Transform the value produced by `rule` with a fallible function.
pub fn and_then<'a, T, U, R, F>(rule: R, f: F) -> impl Fn(Tokenizer<'a>) -> Step<'a, U>
where
    R: Fn(Tokenizer<'a>) -> Step<'a, T>,
    F: Fn(T) -> SpdxResult<U>,
{
    move |input| {
        let (value, rest) = rule(input)?;
        Ok((f(value)?, rest))
    }
}

/// Optional rule. Never fails on a grammar error: absence is `None` and the
/// cursor stays put. Resource limit errors still propagate.
pub fn maybe<'a, T, R>(rule: R) -> impl Fn(Tokenizer<'a>) -> Step<'a, Option<T>>
where
    R: Fn(Tokenizer<'a>) -> Step<'a, T>,
{
    move |input| match rule(input) {
        Ok((value, rest)) => Ok((Some(value), rest)),
        Err(error) if error.is_resource_limit() => Err(error),
        Err(_) => Ok((None, input)),
    }
}

/// Rules applied one after another.
pub trait Sequence<'a> {
    /// Tuple of the part values.
    type Output;

    /// Apply each part in order, stopping at the first failure.
    fn run(&self, input: Tokenizer<'a>) -> Step<'a, Self::Output>;
}

impl<'a, A, B, TA, TB> Sequence<'a> for (A, B)
where
    A: Fn(Tokenizer<'a>) -> Step<'a, TA>,
    B: Fn(Tokenizer<'a>) -> Step<'a, TB>,
{
    type Output = (TA, TB);

    fn run(&self, input: Tokenizer<'a>) -> Step<'a, (TA, TB)> {
        let (a, input) = (self.0)(input)?;
        let (b, input) = (self.1)(input)?;
        Ok(((a, b), input))
    }
}

impl<'a, A, B, C, TA, TB, TC> Sequence<'a> for (A, B, C)
where
    A: Fn(Tokenizer<'a>) -> Step<'a, TA>,
    B: Fn(Tokenizer<'a>) -> Step<'a, TB>,
    C: Fn(Tokenizer<'a>) -> Step<'a, TC>,
{
    type Output = (TA, TB, TC);

    fn run(&self, input: Tokenizer<'a>) -> Step<'a, (TA, TB, TC)> {
        let (a, input) = (self.0)(input)?;
        let (b, input) = (self.1)(input)?;
        let (c, input) = (self.2)(input)?;
        Ok(((a, b, c), input))
    }
}

/// Combine two or three rules into one that yields a tuple.
pub fn sequence<'a, S>(parts: S) -> impl Fn(Tokenizer<'a>) -> Step<'a, S::Output>
where
    S: Sequence<'a>,
{
    move |input| parts.run(input)
}

/// Ordered alternatives producing the same value type.
pub trait Alternatives<'a, T> {
    /// Try each alternative in order and return the first success.
    fn choose(&self, input: Tokenizer<'a>, policy: FailurePolicy) -> Step<'a, T>;
}

macro_rules! impl_alternatives {
    ($($rule:ident),+) => {
        impl<'a, T, $($rule),+> Alternatives<'a, T> for ($($rule,)+)
        where
            $($rule: Fn(Tokenizer<'a>) -> Step<'a, T>,)+
        {
            #[allow(non_snake_case)]
            fn choose(&self, input: Tokenizer<'a>, policy: FailurePolicy) -> Step<'a, T> {
                let ($($rule,)+) = self;
                let rules: &[&dyn Fn(Tokenizer<'a>) -> Step<'a, T>] = &[$($rule),+];

                let mut last = None;
                for rule in rules {
                    let mut cursor = input;
                    match try_parse(*rule, &mut cursor) {
                        Ok(value) => return Ok((value, cursor)),
                        Err(error) if error.is_resource_limit() => return Err(error),
                        Err(error) => last = Some(error),
                    }
                }
                Err(policy.resolve(last.unwrap_or(SpdxError::EndOfInput)))
            }
        }
    };
}

impl_alternatives!(A, B);
impl_alternatives!(A, B, C);
impl_alternatives!(A, B, C, D);

/// Ordered choice reporting the last alternative's error.
pub fn one_of<'a, T, A>(alternatives: A) -> impl Fn(Tokenizer<'a>) -> Step<'a, T>
where
    A: Alternatives<'a, T>,
{
    choice(FailurePolicy::KeepLast, alternatives)
}

/// Ordered choice with an explicit failure policy.
pub fn choice<'a, T, A>(policy: FailurePolicy, alternatives: A) -> impl Fn(Tokenizer<'a>) -> Step<'a, T>
where
    A: Alternatives<'a, T>,
{
    move |input| alternatives.choose(input, policy)
}
