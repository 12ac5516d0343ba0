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

//! Abstract syntax tree for SPDX license expressions.
//!
//! A tree is strictly hierarchical: every `And`/`Or` node exclusively owns its
//! two boxed children and dropping the root releases the whole tree.
//! Identifiers inside [`LicenseRef`]s borrow from the parsed text until
//! [`CompoundExpression::into_owned`] detaches them.
//!
//! # Display
//!
//! Every node renders as a canonical expression: registry spelling for IDs,
//! single spaces around operators, and parentheses only where the grammar
//! needs them to read the same tree back.
//!
//! ```
//! use licscan_core::parse;
//!
//! let expr = parse("( mit AND (apache-2.0) ) OR gpl-2.0+").unwrap();
//! assert_eq!(expr.to_string(), "MIT AND Apache-2.0 OR GPL-2.0+");
//! ```

use std::fmt;

use crate::ident::{LicenseExceptionId, LicenseId, LicenseRef};

/// A single license term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimpleExpression<'a> {
    /// A registry license, e.g. `MIT`.
    LicenseId(LicenseId),
    /// A registry license with the `+` suffix, e.g. `GPL-2.0+`.
    LicenseIdOrLater(LicenseId),
    /// A user-defined reference, e.g. `LicenseRef-Custom`.
    LicenseRef(LicenseRef<'a>),
}

impl<'a> SimpleExpression<'a> {
    /// The registry license, if this is not a reference.
    pub fn license_id(&self) -> Option<LicenseId> {
        match self {
            SimpleExpression::LicenseId(id) | SimpleExpression::LicenseIdOrLater(id) => Some(*id),
            SimpleExpression::LicenseRef(_) => None,
        }
    }

    /// Returns `true` for the `+` form.
    #[inline]
    pub fn is_or_later(&self) -> bool {
        matches!(self, SimpleExpression::LicenseIdOrLater(_))
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> SimpleExpression<'static> {
        match self {
            SimpleExpression::LicenseId(id) => SimpleExpression::LicenseId(id),
            SimpleExpression::LicenseIdOrLater(id) => SimpleExpression::LicenseIdOrLater(id),
            SimpleExpression::LicenseRef(r) => SimpleExpression::LicenseRef(r.into_owned()),
        }
    }
}

impl fmt::Display for SimpleExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleExpression::LicenseId(id) => write!(f, "{}", id),
            SimpleExpression::LicenseIdOrLater(id) => write!(f, "{}+", id),
            SimpleExpression::LicenseRef(r) => write!(f, "{}", r),
        }
    }
}

/// `simple-expression WITH license-exception-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleWithException<'a> {
    /// The license the exception applies to.
    pub license: SimpleExpression<'a>,
    /// The exception.
    pub exception: LicenseExceptionId,
}

impl<'a> SimpleWithException<'a> {
    /// Detach from the source text.
    pub fn into_owned(self) -> SimpleWithException<'static> {
        SimpleWithException {
            license: self.license.into_owned(),
            exception: self.exception,
        }
    }
}

impl fmt::Display for SimpleWithException<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} WITH {}", self.license, self.exception)
    }
}

/// A full license expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompoundExpression<'a> {
    /// A single term.
    Simple(SimpleExpression<'a>),
    /// A term with an exception.
    With(SimpleWithException<'a>),
    /// Both operands apply.
    And(Box<CompoundExpression<'a>>, Box<CompoundExpression<'a>>),
    /// Either operand applies.
    Or(Box<CompoundExpression<'a>>, Box<CompoundExpression<'a>>),
}

impl<'a> CompoundExpression<'a> {
    /// Conjunction of two expressions.
    pub fn and(lhs: CompoundExpression<'a>, rhs: CompoundExpression<'a>) -> Self {
        CompoundExpression::And(Box::new(lhs), Box::new(rhs))
    }

    /// Disjunction of two expressions.
    pub fn or(lhs: CompoundExpression<'a>, rhs: CompoundExpression<'a>) -> Self {
        CompoundExpression::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Returns `true` for an `And` or `Or` node.
    #[inline]
    pub fn is_conjunction(&self) -> bool {
        matches!(self, CompoundExpression::And(..) | CompoundExpression::Or(..))
    }

    /// Operator keyword of this node, if any.
    pub fn conjunction(&self) -> Option<&'static str> {
        match self {
            CompoundExpression::Simple(_) => None,
            CompoundExpression::With(_) => Some("WITH"),
            CompoundExpression::And(..) => Some("AND"),
            CompoundExpression::Or(..) => Some("OR"),
        }
    }

    /// Every simple term, left to right.
    pub fn simple_expressions(&self) -> Vec<&SimpleExpression<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                CompoundExpression::Simple(simple) => out.push(simple),
                CompoundExpression::With(with) => out.push(&with.license),
                CompoundExpression::And(lhs, rhs) | CompoundExpression::Or(lhs, rhs) => {
                    stack.push(rhs);
                    stack.push(lhs);
                }
            }
        }
        out
    }

    /// Every exception, left to right.
    pub fn exceptions(&self) -> Vec<LicenseExceptionId> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                CompoundExpression::Simple(_) => {}
                CompoundExpression::With(with) => out.push(with.exception),
                CompoundExpression::And(lhs, rhs) | CompoundExpression::Or(lhs, rhs) => {
                    stack.push(rhs);
                    stack.push(lhs);
                }
            }
        }
        out
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> CompoundExpression<'static> {
        match self {
            CompoundExpression::Simple(simple) => CompoundExpression::Simple(simple.into_owned()),
            CompoundExpression::With(with) => CompoundExpression::With(with.into_owned()),
            CompoundExpression::And(lhs, rhs) => {
                CompoundExpression::and(lhs.into_owned(), rhs.into_owned())
            }
            CompoundExpression::Or(lhs, rhs) => {
                CompoundExpression::or(lhs.into_owned(), rhs.into_owned())
            }
        }
    }
}

impl<'a> From<SimpleExpression<'a>> for CompoundExpression<'a> {
    fn from(simple: SimpleExpression<'a>) -> Self {
        CompoundExpression::Simple(simple)
    }
}

impl<'a> From<SimpleWithException<'a>> for CompoundExpression<'a> {
    fn from(with: SimpleWithException<'a>) -> Self {
        CompoundExpression::With(with)
    }
}

// `and-level` takes one AND, `or-level` one OR; anything deeper at the same
// level must be bracketed.
fn write_operand(f: &mut fmt::Formatter<'_>, operand: &CompoundExpression<'_>, bracket: bool) -> fmt::Result {
    if bracket {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for CompoundExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundExpression::Simple(simple) => write!(f, "{}", simple),
            CompoundExpression::With(with) => write!(f, "{}", with),
            CompoundExpression::And(lhs, rhs) => {
                write_operand(f, lhs, lhs.is_conjunction())?;
                f.write_str(" AND ")?;
                write_operand(f, rhs, rhs.is_conjunction())
            }
            CompoundExpression::Or(lhs, rhs) => {
                write_operand(f, lhs, matches!(**lhs, CompoundExpression::Or(..)))?;
                f.write_str(" OR ")?;
                write_operand(f, rhs, matches!(**rhs, CompoundExpression::Or(..)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::IdString;

    fn id(text: &str) -> CompoundExpression<'static> {
        CompoundExpression::Simple(SimpleExpression::LicenseId(LicenseId::parse(text).unwrap()))
    }

    #[test]
    fn test_display_simple_forms() {
        assert_eq!(id("mit").to_string(), "MIT");
        let plus = SimpleExpression::LicenseIdOrLater(LicenseId::parse("GPL-2.0").unwrap());
        assert_eq!(plus.to_string(), "GPL-2.0+");
        let r = SimpleExpression::LicenseRef(LicenseRef::new(IdString::parse("X").unwrap()));
        assert_eq!(r.to_string(), "LicenseRef-X");
    }

    #[test]
    fn test_display_with() {
        let with = SimpleWithException {
            license: SimpleExpression::LicenseId(LicenseId::parse("GPL-3.0-only").unwrap()),
            exception: LicenseExceptionId::parse("LLVM-exception").unwrap(),
        };
        assert_eq!(
            CompoundExpression::from(with).to_string(),
            "GPL-3.0-only WITH LLVM-exception"
        );
    }

    #[test]
    fn test_display_brackets_and_children() {
        let expr = CompoundExpression::and(
            CompoundExpression::or(id("MIT"), id("ISC")),
            CompoundExpression::and(id("Zlib"), id("0BSD")),
        );
        assert_eq!(expr.to_string(), "(MIT OR ISC) AND (Zlib AND 0BSD)");
    }

    #[test]
    fn test_display_or_brackets_only_or_children() {
        let expr = CompoundExpression::or(
            CompoundExpression::and(id("MIT"), id("ISC")),
            CompoundExpression::or(id("Zlib"), id("0BSD")),
        );
        assert_eq!(expr.to_string(), "MIT AND ISC OR (Zlib OR 0BSD)");
    }

    #[test]
    fn test_simple_expressions_in_order() {
        let expr = CompoundExpression::or(
            CompoundExpression::and(id("MIT"), id("ISC")),
            id("Zlib"),
        );
        let names: Vec<String> = expr.simple_expressions().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["MIT", "ISC", "Zlib"]);
        assert!(expr.exceptions().is_empty());
    }

    #[test]
    fn test_conjunction_names() {
        assert_eq!(id("MIT").conjunction(), None);
        assert_eq!(CompoundExpression::and(id("MIT"), id("ISC")).conjunction(), Some("AND"));
        assert_eq!(CompoundExpression::or(id("MIT"), id("ISC")).conjunction(), Some("OR"));
    }

    #[test]
    fn test_license_id_accessor() {
        let plus = SimpleExpression::LicenseIdOrLater(LicenseId::parse("GPL-2.0").unwrap());
        assert!(plus.is_or_later());
        assert_eq!(plus.license_id().map(|i| i.as_str()), Some("GPL-2.0"));
        let r = SimpleExpression::LicenseRef(LicenseRef::new(IdString::parse("X").unwrap()));
        assert_eq!(r.license_id(), None);
    }
}
