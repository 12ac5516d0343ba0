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

//! SPDX expression conformance tests.
//!
//! Each section exercises one layer of the grammar through the public
//! [`parse`] entry point.

use licscan_core::{
    parse, CompoundExpression, IdString, LicenseExceptionId, LicenseId, LicenseRef, SimpleExpression,
    SimpleWithException, Spdx, SpdxError,
};
use licscan_core::grammar::rules::simple_expression;
use licscan_core::lex::Tokenizer;

fn id(text: &str) -> CompoundExpression<'static> {
    CompoundExpression::Simple(SimpleExpression::LicenseId(LicenseId::parse(text).unwrap()))
}

fn with(license: &str, exception: &str) -> CompoundExpression<'static> {
    CompoundExpression::With(SimpleWithException {
        license: SimpleExpression::LicenseId(LicenseId::parse(license).unwrap()),
        exception: LicenseExceptionId::parse(exception).unwrap(),
    })
}

// =============================================================================
// Simple expressions
// =============================================================================

#[test]
fn test_single_license() {
    assert_eq!(parse("MIT").unwrap(), id("MIT"));
}

#[test]
fn test_license_canonical_case() {
    assert_eq!(parse("apache-2.0").unwrap(), id("Apache-2.0"));
    assert_eq!(parse("apache-2.0").unwrap().to_string(), "Apache-2.0");
}

#[test]
fn test_or_later_suffix() {
    let expr = parse("GPL-2.0+").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::Simple(SimpleExpression::LicenseIdOrLater(
            LicenseId::parse("GPL-2.0").unwrap()
        ))
    );
}

#[test]
fn test_license_ref() {
    let expr = parse("LicenseRef-Proprietary-1.0").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::Simple(SimpleExpression::LicenseRef(LicenseRef::new(
            IdString::parse("Proprietary-1.0").unwrap()
        )))
    );
}

#[test]
fn test_document_scoped_license_ref() {
    let expr = parse("DocumentRef-Foo:LicenseRef-Bar").unwrap();
    let expected = LicenseRef::scoped(IdString::parse("Foo").unwrap(), IdString::parse("Bar").unwrap());
    assert_eq!(expr, CompoundExpression::Simple(SimpleExpression::LicenseRef(expected)));
}

#[test]
fn test_unknown_license_reports_last_alternative() {
    // The paren alternative of `primary` is tried last, so its error wins.
    assert_eq!(parse("Not-A-License").unwrap_err(), SpdxError::UnexpectedToken);
}

#[test]
fn test_document_ref_without_colon() {
    assert_eq!(
        LicenseRef::parse("DocumentRef-Foo").unwrap_err(),
        SpdxError::MissingColonAfterDocumentRef
    );
    // Inside an expression the reference error is discarded with the rest of
    // the simple-expression alternatives, and the paren alternative reports last.
    assert_eq!(parse("DocumentRef-Foo").unwrap_err(), SpdxError::UnexpectedToken);
    assert_eq!(
        simple_expression(Tokenizer::new("DocumentRef-Foo")).unwrap_err(),
        SpdxError::InvalidSimpleExpression
    );
}

// =============================================================================
// WITH
// =============================================================================

#[test]
fn test_with_exception() {
    assert_eq!(
        parse("GPL-3.0-only WITH LLVM-exception").unwrap(),
        with("GPL-3.0-only", "LLVM-exception")
    );
}

#[test]
fn test_with_exception_or_later_license() {
    let expr = parse("GPL-2.0+ WITH Classpath-exception-2.0").unwrap();
    assert_eq!(expr.to_string(), "GPL-2.0+ WITH Classpath-exception-2.0");
    assert_eq!(expr.exceptions()[0].as_str(), "Classpath-exception-2.0");
}

#[test]
fn test_with_license_ref() {
    let expr = parse("LicenseRef-X WITH LLVM-exception").unwrap();
    assert!(matches!(expr, CompoundExpression::With(_)));
}

#[test]
fn test_with_unknown_exception_leaves_tokens() {
    assert_eq!(
        parse("MIT WITH Not-An-Exception").unwrap_err(),
        SpdxError::UnexpectedToken
    );
}

#[test]
fn test_with_binds_tighter_than_and() {
    let expr = parse("Apache-2.0 WITH LLVM-exception AND MIT").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::and(with("Apache-2.0", "LLVM-exception"), id("MIT"))
    );
}

// =============================================================================
// AND / OR precedence
// =============================================================================

#[test]
fn test_and_binds_tighter_than_or_left() {
    let expr = parse("LGPL-2.1-only AND BSD-3-Clause OR MIT").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::or(
            CompoundExpression::and(id("LGPL-2.1-only"), id("BSD-3-Clause")),
            id("MIT")
        )
    );
}

#[test]
fn test_and_binds_tighter_than_or_right() {
    let expr = parse("LGPL-2.1-only OR BSD-3-Clause AND MIT").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::or(
            id("LGPL-2.1-only"),
            CompoundExpression::and(id("BSD-3-Clause"), id("MIT"))
        )
    );
}

#[test]
fn test_both_sides_and() {
    let expr = parse("MIT AND ISC OR Zlib AND 0BSD").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::or(
            CompoundExpression::and(id("MIT"), id("ISC")),
            CompoundExpression::and(id("Zlib"), id("0BSD"))
        )
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse("MIT AND (ISC OR Zlib)").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::and(id("MIT"), CompoundExpression::or(id("ISC"), id("Zlib")))
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(parse("MIT and ISC").unwrap_err(), SpdxError::UnexpectedToken);
    assert_eq!(parse("MIT or ISC").unwrap_err(), SpdxError::UnexpectedToken);
}

// =============================================================================
// Single-level chains
// =============================================================================

#[test]
fn test_three_way_and_is_rejected() {
    assert_eq!(parse("MIT AND ISC AND Zlib").unwrap_err(), SpdxError::UnexpectedToken);
}

#[test]
fn test_three_way_or_is_rejected() {
    assert_eq!(parse("MIT OR ISC OR Zlib").unwrap_err(), SpdxError::UnexpectedToken);
}

#[test]
fn test_bracketed_chains_are_accepted() {
    let expr = parse("(MIT AND ISC) AND Zlib").unwrap();
    assert_eq!(
        expr,
        CompoundExpression::and(CompoundExpression::and(id("MIT"), id("ISC")), id("Zlib"))
    );
    assert!(parse("MIT OR (ISC OR Zlib)").is_ok());
}

// =============================================================================
// Parentheses and tokens
// =============================================================================

#[test]
fn test_redundant_parentheses() {
    assert_eq!(parse("MIT").unwrap(), parse("((((MIT))))").unwrap());
}

#[test]
fn test_parentheses_need_no_spaces() {
    assert_eq!(parse("(MIT OR ISC)AND(Zlib)").unwrap(), parse("( MIT OR ISC ) AND Zlib").unwrap());
}

#[test]
fn test_extra_spaces() {
    assert_eq!(parse("   MIT    OR   ISC  ").unwrap(), CompoundExpression::or(id("MIT"), id("ISC")));
}

#[test]
fn test_two_tokens_without_operator() {
    assert_eq!(parse("MIT Apache-2.0").unwrap_err(), SpdxError::UnexpectedToken);
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(parse("(MIT").unwrap_err(), SpdxError::EndOfInput);
    assert_eq!(parse("MIT)").unwrap_err(), SpdxError::UnexpectedToken);
    assert!(parse("()").is_err());
}

#[test]
fn test_dangling_operator() {
    assert_eq!(parse("MIT OR").unwrap_err(), SpdxError::UnexpectedToken);
    assert_eq!(parse("OR MIT").unwrap_err(), SpdxError::UnexpectedToken);
}

#[test]
fn test_empty_expression() {
    assert_eq!(parse("").unwrap_err(), SpdxError::EndOfInput);
}

// =============================================================================
// Display round-trip
// =============================================================================

#[test]
fn test_display_round_trip() {
    for text in [
        "MIT",
        "GPL-2.0+",
        "DocumentRef-a.b:LicenseRef-c-1",
        "GPL-3.0-only WITH LLVM-exception",
        "MIT AND ISC OR Zlib",
        "MIT OR ISC AND Zlib",
        "(MIT OR ISC) AND Zlib",
        "(MIT AND ISC) AND (Zlib OR 0BSD)",
        "MIT OR (ISC OR Zlib)",
        "(MIT AND ISC) AND Zlib OR Apache-2.0 WITH LLVM-exception",
    ] {
        let first = parse(text).unwrap();
        let rendered = first.to_string();
        assert_eq!(rendered, text, "canonical text changed");
        assert_eq!(parse(&rendered).unwrap(), first);
    }
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn test_spdx_detached_from_caller() {
    let mut text = String::from("(DocumentRef-X:LicenseRef-Y OR MIT) AND ISC");
    let spdx = Spdx::init(&text).unwrap();
    text.replace_range(.., "zzzz");

    assert_eq!(spdx.to_string(), "(DocumentRef-X:LicenseRef-Y OR MIT) AND ISC");
    let leaves: Vec<String> = spdx.root().simple_expressions().iter().map(|s| s.to_string()).collect();
    assert_eq!(leaves, ["DocumentRef-X:LicenseRef-Y", "MIT", "ISC"]);
    spdx.release();
}

#[test]
fn test_borrowed_tree_into_owned() {
    let owned = {
        let text = String::from("LicenseRef-Local");
        parse(&text).unwrap().into_owned()
    };
    assert_eq!(owned.to_string(), "LicenseRef-Local");
}
