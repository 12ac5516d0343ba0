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

//! SPDX license-expression parser.
//!
//! This crate turns expressions such as
//! `(MIT AND LicenseRef-Foo) OR GPL-3.0-or-later WITH LLVM-exception` into a
//! tree, validating every license and exception identifier against static
//! registries of known SPDX IDs.
//!
//! # Pipeline
//!
//! Text flows one way through:
//!
//! - [`lex`] - space-delimited tokens, parentheses always standalone
//! - [`grammar`] - combinators and the expression rules built from them
//! - [`ident`] / [`registry`] - identifier syntax and registry lookups
//! - [`CompoundExpression`] - the resulting tree
//! - [`Spdx`] - a tree bundled with its own copy of the source text
//!
//! # Examples
//!
//! ```
//! use licscan_core::{parse, CompoundExpression, SimpleExpression};
//!
//! let expr = parse("GPL-3.0-only WITH LLVM-exception").unwrap();
//! match expr {
//!     CompoundExpression::With(with) => {
//!         assert_eq!(with.license, SimpleExpression::LicenseId("GPL-3.0-only".parse().unwrap()));
//!         assert_eq!(with.exception.as_str(), "LLVM-exception");
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! # Grammar
//!
//! `AND` binds tighter than `OR`, `WITH` binds tightest, and parentheses
//! override both. Each precedence level accepts a single operator: chains like
//! `A AND B AND C` must be written `(A AND B) AND C`.
//!
//! # Security
//!
//! Nesting depth drives recursion, so [`parse`] enforces [`Limits`] (64 KiB,
//! 64 levels). Use [`parse_with_options`] to change them.

mod error;
mod expression;
pub mod grammar;
pub mod ident;
pub mod lex;
mod limits;
mod parser;
pub mod registry;
mod spdx;

pub use error::{SpdxError, SpdxResult};
pub use expression::{CompoundExpression, SimpleExpression, SimpleWithException};
pub use ident::{IdString, LicenseExceptionId, LicenseId, LicenseRef};
pub use limits::{
    Limits, ParseOptions, ParseOptionsBuilder, DEFAULT_MAX_EXPRESSION_LENGTH, DEFAULT_MAX_NESTING_DEPTH,
};
pub use parser::{parse, parse_with_options};
pub use spdx::Spdx;
