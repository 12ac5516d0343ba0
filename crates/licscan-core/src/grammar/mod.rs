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

//! Grammar combinators and the SPDX expression rules built from them.
//!
//! # Module Structure
//!
//! - [`combinators`] - literal, sequence, ordered choice, optional and
//!   backtracking primitives over an immutable cursor
//! - [`rules`] - the expression grammar itself
//!
//! # Examples
//!
//! ```
//! use licscan_core::grammar::combinators::{literal, maybe, sequence};
//! use licscan_core::grammar::rules::simple_expression;
//! use licscan_core::lex::Tokenizer;
//!
//! let rule = sequence((simple_expression, maybe(literal("AND"))));
//! let ((simple, and), rest) = rule(Tokenizer::new("mit AND isc")).unwrap();
//! assert_eq!(simple.to_string(), "MIT");
//! assert!(and.is_some());
//! assert_eq!(rest.peek().map(|t| t.text), Some("isc"));
//! ```

pub mod combinators;
pub mod rules;

pub use combinators::{FailurePolicy, Step};
pub use rules::Grammar;
