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

//! Lexical analysis for SPDX expressions.
//!
//! The tokenizer splits an expression into space-delimited tokens, with `(`
//! and `)` always standing alone. It knows nothing about keywords; `AND`,
//! `OR` and `WITH` are ordinary tokens matched by the grammar.
//!
//! # Examples
//!
//! ```
//! use licscan_core::lex::Tokenizer;
//!
//! let tokens: Vec<&str> = Tokenizer::new("(MIT OR Apache-2.0)")
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, ["(", "MIT", "OR", "Apache-2.0", ")"]);
//! ```

mod tokenizer;

pub use tokenizer::{Token, Tokenizer};
