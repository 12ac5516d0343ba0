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

//! Cursor-based tokenizer.

use memchr::memchr3;

/// A token and its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, borrowed from the source.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Byte offset just past the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Returns `true` for a `(` or `)` token.
    #[inline]
    pub fn is_paren(&self) -> bool {
        self.text == "(" || self.text == ")"
    }
}

/// An immutable cursor over an expression.
///
/// The cursor is `Copy`: saving a position is a copy, restoring it is an
/// assignment. [`peek`](Tokenizer::peek) never moves the cursor;
/// [`next`](Tokenizer::next) moves it past the returned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset. Leading spaces before the next token are not yet consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed text, including any leading spaces.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns `true` when no token remains.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }

    /// The next token, without advancing.
    pub fn peek(&self) -> Option<Token<'a>> {
        let bytes = self.source.as_bytes();

        let mut start = self.pos;
        while start < bytes.len() && bytes[start] == b' ' {
            start += 1;
        }
        if start == bytes.len() {
            return None;
        }

        let end = match bytes[start] {
            b'(' | b')' => start + 1,
            // Space and parens are ASCII, so `end` is always a char boundary.
            _ => memchr3(b' ', b'(', b')', &bytes[start..])
                .map_or(bytes.len(), |len| start + len),
        };

        Some(Token {
            text: &self.source[start..end],
            offset: start,
        })
    }

    /// Advance past the returned token.
    pub fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos = token.end();
        Some(token)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    #[inline]
    fn next(&mut self) -> Option<Token<'a>> {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        Tokenizer::new(source).map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(Tokenizer::new("").peek().is_none());
        assert!(Tokenizer::new("    ").peek().is_none());
        assert!(Tokenizer::new("   ").is_exhausted());
    }

    #[test]
    fn test_space_separated() {
        assert_eq!(texts("MIT OR  Apache-2.0"), ["MIT", "OR", "Apache-2.0"]);
    }

    #[test]
    fn test_parens_standalone() {
        assert_eq!(texts("(MIT)"), ["(", "MIT", ")"]);
        assert_eq!(texts("((a)b)"), ["(", "(", "a", ")", "b", ")"]);
        assert_eq!(texts(" ( MIT ) "), ["(", "MIT", ")"]);
    }

    #[test]
    fn test_run_keeps_non_space_chars() {
        assert_eq!(
            texts("DocumentRef-a:LicenseRef-b GPL-2.0+ a_b\tc"),
            ["DocumentRef-a:LicenseRef-b", "GPL-2.0+", "a_b\tc"]
        );
    }

    #[test]
    fn test_peek_is_idempotent() {
        let cursor = Tokenizer::new("  MIT AND X");
        let first = cursor.peek();
        assert_eq!(first, cursor.peek());
        assert_eq!(cursor.position(), 0);
        assert_eq!(first.map(|t| t.text), Some("MIT"));
    }

    #[test]
    fn test_advance_moves_past_token() {
        let mut cursor = Tokenizer::new("  MIT AND X");
        let token = cursor.advance().unwrap();
        assert_eq!(token, Token { text: "MIT", offset: 2 });
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), " AND X");
        assert_eq!(cursor.advance().map(|t| t.text), Some("AND"));
        assert_eq!(cursor.advance().map(|t| t.text), Some("X"));
        assert!(cursor.advance().is_none());
        assert!(cursor.advance().is_none());
    }

    #[test]
    fn test_copy_snapshot_restore() {
        let mut cursor = Tokenizer::new("a b c");
        let snapshot = cursor;
        cursor.advance();
        cursor.advance();
        assert_eq!(snapshot.peek().map(|t| t.text), Some("a"));
        cursor = snapshot;
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(texts("© (é)"), ["©", "(", "é", ")"]);
    }

    #[test]
    fn test_token_helpers() {
        let token = Tokenizer::new(" (").peek().unwrap();
        assert!(token.is_paren());
        assert_eq!(token.end(), 2);
    }
}
