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

//! Error types for SPDX expression parsing.
//!
//! Every failure of a parse call is one [`SpdxError`] kind. There is never a
//! partial tree: a call either yields a complete AST or exactly one error.

use thiserror::Error;

/// The reason an SPDX expression (or one of its identifiers) was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum SpdxError {
    // ==================== Identifier errors ====================
    /// An identifier was empty.
    #[error("identifier must contain at least one character")]
    LessThanMinimumCharacterLength,

    /// An identifier contained a character outside `[A-Za-z0-9.-]`.
    #[error("identifier contains a character outside [A-Za-z0-9.-]")]
    IllegalCharacter,

    // ==================== License-ref errors ====================
    /// `DocumentRef-<id>` was not followed by `:`.
    #[error("expected ':' after DocumentRef identifier")]
    MissingColonAfterDocumentRef,

    /// A license reference did not start with `LicenseRef-`.
    #[error("expected 'LicenseRef-' prefix")]
    MissingLicenseRefPrefix,

    // ==================== Registry errors ====================
    /// Well-formed identifier that is not in the license registry.
    #[error("unknown SPDX license identifier")]
    UnknownLicenseId,

    /// Well-formed identifier that is not in the exception registry.
    #[error("unknown SPDX license exception identifier")]
    UnknownLicenseExceptionId,

    // ==================== Grammar errors ====================
    /// None of license-id, license-id-and-plus or license-ref matched.
    #[error("invalid simple expression: expected a license id, 'id+' or a LicenseRef")]
    InvalidSimpleExpression,

    /// A keyword or closing parenthesis did not match, or input was left over.
    #[error("unexpected token")]
    UnexpectedToken,

    /// A token was required but the input was exhausted.
    #[error("unexpected end of input")]
    EndOfInput,

    // ==================== Resource limit errors ====================
    /// The expression text is longer than the configured maximum.
    #[error("expression length exceeds the configured maximum")]
    ExpressionTooLong,

    /// Parentheses are nested deeper than the configured maximum.
    #[error("parenthesis nesting exceeds the configured maximum depth")]
    NestingTooDeep,
}

impl SpdxError {
    /// Stable name of the error kind, as reported by the CLI and JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SpdxError::LessThanMinimumCharacterLength => "LessThanMinimumCharacterLength",
            SpdxError::IllegalCharacter => "IllegalCharacter",
            SpdxError::MissingColonAfterDocumentRef => "MissingColonAfterDocumentRef",
            SpdxError::MissingLicenseRefPrefix => "MissingLicenseRefPrefix",
            SpdxError::UnknownLicenseId => "UnknownLicenseId",
            SpdxError::UnknownLicenseExceptionId => "UnknownLicenseExceptionId",
            SpdxError::InvalidSimpleExpression => "InvalidSimpleExpression",
            SpdxError::UnexpectedToken => "UnexpectedToken",
            SpdxError::EndOfInput => "EndOfInput",
            SpdxError::ExpressionTooLong => "ExpressionTooLong",
            SpdxError::NestingTooDeep => "NestingTooDeep",
        }
    }

    /// Returns `true` for malformed identifiers (syntax, not registry).
    #[inline]
    pub fn is_identifier_error(&self) -> bool {
        matches!(
            self,
            SpdxError::LessThanMinimumCharacterLength
                | SpdxError::IllegalCharacter
                | SpdxError::MissingColonAfterDocumentRef
                | SpdxError::MissingLicenseRefPrefix
        )
    }

    /// Returns `true` when the identifier was well-formed but unknown.
    #[inline]
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            SpdxError::UnknownLicenseId | SpdxError::UnknownLicenseExceptionId
        )
    }

    /// Returns `true` if this is a resource limit error.
    #[inline]
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, SpdxError::ExpressionTooLong | SpdxError::NestingTooDeep)
    }
}

/// Result type for SPDX parsing operations.
pub type SpdxResult<T> = Result<T, SpdxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_variants() {
        assert_eq!(SpdxError::UnexpectedToken.kind(), "UnexpectedToken");
        assert_eq!(
            SpdxError::MissingColonAfterDocumentRef.kind(),
            "MissingColonAfterDocumentRef"
        );
        assert_eq!(SpdxError::NestingTooDeep.kind(), "NestingTooDeep");
    }

    #[test]
    fn test_is_identifier_error() {
        assert!(SpdxError::IllegalCharacter.is_identifier_error());
        assert!(SpdxError::LessThanMinimumCharacterLength.is_identifier_error());
        assert!(SpdxError::MissingLicenseRefPrefix.is_identifier_error());

        assert!(!SpdxError::UnknownLicenseId.is_identifier_error());
        assert!(!SpdxError::EndOfInput.is_identifier_error());
    }

    #[test]
    fn test_is_registry_error() {
        assert!(SpdxError::UnknownLicenseId.is_registry_error());
        assert!(SpdxError::UnknownLicenseExceptionId.is_registry_error());
        assert!(!SpdxError::InvalidSimpleExpression.is_registry_error());
    }

    #[test]
    fn test_is_resource_limit() {
        assert!(SpdxError::ExpressionTooLong.is_resource_limit());
        assert!(SpdxError::NestingTooDeep.is_resource_limit());
        assert!(!SpdxError::UnexpectedToken.is_resource_limit());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SpdxError::EndOfInput.to_string(), "unexpected end of input");
        assert!(SpdxError::IllegalCharacter.to_string().contains("[A-Za-z0-9.-]"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(SpdxError::UnexpectedToken);
    }
}
