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

//! Identifier validation for SPDX expressions.
//!
//! This module provides the atomic pieces of an expression:
//! - [`IdString`]: bare identifier syntax `[A-Za-z0-9.-]+`
//! - [`LicenseId`] / [`LicenseExceptionId`]: registry-checked, canonical-case IDs
//! - [`LicenseRef`]: `["DocumentRef-" id ":"] "LicenseRef-" id`

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{SpdxError, SpdxResult};
use crate::registry;

/// Prefix introducing a document-scoped reference.
pub const DOCUMENT_REF_PREFIX: &str = "DocumentRef-";

/// Prefix introducing a user-defined license reference.
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Returns `true` for characters allowed in an SPDX identifier: `[A-Za-z0-9.-]`.
#[inline]
pub fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// A validated, non-empty identifier containing only `[A-Za-z0-9.-]`.
///
/// A tree returned by [`crate::parse`] borrows its identifiers from the
/// source text; [`IdString::into_owned`] detaches them.
///
/// # Examples
///
/// ```
/// use licscan_core::{IdString, SpdxError};
///
/// let id = IdString::parse("My-License.2").unwrap();
/// assert_eq!(id.as_str(), "My-License.2");
///
/// assert_eq!(IdString::parse("").unwrap_err(), SpdxError::LessThanMinimumCharacterLength);
/// assert_eq!(IdString::parse("a_b").unwrap_err(), SpdxError::IllegalCharacter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IdString<'a>(Cow<'a, str>);

impl<'a> IdString<'a> {
    /// Validate `text` as an identifier, borrowing it on success.
    pub fn parse(text: &'a str) -> SpdxResult<Self> {
        if text.is_empty() {
            return Err(SpdxError::LessThanMinimumCharacterLength);
        }
        if text.chars().any(|c| !is_id_char(c)) {
            return Err(SpdxError::IllegalCharacter);
        }
        Ok(Self(Cow::Borrowed(text)))
    }

    /// The identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` while the identifier still points into its source text.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> IdString<'static> {
        IdString(Cow::Owned(self.0.into_owned()))
    }
}

impl AsRef<str> for IdString<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IdString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A license identifier found in the license registry.
///
/// Holds the registry's canonical spelling, not the input casing.
///
/// ```
/// use licscan_core::LicenseId;
///
/// assert_eq!(LicenseId::parse("mit").unwrap().as_str(), "MIT");
/// assert_eq!(LicenseId::parse("gpl-3.0-or-LaTER").unwrap().as_str(), "GPL-3.0-or-later");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LicenseId(&'static str);

impl LicenseId {
    /// Validate `text` and look it up case-insensitively in the license registry.
    pub fn parse(text: &str) -> SpdxResult<Self> {
        IdString::parse(text)?;
        registry::find_license(text)
            .map(Self)
            .ok_or(SpdxError::UnknownLicenseId)
    }

    /// The canonical identifier.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for LicenseId {
    type Err = SpdxError;

    fn from_str(s: &str) -> SpdxResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LicenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A license exception identifier found in the exception registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LicenseExceptionId(&'static str);

impl LicenseExceptionId {
    /// Validate `text` and look it up case-insensitively in the exception registry.
    pub fn parse(text: &str) -> SpdxResult<Self> {
        IdString::parse(text)?;
        registry::find_exception(text)
            .map(Self)
            .ok_or(SpdxError::UnknownLicenseExceptionId)
    }

    /// The canonical identifier.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for LicenseExceptionId {
    type Err = SpdxError;

    fn from_str(s: &str) -> SpdxResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LicenseExceptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A user-defined license reference, optionally scoped to another document.
///
/// # Examples
///
/// ```
/// use licscan_core::{LicenseRef, SpdxError};
///
/// let r = LicenseRef::parse("DocumentRef-Foo:LicenseRef-Bar").unwrap();
/// assert_eq!(r.document_ref.as_ref().map(|d| d.as_str()), Some("Foo"));
/// assert_eq!(r.license_ref.as_str(), "Bar");
///
/// assert_eq!(
///     LicenseRef::parse("DocumentRef-Foo").unwrap_err(),
///     SpdxError::MissingColonAfterDocumentRef
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LicenseRef<'a> {
    /// Document qualifier (`Foo` in `DocumentRef-Foo:LicenseRef-Bar`).
    pub document_ref: Option<IdString<'a>>,
    /// The reference itself (`Bar` in `LicenseRef-Bar`).
    pub license_ref: IdString<'a>,
}

impl<'a> LicenseRef<'a> {
    /// Creates an unscoped reference.
    pub fn new(license_ref: IdString<'a>) -> Self {
        Self {
            document_ref: None,
            license_ref,
        }
    }

    /// Creates a document-scoped reference.
    pub fn scoped(document_ref: IdString<'a>, license_ref: IdString<'a>) -> Self {
        Self {
            document_ref: Some(document_ref),
            license_ref,
        }
    }

    /// Parse `["DocumentRef-" IdString ":"] "LicenseRef-" IdString` from one token.
    pub fn parse(text: &'a str) -> SpdxResult<Self> {
        let mut rest = text;

        let document_ref = match rest.strip_prefix(DOCUMENT_REF_PREFIX) {
            Some(after) => {
                let end = after.find(|c: char| !is_id_char(c)).unwrap_or(after.len());
                let id = IdString::parse(&after[..end])?;
                rest = after[end..]
                    .strip_prefix(':')
                    .ok_or(SpdxError::MissingColonAfterDocumentRef)?;
                Some(id)
            }
            None => None,
        };

        let id_text = rest
            .strip_prefix(LICENSE_REF_PREFIX)
            .ok_or(SpdxError::MissingLicenseRefPrefix)?;

        Ok(Self {
            document_ref,
            license_ref: IdString::parse(id_text)?,
        })
    }

    /// Returns `true` if the reference names another document.
    #[inline]
    pub fn is_scoped(&self) -> bool {
        self.document_ref.is_some()
    }

    /// Detach from the source text.
    pub fn into_owned(self) -> LicenseRef<'static> {
        LicenseRef {
            document_ref: self.document_ref.map(IdString::into_owned),
            license_ref: self.license_ref.into_owned(),
        }
    }
}

impl fmt::Display for LicenseRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(document_ref) = &self.document_ref {
            write!(f, "{}{}:", DOCUMENT_REF_PREFIX, document_ref)?;
        }
        write!(f, "{}{}", LICENSE_REF_PREFIX, self.license_ref)
    }
}
