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

//! Owned parse result independent of the caller's buffer.

use std::fmt;
use std::str::FromStr;

use crate::error::{SpdxError, SpdxResult};
use crate::expression::CompoundExpression;
use crate::limits::ParseOptions;
use crate::parser::parse_with_options;

/// A parsed expression together with a private copy of its source text.
///
/// The tree never points into the string passed to [`Spdx::init`], so the
/// caller may mutate or drop that string as soon as `init` returns.
///
/// # Examples
///
/// ```
/// use licscan_core::Spdx;
///
/// let mut text = String::from("LicenseRef-Foo OR MIT");
/// let spdx = Spdx::init(&text).unwrap();
/// text.clear();
///
/// assert_eq!(spdx.source(), "LicenseRef-Foo OR MIT");
/// assert_eq!(spdx.to_string(), "LicenseRef-Foo OR MIT");
/// spdx.release();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spdx {
    source: Box<str>,
    root: CompoundExpression<'static>,
}

impl Spdx {
    /// Copy `text` and parse the copy with default limits.
    pub fn init(text: &str) -> SpdxResult<Self> {
        Self::init_with_options(text, &ParseOptions::default())
    }

    /// Copy `text` and parse the copy with custom options.
    pub fn init_with_options(text: &str, options: &ParseOptions) -> SpdxResult<Self> {
        let source: Box<str> = text.into();
        let root = parse_with_options(&source, options)?.into_owned();
        Ok(Self { source, root })
    }

    /// The private copy of the source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root of the expression tree.
    #[inline]
    pub fn root(&self) -> &CompoundExpression<'static> {
        &self.root
    }

    /// Take the tree, dropping the source copy.
    pub fn into_root(self) -> CompoundExpression<'static> {
        self.root
    }

    /// Free the tree and the source copy.
    ///
    /// Equivalent to dropping the value.
    pub fn release(self) {
        drop(self);
    }
}

impl AsRef<CompoundExpression<'static>> for Spdx {
    fn as_ref(&self) -> &CompoundExpression<'static> {
        &self.root
    }
}

impl FromStr for Spdx {
    type Err = SpdxError;

    fn from_str(s: &str) -> SpdxResult<Self> {
        Self::init(s)
    }
}

impl fmt::Display for Spdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
