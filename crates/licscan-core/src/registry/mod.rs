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

//! Static registries of SPDX license and exception identifiers.
//!
//! Both tables are immutable `static` data compiled into the binary. Lookups
//! are a linear, ASCII case-insensitive scan in table order; the first match
//! wins and the table's canonical spelling is returned.
//!
//! # Examples
//!
//! ```
//! use licscan_core::registry::{find_license, find_exception};
//!
//! assert_eq!(find_license("apache-2.0"), Some("Apache-2.0"));
//! assert_eq!(find_exception("llvm-EXCEPTION"), Some("LLVM-exception"));
//! assert_eq!(find_license("Not-A-License"), None);
//! ```

mod exceptions;
mod licenses;

pub use exceptions::EXCEPTION_IDS;
pub use licenses::LICENSE_IDS;

/// Look up a license identifier, returning its canonical spelling.
#[inline]
pub fn find_license(id: &str) -> Option<&'static str> {
    find_in(LICENSE_IDS, id)
}

/// Look up a license exception identifier, returning its canonical spelling.
#[inline]
pub fn find_exception(id: &str) -> Option<&'static str> {
    find_in(EXCEPTION_IDS, id)
}

fn find_in(table: &'static [&'static str], id: &str) -> Option<&'static str> {
    table
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(id))
}
