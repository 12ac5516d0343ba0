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

#![no_main]

//! Fuzz target for identifier and license-ref validation.
//!
//! Anything `LicenseRef::parse` accepts must render back to the same token.

use libfuzzer_sys::fuzz_target;
use licscan_core::{IdString, LicenseId, LicenseRef};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = IdString::parse(text);
    if let Ok(id) = LicenseId::parse(text) {
        assert!(id.as_str().eq_ignore_ascii_case(text));
    }
    if let Ok(reference) = LicenseRef::parse(text) {
        assert_eq!(reference.to_string(), text);
    }
});
