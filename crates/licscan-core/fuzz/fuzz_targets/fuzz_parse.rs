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

//! Fuzz target for the SPDX expression parser.
//!
//! Feeds arbitrary UTF-8 through `parse` with default and restrictive limits.
//! Successful parses must render to text that parses back to the same tree.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! cargo install cargo-fuzz
//!
//! # From crates/licscan-core
//! cargo fuzz run fuzz_parse
//! cargo fuzz run fuzz_parse -- -max_len=4096 -max_total_time=300
//! ```

use libfuzzer_sys::fuzz_target;
use licscan_core::{parse, parse_with_options, Limits, ParseOptions, Spdx};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(expr) = parse(text) {
        let rendered = expr.to_string();
        let reparsed = parse(&rendered).expect("canonical rendering must parse");
        assert_eq!(reparsed, expr);
    }

    let restrictive = ParseOptions::builder()
        .limits(Limits {
            max_expression_length: 256,
            max_nesting_depth: 4,
        })
        .build();
    let _ = parse_with_options(text, &restrictive);

    if let Ok(spdx) = Spdx::init(text) {
        assert_eq!(spdx.source(), text);
    }
});
