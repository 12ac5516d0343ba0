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

//! JSON round-trip tests.

use licscan_core::parse;
use licscan_core::registry::{EXCEPTION_IDS, LICENSE_IDS};
use licscan_json::{
    expression_to_json, from_json_value, json_to_expression, records_from_json, records_to_json,
    to_json_value, FromJsonConfig, JsonError, LicenseRecord, ToJsonConfig,
};
use proptest::prelude::*;

const SAMPLES: &[&str] = &[
    "MIT",
    "gpl-2.0+",
    "LicenseRef-Custom",
    "DocumentRef-spdx-doc:LicenseRef-Custom.2",
    "GPL-3.0-only WITH LLVM-exception",
    "LicenseRef-X WITH Classpath-exception-2.0",
    "LGPL-2.1-only AND BSD-3-Clause OR MIT",
    "LGPL-2.1-only OR BSD-3-Clause AND MIT",
    "(MIT OR ISC) AND (Zlib OR (0BSD AND Unlicense))",
];

#[test]
fn test_samples_round_trip_through_json() {
    for text in SAMPLES {
        let expr = parse(text).unwrap();
        let json = expression_to_json(&expr).unwrap();
        assert_eq!(json_to_expression(&json).unwrap(), expr, "sample: {}", text);
    }
}

#[test]
fn test_samples_round_trip_through_records() {
    let records: Vec<LicenseRecord> = SAMPLES
        .iter()
        .map(|text| {
            let mut record = LicenseRecord::parse(*text).unwrap();
            record.include_everywhere("LICENSE");
            record
        })
        .collect();

    let text = records_to_json(&records, true).unwrap();
    assert_eq!(records_from_json(&text).unwrap(), records);
}

#[test]
fn test_rendered_raw_id_matches_json() {
    for text in SAMPLES {
        let expr = parse(text).unwrap();
        let value = to_json_value(&expr, &ToJsonConfig::default());
        let decoded = from_json_value(&value, &FromJsonConfig::default()).unwrap();
        let raw_id = decoded.to_string();
        assert_eq!(parse(&raw_id).unwrap(), expr);
    }
}

#[test]
fn test_unknown_exception_rejected() {
    let json = r#"{"conjunction":"WITH","license":{"id":"MIT"},"exceptionId":"Not-An-Exception"}"#;
    let err = json_to_expression(json).unwrap_err();
    assert_eq!(err.spdx_error(), Some(licscan_core::SpdxError::UnknownLicenseExceptionId));
}

#[test]
fn test_record_mismatch_reported() {
    let json = r#"[{"rawId":"MIT OR ISC","expression":{"conjunction":"AND","left":{"id":"MIT"},"right":{"id":"ISC"}}}]"#;
    assert!(matches!(
        records_from_json(json).unwrap_err(),
        JsonError::RawIdMismatch { .. }
    ));
}

/// `inner` wrapped in `depth` levels of parentheses with `wrap`.
fn nested(inner: &str, wrap: &str, depth: usize) -> String {
    (0..depth).fold(inner.to_string(), |acc, _| wrap.replace("{}", &acc))
}

#[test]
fn test_deepest_parsable_trees_round_trip() {
    let chain = nested("MIT AND ISC", "({}) AND Zlib", 64);
    // One OR over one AND per parenthesis level.
    let widest = nested("MIT OR ISC AND Zlib", "({}) AND 0BSD OR Unlicense", 64);

    for text in [chain, widest] {
        let expr = parse(&text).unwrap();
        let json = expression_to_json(&expr).unwrap();
        assert_eq!(json_to_expression(&json).unwrap(), expr);

        let records = vec![LicenseRecord::parse(text.clone()).unwrap()];
        let encoded = records_to_json(&records, false).unwrap();
        assert_eq!(records_from_json(&encoded).unwrap(), records);
    }
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(LICENSE_IDS).prop_map(str::to_string),
        prop::sample::select(LICENSE_IDS).prop_map(|id| format!("{}+", id)),
        "[A-Za-z0-9.-]{1,10}".prop_map(|id| format!("LicenseRef-{}", id)),
        (prop::sample::select(LICENSE_IDS), prop::sample::select(EXCEPTION_IDS))
            .prop_map(|(l, e)| format!("{} WITH {}", l, e)),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner, prop::bool::ANY)
            .prop_map(|(l, r, and)| format!("({}) {} ({})", l, if and { "AND" } else { "OR" }, r))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: JSON encoding is lossless for every parsed tree.
    #[test]
    fn prop_json_round_trip(text in expression()) {
        let expr = parse(&text).unwrap();
        let json = expression_to_json(&expr).unwrap();
        prop_assert_eq!(json_to_expression(&json).unwrap(), expr);
    }
}
