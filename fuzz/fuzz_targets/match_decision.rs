// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the match decision.
//!
//! Arbitrary strings and arbitrary (valid) configurations must never panic,
//! and the decision must agree with the distance it is built on.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nearmatch::{Distance, EditWeights, Matcher, WagnerFischer};

/// Fuzz input for one match call
#[derive(Debug, Arbitrary)]
struct MatchInput {
    reference: String,
    candidate: String,
    min_length: u8,
    low_length_action: bool,
    /// Threshold in hundredths
    max_relative_distance: u8,
    case_sensitive: bool,
    exact: bool,
    /// Weights in quarters, shifted to stay positive
    weights: [u8; 3],
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let reference: String = input.reference.chars().take(64).collect();
    let candidate: String = input.candidate.chars().take(64).collect();

    let [insert, delete, substitute] = input.weights.map(|w| (f64::from(w) + 1.0) / 4.0);
    let max = f64::from(input.max_relative_distance) / 100.0;

    let mut builder = Matcher::builder()
        .min_length(usize::from(input.min_length % 8))
        .low_length_action(input.low_length_action)
        .max_relative_distance(max)
        .weights(insert, delete, substitute);
    if input.case_sensitive {
        builder = builder.case_sensitive();
    }
    if input.exact {
        builder = builder.exact();
    }
    let matcher = builder.build().expect("positive weights and threshold always build");

    let result = matcher.match_str(&reference, &candidate);

    // INVARIANT 1: deterministic
    assert_eq!(result, matcher.match_str(&reference, &candidate));

    // INVARIANT 2: gated inputs return the fallback
    let min = usize::from(input.min_length % 8);
    if reference.chars().count() < min || candidate.chars().count() < min {
        assert_eq!(result, input.low_length_action);
        return;
    }

    // INVARIANT 3: case-sensitive fuzzy decision is the ratio against the raw engine
    if input.case_sensitive && !input.exact && !reference.is_empty() {
        let engine = WagnerFischer::new(EditWeights::new(insert, delete, substitute).unwrap());
        let d = engine.distance(&reference, &candidate);
        assert!(d >= 0.0, "negative distance {d}");
        let ratio = d / reference.chars().count() as f64;
        assert_eq!(result, ratio <= max, "ratio {ratio} vs max {max}");
    }

    // INVARIANT 4: a string always matches itself when it clears the gate
    assert!(matcher.match_str(&reference, &reference));
});
