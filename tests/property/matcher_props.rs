//! Properties of the match decision.

use super::common::{mixed_case_strategy, short_word_strategy, unicode_word_strategy, word_strategy};
use nearmatch::Matcher;
use proptest::prelude::*;

proptest! {
    /// Property: repeated calls with identical arguments agree.
    #[test]
    fn prop_deterministic(
        a in mixed_case_strategy(),
        b in mixed_case_strategy(),
        exact in any::<bool>(),
        case_sensitive in any::<bool>(),
    ) {
        let mut builder = Matcher::builder().min_length(0);
        if exact {
            builder = builder.exact();
        }
        if case_sensitive {
            builder = builder.case_sensitive();
        }
        let matcher = builder.build().unwrap();
        let first = matcher.match_str(&a, &b);
        for _ in 0..3 {
            prop_assert_eq!(matcher.match_str(&a, &b), first);
        }
    }

    /// Property: exact mode is reflexive above the minimum length.
    #[test]
    fn prop_exact_reflexive(s in word_strategy(), case_sensitive in any::<bool>()) {
        let mut builder = Matcher::builder().exact();
        if case_sensitive {
            builder = builder.case_sensitive();
        }
        prop_assert!(builder.build().unwrap().match_str(&s, &s));
    }

    /// Property: fuzzy mode is reflexive too, for any threshold.
    #[test]
    fn prop_fuzzy_reflexive(s in unicode_word_strategy(), max in 0.0f64..1.0) {
        let matcher = Matcher::builder().max_relative_distance(max).build().unwrap();
        prop_assert!(matcher.match_str(&s, &s));
    }

    /// Property: a short reference returns the fallback regardless of anything else.
    #[test]
    fn prop_length_gate_short_circuit(
        short in short_word_strategy(),
        other in word_strategy(),
        action in any::<bool>(),
        exact in any::<bool>(),
        substitute in 0.5f64..4.0,
        max in 0.0f64..2.0,
    ) {
        let min_length = short.chars().count() + 1;
        let mut builder = Matcher::builder()
            .min_length(min_length)
            .low_length_action(action)
            .weights(1.0, 1.0, substitute)
            .max_relative_distance(max);
        if exact {
            builder = builder.exact();
        }
        let matcher = builder.build().unwrap();
        prop_assert_eq!(matcher.match_str(&short, &other), action);
        prop_assert_eq!(matcher.match_str(&other, &short), action);
    }

    /// Property: case-insensitive decisions ignore the case of either side.
    #[test]
    fn prop_case_insensitive_ignores_case(
        a in mixed_case_strategy(),
        b in mixed_case_strategy(),
        exact in any::<bool>(),
    ) {
        let mut builder = Matcher::builder().min_length(0);
        if exact {
            builder = builder.exact();
        }
        let matcher = builder.build().unwrap();
        prop_assert_eq!(
            matcher.match_str(&a, &b),
            matcher.match_str(&a.to_lowercase(), &b.to_uppercase())
        );
    }

    /// Property: loosening the threshold never turns a match into a miss.
    #[test]
    fn prop_threshold_monotone(
        a in word_strategy(),
        b in word_strategy(),
        tight in 0.0f64..0.5,
        slack in 0.0f64..0.5,
    ) {
        let strict = Matcher::builder().max_relative_distance(tight).build().unwrap();
        let loose = Matcher::builder().max_relative_distance(tight + slack).build().unwrap();
        if strict.match_str(&a, &b) {
            prop_assert!(loose.match_str(&a, &b));
        }
    }
}
