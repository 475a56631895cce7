//! Properties of the weighted Wagner-Fischer engine.

use super::common::{short_word_strategy, weight_strategy, word_strategy};
use nearmatch::{Distance, EditWeights, WagnerFischer};
use proptest::prelude::*;

fn engine(insert: f64, delete: f64, substitute: f64) -> WagnerFischer {
    WagnerFischer::new(EditWeights::new(insert, delete, substitute).unwrap())
}

proptest! {
    /// Property: distance is symmetric when insert and delete cost the same.
    #[test]
    fn prop_symmetric_with_equal_indel(
        a in short_word_strategy(),
        b in short_word_strategy(),
        indel in weight_strategy(),
        substitute in weight_strategy(),
    ) {
        let wf = engine(indel, indel, substitute);
        prop_assert_eq!(wf.distance(&a, &b), wf.distance(&b, &a));
    }

    /// Property: swapping the inputs is the same as swapping insert and delete.
    #[test]
    fn prop_swap_inputs_swaps_indel(
        a in short_word_strategy(),
        b in short_word_strategy(),
        insert in weight_strategy(),
        delete in weight_strategy(),
        substitute in weight_strategy(),
    ) {
        let forward = engine(insert, delete, substitute).distance(&a, &b);
        let backward = engine(delete, insert, substitute).distance(&b, &a);
        prop_assert_eq!(forward, backward);
    }

    /// Property: distance is zero exactly when the strings are equal.
    #[test]
    fn prop_zero_iff_equal(
        a in short_word_strategy(),
        b in short_word_strategy(),
        insert in weight_strategy(),
        delete in weight_strategy(),
        substitute in weight_strategy(),
    ) {
        let d = engine(insert, delete, substitute).distance(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d == 0.0, a == b);
    }

    /// Property: raising any single weight never lowers the distance.
    #[test]
    fn prop_monotone_in_each_weight(
        a in short_word_strategy(),
        b in short_word_strategy(),
        base in weight_strategy(),
        bump in weight_strategy(),
        which in 0usize..3,
    ) {
        let mut raised = [base, base, base];
        raised[which] += bump;
        let before = engine(base, base, base).distance(&a, &b);
        let after = engine(raised[0], raised[1], raised[2]).distance(&a, &b);
        prop_assert!(after >= before, "{} < {} after raising weight {}", after, before, which);
    }

    /// Property: empty reference costs one insertion per candidate char.
    #[test]
    fn prop_empty_reference_is_all_inserts(
        b in word_strategy(),
        insert in weight_strategy(),
        delete in weight_strategy(),
    ) {
        let wf = engine(insert, delete, 1.0);
        prop_assert_eq!(wf.distance("", &b), b.chars().count() as f64 * insert);
        prop_assert_eq!(wf.distance(&b, ""), b.chars().count() as f64 * delete);
    }

    /// Property: the bounded form agrees with the unbounded one.
    #[test]
    fn prop_within_agrees_with_distance(
        a in short_word_strategy(),
        b in short_word_strategy(),
        bound in 0.0f64..6.0,
    ) {
        let wf = engine(1.0, 1.5, 2.0);
        let d = wf.distance(&a, &b);
        let within = wf.distance_within(&a, &b, bound);
        if d <= bound {
            prop_assert_eq!(within, Some(d));
        } else {
            prop_assert_eq!(within, None);
        }
    }

    /// Property: length difference bounds unit distance from below.
    #[test]
    fn prop_length_diff_lower_bound(a in short_word_strategy(), b in short_word_strategy()) {
        let diff = (a.chars().count() as f64 - b.chars().count() as f64).abs();
        prop_assert!(WagnerFischer::default().distance(&a, &b) >= diff);
    }
}
