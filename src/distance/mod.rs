// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: the scalar the fuzzy matcher thresholds on.
//!
//! The matcher only sees the [`Distance`] trait, so any metric can be swapped
//! in. The built-in one is a weighted Wagner-Fischer DP with a rolling row.

mod wagner_fischer;

pub use wagner_fischer::*;

/// A distance metric over two strings.
///
/// Implementations must be pure: the same pair always yields the same
/// non-negative value and nothing is mutated. A [`Matcher`](crate::Matcher)
/// shares its metric across threads on the strength of that contract.
///
/// Closures `Fn(&str, &str) -> f64` implement this trait directly.
pub trait Distance: Send + Sync {
    /// Distance from `reference` to `candidate`.
    fn distance(&self, reference: &str, candidate: &str) -> f64;

    /// Distance, unless it is already known to exceed `bound`.
    ///
    /// `Some(d)` carries the exact distance and `d <= bound`. `None` means the
    /// distance is greater than `bound`. Implementations with a cheap lower
    /// bound can override this to abandon work early.
    fn distance_within(&self, reference: &str, candidate: &str, bound: f64) -> Option<f64> {
        let d = self.distance(reference, candidate);
        (d <= bound).then_some(d)
    }
}

impl<F> Distance for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn distance(&self, reference: &str, candidate: &str) -> f64 {
        self(reference, candidate)
    }
}
