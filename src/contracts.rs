// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance engine and matcher.
//!
//! Debug-mode assertions only: zero-cost in release builds, loud in tests.
//!
//! | Contract                       | Property                                  |
//! |--------------------------------|-------------------------------------------|
//! | `check_distance_non_negative`  | distance ≥ 0 with positive weights        |
//! | `check_zero_iff_equal`         | distance = 0 ⇔ sequences equal            |
//! | `check_ratio_guarded`          | relative distance never divides by zero   |

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check that a computed distance is a non-negative number.
///
/// # Panics (debug builds only)
/// Panics on negative or NaN distances.
#[inline]
pub fn check_distance_non_negative(distance: f64) {
    debug_assert!(
        distance >= 0.0,
        "Contract violation: distance must be >= 0, got {}",
        distance
    );
}

/// Check that a distance is zero exactly when the inputs were equal.
///
/// Holds because every weight is strictly positive: any edit costs something.
///
/// # Panics (debug builds only)
/// Panics if equal inputs cost something or distinct inputs cost nothing.
#[inline]
pub fn check_zero_iff_equal(equal: bool, distance: f64) {
    debug_assert!(
        equal == (distance == 0.0),
        "Contract violation: distance == 0 must hold iff inputs are equal \
         (equal = {}, distance = {})",
        equal,
        distance
    );
}

// ============================================================================
// MATCHER CONTRACTS
// ============================================================================

/// Check that the relative-distance division has a non-zero denominator.
///
/// # Panics (debug builds only)
/// Panics if `reference_len == 0`.
#[inline]
pub fn check_ratio_guarded(reference_len: usize) {
    debug_assert!(
        reference_len > 0,
        "Contract violation: relative distance computed over an empty reference"
    );
}
