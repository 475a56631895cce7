// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the nearmatch edit-distance kernel.
//!
//! This standalone crate extracts the rolling-row Wagner-Fischer DP and the
//! length gate, specialised to integer weights so every path is checkable.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the DP never indexes out of bounds or overflows
//! 2. **Identity**: distance(a, a) == 0
//! 3. **Empty side**: distance("", b) == |b| * insert, distance(a, "") == |a| * delete
//! 4. **Symmetry**: equal insert/delete weights give distance(a, b) == distance(b, a)
//! 5. **Zero iff equal**: with positive weights, distance == 0 ⇔ a == b

/// Longest symbolic input. DP state explodes quickly beyond this.
pub const MAX_LEN: usize = 4;

/// Largest symbolic weight; keeps MAX_LEN * 2 * MAX_WEIGHT far from u32::MAX.
pub const MAX_WEIGHT: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub insert: u32,
    pub delete: u32,
    pub substitute: u32,
}

impl Weights {
    fn transposed(self) -> Self {
        Self {
            insert: self.delete,
            delete: self.insert,
            substitute: self.substitute,
        }
    }
}

// ============================================================================
// EDIT DISTANCE (mirrors src/distance/wagner_fischer.rs)
// ============================================================================

/// Weighted edit distance with a rolling row sized by the shorter input.
pub fn distance(reference: &[u8], candidate: &[u8], weights: Weights) -> u32 {
    if candidate.len() > reference.len() {
        rolling_row(candidate, reference, weights.transposed())
    } else {
        rolling_row(reference, candidate, weights)
    }
}

fn rolling_row(rows: &[u8], columns: &[u8], weights: Weights) -> u32 {
    let mut row = [0u32; MAX_LEN + 1];
    for j in 0..=columns.len() {
        row[j] = j as u32 * weights.insert;
    }

    for (i, r) in rows.iter().enumerate() {
        let mut diag = row[0];
        row[0] = (i as u32 + 1) * weights.delete;
        for (j, c) in columns.iter().enumerate() {
            let substitute = if r == c { diag } else { diag + weights.substitute };
            let delete = row[j + 1] + weights.delete;
            let insert = row[j] + weights.insert;
            diag = row[j + 1];
            row[j + 1] = substitute.min(delete).min(insert);
        }
    }

    row[columns.len()]
}

/// Length gate: fewer than `min` units.
pub fn shorter_than(value: &[u8], min: usize) -> bool {
    min > 0 && value.get(min - 1).is_none()
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_weights() -> Weights {
        Weights {
            insert: kani::any_where(|&w: &u32| w > 0 && w <= MAX_WEIGHT),
            delete: kani::any_where(|&w: &u32| w > 0 && w <= MAX_WEIGHT),
            substitute: kani::any_where(|&w: &u32| w > 0 && w <= MAX_WEIGHT),
        }
    }

    fn any_word(buf: &mut [u8; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for i in 0..len {
            // Small alphabet so equal units actually occur
            buf[i] = kani::any_where(|&b: &u8| b < 3);
        }
        len
    }

    /// Verify the DP never panics or overflows for bounded inputs.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_distance_no_panic() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_word(&mut a);
        let lb = any_word(&mut b);

        let d = distance(&a[..la], &b[..lb], any_weights());
        kani::assert(
            d <= (la + lb) as u32 * MAX_WEIGHT,
            "distance bounded by deleting and reinserting everything",
        );
    }

    /// Verify distance(a, a) == 0.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_identity() {
        let mut a = [0u8; MAX_LEN];
        let la = any_word(&mut a);
        kani::assert(distance(&a[..la], &a[..la], any_weights()) == 0, "identity costs nothing");
    }

    /// Verify the direction convention for empty sides.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_empty_sides() {
        let mut b = [0u8; MAX_LEN];
        let lb = any_word(&mut b);
        let w = any_weights();

        kani::assert(distance(&[], &b[..lb], w) == lb as u32 * w.insert, "empty reference: inserts");
        kani::assert(distance(&b[..lb], &[], w) == lb as u32 * w.delete, "empty candidate: deletes");
    }

    /// Verify symmetry when insert and delete cost the same.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_symmetry_with_equal_indel() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_word(&mut a);
        let lb = any_word(&mut b);
        let mut w = any_weights();
        w.delete = w.insert;

        kani::assert(
            distance(&a[..la], &b[..lb], w) == distance(&b[..lb], &a[..la], w),
            "equal indel weights give a symmetric distance",
        );
    }

    /// Verify distance == 0 only for equal inputs.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_zero_iff_equal() {
        let mut a = [0u8; MAX_LEN];
        let mut b = [0u8; MAX_LEN];
        let la = any_word(&mut a);
        let lb = any_word(&mut b);

        let d = distance(&a[..la], &b[..lb], any_weights());
        kani::assert((d == 0) == (a[..la] == b[..lb]), "zero distance iff equal");
    }

    /// Verify the length gate never reads past `min`.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_length_gate() {
        let mut a = [0u8; MAX_LEN];
        let la = any_word(&mut a);
        let min: usize = kani::any_where(|&n| n <= MAX_LEN + 1);
        kani::assert(shorter_than(&a[..la], min) == (la < min), "gate is exactly len < min");
    }
}
