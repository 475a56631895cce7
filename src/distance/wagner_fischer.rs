// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted Wagner-Fischer edit distance.
//!
//! Cell `[i][j]` of the grid is the cheapest way to turn the first `i` units of
//! the reference into the first `j` units of the candidate. Direction is fixed:
//! an *insertion* adds a candidate unit, a *deletion* drops a reference unit.
//! So `distance("", b) = |b| * insert` and `distance(a, "") = |a| * delete`.
//!
//! Only the final scalar is needed, never the alignment, so the grid is walked
//! with a single rolling row sized by the shorter input. When the candidate is
//! the longer side the grid is transposed, which swaps the roles of insert and
//! delete and leaves the value unchanged.
//!
//! Two early exits, both sound:
//! 1. The length gap must be paid in deletions (or insertions): a lower bound
//! 2. Every alignment path crosses every row, so a row minimum is a lower bound

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Distance;
use crate::contracts::{check_distance_non_negative, check_zero_iff_equal};
use crate::error::ConfigError;

/// The three edit operations the DP charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    Insert,
    Delete,
    Substitute,
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOperation::Insert => write!(f, "insert"),
            EditOperation::Delete => write!(f, "delete"),
            EditOperation::Substitute => write!(f, "substitute"),
        }
    }
}

/// Per-operation costs. Every weight is finite and strictly positive; a zero
/// weight would make distinct strings look identical.
///
/// Deserialization goes through [`EditWeights::new`], so a stored config can
/// never produce invalid weights. Missing fields default to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct EditWeights {
    insert: f64,
    delete: f64,
    substitute: f64,
}

/// Wire form of [`EditWeights`], checked on the way in.
#[derive(Deserialize)]
#[serde(default)]
struct RawWeights {
    insert: f64,
    delete: f64,
    substitute: f64,
}

impl Default for RawWeights {
    fn default() -> Self {
        Self {
            insert: 1.0,
            delete: 1.0,
            substitute: 1.0,
        }
    }
}

impl TryFrom<RawWeights> for EditWeights {
    type Error = ConfigError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.insert, raw.delete, raw.substitute)
    }
}

impl Default for EditWeights {
    fn default() -> Self {
        Self::unchecked(1.0, 1.0, 1.0)
    }
}

impl EditWeights {
    pub fn new(insert: f64, delete: f64, substitute: f64) -> Result<Self, ConfigError> {
        let weights = Self::unchecked(insert, delete, substitute);
        weights.validate()?;
        Ok(weights)
    }

    /// Construction without validation; the builder validates before use.
    pub(crate) const fn unchecked(insert: f64, delete: f64, substitute: f64) -> Self {
        Self {
            insert,
            delete,
            substitute,
        }
    }

    /// Same cost for every operation.
    pub fn uniform(weight: f64) -> Result<Self, ConfigError> {
        Self::new(weight, weight, weight)
    }

    pub fn insert(&self) -> f64 {
        self.insert
    }

    pub fn delete(&self) -> f64 {
        self.delete
    }

    pub fn substitute(&self) -> f64 {
        self.substitute
    }

    pub fn get(&self, operation: EditOperation) -> f64 {
        match operation {
            EditOperation::Insert => self.insert,
            EditOperation::Delete => self.delete,
            EditOperation::Substitute => self.substitute,
        }
    }

    /// Checks every weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for operation in [
            EditOperation::Insert,
            EditOperation::Delete,
            EditOperation::Substitute,
        ] {
            let value = self.get(operation);
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveWeight { operation, value });
            }
        }
        Ok(())
    }

    /// Weights for the transposed grid (candidate as rows).
    fn transposed(self) -> Self {
        Self {
            insert: self.delete,
            delete: self.insert,
            substitute: self.substitute,
        }
    }
}

/// Weighted edit distance between two unit sequences.
///
/// Units are compared with `==` and nothing else, so this works over chars,
/// bytes, tokens or anything `PartialEq`.
pub fn weighted_distance<T: PartialEq>(reference: &[T], candidate: &[T], weights: EditWeights) -> f64 {
    weighted_distance_within(reference, candidate, weights, f64::INFINITY).unwrap_or(f64::INFINITY)
}

/// Weighted edit distance, abandoned as soon as it provably exceeds `bound`.
///
/// Returns `Some(d)` with the exact distance when `d <= bound`, `None` otherwise.
pub fn weighted_distance_within<T: PartialEq>(
    reference: &[T],
    candidate: &[T],
    weights: EditWeights,
    bound: f64,
) -> Option<f64> {
    // Early-exit: the length gap must be paid in deletions (or insertions)
    let floor = if reference.len() >= candidate.len() {
        (reference.len() - candidate.len()) as f64 * weights.delete
    } else {
        (candidate.len() - reference.len()) as f64 * weights.insert
    };
    if floor > bound {
        return None;
    }

    if candidate.len() > reference.len() {
        rolling_row(candidate, reference, weights.transposed(), bound)
    } else {
        rolling_row(reference, candidate, weights, bound)
    }
}

/// The DP proper. `columns` is never longer than `rows`.
fn rolling_row<T: PartialEq>(rows: &[T], columns: &[T], weights: EditWeights, bound: f64) -> Option<f64> {
    let mut row: Vec<f64> = (0..=columns.len())
        .map(|j| j as f64 * weights.insert)
        .collect();

    for (i, r) in rows.iter().enumerate() {
        // `diag` trails one cell behind: the previous row's value at column j
        let mut diag = row[0];
        row[0] = (i + 1) as f64 * weights.delete;
        let mut min_row = row[0];

        for (j, c) in columns.iter().enumerate() {
            let substitute = if r == c { diag } else { diag + weights.substitute };
            let delete = row[j + 1] + weights.delete;
            let insert = row[j] + weights.insert;
            diag = row[j + 1];
            row[j + 1] = substitute.min(delete).min(insert);
            min_row = min_row.min(row[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds bound, no point continuing
        if min_row > bound {
            return None;
        }
    }

    let d = row[columns.len()];
    (d <= bound).then_some(d)
}

/// The default [`Distance`]: weighted Wagner-Fischer over `char`s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WagnerFischer {
    weights: EditWeights,
}

impl WagnerFischer {
    pub fn new(weights: EditWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> EditWeights {
        self.weights
    }
}

impl Distance for WagnerFischer {
    fn distance(&self, reference: &str, candidate: &str) -> f64 {
        self.distance_within(reference, candidate, f64::INFINITY)
            .unwrap_or(f64::INFINITY)
    }

    fn distance_within(&self, reference: &str, candidate: &str, bound: f64) -> Option<f64> {
        // ASCII bytes are chars one-for-one; skip the decode
        let result = if reference.is_ascii() && candidate.is_ascii() {
            weighted_distance_within(reference.as_bytes(), candidate.as_bytes(), self.weights, bound)
        } else {
            let reference: Vec<char> = reference.chars().collect();
            let candidate: Vec<char> = candidate.chars().collect();
            weighted_distance_within(&reference, &candidate, self.weights, bound)
        };

        if let Some(d) = result {
            check_distance_non_negative(d);
            check_zero_iff_equal(reference == candidate, d);
        }
        result
    }
}
