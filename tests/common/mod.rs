//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate word-like strings.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// Generate shorter words, empty included, for edge coverage.
pub fn short_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,5}").unwrap()
}

/// Generate mixed-case words over a small alphabet so edits collide often.
pub fn mixed_case_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcABC]{0,7}").unwrap()
}

/// Generate Unicode words with diacritics and multi-byte characters.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "naïve".to_string(),
        "résumé".to_string(),
        "über".to_string(),
        "tōkyō".to_string(),
        "harīṣh".to_string(),
        "తెలుగు".to_string(),
        "ΟΔΟΣ".to_string(),
        "hello".to_string(),
        "world".to_string(),
    ])
}

/// Generate a strictly positive, finite edit weight.
pub fn weight_strategy() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.25, 0.5, 1.0, 1.5, 2.0, 3.0])
}

// ============================================================================
// ORACLES
// ============================================================================

/// Full-grid weighted Wagner-Fischer, exactly as written on paper.
///
/// `grid[i][j]` = cost of turning `reference[..i]` into `candidate[..j]`.
/// O(nm) space, obviously correct, no early exits.
pub fn oracle_distance(reference: &str, candidate: &str, insert: f64, delete: f64, substitute: f64) -> f64 {
    let a: Vec<char> = reference.chars().collect();
    let b: Vec<char> = candidate.chars().collect();
    let mut grid = vec![vec![0.0; b.len() + 1]; a.len() + 1];

    for j in 0..=b.len() {
        grid[0][j] = j as f64 * insert;
    }
    for i in 0..=a.len() {
        grid[i][0] = i as f64 * delete;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0.0 } else { substitute };
            grid[i][j] = (grid[i - 1][j - 1] + cost)
                .min(grid[i - 1][j] + delete)
                .min(grid[i][j - 1] + insert);
        }
    }

    grid[a.len()][b.len()]
}

/// Tolerance for comparing float distances built from different summation orders.
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
