// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two failure classes exist and neither touches the comparison itself:
//! configuration is validated once at build time, and the polymorphic
//! [`Matcher::try_match`](crate::Matcher::try_match) entry point reports inputs
//! it cannot read as text. [`Matcher::match_str`](crate::Matcher::match_str)
//! never fails.

use std::fmt;

use thiserror::Error;

use crate::distance::EditOperation;

/// Rejected configuration. Never clamped, always surfaced from `build()`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An edit weight was zero, negative, NaN or infinite.
    #[error("{operation} weight must be finite and > 0, got {value}")]
    NonPositiveWeight { operation: EditOperation, value: f64 },

    /// The relative distance threshold was negative or NaN.
    #[error("max relative distance must be >= 0, got {value}")]
    InvalidThreshold { value: f64 },

    /// A JSON configuration document could not be parsed.
    #[error("malformed match config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which argument of a match call an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Reference,
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reference => write!(f, "reference"),
            Side::Candidate => write!(f, "candidate"),
        }
    }
}

/// Per-call failure of the polymorphic entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The value has no string representation the matcher understands.
    #[error("{side} input has no string representation")]
    UnsupportedInputKind { side: Side },
}
