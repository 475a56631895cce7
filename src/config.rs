// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-data matcher settings.
//!
//! Everything about a [`Matcher`](crate::Matcher) except the injected
//! functions (normalizers, custom distance) lives here, so it can be stored
//! as JSON next to a reference dataset and loaded back:
//!
//! ```json
//! { "minLength": 3, "maxRelativeDistance": 0.25, "weights": { "substitute": 2.0 } }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::distance::EditWeights;
use crate::error::ConfigError;

/// Inputs shorter than this (in chars) skip comparison entirely.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Largest `distance / reference length` still counted as a match.
pub const DEFAULT_MAX_RELATIVE_DISTANCE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchConfig {
    /// Minimum char length of both inputs before any comparison happens.
    pub min_length: usize,
    /// Result returned when either input is shorter than `min_length`.
    pub low_length_action: bool,
    /// Fuzzy threshold on `distance / reference length`.
    pub max_relative_distance: f64,
    pub case_sensitive: bool,
    /// Compare for equality instead of thresholding a distance.
    pub exact: bool,
    /// Weights for the built-in distance. Ignored by a custom distance.
    pub weights: EditWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            low_length_action: false,
            max_relative_distance: DEFAULT_MAX_RELATIVE_DISTANCE,
            case_sensitive: false,
            exact: false,
            weights: EditWeights::default(),
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.max_relative_distance;
        if threshold.is_nan() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }
        self.weights.validate()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
