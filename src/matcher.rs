// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match decision: are these two strings "the same"?
//!
//! Every call runs the same fixed sequence:
//!
//! ```text
//! length gate ──▶ normalize ──▶ exact?  ──▶ ordinal / case-folded equality
//!  (raw chars)    (per side)      │
//!                                 └──▶ fold case ──▶ distance / |reference| ≤ max
//! ```
//!
//! `|reference|` is the normalized reference before case folding; folding
//! only decides which chars count as the same letter.
//!
//! The gate looks at the *raw* inputs: it is about input quality, so a short
//! string stays short no matter what normalization would make of it.
//!
//! A [`Matcher`] is immutable once built. Each call allocates its own scratch
//! space, so one matcher can serve any number of threads at once.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};
use unicode_casefold::UnicodeCaseFold;

use crate::config::MatchConfig;
use crate::contracts::check_ratio_guarded;
use crate::distance::{Distance, EditWeights, WagnerFischer};
use crate::error::{ConfigError, MatchError, Side};
use crate::normalize::Pipeline;

/// Headroom on the early-exit bound so the final ratio test, not float
/// rounding in `threshold * len`, decides borderline pairs.
const BOUND_SLACK: f64 = 1.0 + 4.0 * f64::EPSILON;

/// A configured, immutable string matcher.
///
/// ```
/// use nearmatch::Matcher;
///
/// let matcher = Matcher::builder().case_sensitive().build()?;
/// assert!(matcher.match_str("abcde", "abcd")); // 1 edit over 5 chars
/// assert!(!matcher.match_str("abcde", "ABCDE"));
/// # Ok::<(), nearmatch::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct Matcher {
    config: MatchConfig,
    distance: Arc<dyn Distance>,
    normalize_reference: Pipeline,
    normalize_candidate: Pipeline,
}

impl Default for Matcher {
    fn default() -> Self {
        MatcherBuilder::new().assemble()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("config", &self.config)
            .field("normalize_reference", &self.normalize_reference)
            .field("normalize_candidate", &self.normalize_candidate)
            .finish_non_exhaustive()
    }
}

impl Matcher {
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    /// Effective settings. Weights are meaningless under a custom distance.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Decide whether `candidate` matches `reference`. Total: never fails.
    pub fn match_str(&self, reference: &str, candidate: &str) -> bool {
        let min_length = self.config.min_length;
        if shorter_than(reference, min_length) || shorter_than(candidate, min_length) {
            trace!(
                reference,
                candidate,
                min_length,
                result = self.config.low_length_action,
                "length gate"
            );
            return self.config.low_length_action;
        }

        let reference = self.normalize_reference.apply(reference);
        let candidate = self.normalize_candidate.apply(candidate);

        if self.config.exact {
            let matched = if self.config.case_sensitive {
                reference == candidate
            } else {
                eq_ignore_case(&reference, &candidate)
            };
            trace!(reference = %reference, candidate = %candidate, matched, "exact comparison");
            return matched;
        }

        self.match_fuzzy(&reference, &candidate)
    }

    /// Match anything printable, via its `Display` output.
    pub fn match_display<R, C>(&self, reference: &R, candidate: &C) -> bool
    where
        R: fmt::Display + ?Sized,
        C: fmt::Display + ?Sized,
    {
        self.match_str(&reference.to_string(), &candidate.to_string())
    }

    /// Match two values whose types are only known at runtime.
    ///
    /// Accepts `String`, `&'static str`, `Box<str>`, `Arc<str>`,
    /// `Cow<'static, str>` and `char`. Anything else is
    /// [`MatchError::UnsupportedInputKind`]; the reference is checked first.
    ///
    /// `dyn Any` cannot reach a `Display` impl, so numbers and user types that
    /// render themselves as text are rejected here. Use
    /// [`match_display`](Self::match_display) for those.
    pub fn try_match(&self, reference: &dyn Any, candidate: &dyn Any) -> Result<bool, MatchError> {
        let reference = text_of(reference, Side::Reference)?;
        let candidate = text_of(candidate, Side::Candidate)?;
        Ok(self.match_str(&reference, &candidate))
    }

    /// The configured distance after normalization and case folding.
    ///
    /// Diagnostic only: no length gate, no threshold, ignores exact mode.
    pub fn distance(&self, reference: &str, candidate: &str) -> f64 {
        let reference = self.normalize_reference.apply(reference);
        let candidate = self.normalize_candidate.apply(candidate);
        let (reference, candidate) = self.fold_case(&reference, &candidate);
        self.distance.distance(&reference, &candidate)
    }

    fn match_fuzzy(&self, reference: &str, candidate: &str) -> bool {
        let reference_len = reference.chars().count();
        let (reference, candidate) = self.fold_case(reference, candidate);
        let threshold = self.config.max_relative_distance;

        // Only reachable with min_length == 0. Nothing to divide by, so
        // only a zero-cost transformation counts.
        if reference_len == 0 {
            let matched = self
                .distance
                .distance_within(&reference, &candidate, 0.0)
                .is_some();
            trace!(candidate = %candidate, matched, "fuzzy comparison against empty reference");
            return matched;
        }

        check_ratio_guarded(reference_len);
        let bound = threshold * reference_len as f64 * BOUND_SLACK;
        let Some(distance) = self.distance.distance_within(&reference, &candidate, bound) else {
            trace!(reference = %reference, candidate = %candidate, bound, "distance beyond bound");
            return false;
        };

        let ratio = distance / reference_len as f64;
        let matched = ratio <= threshold;
        trace!(
            reference = %reference,
            candidate = %candidate,
            distance,
            ratio,
            threshold,
            matched,
            "fuzzy comparison"
        );
        matched
    }

    fn fold_case<'a>(&self, reference: &'a str, candidate: &'a str) -> (Cow<'a, str>, Cow<'a, str>) {
        if self.config.case_sensitive {
            (Cow::Borrowed(reference), Cow::Borrowed(candidate))
        } else {
            (Cow::Owned(fold(reference)), Cow::Owned(fold(candidate)))
        }
    }
}

/// Incremental configuration for a [`Matcher`]. Validation happens in
/// [`build`](Self::build), once.
#[derive(Clone, Default)]
pub struct MatcherBuilder {
    config: MatchConfig,
    distance: Option<Arc<dyn Distance>>,
    normalize_reference: Pipeline,
    normalize_candidate: Pipeline,
}

impl MatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from stored settings (e.g. [`MatchConfig::from_json`]).
    pub fn from_config(config: MatchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Compare for equality instead of edit distance.
    pub fn exact(mut self) -> Self {
        self.config.exact = true;
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.config.case_sensitive = true;
        self
    }

    /// Minimum char length both inputs need before they are compared at all.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Result for inputs shorter than the minimum length.
    pub fn low_length_action(mut self, result: bool) -> Self {
        self.config.low_length_action = result;
        self
    }

    pub fn max_relative_distance(mut self, max_relative_distance: f64) -> Self {
        self.config.max_relative_distance = max_relative_distance;
        self
    }

    /// Costs for the built-in Wagner-Fischer distance.
    pub fn weights(mut self, insert: f64, delete: f64, substitute: f64) -> Self {
        self.config.weights = EditWeights::unchecked(insert, delete, substitute);
        self
    }

    pub fn edit_weights(mut self, weights: EditWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Replace the built-in distance. Must be pure (see [`Distance`]).
    pub fn distance_fn<D: Distance + 'static>(mut self, distance: D) -> Self {
        self.distance = Some(Arc::new(distance));
        self
    }

    pub fn normalize_reference(mut self, pipeline: Pipeline) -> Self {
        self.normalize_reference = pipeline;
        self
    }

    pub fn normalize_candidate(mut self, pipeline: Pipeline) -> Self {
        self.normalize_candidate = pipeline;
        self
    }

    pub fn build(self) -> Result<Matcher, ConfigError> {
        if let Err(err) = self.config.validate() {
            warn!(error = %err, "rejected matcher configuration");
            return Err(err);
        }

        debug!(
            min_length = self.config.min_length,
            low_length_action = self.config.low_length_action,
            max_relative_distance = self.config.max_relative_distance,
            case_sensitive = self.config.case_sensitive,
            exact = self.config.exact,
            custom_distance = self.distance.is_some(),
            reference_steps = self.normalize_reference.len(),
            candidate_steps = self.normalize_candidate.len(),
            "built matcher"
        );
        Ok(self.assemble())
    }

    fn assemble(self) -> Matcher {
        let weights = self.config.weights;
        Matcher {
            config: self.config,
            distance: self
                .distance
                .unwrap_or_else(|| Arc::new(WagnerFischer::new(weights))),
            normalize_reference: self.normalize_reference,
            normalize_candidate: self.normalize_candidate,
        }
    }
}

/// Fewer than `min` chars, without counting past `min`.
fn shorter_than(value: &str, min: usize) -> bool {
    min > 0 && value.chars().nth(min - 1).is_none()
}

/// Unicode full case folding.
fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().case_fold()
}

fn fold(value: &str) -> String {
    folded(value).collect()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || folded(a).eq(folded(b))
}

fn text_of(value: &dyn Any, side: Side) -> Result<Cow<'_, str>, MatchError> {
    if let Some(s) = value.downcast_ref::<String>() {
        return Ok(Cow::Borrowed(s.as_str()));
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Ok(Cow::Borrowed(*s));
    }
    if let Some(s) = value.downcast_ref::<Box<str>>() {
        return Ok(Cow::Borrowed(&**s));
    }
    if let Some(s) = value.downcast_ref::<Arc<str>>() {
        return Ok(Cow::Borrowed(&**s));
    }
    if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        return Ok(Cow::Borrowed(s.as_ref()));
    }
    if let Some(c) = value.downcast_ref::<char>() {
        return Ok(Cow::Owned(c.to_string()));
    }

    debug!(%side, "input has no string representation");
    Err(MatchError::UnsupportedInputKind { side })
}
