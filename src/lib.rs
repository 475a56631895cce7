//! Decide whether two strings are "the same" under configurable tolerance.
//!
//! Three modes: exact equality, case-insensitive equality, or approximate
//! equality bounded by a weighted edit distance relative to the reference
//! length. Meant as a primitive for deduplication, entity matching and fuzzy
//! lookup of noisy identifiers against a reference list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ normalize.rs │────▶│  matcher.rs  │◀────│   distance/      │
//! │  (Pipeline)  │     │  (Matcher,   │     │ (Distance trait, │
//! └──────────────┘     │   builder)   │     │  WagnerFischer)  │
//!                      └──────────────┘     └──────────────────┘
//!                             ▲
//!                ┌────────────┴───────────┐
//!          ┌───────────┐           ┌────────────┐
//!          │ config.rs │           │  error.rs  │
//!          └───────────┘           └────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use nearmatch::Matcher;
//!
//! let matcher = Matcher::default();       // case-insensitive, fuzzy, 0.2
//! assert!(matcher.match_str("abcde", "ABCD"));
//!
//! let strict = Matcher::builder().case_sensitive().exact().build()?;
//! assert!(strict.match_str("abc", "abc"));
//! # Ok::<(), nearmatch::ConfigError>(())
//! ```
//!
//! Normalizers and distance functions are injected as plain functions and
//! must be pure; a [`Matcher`] relies on that to be shared across threads.

// Module declarations
pub mod config;
pub mod contracts;
pub mod distance;
mod error;
mod matcher;
pub mod normalize;

// Re-exports for public API
pub use config::{MatchConfig, DEFAULT_MAX_RELATIVE_DISTANCE, DEFAULT_MIN_LENGTH};
pub use distance::{
    weighted_distance, weighted_distance_within, Distance, EditOperation, EditWeights, WagnerFischer,
};
pub use error::{ConfigError, MatchError, Side};
pub use matcher::{Matcher, MatcherBuilder};
pub use normalize::{Normalizer, Pipeline};
