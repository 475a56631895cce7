// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization pipelines applied to each side before comparison.
//!
//! A [`Normalizer`] is any pure `&str -> String` function. A [`Pipeline`] runs
//! them in order, each on the previous output. The stock normalizers here are
//! plain functions, so they slot straight into [`Pipeline::then`]:
//!
//! ```
//! use nearmatch::normalize::{icao_transliterate, uppercase, Pipeline};
//!
//! let mrz = Pipeline::new().then(uppercase).then(icao_transliterate);
//! assert_eq!(mrz.apply("Müller"), "MUELLER");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// A pure string transform. Shared across threads by every matcher clone.
pub type Normalizer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Ordered sequence of normalizers. Empty means identity.
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Normalizer>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step. Steps run in the order they were added.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(step));
        self
    }

    /// Append an already shared step.
    pub fn then_shared(mut self, step: Normalizer) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step to completion. Borrows when the pipeline is empty.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut steps = self.steps.iter();
        let Some(first) = steps.next() else {
            return Cow::Borrowed(input);
        };

        let mut out = first(input);
        for step in steps {
            out = step(&out);
        }
        Cow::Owned(out)
    }
}

impl FromIterator<Normalizer> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Normalizer>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}

// ============================================================================
// STOCK NORMALIZERS
// ============================================================================

pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

pub fn uppercase(value: &str) -> String {
    value.to_uppercase()
}

/// Trim and collapse every whitespace run to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip diacritics: NFD decompose, then drop combining marks.
///
/// - "café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// ICAO Doc 9303 transliteration of Latin letters for machine readable zones.
///
/// Expects upper-case input (run [`uppercase`] first). Characters without a
/// mapping pass through untouched, so this composes with other steps.
pub fn icao_transliterate(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match icao_mapping(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

fn icao_mapping(c: char) -> Option<&'static str> {
    let latin = match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ă' | 'Ā' | 'Ą' => "A",
        'Ä' | 'Æ' => "AE",
        'Å' => "AA",
        'Ć' | 'Ĉ' | 'Č' | 'Ċ' | 'Ç' => "C",
        'Ď' | 'Đ' | 'Ð' => "D",
        'É' | 'È' | 'Ê' | 'Ë' | 'Ĕ' | 'Ė' | 'Ē' | 'Ę' | 'Ě' => "E",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'Ĥ' | 'Ħ' => "H",
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ĩ' | 'İ' | 'Ī' | 'Į' | 'Ĭ' => "I",
        'Ĳ' => "IJ",
        'Ĵ' => "J",
        'Ķ' => "K",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' | 'Ŋ' => "N",
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ő' | 'Ō' | 'Ŏ' => "O",
        'Ö' | 'Ø' | 'Œ' => "OE",
        'Ŕ' | 'Ř' | 'Ŗ' => "R",
        'Ś' | 'Ŝ' | 'Š' | 'Ş' | 'Ș' => "S",
        'ẞ' | 'ß' => "SS",
        'Ţ' | 'Ť' | 'Ŧ' | 'Ț' => "T",
        'Þ' => "TH",
        'Ú' | 'Ù' | 'Û' | 'Ũ' | 'Ŭ' | 'Ű' | 'Ů' | 'Ū' | 'Ų' => "U",
        'Ü' => "UE",
        'Ŵ' => "W",
        'Ý' | 'Ŷ' | 'Ÿ' => "Y",
        'Ź' | 'Ž' | 'Ż' => "Z",
        _ => return None,
    };
    Some(latin)
}
