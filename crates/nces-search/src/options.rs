//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Base weight of an ordinary query token.
pub const FULL_WEIGHT: f64 = 1.0;
/// Base weight of a low-information token such as "school".
pub const LOW_WEIGHT: f64 = 0.5;
/// Weight removed from a token after it matches the city or the state.
pub const FIELD_DEDUCTION: f64 = 0.5;
/// Penalty per query token that matches no field.
pub const MISS_PENALTY: f64 = 1.0;
/// Bonus when name, city and state all matched.
pub const FULL_BONUS: f64 = 1.0;
/// Bonus when the name and one of city or state matched.
pub const PARTIAL_BONUS: f64 = 0.5;
/// Number of results returned when no limit is given.
pub const DEFAULT_TOP_K: usize = 3;

/// Tokens that are too common in school names to carry full weight.
pub const DEFAULT_LOW_WEIGHT_TERMS: [&str; 2] = ["school", "elementary"];

/// How city and state matches combine across query tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMatchMode {
    /// Each matching token overwrites the field score; the last match wins.
    #[default]
    LastMatch,
    /// Each matching token adds its weight to the field score.
    Accumulate,
}

/// Options for [`crate::Searcher`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Lowercase tokens weighted at [`LOW_WEIGHT`].
    pub low_weight_terms: Vec<String>,
    /// City and state match combination.
    pub field_matches: FieldMatchMode,
    /// Default result limit.
    pub top_k: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            low_weight_terms: DEFAULT_LOW_WEIGHT_TERMS
                .iter()
                .map(|term| (*term).to_string())
                .collect(),
            field_matches: FieldMatchMode::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl ScoringOptions {
    #[must_use]
    pub fn with_field_matches(mut self, mode: FieldMatchMode) -> Self {
        self.field_matches = mode;
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Replace the low-weight terms; they are lowercased.
    #[must_use]
    pub fn with_low_weight_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.low_weight_terms = terms
            .into_iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Base weight for a lowercase query token.
    pub fn base_weight(&self, token: &str) -> f64 {
        if self.low_weight_terms.iter().any(|term| term == token) {
            LOW_WEIGHT
        } else {
            FULL_WEIGHT
        }
    }
}
