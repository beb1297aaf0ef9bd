//! Free-text school search.
//!
//! Ranks rows of a school dataset against a query by counting token matches
//! in the school name, city and full state name, with hand-tuned weights.
//! The scan is linear in rows times query tokens; there is no index.
//!
//! # Example
//!
//! ```ignore
//! use nces_search::{ScoringOptions, Searcher};
//!
//! let searcher = Searcher::new(ScoringOptions::default().with_top_k(5));
//! for hit in searcher.search_default("elementary school highland park", &dataset)? {
//!     println!("{} {}", hit.entry_idx, hit.score);
//! }
//! ```

mod options;
mod scorer;
mod states;
mod tokenize;

// === Scoring ===
pub use options::{
    DEFAULT_LOW_WEIGHT_TERMS, DEFAULT_TOP_K, FIELD_DEDUCTION, FULL_BONUS, FULL_WEIGHT,
    FieldMatchMode, LOW_WEIGHT, MISS_PENALTY, PARTIAL_BONUS, ScoringOptions,
};
pub use scorer::{ScoreBreakdown, SearchResult, Searcher, search};

// === State Codes ===
pub use states::{STATE_NAMES, UNKNOWN_STATE, resolve_state, state_name};

// === Tokenization ===
pub use tokenize::{FieldTokens, tokenize};
