//! Word-count relevance scoring over name, city and state.
//!
//! Every row is scored against every query token; there is no index. Each
//! token starts at its base weight. A city match records the weight and
//! removes [`FIELD_DEDUCTION`]; a state match records what is left and removes
//! it again; a name match adds whatever remains. Tokens that match nothing
//! cost [`MISS_PENALTY`]. Rows that matched the name and at least one of the
//! location fields get a bonus.

use serde::Serialize;

use nces_data::{Dataset, Result, RowView, columns};

use crate::options::{
    FIELD_DEDUCTION, FULL_BONUS, FieldMatchMode, MISS_PENALTY, PARTIAL_BONUS, ScoringOptions,
};
use crate::states::resolve_state;
use crate::tokenize::{FieldTokens, tokenize};

/// One ranked row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    pub score: f64,
    pub entry_idx: usize,
}

/// Score components for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub name: f64,
    pub city: f64,
    pub state: f64,
    pub misses: u32,
    pub bonus: f64,
    pub total: f64,
}

/// Positions of the searched columns in a dataset.
#[derive(Debug, Clone, Copy)]
struct SearchColumns {
    name: usize,
    city: usize,
    state: usize,
}

impl SearchColumns {
    fn locate(dataset: &Dataset) -> Result<Self> {
        Ok(Self {
            name: dataset.column_index(columns::SCHOOL_NAME)?,
            city: dataset.column_index(columns::CITY)?,
            state: dataset.column_index(columns::STATE)?,
        })
    }

    fn tokens(self, row: RowView<'_>) -> FieldTokens {
        let state = resolve_state(row.value(self.state).unwrap_or_default());
        FieldTokens::new(
            row.value(self.name).unwrap_or_default(),
            row.value(self.city).unwrap_or_default(),
            &state,
        )
    }
}

/// Linear-scan search engine.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: ScoringOptions,
}

impl Searcher {
    pub fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Searches with the configured default limit.
    pub fn search_default(&self, query: &str, dataset: &Dataset) -> Result<Vec<SearchResult>> {
        self.search(query, dataset, self.options.top_k)
    }

    /// Ranks every row of `dataset` against `query`.
    ///
    /// Results are sorted by score, highest first, with ties in row order.
    /// At most `top_k` results are returned and none with a score of zero or
    /// less. Fails if a searched column is missing or a row is ragged.
    pub fn search(&self, query: &str, dataset: &Dataset, top_k: usize) -> Result<Vec<SearchResult>> {
        let query_tokens = tokenize(query);
        if top_k == 0 || query_tokens.is_empty() || dataset.is_empty() {
            tracing::debug!(top_k, tokens = query_tokens.len(), "Nothing to search");
            return Ok(Vec::new());
        }
        let positions = SearchColumns::locate(dataset)?;

        let mut results = Vec::with_capacity(dataset.height());
        for row in dataset.rows() {
            let row = row?;
            let breakdown = self.score_tokens(&query_tokens, &positions.tokens(row));
            results.push(SearchResult {
                score: breakdown.total,
                entry_idx: row.index(),
            });
        }

        // Stable, so equal scores stay in row order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);
        results.retain(|result| result.score > 0.0);

        tracing::debug!(
            rows = dataset.height(),
            tokens = query_tokens.len(),
            hits = results.len(),
            "Scored dataset"
        );
        Ok(results)
    }

    /// Score components of row `index` for `query`.
    pub fn explain(&self, query: &str, dataset: &Dataset, index: usize) -> Result<ScoreBreakdown> {
        let positions = SearchColumns::locate(dataset)?;
        let row = dataset.row(index)?;
        Ok(self.score_tokens(&tokenize(query), &positions.tokens(row)))
    }

    /// Scores already-tokenized query terms against one row's fields.
    pub fn score_tokens(&self, query: &[String], fields: &FieldTokens) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        for word in query {
            let mut score = self.options.base_weight(word);
            let in_city = fields.city.contains(word);
            let in_state = fields.state.contains(word);
            let in_name = fields.name.contains(word);

            if in_city {
                self.record_field_match(&mut breakdown.city, score);
                score -= FIELD_DEDUCTION;
            }
            if in_state {
                self.record_field_match(&mut breakdown.state, score);
                score -= FIELD_DEDUCTION;
            }
            if in_name {
                breakdown.name += score;
            }
            if !in_city && !in_state && !in_name {
                breakdown.misses += 1;
            }
        }

        breakdown.bonus = if breakdown.name > 0.0 && breakdown.city > 0.0 && breakdown.state > 0.0
        {
            FULL_BONUS
        } else if breakdown.name > 0.0 && (breakdown.city != 0.0 || breakdown.state != 0.0) {
            PARTIAL_BONUS
        } else {
            0.0
        };
        breakdown.total = breakdown.name + breakdown.city + breakdown.state
            - MISS_PENALTY * f64::from(breakdown.misses)
            + breakdown.bonus;
        breakdown
    }

    fn record_field_match(&self, field: &mut f64, score: f64) {
        match self.options.field_matches {
            FieldMatchMode::LastMatch => *field = score,
            FieldMatchMode::Accumulate => *field += score,
        }
    }
}

/// Searches `dataset` with default scoring options.
pub fn search(query: &str, dataset: &Dataset, top_k: usize) -> Result<Vec<SearchResult>> {
    Searcher::default().search(query, dataset, top_k)
}
