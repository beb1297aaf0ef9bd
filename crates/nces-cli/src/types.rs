use serde::Serialize;

use nces_data::{Dataset, columns};
use nces_search::{ScoreBreakdown, SearchResult};
use nces_stats::SurveyStats;

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub elapsed_secs: f64,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub entry_idx: usize,
    pub score: f64,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl SearchHit {
    /// Resolves a ranked result back to the school's display fields.
    pub fn from_result(
        rank: usize,
        result: SearchResult,
        dataset: &Dataset,
    ) -> nces_data::Result<Self> {
        let row = dataset.row(result.entry_idx)?;
        let field = |name: &str| row.get(name).unwrap_or_default().to_string();
        Ok(Self {
            rank,
            entry_idx: result.entry_idx,
            score: result.score,
            name: field(columns::SCHOOL_NAME),
            city: field(columns::CITY),
            state: field(columns::STATE),
            breakdown: None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub elapsed_secs: f64,
    #[serde(flatten)]
    pub stats: SurveyStats,
}
