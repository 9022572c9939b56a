use chrono::{DateTime, Utc};

use assessment_core::model::{AssessmentResult, Catalog, IndustryLevel};
use assessment_core::scoring::DETAILED_MAX_OPTION_SCORE;

/// Score of one detailed question in the result breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub prompt: String,
    /// `None` when the question was skipped under a lenient answer policy.
    pub score: Option<u32>,
    pub max_score: u32,
}

impl ResultItem {
    /// Share of the maximum score, in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let score = self.score.unwrap_or(0);
        (f64::from(score) / f64::from(self.max_score)) * 100.0
    }
}

/// Presentation-agnostic result of a completed assessment.
///
/// No pre-formatted strings: the front-end decides how to phrase levels and
/// round percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub level: IndustryLevel,
    /// Target tier; `None` for the top tier.
    pub next_level: Option<IndustryLevel>,
    pub progress: f64,
    pub total_score: u64,
    pub max_score: u64,
    pub items: Vec<ResultItem>,
    pub recommendations: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

impl ResultView {
    #[must_use]
    pub fn from_result(catalog: &Catalog, result: &AssessmentResult) -> Self {
        let level = result.level();
        let items = catalog
            .detailed(level)
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| ResultItem {
                prompt: question.prompt().to_string(),
                score: result.detailed_scores().get(index),
                max_score: DETAILED_MAX_OPTION_SCORE,
            })
            .collect();

        Self {
            level,
            next_level: level.next(),
            progress: result.progress(),
            total_score: result.total_score(),
            max_score: result.max_score(),
            items,
            recommendations: catalog.recommendations().for_level(level).to_vec(),
            completed_at: result.completed_at(),
        }
    }
}
