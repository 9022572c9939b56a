use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Answers, IndustryLevel};
use crate::scoring::{detailed_max_score, progress_percent};

/// Scored outcome of a completed assessment.
///
/// Built once when the detailed stage is submitted and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    level: IndustryLevel,
    detailed_scores: Answers,
    total_score: u64,
    max_score: u64,
    progress: f64,
    completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Score the detailed answers of a `question_count`-question set.
    #[must_use]
    pub fn from_detailed(
        level: IndustryLevel,
        detailed_scores: Answers,
        question_count: usize,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let total_score = detailed_scores.total();
        let max_score = detailed_max_score(question_count);
        Self {
            level,
            progress: progress_percent(total_score, max_score),
            detailed_scores,
            total_score,
            max_score,
            completed_at,
        }
    }

    #[must_use]
    pub fn level(&self) -> IndustryLevel {
        self.level
    }

    #[must_use]
    pub fn detailed_scores(&self) -> &Answers {
        &self.detailed_scores
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Percentage of the maximum detailed score reached.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
