//! Scoring rules: initial-average thresholds and detailed progress.

use crate::model::{Answers, IndustryLevel};

/// Highest score a single detailed-assessment option may award.
pub const DETAILED_MAX_OPTION_SCORE: u32 = 2;

/// Maps the initial answers to an industry level.
///
/// `avg <= 2.5` → 2, `avg <= 3.5` → 3, otherwise 4. The comparison runs on
/// `2 * sum` against `5 * count` / `7 * count` so the boundaries are exact.
/// Returns `None` for an empty answer set.
#[must_use]
pub fn classify_level(answers: &Answers) -> Option<IndustryLevel> {
    if answers.is_empty() {
        return None;
    }
    let count = answers.len() as u64;
    let twice_sum = answers.total().saturating_mul(2);

    let level = if twice_sum <= count.saturating_mul(5) {
        IndustryLevel::Two
    } else if twice_sum <= count.saturating_mul(7) {
        IndustryLevel::Three
    } else {
        IndustryLevel::Four
    };
    Some(level)
}

/// Maximum achievable detailed score for a set of `question_count` questions.
#[must_use]
pub fn detailed_max_score(question_count: usize) -> u64 {
    (question_count as u64).saturating_mul(u64::from(DETAILED_MAX_OPTION_SCORE))
}

/// Percentage of `max_score` reached by `total_score`.
///
/// A zero maximum yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(total_score: u64, max_score: u64) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    (total_score as f64 / max_score as f64) * 100.0
}
