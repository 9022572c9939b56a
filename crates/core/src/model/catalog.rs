use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    IndustryLevel, LevelError, Question, QuestionError, QuestionSet, QuestionSetDraft,
    RecommendationSet, Stage,
};
use crate::scoring::DETAILED_MAX_OPTION_SCORE;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question set {set:?} has no questions")]
    EmptySet { set: String },

    #[error("question {index} in set {set:?}: {source}")]
    Question {
        set: String,
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question {index} in set {set:?} offers score {score}, detailed scores must be 0..={max}")]
    DetailedScoreOutOfRange {
        set: String,
        index: usize,
        score: u32,
        max: u32,
    },

    #[error("no detailed question set for industry level {0}")]
    MissingDetailedSet(IndustryLevel),

    #[error("no recommendations for industry level {0}")]
    MissingRecommendations(IndustryLevel),

    #[error(transparent)]
    Level(#[from] LevelError),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Catalog content as read from a content file, before validation.
///
/// `detailed` is keyed by stage key (`industry2`..`industry4`) and
/// `recommendations` by level number (`"2"`..`"4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogDraft {
    pub initial: QuestionSetDraft,
    pub detailed: BTreeMap<String, QuestionSetDraft>,
    pub recommendations: BTreeMap<String, Vec<String>>,
}

impl CatalogDraft {
    /// Validate every set and resolve the level-keyed tables.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a set is empty, a question is malformed, a
    /// detailed option scores above the per-question maximum, a key does not
    /// name a known level, or a level is missing a set or recommendations.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        let initial = validate_set(self.initial, None)?;

        let mut detailed = BTreeMap::new();
        for (key, draft) in self.detailed {
            let level = IndustryLevel::from_stage_key(&key)?;
            detailed.insert(level, validate_set(draft, Some(DETAILED_MAX_OPTION_SCORE))?);
        }

        let mut recommendations = BTreeMap::new();
        for (key, items) in self.recommendations {
            let level = IndustryLevel::from_table_key(&key)?;
            let items: Vec<String> = items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
            recommendations.insert(level, items);
        }

        let mut take_set = |level: IndustryLevel| {
            detailed
                .remove(&level)
                .ok_or(CatalogError::MissingDetailedSet(level))
        };
        let industry2 = take_set(IndustryLevel::Two)?;
        let industry3 = take_set(IndustryLevel::Three)?;
        let industry4 = take_set(IndustryLevel::Four)?;

        let mut take_recs = |level: IndustryLevel| {
            recommendations
                .remove(&level)
                .ok_or(CatalogError::MissingRecommendations(level))
        };
        let recommendations = RecommendationSet::new(
            take_recs(IndustryLevel::Two)?,
            take_recs(IndustryLevel::Three)?,
            take_recs(IndustryLevel::Four)?,
        );

        Ok(Catalog {
            initial,
            industry2,
            industry3,
            industry4,
            recommendations,
        })
    }
}

fn validate_set(
    draft: QuestionSetDraft,
    max_option_score: Option<u32>,
) -> Result<QuestionSet, CatalogError> {
    let name = draft.name.trim().to_string();
    if draft.questions.is_empty() {
        return Err(CatalogError::EmptySet { set: name });
    }

    let mut questions: Vec<Question> = Vec::with_capacity(draft.questions.len());
    for (index, question) in draft.questions.into_iter().enumerate() {
        let question = question.validate().map_err(|source| CatalogError::Question {
            set: name.clone(),
            index,
            source,
        })?;
        if let Some(max) = max_option_score {
            if let Some(option) = question.options().iter().find(|option| option.score > max) {
                return Err(CatalogError::DetailedScoreOutOfRange {
                    set: name,
                    index,
                    score: option.score,
                    max,
                });
            }
        }
        questions.push(question);
    }

    Ok(QuestionSet::from_validated(name, questions))
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Validated, immutable survey content: the initial set, one detailed set per
/// industry level, and the recommendation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    initial: QuestionSet,
    industry2: QuestionSet,
    industry3: QuestionSet,
    industry4: QuestionSet,
    recommendations: RecommendationSet,
}

impl Catalog {
    #[must_use]
    pub fn initial(&self) -> &QuestionSet {
        &self.initial
    }

    #[must_use]
    pub fn detailed(&self, level: IndustryLevel) -> &QuestionSet {
        match level {
            IndustryLevel::Two => &self.industry2,
            IndustryLevel::Three => &self.industry3,
            IndustryLevel::Four => &self.industry4,
        }
    }

    /// Question set answered during `stage`; `None` for the result stage.
    #[must_use]
    pub fn set_for_stage(&self, stage: Stage) -> Option<&QuestionSet> {
        match stage {
            Stage::Initial => Some(&self.initial),
            Stage::Detailed(level) => Some(self.detailed(level)),
            Stage::Result => None,
        }
    }

    #[must_use]
    pub fn recommendations(&self) -> &RecommendationSet {
        &self.recommendations
    }
}
