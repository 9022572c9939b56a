use chrono::{DateTime, Utc};

use assessment_core::model::{
    Answers, AssessmentResult, Catalog, IndustryLevel, QuestionSet, Stage,
};
use assessment_core::scoring::classify_level;

use super::progress::StageProgress;
use crate::error::AssessmentError;

static NO_ANSWERS: Answers = Answers::new();

//
// ─── POLICY ────────────────────────────────────────────────────────────────────
//

/// When the answers of a stage are complete enough to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// Every question in the current set must be answered.
    #[default]
    AllQuestions,
    /// A single answer is enough; unanswered questions simply score nothing.
    AtLeastOne,
}

impl AnswerPolicy {
    /// Number of answers needed to advance from a set of `set_len` questions.
    #[must_use]
    pub fn required(self, set_len: usize) -> usize {
        match self {
            Self::AllQuestions => set_len.max(1),
            Self::AtLeastOne => 1,
        }
    }
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Discrete user action fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentAction {
    /// Select the option scoring `score` for question `question` of the current set.
    Answer { question: usize, score: u32 },
    /// Submit the current stage.
    Advance,
    /// Drop everything and start over.
    Reset,
}

impl AssessmentAction {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Answer { .. } => "record_answer",
            Self::Advance => "advance",
            Self::Reset => "reset",
        }
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Complete state of one assessment.
///
/// Values are never mutated in place: [`AssessmentState::apply`] returns the
/// next state, leaving the receiver untouched when the action is rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssessmentState {
    stage: Stage,
    answers: Answers,
    industry_level: Option<IndustryLevel>,
    result: Option<AssessmentResult>,
}

impl AssessmentState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Answers recorded for the current stage's question set.
    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// `None` exactly while the stage is `Initial`.
    #[must_use]
    pub fn industry_level(&self) -> Option<IndustryLevel> {
        self.industry_level
    }

    /// Detailed progress percentage; `0.0` until the result stage.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.result.as_ref().map_or(0.0, AssessmentResult::progress)
    }

    /// Snapshot of the detailed answers; empty until the result stage.
    #[must_use]
    pub fn detailed_scores(&self) -> &Answers {
        self.result
            .as_ref()
            .map_or(&NO_ANSWERS, AssessmentResult::detailed_scores)
    }

    #[must_use]
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// The question set being answered; `None` in the result stage.
    #[must_use]
    pub fn current_question_set<'c>(&self, catalog: &'c Catalog) -> Option<&'c QuestionSet> {
        catalog.set_for_stage(self.stage)
    }

    /// Answer counts for the current stage.
    #[must_use]
    pub fn stage_progress(&self, catalog: &Catalog, policy: AnswerPolicy) -> StageProgress {
        let total = self.current_question_set(catalog).map_or(0, QuestionSet::len);
        let answered = self.answers.len();
        StageProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            can_advance: !self.stage.is_terminal() && answered >= policy.required(total),
        }
    }

    /// Recommendations for the classified level.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the result stage.
    pub fn recommendations<'c>(&self, catalog: &'c Catalog) -> Result<&'c [String], AssessmentError> {
        let result = self.require_result("compute_recommendations")?;
        Ok(catalog.recommendations().for_level(result.level()))
    }

    /// The progress percentage computed when the result stage was entered.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the result stage.
    pub fn progress_label(&self) -> Result<f64, AssessmentError> {
        self.require_result("progress_label")
            .map(AssessmentResult::progress)
    }

    /// Compute the state that follows `action`.
    ///
    /// `at` stamps the result when the detailed stage is submitted.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError` when the action is not valid for the current
    /// stage or answers.
    pub fn apply(
        &self,
        catalog: &Catalog,
        policy: AnswerPolicy,
        action: AssessmentAction,
        at: DateTime<Utc>,
    ) -> Result<Self, AssessmentError> {
        match action {
            AssessmentAction::Answer { question, score } => {
                self.with_answer(catalog, question, score)
            }
            AssessmentAction::Advance => self.advanced(catalog, policy, at),
            AssessmentAction::Reset => Ok(Self::default()),
        }
    }

    fn with_answer(
        &self,
        catalog: &Catalog,
        index: usize,
        score: u32,
    ) -> Result<Self, AssessmentError> {
        let set = self.require_question_set(catalog, "record_answer")?;
        let question = set.get(index).ok_or(AssessmentError::UnknownQuestion {
            index,
            len: set.len(),
        })?;
        if !question.offers(score) {
            return Err(AssessmentError::ScoreNotOffered { index, score });
        }

        let mut next = self.clone();
        next.answers.record(index, score);
        Ok(next)
    }

    fn advanced(
        &self,
        catalog: &Catalog,
        policy: AnswerPolicy,
        at: DateTime<Utc>,
    ) -> Result<Self, AssessmentError> {
        let set = self.require_question_set(catalog, "advance")?;
        let required = policy.required(set.len());
        let incomplete = AssessmentError::IncompleteAnswers {
            answered: self.answers.len(),
            required,
        };
        if self.answers.len() < required {
            return Err(incomplete);
        }

        match self.stage {
            Stage::Initial => {
                let level = classify_level(&self.answers).ok_or(incomplete)?;
                Ok(Self {
                    stage: Stage::Detailed(level),
                    answers: Answers::new(),
                    industry_level: Some(level),
                    result: None,
                })
            }
            Stage::Detailed(level) => {
                let result =
                    AssessmentResult::from_detailed(level, self.answers.clone(), set.len(), at);
                Ok(Self {
                    stage: Stage::Result,
                    answers: Answers::new(),
                    industry_level: Some(level),
                    result: Some(result),
                })
            }
            Stage::Result => Err(self.invalid_stage("advance")),
        }
    }

    fn require_question_set<'c>(
        &self,
        catalog: &'c Catalog,
        operation: &'static str,
    ) -> Result<&'c QuestionSet, AssessmentError> {
        self.current_question_set(catalog)
            .ok_or_else(|| self.invalid_stage(operation))
    }

    fn require_result(&self, operation: &'static str) -> Result<&AssessmentResult, AssessmentError> {
        match (self.stage, self.result.as_ref()) {
            (Stage::Result, Some(result)) => Ok(result),
            _ => Err(self.invalid_stage(operation)),
        }
    }

    fn invalid_stage(&self, operation: &'static str) -> AssessmentError {
        AssessmentError::InvalidStage {
            operation,
            stage: self.stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::test_support::small_catalog;
    use assessment_core::time::fixed_now;

    fn apply(state: &AssessmentState, action: AssessmentAction) -> Result<AssessmentState, AssessmentError> {
        state.apply(&small_catalog(), AnswerPolicy::AllQuestions, action, fixed_now())
    }

    fn answer(question: usize, score: u32) -> AssessmentAction {
        AssessmentAction::Answer { question, score }
    }

    #[test]
    fn defaults_match_fresh_assessment() {
        let state = AssessmentState::new();
        assert_eq!(state.stage(), Stage::Initial);
        assert!(state.answers().is_empty());
        assert_eq!(state.industry_level(), None);
        assert_eq!(state.progress(), 0.0);
        assert!(state.detailed_scores().is_empty());
    }

    #[test]
    fn rejected_action_leaves_state_untouched() {
        let state = apply(&AssessmentState::new(), answer(0, 3)).unwrap();
        let before = state.clone();

        assert_eq!(
            apply(&state, answer(7, 3)).unwrap_err(),
            AssessmentError::UnknownQuestion { index: 7, len: 3 }
        );
        assert_eq!(
            apply(&state, answer(1, 9)).unwrap_err(),
            AssessmentError::ScoreNotOffered { index: 1, score: 9 }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn initial_average_picks_level_and_clears_answers() {
        let mut state = AssessmentState::new();
        for action in [answer(0, 2), answer(1, 3), answer(2, 4)] {
            state = apply(&state, action).unwrap();
        }

        let next = apply(&state, AssessmentAction::Advance).unwrap();
        assert_eq!(next.stage(), Stage::Detailed(IndustryLevel::Three));
        assert_eq!(next.industry_level(), Some(IndustryLevel::Three));
        assert!(next.answers().is_empty());
    }

    #[test]
    fn advance_without_answers_is_rejected() {
        let err = apply(&AssessmentState::new(), AssessmentAction::Advance).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::IncompleteAnswers {
                answered: 0,
                required: 3
            }
        );
        assert!(err.is_user_facing());

        let lenient = AssessmentState::new()
            .apply(
                &small_catalog(),
                AnswerPolicy::AtLeastOne,
                AssessmentAction::Advance,
                fixed_now(),
            )
            .unwrap_err();
        assert_eq!(
            lenient,
            AssessmentError::IncompleteAnswers {
                answered: 0,
                required: 1
            }
        );
    }

    #[test]
    fn partial_answers_follow_policy() {
        let state = apply(&AssessmentState::new(), answer(0, 4)).unwrap();

        assert!(matches!(
            apply(&state, AssessmentAction::Advance),
            Err(AssessmentError::IncompleteAnswers { answered: 1, required: 3 })
        ));

        let next = state
            .apply(
                &small_catalog(),
                AnswerPolicy::AtLeastOne,
                AssessmentAction::Advance,
                fixed_now(),
            )
            .unwrap();
        assert_eq!(next.stage(), Stage::Detailed(IndustryLevel::Four));
    }

    #[test]
    fn detailed_submit_scores_progress() {
        let mut state = AssessmentState::new();
        for action in [answer(0, 2), answer(1, 2), answer(2, 2), AssessmentAction::Advance] {
            state = apply(&state, action).unwrap();
        }
        assert_eq!(state.stage(), Stage::Detailed(IndustryLevel::Two));

        for action in [answer(0, 0), answer(1, 1), answer(2, 2), AssessmentAction::Advance] {
            state = apply(&state, action).unwrap();
        }

        assert_eq!(state.stage(), Stage::Result);
        assert_eq!(state.progress(), 50.0);
        assert_eq!(state.progress_label().unwrap(), 50.0);
        assert_eq!(state.detailed_scores().get(2), Some(2));
        assert!(state.answers().is_empty());
        assert_eq!(state.industry_level(), Some(IndustryLevel::Two));
        assert_eq!(
            state.recommendations(&small_catalog()).unwrap(),
            ["Automate".to_string()]
        );
        assert_eq!(state.result().map(AssessmentResult::completed_at), Some(fixed_now()));
    }

    #[test]
    fn result_stage_rejects_further_input() {
        let mut state = AssessmentState::new();
        for action in [answer(0, 4), answer(1, 4), answer(2, 4), AssessmentAction::Advance] {
            state = apply(&state, action).unwrap();
        }
        assert_eq!(state.stage(), Stage::Detailed(IndustryLevel::Four));
        for action in [
            answer(0, 2),
            answer(1, 2),
            answer(2, 2),
            answer(3, 2),
            AssessmentAction::Advance,
        ] {
            state = apply(&state, action).unwrap();
        }
        assert_eq!(state.progress(), 100.0);

        assert_eq!(
            apply(&state, AssessmentAction::Advance).unwrap_err(),
            AssessmentError::InvalidStage {
                operation: "advance",
                stage: Stage::Result
            }
        );
        assert!(matches!(
            apply(&state, answer(0, 0)),
            Err(AssessmentError::InvalidStage { operation: "record_answer", .. })
        ));
        assert!(state.current_question_set(&small_catalog()).is_none());
    }

    #[test]
    fn queries_outside_result_are_invalid() {
        let state = AssessmentState::new();
        assert_eq!(
            state.progress_label().unwrap_err(),
            AssessmentError::InvalidStage {
                operation: "progress_label",
                stage: Stage::Initial
            }
        );
        assert!(matches!(
            state.recommendations(&small_catalog()),
            Err(AssessmentError::InvalidStage {
                operation: "compute_recommendations",
                ..
            })
        ));
    }

    #[test]
    fn reset_restores_defaults() {
        let state = apply(&AssessmentState::new(), answer(0, 2)).unwrap();
        let reset = apply(&state, AssessmentAction::Reset).unwrap();
        assert_eq!(reset, AssessmentState::default());
    }

    #[test]
    fn stage_progress_counts_answers() {
        let state = apply(&AssessmentState::new(), answer(1, 3)).unwrap();
        let progress = state.stage_progress(&small_catalog(), AnswerPolicy::AllQuestions);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.can_advance);
        assert!(
            state
                .stage_progress(&small_catalog(), AnswerPolicy::AtLeastOne)
                .can_advance
        );
    }
}
