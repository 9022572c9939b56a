use std::sync::Arc;

use tracing::{debug, info, warn};

use assessment_core::model::{Answers, Catalog, IndustryLevel, QuestionSet, Stage};

use super::progress::StageProgress;
use super::state::{AnswerPolicy, AssessmentAction, AssessmentState};
use super::view::ResultView;
use crate::error::AssessmentError;
use crate::Clock;

/// Drives one assessment over a shared catalog.
///
/// Owns the single state value and swaps it for the reducer output on every
/// accepted action. Rejected actions leave the state as it was.
#[derive(Debug, Clone)]
pub struct AssessmentController {
    catalog: Arc<Catalog>,
    policy: AnswerPolicy,
    clock: Clock,
    state: AssessmentState,
}

impl AssessmentController {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            policy: AnswerPolicy::default(),
            clock: Clock::default_clock(),
            state: AssessmentState::new(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: AnswerPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        self.state.answers()
    }

    #[must_use]
    pub fn industry_level(&self) -> Option<IndustryLevel> {
        self.state.industry_level()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    #[must_use]
    pub fn detailed_scores(&self) -> &Answers {
        self.state.detailed_scores()
    }

    /// Select an option for a question of the current set.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` / `ScoreNotOffered` for
    /// selections the current set does not contain, and
    /// `AssessmentError::InvalidStage` in the result stage.
    pub fn record_answer(&mut self, question: usize, score: u32) -> Result<(), AssessmentError> {
        self.dispatch(AssessmentAction::Answer { question, score })
            .map(|_| ())
    }

    /// Submit the current stage and move to the next one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::IncompleteAnswers` when the answer policy is
    /// not met, and `AssessmentError::InvalidStage` in the result stage.
    pub fn advance(&mut self) -> Result<Stage, AssessmentError> {
        self.dispatch(AssessmentAction::Advance)
    }

    /// Start over from the initial stage.
    pub fn reset(&mut self) {
        // The reducer accepts a reset from every state.
        let _ = self.dispatch(AssessmentAction::Reset);
    }

    /// Apply any action and return the stage it leaves the assessment in.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's `AssessmentError`.
    pub fn dispatch(&mut self, action: AssessmentAction) -> Result<Stage, AssessmentError> {
        let from = self.state.stage();
        let next = self
            .state
            .apply(&self.catalog, self.policy, action, self.clock.now())
            .inspect_err(|err| {
                warn!(action = action.name(), stage = %from, error = %err, "assessment action rejected");
            })?;
        self.state = next;

        let to = self.state.stage();
        match action {
            AssessmentAction::Answer { question, score } => {
                debug!(stage = %to, question, score, "answer recorded");
            }
            AssessmentAction::Reset => info!(from = %from, "assessment reset"),
            _ if from != to => {
                info!(
                    from = %from,
                    to = %to,
                    level = ?self.state.industry_level().map(IndustryLevel::value),
                    progress = self.state.progress(),
                    "assessment stage changed"
                );
            }
            _ => {}
        }
        Ok(to)
    }

    /// Questions for the current stage; `None` once the result is shown.
    #[must_use]
    pub fn current_question_set(&self) -> Option<&QuestionSet> {
        self.state.current_question_set(&self.catalog)
    }

    #[must_use]
    pub fn stage_progress(&self) -> StageProgress {
        self.state.stage_progress(&self.catalog, self.policy)
    }

    /// Recommendations for the classified level.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the result stage.
    pub fn compute_recommendations(&self) -> Result<&[String], AssessmentError> {
        self.state.recommendations(&self.catalog)
    }

    /// Stored detailed progress percentage.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the result stage.
    pub fn progress_label(&self) -> Result<f64, AssessmentError> {
        self.state.progress_label()
    }

    /// Everything the result screen needs.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidStage` outside the result stage.
    pub fn result_view(&self) -> Result<ResultView, AssessmentError> {
        let result = self.state.result().ok_or(AssessmentError::InvalidStage {
            operation: "result_view",
            stage: self.state.stage(),
        })?;
        Ok(ResultView::from_result(&self.catalog, result))
    }
}
