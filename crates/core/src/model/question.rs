use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option {option} has an empty label")]
    EmptyOptionLabel { option: usize },

    #[error("score {score} is offered by more than one option")]
    DuplicateScore { score: u32 },
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer and the score it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub score: u32,
}

impl AnswerOption {
    #[must_use]
    pub fn new(label: impl Into<String>, score: u32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in content files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl QuestionDraft {
    /// Trim and validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or an option label is blank, no
    /// options are given, or two options share a score.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut options = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.into_iter().enumerate() {
            let label = option.label.trim().to_string();
            if label.is_empty() {
                return Err(QuestionError::EmptyOptionLabel { option: index });
            }
            if options
                .iter()
                .any(|existing: &AnswerOption| existing.score == option.score)
            {
                return Err(QuestionError::DuplicateScore {
                    score: option.score,
                });
            }
            options.push(AnswerOption::new(label, option.score));
        }

        Ok(Question { prompt, options })
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Build a question from a prompt and options.
    ///
    /// # Errors
    ///
    /// Same rules as [`QuestionDraft::validate`].
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            prompt: prompt.into(),
            options,
        }
        .validate()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Whether `score` is the score of one of this question's options.
    #[must_use]
    pub fn offers(&self, score: u32) -> bool {
        self.options.iter().any(|option| option.score == score)
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// Unvalidated named question sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionSetDraft {
    pub name: String,
    pub questions: Vec<QuestionDraft>,
}

/// Named, ordered, non-empty sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    name: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub(crate) fn from_validated(name: String, questions: Vec<Question>) -> Self {
        Self { name, questions }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
