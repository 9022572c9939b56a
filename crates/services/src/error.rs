//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use assessment_core::model::{CatalogError, Stage};

/// Errors emitted by the assessment state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("please answer all questions ({answered} of {required} answered)")]
    IncompleteAnswers { answered: usize, required: usize },
    #[error("{operation} is not available in stage {stage}")]
    InvalidStage {
        operation: &'static str,
        stage: Stage,
    },
    #[error("question {index} does not exist (set has {len} questions)")]
    UnknownQuestion { index: usize, len: usize },
    #[error("score {score} is not an option of question {index}")]
    ScoreNotOffered { index: usize, score: u32 },
}

impl AssessmentError {
    /// Whether the respondent can fix this by answering more questions.
    ///
    /// Every other variant signals a caller bug.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::IncompleteAnswers { .. })
    }
}

/// Errors emitted while loading survey content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
