#![forbid(unsafe_code)]

pub mod assessment;
pub mod content;
pub mod error;

pub use assessment_core::Clock;

pub use error::{AssessmentError, ContentError};

pub use assessment::{
    AnswerPolicy, AssessmentAction, AssessmentController, AssessmentState, ResultItem,
    ResultView, StageProgress,
};
pub use content::{ContentSource, builtin_catalog, load_catalog, parse_catalog};
