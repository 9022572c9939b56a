mod controller;
mod progress;
mod state;
mod view;

#[cfg(test)]
pub(crate) mod test_support;

// Public API of the assessment subsystem.
pub use crate::error::AssessmentError;
pub use controller::AssessmentController;
pub use progress::StageProgress;
pub use state::{AnswerPolicy, AssessmentAction, AssessmentState};
pub use view::{ResultItem, ResultView};
