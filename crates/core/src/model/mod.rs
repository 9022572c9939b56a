mod answers;
mod catalog;
mod level;
mod question;
mod recommendations;
mod result;
mod stage;

pub use answers::Answers;
pub use catalog::{Catalog, CatalogDraft, CatalogError};
pub use level::{IndustryLevel, LevelError};
pub use question::{AnswerOption, Question, QuestionDraft, QuestionError, QuestionSet, QuestionSetDraft};
pub use recommendations::RecommendationSet;
pub use result::AssessmentResult;
pub use stage::Stage;
