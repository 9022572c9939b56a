use serde::Serialize;

use crate::model::IndustryLevel;

/// Canned next-step guidance per industry level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RecommendationSet {
    level2: Vec<String>,
    level3: Vec<String>,
    level4: Vec<String>,
}

impl RecommendationSet {
    #[must_use]
    pub fn new(level2: Vec<String>, level3: Vec<String>, level4: Vec<String>) -> Self {
        Self {
            level2,
            level3,
            level4,
        }
    }

    /// Guidance shown to respondents classified at `level`.
    #[must_use]
    pub fn for_level(&self, level: IndustryLevel) -> &[String] {
        match level {
            IndustryLevel::Two => &self.level2,
            IndustryLevel::Three => &self.level3,
            IndustryLevel::Four => &self.level4,
        }
    }
}
