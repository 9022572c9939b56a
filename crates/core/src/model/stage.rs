use std::fmt;

use crate::model::IndustryLevel;

/// Phase of an assessment.
///
/// Stages only move forward (`Initial` → `Detailed(level)` → `Result`); the
/// single way back is a reset to `Initial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Initial,
    Detailed(IndustryLevel),
    Result,
}

impl Stage {
    /// Stable key: `initial`, `industry2`..`industry4`, `result`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Detailed(level) => level.stage_key(),
            Self::Result => "result",
        }
    }

    /// Position in the forward ordering of stages.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Initial => 0,
            Self::Detailed(_) => 1,
            Self::Result => 2,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Result)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
