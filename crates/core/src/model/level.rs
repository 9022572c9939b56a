use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("industry level must be 2, 3 or 4, got {0}")]
    OutOfRange(u8),

    #[error("invalid industry level key: {0:?}")]
    InvalidKey(String),
}

//
// ─── INDUSTRY LEVEL ────────────────────────────────────────────────────────────
//

/// Digital-maturity tier derived from the initial assessment.
///
/// Only tiers 2, 3 and 4 exist; anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IndustryLevel {
    Two,
    Three,
    Four,
}

impl IndustryLevel {
    pub const ALL: [IndustryLevel; 3] = [Self::Two, Self::Three, Self::Four];

    /// Numeric tier (2, 3 or 4).
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// The tier a respondent at this level works towards.
    ///
    /// `Four` is terminal: there is no "Industry 5.0" target.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Two => Some(Self::Three),
            Self::Three => Some(Self::Four),
            Self::Four => None,
        }
    }

    /// Human-facing name, e.g. `Industry 3.0`.
    #[must_use]
    pub fn display_name(self) -> String {
        format!("Industry {}.0", self.value())
    }

    /// Key of the detailed question set for this level, e.g. `industry3`.
    #[must_use]
    pub fn stage_key(self) -> &'static str {
        match self {
            Self::Two => "industry2",
            Self::Three => "industry3",
            Self::Four => "industry4",
        }
    }

    /// Parses a detailed-set key such as `industry2`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::InvalidKey` for anything but `industry2..=industry4`.
    pub fn from_stage_key(key: &str) -> Result<Self, LevelError> {
        Self::ALL
            .into_iter()
            .find(|level| level.stage_key() == key)
            .ok_or_else(|| LevelError::InvalidKey(key.to_string()))
    }

    /// Parses a recommendation-table key such as `"2"`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::InvalidKey` if the key is not a number and
    /// `LevelError::OutOfRange` if it is not 2, 3 or 4.
    pub fn from_table_key(key: &str) -> Result<Self, LevelError> {
        let value: u8 = key
            .trim()
            .parse()
            .map_err(|_| LevelError::InvalidKey(key.to_string()))?;
        Self::try_from(value)
    }
}

impl TryFrom<u8> for IndustryLevel {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(LevelError::OutOfRange(other)),
        }
    }
}

impl From<IndustryLevel> for u8 {
    fn from(level: IndustryLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for IndustryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
