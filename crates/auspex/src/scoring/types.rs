use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASE_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Recommendation level, a fixed partition of the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Excellent,
    Good,
    Caution,
    Avoid,
}

impl Level {
    /// 80-100 excellent, 60-79 good, 40-59 caution, 0-39 avoid
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Level::Excellent,
            60..=79 => Level::Good,
            40..=59 => Level::Caution,
            _ => Level::Avoid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Excellent => "excellent",
            Level::Good => "good",
            Level::Caution => "caution",
            Level::Avoid => "avoid",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// One line of the explanation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub text: String,
    pub polarity: Polarity,
}

impl Factor {
    pub fn new(text: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            text: text.into(),
            polarity,
        }
    }
}

/// Score for a single instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScore {
    pub score: u8,
    pub level: Level,
    /// In rule evaluation order
    pub factors: Vec<Factor>,
}

/// Clamp a raw tally into 0-100
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}
