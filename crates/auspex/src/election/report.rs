use crate::hours::{best_hours, CAUTION_HOURS_NOTE};
use crate::scoring::{DayScore, Factor, Level};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Summaries of the rules the engine applies, for display
pub const RULES_APPLIED: [&str; 8] = [
    "✅ Waxing Moon: favors growth and progress",
    "✅ Mercury direct: clear communication and contracts",
    "✅ Jupiter or Venus well aspected to the Moon: favors business",
    "✅ Moon in Taurus, Cancer, Virgo, Capricorn or Pisces: favors commerce",
    "❌ Avoid a void-of-course Moon: nothing comes of the matter",
    "❌ Avoid the Via Combusta, 15° Libra to 15° Scorpio",
    "❌ Avoid Mercury retrograde: troubled contracts",
    "❌ Avoid Mars or Saturn afflicting the Moon: conflict and delay",
];

/// A scanned calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDay {
    pub date: NaiveDate,
    pub day: u32,
    pub weekday: String,
    /// "October 2026"
    pub month: String,
    pub score: u8,
    pub level: Level,
    pub factors: Vec<Factor>,
    pub best_hours: Vec<String>,
}

impl ScoredDay {
    pub fn new(date: NaiveDate, result: DayScore) -> Self {
        let best_hours = recommended_hours(date, result.level);
        Self {
            date,
            day: date.day(),
            weekday: date.format("%A").to_string(),
            month: date.format("%B %Y").to_string(),
            score: result.score,
            level: result.level,
            factors: result.factors,
            best_hours,
        }
    }
}

/// Best hours for a day after the level override.
///
/// Avoid days get none; caution days get a single warning instead.
pub fn recommended_hours(date: NaiveDate, level: Level) -> Vec<String> {
    match level {
        Level::Avoid => Vec::new(),
        Level::Caution => vec![CAUTION_HOURS_NOTE.to_string()],
        Level::Good | Level::Excellent => best_hours(date),
    }
}

/// Outcome of a date-range scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionReport {
    pub name: String,
    pub project_type: String,
    pub project_label: String,
    pub start: NaiveDate,
    /// End date after the span limit was applied
    pub end: NaiveDate,
    pub days_scanned: usize,
    /// Best days, highest score first
    pub days: Vec<ScoredDay>,
    pub rules_applied: Vec<String>,
}
