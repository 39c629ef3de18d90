use crate::election::project::ProjectType;
use crate::election::report::{ElectionReport, ScoredDay, RULES_APPLIED};
use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::time::julian_day;
use crate::ephemeris::types::GeoLocation;
use crate::error::ElectionError;
use crate::scoring::ScoringEngine;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Limits and timing for a range scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    /// Longer windows are cut to start + this many days
    pub max_span_days: u32,
    /// How many days the report keeps
    pub top_n: usize,
    /// UT hour at which each day is scored
    pub reference_hour: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_span_days: 60,
            top_n: 10,
            reference_hour: 12.0,
        }
    }
}

/// Raw request as it arrives from a front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub name: String,
    pub project_type: String,
    /// YYYY-MM-DD
    pub start: String,
    /// YYYY-MM-DD
    pub end: String,
    #[serde(default)]
    pub location: GeoLocation,
}

pub fn parse_date(field: &'static str, input: &str) -> Result<NaiveDate, ElectionError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        ElectionError::InvalidDate {
            field,
            input: input.to_string(),
            source,
        }
    })
}

/// Scores every day of a window and keeps the best ones
pub struct RangeScanner<P> {
    engine: ScoringEngine<P>,
    settings: ScanSettings,
}

impl<P: EphemerisProvider> RangeScanner<P> {
    pub fn new(engine: ScoringEngine<P>, settings: ScanSettings) -> Self {
        Self { engine, settings }
    }

    pub fn engine(&self) -> &ScoringEngine<P> {
        &self.engine
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Validate a window and cut it to the span limit
    pub fn clamp_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(NaiveDate, NaiveDate), ElectionError> {
        if end < start {
            return Err(ElectionError::EndBeforeStart { start, end });
        }

        let limit = start
            .checked_add_days(Days::new(u64::from(self.settings.max_span_days)))
            .unwrap_or(NaiveDate::MAX);
        if end > limit {
            log::info!(
                "Window {}..{} exceeds {} days, scanning {}..{}",
                start,
                end,
                self.settings.max_span_days,
                start,
                limit
            );
            return Ok((start, limit));
        }

        Ok((start, end))
    }

    /// Score one calendar day at the reference hour
    pub fn score_day(&self, date: NaiveDate, project: &ProjectType) -> ScoredDay {
        let jd = julian_day(date, self.settings.reference_hour);
        ScoredDay::new(date, self.engine.score_instant(jd, project))
    }

    /// Every day of an already clamped window, in date order
    fn score_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        project: &ProjectType,
    ) -> Vec<ScoredDay> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| self.score_day(date, project))
            .collect()
    }

    /// Best days of the window, highest score first.
    ///
    /// Ties keep ascending date order. The location is not used by
    /// the current rules.
    pub fn scan_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        project: &ProjectType,
        location: &GeoLocation,
    ) -> Result<Vec<ScoredDay>, ElectionError> {
        let (start, end) = self.clamp_window(start, end)?;
        log::debug!(
            "Scanning {}..{} for '{}' at ({}, {})",
            start,
            end,
            project.key,
            location.lat,
            location.lon
        );
        Ok(self.rank(self.score_window(start, end, project)))
    }

    fn rank(&self, mut days: Vec<ScoredDay>) -> Vec<ScoredDay> {
        days.sort_by(|a, b| b.score.cmp(&a.score));
        days.truncate(self.settings.top_n);
        days
    }

    /// Parse, scan and assemble a full report
    pub fn run(&self, request: &ScanRequest) -> Result<ElectionReport, ElectionError> {
        let start = parse_date("start", &request.start)?;
        let end = parse_date("end", &request.end)?;
        let (start, end) = self.clamp_window(start, end)?;
        let project = ProjectType::lookup(&request.project_type);

        let scored = self.score_window(start, end, project);
        let days_scanned = scored.len();
        let days = self.rank(scored);

        log::info!(
            "Scanned {} days for '{}' ({}), best score {}",
            days_scanned,
            request.name,
            project.label,
            days.first().map(|d| d.score).unwrap_or_default()
        );

        Ok(ElectionReport {
            name: request.name.clone(),
            project_type: request.project_type.clone(),
            project_label: project.label.to_string(),
            start,
            end,
            days_scanned,
            days,
            rules_applied: RULES_APPLIED.iter().map(|r| r.to_string()).collect(),
        })
    }
}
