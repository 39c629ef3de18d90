use crate::ephemeris::EphemerisError;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced to callers of the election API
#[derive(Error, Debug)]
pub enum ElectionError {
    #[error("Invalid {field} date '{input}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        field: &'static str,
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
