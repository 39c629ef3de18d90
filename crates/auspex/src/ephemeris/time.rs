//! Calendar date to Julian Day conversion.

use chrono::{NaiveDate, NaiveDateTime};

/// Julian Day of the Unix epoch (1970-01-01 00:00 UT)
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian Day for a calendar date at a decimal hour (UT).
///
/// `julian_day(2000-01-01, 12.0)` is 2451545.0 (J2000).
pub fn julian_day(date: NaiveDate, hour: f64) -> f64 {
    let days = date
        .signed_duration_since(NaiveDate::default())
        .num_days() as f64;
    UNIX_EPOCH_JD + days + hour / 24.0
}

/// Julian Day for a naive UT timestamp
pub fn julian_day_from_datetime(dt: NaiveDateTime) -> f64 {
    let seconds = dt.and_utc().timestamp() as f64
        + f64::from(dt.and_utc().timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + seconds / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day(date, 12.0), 2451545.0);
    }

    #[test]
    fn test_unix_epoch_midnight() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(julian_day(date, 0.0), UNIX_EPOCH_JD);
    }

    #[test]
    fn test_datetime_matches_date_and_hour() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let dt = date.and_hms_opt(18, 0, 0).unwrap();
        assert!((julian_day_from_datetime(dt) - julian_day(date, 18.0)).abs() < 1e-9);
    }
}
