//! Planetary hours.
//!
//! Twelve fixed daytime hours from 06:00 to 18:00. The first hour is
//! ruled by the planet of the weekday and the rest follow the Chaldean
//! order. This does not use real sunrise or sunset.

use crate::ephemeris::types::Body;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Chaldean order, slowest to fastest
pub const CHALDEAN_ORDER: [Body; 7] = [
    Body::Saturn,
    Body::Jupiter,
    Body::Mars,
    Body::Sun,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
];

pub const FIRST_HOUR: u32 = 6;
pub const DAYTIME_HOURS: u32 = 12;
pub const MAX_BEST_HOURS: usize = 3;

pub const CAUTION_HOURS_NOTE: &str = "⚠ If urgent, avoid the hours of Mars and Saturn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryHour {
    /// "HH:00"
    pub start: String,
    pub end: String,
    pub ruler: Body,
    pub favorable: bool,
}

impl PlanetaryHour {
    pub fn label(&self) -> String {
        format!("{} - {} (Hour of {})", self.start, self.end, self.ruler)
    }
}

pub fn day_ruler(weekday: Weekday) -> Body {
    match weekday {
        Weekday::Mon => Body::Moon,
        Weekday::Tue => Body::Mars,
        Weekday::Wed => Body::Mercury,
        Weekday::Thu => Body::Jupiter,
        Weekday::Fri => Body::Venus,
        Weekday::Sat => Body::Saturn,
        Weekday::Sun => Body::Sun,
    }
}

/// Jupiter, Venus and the Sun
pub fn is_favorable_ruler(body: Body) -> bool {
    matches!(body, Body::Jupiter | Body::Venus | Body::Sun)
}

pub fn planetary_hours(date: NaiveDate) -> Vec<PlanetaryHour> {
    let ruler = day_ruler(date.weekday());
    let start_idx = CHALDEAN_ORDER
        .iter()
        .position(|&b| b == ruler)
        .unwrap_or_default();

    (0..DAYTIME_HOURS)
        .map(|i| {
            let ruler = CHALDEAN_ORDER[(start_idx + i as usize) % CHALDEAN_ORDER.len()];
            let hour = FIRST_HOUR + i;
            PlanetaryHour {
                start: format!("{:02}:00", hour),
                end: format!("{:02}:00", hour + 1),
                ruler,
                favorable: is_favorable_ruler(ruler),
            }
        })
        .collect()
}

/// Up to three favorable hour labels for the day
pub fn best_hours(date: NaiveDate) -> Vec<String> {
    planetary_hours(date)
        .iter()
        .filter(|h| h.favorable)
        .take(MAX_BEST_HOURS)
        .map(PlanetaryHour::label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_ruler_is_in_chaldean_order() {
        for wd in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(CHALDEAN_ORDER.contains(&day_ruler(wd)));
        }
    }

    #[test]
    fn test_first_hour_belongs_to_day_ruler() {
        // 2026-10-22 is a Thursday
        let date = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
        let hours = planetary_hours(date);
        assert_eq!(hours.len(), 12);
        assert_eq!(hours[0].ruler, Body::Jupiter);
        assert_eq!(hours[0].start, "06:00");
        assert_eq!(hours[11].end, "18:00");
    }
}
