use crate::western::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl Default for GeoLocation {
    /// Lima, Peru
    fn default() -> Self {
        Self {
            lat: -12.0464,
            lon: -77.0428,
        }
    }
}

/// Celestial bodies the engine can ask the ephemeris about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// The seven bodies the scoring rules look at
    pub const CLASSICAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the ephemeris hands back for one body at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees
    pub lon: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

/// Planetary position decomposed into zodiac terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub lon: f64,
    pub sign: ZodiacSign,
    /// Degree within the sign (0-30)
    pub degree: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
    /// Whether the planet is retrograde
    pub retrograde: bool,
}

impl CelestialPosition {
    pub fn from_raw(body: Body, raw: RawPosition) -> Self {
        let lon = raw.lon.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        let lon = if lon >= 360.0 { 0.0 } else { lon };
        Self {
            body,
            lon,
            sign: ZodiacSign::from_longitude(lon),
            degree: lon % 30.0,
            speed_lon: raw.speed_lon,
            retrograde: raw.speed_lon < 0.0,
        }
    }

    pub fn sign_index(&self) -> u8 {
        self.sign.index()
    }
}

/// Positions of several bodies at a single instant.
///
/// A body that the ephemeris could not resolve maps to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub jd: f64,
    pub positions: BTreeMap<Body, Option<CelestialPosition>>,
}

impl PositionSnapshot {
    pub fn get(&self, body: Body) -> Option<&CelestialPosition> {
        self.positions.get(&body).and_then(Option::as_ref)
    }

    pub fn unavailable(&self) -> impl Iterator<Item = Body> + '_ {
        self.positions
            .iter()
            .filter(|(_, pos)| pos.is_none())
            .map(|(body, _)| *body)
    }
}
