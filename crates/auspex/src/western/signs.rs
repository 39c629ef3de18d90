//! Zodiac signs for Western astrology.
//!
//! Each sign spans 30° of ecliptic longitude, starting with Aries at 0°.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Moon signs that favor buying, selling and commerce
pub const FAVORABLE_MOON_SIGNS: [ZodiacSign; 5] = [
    ZodiacSign::Taurus,
    ZodiacSign::Cancer,
    ZodiacSign::Virgo,
    ZodiacSign::Capricorn,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing a longitude; any finite value is accepted
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = longitude.rem_euclid(360.0);
        let idx = ((normalized / 30.0).floor() as usize) % 12;
        Self::ALL[idx]
    }

    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn is_favorable_for_commerce(self) -> bool {
        FAVORABLE_MOON_SIGNS.contains(&self)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(210.0), ZodiacSign::Scorpio);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
    }

    #[test]
    fn test_index_round_trip() {
        for sign in ZodiacSign::ALL {
            assert_eq!(ZodiacSign::from_index(sign.index()), sign);
        }
    }

    #[test]
    fn test_favorable_set() {
        let favorable: Vec<_> = ZodiacSign::ALL
            .into_iter()
            .filter(|s| s.is_favorable_for_commerce())
            .collect();
        assert_eq!(favorable, FAVORABLE_MOON_SIGNS.to_vec());
        assert!(!ZodiacSign::Scorpio.is_favorable_for_commerce());
    }
}
