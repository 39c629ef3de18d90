use crate::ephemeris::provider::{derive_positions, EphemerisProvider};
use crate::ephemeris::types::{Body, CelestialPosition, PositionSnapshot};
use crate::lunar::{in_via_combusta, is_void_of_course, lunar_phase, LunarPhase};
use serde::{Deserialize, Serialize};

/// Lunar conditions at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonReport {
    pub jd: f64,
    pub position: Option<CelestialPosition>,
    pub phase: Option<LunarPhase>,
    pub void_of_course: bool,
    pub via_combusta: bool,
}

impl MoonReport {
    pub fn from_snapshot(snapshot: &PositionSnapshot) -> Self {
        let moon = snapshot.get(Body::Moon);
        let phase = match (snapshot.get(Body::Sun), moon) {
            (Some(sun), Some(moon)) => Some(lunar_phase(sun, moon)),
            _ => None,
        };

        Self {
            jd: snapshot.jd,
            position: moon.copied(),
            phase,
            void_of_course: is_void_of_course(snapshot),
            via_combusta: moon.map(|m| in_via_combusta(m.lon)).unwrap_or(false),
        }
    }
}

pub fn moon_report<P: EphemerisProvider + ?Sized>(provider: &P, jd: f64) -> MoonReport {
    let snapshot = derive_positions(provider, jd, &Body::CLASSICAL);
    MoonReport::from_snapshot(&snapshot)
}
