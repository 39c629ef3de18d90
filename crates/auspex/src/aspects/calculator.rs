use crate::aspects::types::{Aspect, AspectKind, OrbTable};
use crate::ephemeris::types::CelestialPosition;

/// Orb under which an aspect is flagged as exact
pub const EXACT_ORB: f64 = 1.0;

/// Shorter-arc separation between two longitudes, always in [0, 180]
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).rem_euclid(360.0);
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    orbs: OrbTable,
}

impl AspectCalculator {
    /// Create a new aspect calculator with the standard orbs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbs(orbs: OrbTable) -> Self {
        Self { orbs }
    }

    pub fn orbs(&self) -> &OrbTable {
        &self.orbs
    }

    /// Aspect between two positions at the same instant
    pub fn between(&self, a: &CelestialPosition, b: &CelestialPosition) -> Option<Aspect> {
        self.calculate_aspect(a.lon, b.lon)
    }

    /// Aspect between two optional positions; `None` if either is missing
    pub fn between_opt(
        &self,
        a: Option<&CelestialPosition>,
        b: Option<&CelestialPosition>,
    ) -> Option<Aspect> {
        match (a, b) {
            (Some(a), Some(b)) => self.between(a, b),
            _ => None,
        }
    }

    /// Calculate aspect between two longitudes.
    ///
    /// Kinds are tested in ascending angle order; the first one whose
    /// orb contains the separation wins.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<Aspect> {
        let angle_diff = angular_separation(lon1, lon2);

        AspectKind::ALL.into_iter().find_map(|kind| {
            let orb_value = (angle_diff - kind.angle()).abs();
            (orb_value <= self.orbs.orb(kind)).then(|| Aspect {
                kind,
                exact_angle: kind.angle(),
                orb: orb_value,
                is_exact: orb_value < EXACT_ORB,
            })
        })
    }
}
