//! Lunar phase from the Sun–Moon elongation.
//!
//! The cycle is cut into eight 45° bands starting at the new moon. The
//! first four bands are waxing, the last four waning.

use crate::ephemeris::types::CelestialPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

const BAND_WIDTH: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseName {
    New,
    Crescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    Waning,
}

impl PhaseName {
    pub const CYCLE: [PhaseName; 8] = [
        PhaseName::New,
        PhaseName::Crescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::Full,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::Waning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::New => "New",
            PhaseName::Crescent => "Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::Full => "Full",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::Waning => "Waning",
        }
    }

    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            PhaseName::New | PhaseName::Crescent | PhaseName::FirstQuarter | PhaseName::WaxingGibbous
        )
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhase {
    pub name: PhaseName,
    pub waxing: bool,
    /// Moon minus Sun longitude, in [0, 360)
    pub elongation: f64,
}

impl LunarPhase {
    /// Classify an elongation; values outside [0, 360) are wrapped first
    pub fn from_elongation(elongation: f64) -> Self {
        let elongation = elongation.rem_euclid(360.0);
        let elongation = if elongation >= 360.0 { 0.0 } else { elongation };
        let band = ((elongation / BAND_WIDTH).floor() as usize).min(PhaseName::CYCLE.len() - 1);
        let name = PhaseName::CYCLE[band];
        Self {
            name,
            waxing: name.is_waxing(),
            elongation,
        }
    }
}

/// Phase of the Moon from Sun and Moon positions at the same instant
pub fn lunar_phase(sun: &CelestialPosition, moon: &CelestialPosition) -> LunarPhase {
    LunarPhase::from_elongation(moon.lon - sun.lon)
}
