//! Rule weights for the scoring engine.
//!
//! These values decide how many points each factor adds to or removes
//! from the neutral base of 50.

use crate::aspects::AspectKind;
use serde::{Deserialize, Serialize};

/// Signed contribution of every rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleWeights {
    /// Matters progress faster when begun with the Moon increasing in light
    pub moon_waxing: i32,
    pub moon_waning: i32,
    /// Nothing comes of a matter begun under a void Moon
    pub void_of_course: i32,
    /// Worst zodiacal position for the Moon
    pub via_combusta: i32,
    pub mercury_retrograde: i32,
    pub mercury_direct: i32,
    pub moon_jupiter_conjunction: i32,
    pub moon_jupiter_trine: i32,
    pub moon_jupiter_sextile: i32,
    /// Mild penalty for Moon square or opposite Jupiter
    pub moon_jupiter_affliction: i32,
    pub moon_venus_harmonious: i32,
    /// Moon conjunct, square or opposite Mars
    pub moon_mars_affliction: i32,
    /// Moon conjunct, square or opposite Saturn
    pub moon_saturn_affliction: i32,
    pub moon_favorable_sign: i32,
    /// Sun trine or sextile Moon
    pub sun_moon_harmonious: i32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            moon_waxing: 15,
            moon_waning: -10,
            void_of_course: -25,
            via_combusta: -20,
            mercury_retrograde: -20,
            mercury_direct: 10,
            moon_jupiter_conjunction: 15,
            moon_jupiter_trine: 15,
            moon_jupiter_sextile: 12,
            moon_jupiter_affliction: -5,
            moon_venus_harmonious: 10,
            moon_mars_affliction: -15,
            moon_saturn_affliction: -15,
            moon_favorable_sign: 8,
            sun_moon_harmonious: 10,
        }
    }
}

/// How one aspect to a given body moves the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectEffect {
    Favorable(i32),
    /// Applied but reported with neutral polarity
    Mild(i32),
    Afflicting(i32),
    Ignored,
}

impl RuleWeights {
    /// Every weight with its config key
    pub fn entries(&self) -> [(&'static str, i32); 15] {
        [
            ("moon_waxing", self.moon_waxing),
            ("moon_waning", self.moon_waning),
            ("void_of_course", self.void_of_course),
            ("via_combusta", self.via_combusta),
            ("mercury_retrograde", self.mercury_retrograde),
            ("mercury_direct", self.mercury_direct),
            ("moon_jupiter_conjunction", self.moon_jupiter_conjunction),
            ("moon_jupiter_trine", self.moon_jupiter_trine),
            ("moon_jupiter_sextile", self.moon_jupiter_sextile),
            ("moon_jupiter_affliction", self.moon_jupiter_affliction),
            ("moon_venus_harmonious", self.moon_venus_harmonious),
            ("moon_mars_affliction", self.moon_mars_affliction),
            ("moon_saturn_affliction", self.moon_saturn_affliction),
            ("moon_favorable_sign", self.moon_favorable_sign),
            ("sun_moon_harmonious", self.sun_moon_harmonious),
        ]
    }

    pub fn moon_jupiter(&self, kind: AspectKind) -> AspectEffect {
        match kind {
            AspectKind::Conjunction => AspectEffect::Favorable(self.moon_jupiter_conjunction),
            AspectKind::Trine => AspectEffect::Favorable(self.moon_jupiter_trine),
            AspectKind::Sextile => AspectEffect::Favorable(self.moon_jupiter_sextile),
            AspectKind::Square | AspectKind::Opposition => {
                AspectEffect::Mild(self.moon_jupiter_affliction)
            }
        }
    }

    /// Venus afflictions carry no penalty
    pub fn moon_venus(&self, kind: AspectKind) -> AspectEffect {
        match kind {
            AspectKind::Conjunction | AspectKind::Trine | AspectKind::Sextile => {
                AspectEffect::Favorable(self.moon_venus_harmonious)
            }
            AspectKind::Square | AspectKind::Opposition => AspectEffect::Ignored,
        }
    }

    pub fn moon_mars(&self, kind: AspectKind) -> AspectEffect {
        match kind {
            AspectKind::Conjunction | AspectKind::Square | AspectKind::Opposition => {
                AspectEffect::Afflicting(self.moon_mars_affliction)
            }
            AspectKind::Sextile | AspectKind::Trine => AspectEffect::Ignored,
        }
    }

    pub fn moon_saturn(&self, kind: AspectKind) -> AspectEffect {
        match kind {
            AspectKind::Conjunction | AspectKind::Square | AspectKind::Opposition => {
                AspectEffect::Afflicting(self.moon_saturn_affliction)
            }
            AspectKind::Sextile | AspectKind::Trine => AspectEffect::Ignored,
        }
    }

    pub fn sun_moon(&self, kind: AspectKind) -> AspectEffect {
        match kind {
            AspectKind::Trine | AspectKind::Sextile => {
                AspectEffect::Favorable(self.sun_moon_harmonious)
            }
            AspectKind::Conjunction | AspectKind::Square | AspectKind::Opposition => {
                AspectEffect::Ignored
            }
        }
    }
}
