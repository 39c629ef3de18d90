use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds, in ascending order of their exact angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Test order used when a separation falls inside two orbs
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Sextile => "⚹",
            AspectKind::Square => "□",
            AspectKind::Trine => "△",
            AspectKind::Opposition => "☍",
        }
    }

    /// Conjunction, sextile and trine
    pub fn is_harmonious(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction | AspectKind::Sextile | AspectKind::Trine
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Allowed orb per aspect kind, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbTable {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl OrbTable {
    pub fn orb(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }

    /// Same orb for every aspect kind
    pub fn uniform(orb: f64) -> Self {
        Self {
            conjunction: orb,
            sextile: orb,
            square: orb,
            trine: orb,
            opposition: orb,
        }
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 7.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }
}

/// Aspect found between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub kind: AspectKind,
    /// Exact angle for this aspect
    pub exact_angle: f64,
    /// Orb value (deviation from exact angle)
    pub orb: f64,
    /// Whether the aspect is exact (within 1 degree)
    pub is_exact: bool,
}
