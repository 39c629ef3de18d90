//! Electional astrology: ranks calendar days by how auspicious they are
//! for starting a venture.
//!
//! Positions come from an [`EphemerisProvider`]; the [`ScoringEngine`]
//! turns one instant into a bounded score with an explanation trail and
//! the [`RangeScanner`] repeats that over a window of days.

pub mod aspects;
pub mod election;
pub mod ephemeris;
pub mod error;
pub mod hours;
pub mod lunar;
pub mod scoring;
pub mod western;

pub use election::{ElectionReport, ProjectType, RangeScanner, ScanRequest, ScanSettings, ScoredDay};
pub use ephemeris::{
    derive_positions, Body, CelestialPosition, EphemerisError, EphemerisProvider, FnEphemeris,
    GeoLocation, PositionSnapshot, RawPosition, SwissEphemerisAdapter,
};
pub use error::ElectionError;
pub use lunar::{moon_report, MoonReport};
pub use scoring::{DayScore, Factor, Level, Polarity, RuleWeights, ScoringEngine};
