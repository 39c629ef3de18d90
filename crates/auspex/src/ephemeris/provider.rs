use crate::ephemeris::types::{Body, CelestialPosition, PositionSnapshot, RawPosition};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed { body: Body, jd: f64, message: String },
}

/// Source of raw ecliptic positions.
///
/// Implementations must be deterministic for a given `(jd, body)` pair.
/// A failure only makes that one body unavailable at that instant.
pub trait EphemerisProvider {
    fn lookup(&self, jd: f64, body: Body) -> Result<RawPosition, EphemerisError>;
}

/// Adapts a closure into a provider.
///
/// Handy for scripted positions in tests and benchmarks.
pub struct FnEphemeris<F>(F);

impl<F> FnEphemeris<F>
where
    F: Fn(f64, Body) -> Result<RawPosition, EphemerisError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EphemerisProvider for FnEphemeris<F>
where
    F: Fn(f64, Body) -> Result<RawPosition, EphemerisError>,
{
    fn lookup(&self, jd: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        (self.0)(jd, body)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn lookup(&self, jd: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        (**self).lookup(jd, body)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn lookup(&self, jd: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        (**self).lookup(jd, body)
    }
}

/// Resolve one body, turning provider failures into `None`
pub fn derive_position<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    body: Body,
) -> Option<CelestialPosition> {
    match provider.lookup(jd, body) {
        Ok(raw) if raw.lon.is_finite() && raw.speed_lon.is_finite() => {
            Some(CelestialPosition::from_raw(body, raw))
        }
        Ok(raw) => {
            log::warn!(
                "Non-finite position for {} at JD {}: lon={} speed={}",
                body,
                jd,
                raw.lon,
                raw.speed_lon
            );
            None
        }
        Err(e) => {
            log::warn!("Position unavailable for {} at JD {}: {}", body, jd, e);
            None
        }
    }
}

/// Resolve a set of bodies at one instant
pub fn derive_positions<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    bodies: &[Body],
) -> PositionSnapshot {
    let positions: BTreeMap<Body, Option<CelestialPosition>> = bodies
        .iter()
        .map(|&body| (body, derive_position(provider, jd, body)))
        .collect();

    PositionSnapshot { jd, positions }
}
