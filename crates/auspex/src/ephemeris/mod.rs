pub mod adapter;
pub mod provider;
pub mod time;
pub mod types;

pub use adapter::{SwissEphemerisAdapter, DEFAULT_EPHEMERIS_PATH};
pub use provider::{derive_position, derive_positions, EphemerisError, EphemerisProvider, FnEphemeris};
pub use time::{julian_day, julian_day_from_datetime};
pub use types::{Body, CelestialPosition, GeoLocation, PositionSnapshot, RawPosition};
