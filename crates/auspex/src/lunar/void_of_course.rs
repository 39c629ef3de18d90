//! Simplified void-of-course test.
//!
//! The Moon is only considered when it sits in the last 3° of its sign.
//! It is then void unless, moving direct, it is within 3° of a major
//! aspect to one of the six classical bodies.

use crate::aspects::{angular_separation, AspectKind};
use crate::ephemeris::types::{Body, PositionSnapshot};

/// Degree within sign past which the Moon is about to change sign
pub const VOID_WINDOW_START: f64 = 27.0;
/// Narrow orb for an aspect that is about to perfect
pub const APPLYING_ORB: f64 = 3.0;

/// Bodies the Moon may still reach before leaving its sign
pub const VOID_TEST_BODIES: [Body; 6] = [
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

pub fn is_void_of_course(snapshot: &PositionSnapshot) -> bool {
    let Some(moon) = snapshot.get(Body::Moon) else {
        return false;
    };

    if moon.degree <= VOID_WINDOW_START {
        return false;
    }

    if moon.speed_lon <= 0.0 {
        return true;
    }

    let has_applying_aspect = VOID_TEST_BODIES
        .iter()
        .filter_map(|&body| snapshot.get(body))
        .any(|other| {
            let sep = angular_separation(moon.lon, other.lon);
            AspectKind::ALL
                .iter()
                .any(|kind| (sep - kind.angle()).abs() < APPLYING_ORB)
        });

    !has_applying_aspect
}
