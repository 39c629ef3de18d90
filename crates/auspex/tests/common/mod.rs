#![allow(dead_code)]

use auspex::ephemeris::{Body, EphemerisError, EphemerisProvider, FnEphemeris, RawPosition};

/// (body, longitude, speed)
pub type Placement = (Body, f64, f64);

/// Same positions at every instant; bodies not listed are unavailable
pub fn fixed_sky(placements: &[Placement]) -> impl EphemerisProvider {
    let placements = placements.to_vec();
    FnEphemeris::new(move |jd, body| {
        placements
            .iter()
            .find(|(b, _, _)| *b == body)
            .map(|&(_, lon, speed_lon)| RawPosition { lon, speed_lon })
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                jd,
                message: "not scripted".to_string(),
            })
    })
}

/// Waxing Moon in Leo, Mercury direct, no lunar aspects: scores 75
pub fn quiet_sky() -> Vec<Placement> {
    vec![
        (Body::Sun, 0.0, 1.0),
        (Body::Moon, 130.0, 13.0),
        (Body::Mercury, 10.0, 1.2),
        (Body::Venus, 90.0, 1.1),
        (Body::Mars, 205.0, 0.6),
        (Body::Jupiter, 160.0, 0.1),
        (Body::Saturn, 275.0, 0.05),
    ]
}

/// Waxing Moon at 0° Scorpio (Via Combusta), Mercury retrograde: scores 25
pub fn afflicted_sky() -> Vec<Placement> {
    vec![
        (Body::Sun, 80.0, 1.0),
        (Body::Moon, 210.0, 13.0),
        (Body::Mercury, 10.0, -0.5),
        (Body::Venus, 170.0, 1.1),
        (Body::Mars, 285.0, 0.6),
        (Body::Jupiter, 240.0, 0.1),
        (Body::Saturn, 355.0, 0.05),
    ]
}

/// Replace one body's placement
pub fn with(mut sky: Vec<Placement>, body: Body, lon: f64, speed: f64) -> Vec<Placement> {
    sky.retain(|(b, _, _)| *b != body);
    sky.push((body, lon, speed));
    sky
}

/// Drop one body so the ephemeris fails for it
pub fn without(mut sky: Vec<Placement>, body: Body) -> Vec<Placement> {
    sky.retain(|(b, _, _)| *b != body);
    sky
}

/// Sun and Moon move with time, the rest stay put
pub fn moving_sky() -> impl EphemerisProvider {
    FnEphemeris::new(|jd, body| {
        let days = jd - 2461000.0;
        let (lon, speed_lon) = match body {
            Body::Sun => (days * 0.9856, 0.9856),
            Body::Moon => (days * 13.176 + 40.0, 13.176),
            Body::Mercury => (days * 1.3 + 15.0, if (days as i64) % 40 < 8 { -0.7 } else { 1.3 }),
            Body::Venus => (days * 1.2 + 200.0, 1.2),
            Body::Mars => (days * 0.5 + 120.0, 0.5),
            Body::Jupiter => (100.0, 0.08),
            Body::Saturn => (340.0, 0.03),
            other => {
                return Err(EphemerisError::CalculationFailed {
                    body: other,
                    jd,
                    message: "not scripted".to_string(),
                })
            }
        };
        Ok(RawPosition { lon, speed_lon })
    })
}
