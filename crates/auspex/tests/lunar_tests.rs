mod common;

use auspex::ephemeris::{derive_positions, Body};
use auspex::lunar::{
    in_via_combusta, is_void_of_course, moon_report, LunarPhase, PhaseName,
};
use common::{fixed_sky, Placement};

#[test]
fn test_via_combusta_boundaries() {
    assert!(!in_via_combusta(194.999));
    assert!(in_via_combusta(195.0));
    assert!(in_via_combusta(210.0));
    assert!(in_via_combusta(224.999));
    assert!(in_via_combusta(225.0));
    assert!(!in_via_combusta(225.001));
    assert!(!in_via_combusta(15.0));
}

#[test]
fn test_phase_at_cycle_boundaries() {
    let new = LunarPhase::from_elongation(0.0);
    assert_eq!(new.name, PhaseName::New);
    assert!(new.waxing);

    let last = LunarPhase::from_elongation(359.9);
    assert_eq!(last.name, PhaseName::Waning);
    assert!(!last.waxing);
}

#[test]
fn test_phase_classification_is_total() {
    let mut elongation = 0.0;
    while elongation < 360.0 {
        let phase = LunarPhase::from_elongation(elongation);
        let expected = PhaseName::CYCLE[(elongation / 45.0) as usize];
        assert_eq!(phase.name, expected, "elongation {}", elongation);
        assert_eq!(phase.waxing, elongation < 180.0, "elongation {}", elongation);
        elongation += 0.25;
    }
}

fn void_sky(moon_lon: f64, moon_speed: f64) -> Vec<Placement> {
    // Every other body 30°+ away from any major aspect to the Moon
    vec![
        (Body::Moon, moon_lon, moon_speed),
        (Body::Sun, moon_lon + 100.0, 1.0),
        (Body::Mercury, moon_lon + 30.0, 1.2),
        (Body::Venus, moon_lon - 40.0, 1.1),
        (Body::Mars, moon_lon + 75.0, 0.6),
        (Body::Jupiter, moon_lon + 105.0, 0.1),
        (Body::Saturn, moon_lon + 145.0, 0.05),
    ]
}

fn voc(sky: &[Placement]) -> bool {
    let snapshot = derive_positions(&fixed_sky(sky), 2461000.0, &Body::CLASSICAL);
    is_void_of_course(&snapshot)
}

#[test]
fn test_void_in_last_degrees_without_aspects() {
    assert!(voc(&void_sky(88.5, 13.0)));
}

#[test]
fn test_not_void_before_last_three_degrees() {
    assert!(!voc(&void_sky(87.0, 13.0)));
    assert!(!voc(&void_sky(75.0, 13.0)));
}

#[test]
fn test_applying_aspect_cancels_void() {
    let mut sky = void_sky(88.5, 13.0);
    // Venus 61° ahead: within 3° of a sextile
    sky.retain(|(b, _, _)| *b != Body::Venus);
    sky.push((Body::Venus, 149.5, 1.1));
    assert!(!voc(&sky));
}

#[test]
fn test_narrow_orb_is_strict() {
    let mut sky = void_sky(88.5, 13.0);
    // Exactly 3° from a square does not count
    sky.retain(|(b, _, _)| *b != Body::Mars);
    sky.push((Body::Mars, 88.5 + 93.0, 0.6));
    assert!(voc(&sky));
}

#[test]
fn test_retrograde_moon_cannot_apply() {
    let mut sky = void_sky(88.5, -1.0);
    sky.retain(|(b, _, _)| *b != Body::Venus);
    sky.push((Body::Venus, 149.5, 1.1));
    assert!(voc(&sky));
}

#[test]
fn test_missing_moon_is_never_void() {
    let sky: Vec<Placement> = void_sky(88.5, 13.0)
        .into_iter()
        .filter(|(b, _, _)| *b != Body::Moon)
        .collect();
    assert!(!voc(&sky));
}

#[test]
fn test_moon_report() {
    let sky = vec![
        (Body::Sun, 80.0, 1.0),
        (Body::Moon, 210.0, 13.0),
    ];
    let report = moon_report(&fixed_sky(&sky), 2461000.0);

    let position = report.position.unwrap();
    assert_eq!(position.sign.name(), "Scorpio");
    assert_eq!(report.phase.unwrap().name, PhaseName::FirstQuarter);
    assert!(report.via_combusta);
    assert!(!report.void_of_course);
}

#[test]
fn test_moon_report_without_sun_has_no_phase() {
    let sky = vec![(Body::Moon, 100.0, 13.0)];
    let report = moon_report(&fixed_sky(&sky), 2461000.0);
    assert!(report.position.is_some());
    assert!(report.phase.is_none());
}
