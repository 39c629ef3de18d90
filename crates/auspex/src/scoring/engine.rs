use crate::aspects::{Aspect, AspectCalculator, AspectKind};
use crate::election::project::ProjectType;
use crate::ephemeris::provider::{derive_positions, EphemerisProvider};
use crate::ephemeris::types::{Body, PositionSnapshot};
use crate::lunar::{in_via_combusta, is_void_of_course, lunar_phase};
use crate::scoring::types::{clamp_score, DayScore, Factor, Level, Polarity, BASE_SCORE};
use crate::scoring::weights::{AspectEffect, RuleWeights};

/// Running total plus the factor trail
struct Tally {
    raw: i32,
    factors: Vec<Factor>,
}

impl Tally {
    fn new() -> Self {
        Self {
            raw: BASE_SCORE,
            factors: Vec::new(),
        }
    }

    fn apply(&mut self, weight: i32, text: String, polarity: Polarity) {
        self.raw = self.raw.saturating_add(weight);
        self.factors.push(Factor::new(text, polarity));
    }

    fn finish(self) -> DayScore {
        let score = clamp_score(self.raw);
        DayScore {
            score,
            level: Level::from_score(score),
            factors: self.factors,
        }
    }
}

/// Evaluates the electional rules for one instant.
///
/// Rules run in a fixed order and each appends at most one factor, so
/// the factor trail always reads in rule order.
pub struct ScoringEngine<P> {
    provider: P,
    weights: RuleWeights,
    aspects: AspectCalculator,
}

impl<P: EphemerisProvider> ScoringEngine<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, RuleWeights::default(), AspectCalculator::new())
    }

    pub fn with_settings(provider: P, weights: RuleWeights, aspects: AspectCalculator) -> Self {
        Self {
            provider,
            weights,
            aspects,
        }
    }

    pub fn weights(&self) -> &RuleWeights {
        &self.weights
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Positions of the requested bodies at `jd`
    pub fn derive_positions(&self, jd: f64, bodies: &[Body]) -> PositionSnapshot {
        derive_positions(&self.provider, jd, bodies)
    }

    /// Score an instant for a project type.
    ///
    /// The project type does not change the weights; it is accepted so
    /// callers keep one signature once per-project rules exist.
    pub fn score_instant(&self, jd: f64, project: &ProjectType) -> DayScore {
        let snapshot = self.derive_positions(jd, &Body::CLASSICAL);
        let result = self.score_snapshot(&snapshot);
        log::debug!(
            "JD {} ({}): score {} [{}], {} factors",
            jd,
            project.key,
            result.score,
            result.level,
            result.factors.len()
        );
        result
    }

    /// Score a consistent set of positions
    pub fn score_snapshot(&self, snapshot: &PositionSnapshot) -> DayScore {
        let w = &self.weights;
        let mut tally = Tally::new();

        let sun = snapshot.get(Body::Sun);
        let moon = snapshot.get(Body::Moon);
        let mercury = snapshot.get(Body::Mercury);

        // 1. Lunar phase. Fires even when Sun or Moon is missing, counted as waning.
        match (sun, moon) {
            (Some(sun), Some(moon)) => {
                let phase = lunar_phase(sun, moon);
                if phase.waxing {
                    tally.apply(w.moon_waxing, format!("☽ Moon {}", phase.name), Polarity::Positive);
                } else {
                    tally.apply(w.moon_waning, format!("☽ Moon {}", phase.name), Polarity::Negative);
                }
            }
            _ => tally.apply(w.moon_waning, "☽ Moon phase unknown".to_string(), Polarity::Negative),
        }

        // 2. Void of course
        if is_void_of_course(snapshot) {
            tally.apply(w.void_of_course, "☽ Moon Void of Course".to_string(), Polarity::Negative);
        }

        // 3. Via Combusta
        if let Some(moon) = moon.filter(|m| in_via_combusta(m.lon)) {
            tally.apply(
                w.via_combusta,
                format!("☽ Via Combusta ({:.0}° {})", moon.degree, moon.sign),
                Polarity::Negative,
            );
        }

        // 4. Mercury. Skipped outright when Mercury is missing.
        if let Some(mercury) = mercury {
            if mercury.retrograde {
                tally.apply(w.mercury_retrograde, "☿ Mercury Retrograde ℞".to_string(), Polarity::Negative);
            } else {
                tally.apply(w.mercury_direct, "☿ Mercury Direct".to_string(), Polarity::Positive);
            }
        }

        // 5-8. Moon to Jupiter, Venus, Mars, Saturn
        let lunar_contacts: [(Body, fn(&RuleWeights, AspectKind) -> AspectEffect); 4] = [
            (Body::Jupiter, RuleWeights::moon_jupiter),
            (Body::Venus, RuleWeights::moon_venus),
            (Body::Mars, RuleWeights::moon_mars),
            (Body::Saturn, RuleWeights::moon_saturn),
        ];
        for (body, effect_of) in lunar_contacts {
            if let Some(aspect) = self.aspects.between_opt(moon, snapshot.get(body)) {
                let text = format!("☽ {} {} ({})", aspect.kind.glyph(), body.glyph(), aspect.kind);
                apply_effect(&mut tally, effect_of(w, aspect.kind), text);
            }
        }

        // 9. Favorable Moon sign
        if let Some(moon) = moon.filter(|m| m.sign.is_favorable_for_commerce()) {
            tally.apply(w.moon_favorable_sign, format!("☽ Moon in {}", moon.sign), Polarity::Positive);
        }

        // 10. Sun to Moon
        if let Some(aspect) = self.aspects.between_opt(sun, moon) {
            apply_effect(&mut tally, w.sun_moon(aspect.kind), sun_moon_text(&aspect));
        }

        tally.finish()
    }
}

fn apply_effect(tally: &mut Tally, effect: AspectEffect, text: String) {
    match effect {
        AspectEffect::Favorable(weight) => tally.apply(weight, text, Polarity::Positive),
        AspectEffect::Mild(weight) => tally.apply(weight, text, Polarity::Neutral),
        AspectEffect::Afflicting(weight) => tally.apply(weight, text, Polarity::Negative),
        AspectEffect::Ignored => {}
    }
}

fn sun_moon_text(aspect: &Aspect) -> String {
    format!("☉ {} ☽", aspect.kind.glyph())
}
