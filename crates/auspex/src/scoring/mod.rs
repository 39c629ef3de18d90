pub mod engine;
pub mod types;
pub mod weights;

pub use engine::ScoringEngine;
pub use types::{clamp_score, DayScore, Factor, Level, Polarity, BASE_SCORE};
pub use weights::{AspectEffect, RuleWeights};
