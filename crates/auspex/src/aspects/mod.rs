pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator, EXACT_ORB};
pub use types::{Aspect, AspectKind, OrbTable};
