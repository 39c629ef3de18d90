pub mod signs;

pub use signs::{ZodiacSign, FAVORABLE_MOON_SIGNS};
