pub mod calculator;
pub mod types;

pub use calculator::{rank_aspects, AspectCalculator, DEFAULT_ASPECT_CAP};
pub use types::{AspectKind, AspectPair, ALL_ASPECTS};
