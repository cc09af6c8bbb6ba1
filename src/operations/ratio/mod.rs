mod engine;

pub use engine::{MixFractions, RatioEngine};
