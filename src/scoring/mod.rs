pub mod composite;
pub mod factors;

pub use composite::MarketConfidences;
pub use factors::{score_factors, FactorScores};
