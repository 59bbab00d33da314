//! Confidence-rated betting recommendations for a slate of NBA games.
//!
//! Raw game records are validated into [`data::GameRecord`]s, scored on eight factors,
//! blended into moneyline/spread/total confidences, reduced to a best bet per game and
//! finally combined into ranked parlays.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod market;
pub mod monitoring;
pub mod parlay;
pub mod scoring;

pub use analysis::{AnalysisEngine, GameAnalysis, SlateReport};
pub use error::AnalysisError;
