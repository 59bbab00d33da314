//! Per-game analysis pipeline.
//!
//! factor scores → market confidences → best bet → props, assembled into a
//! [`GameAnalysis`]. Pure: the same record always yields the same analysis.

use tracing::debug;

use crate::analysis::reasoning::market_reasoning;
use crate::analysis::GameAnalysis;
use crate::config::{EngineConfig, ParlayConfig};
use crate::data::{GameRecord, RawGameRecord};
use crate::error::Result;
use crate::market::models::{Market, MarketPick};
use crate::market::props::find_prop_outliers;
use crate::market::selector::{select_best_bet, HOME_SIDE_CUTOFF};
use crate::parlay::{compose_parlays, Parlay};
use crate::scoring::{score_factors, MarketConfidences};

/// Pace factor above this leans the total block to the over.
const PACE_OVER_CUTOFF: f64 = 3.0;

/// Owns the read-only thresholds and runs the analysis and parlay stages.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: EngineConfig,
    parlay: ParlayConfig,
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig, parlay: ParlayConfig) -> Self {
        Self { config, parlay }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parlay_config(&self) -> &ParlayConfig {
        &self.parlay
    }

    /// Validate a raw record and analyze it.
    ///
    /// Fails only when an identity field is missing or a W-L record is malformed.
    pub fn analyze_game(&self, raw: RawGameRecord) -> Result<GameAnalysis> {
        let record = GameRecord::try_from(raw)?;
        Ok(self.analyze_record(&record))
    }

    /// Analyze an already validated record. Infallible.
    pub fn analyze_record(&self, record: &GameRecord) -> GameAnalysis {
        let factors = score_factors(record);
        let confidences = MarketConfidences::from_factors(&factors);
        let best_bet = select_best_bet(&confidences, record);
        let props = find_prop_outliers(record);

        let overall_confidence = confidences.overall();
        let parlay_eligible = overall_confidence >= self.config.parlay_confidence_threshold;

        debug!(
            game_id = %record.game_id,
            moneyline = confidences.moneyline,
            spread = confidences.spread,
            total = confidences.total,
            best = %best_bet.market,
            parlay_eligible,
            "Game analyzed"
        );

        let moneyline_side = if confidences.moneyline > HOME_SIDE_CUTOFF {
            &record.home_team
        } else {
            &record.away_team
        };
        let total_side = if factors.pace > PACE_OVER_CUTOFF { "Over" } else { "Under" };

        GameAnalysis {
            game_id: record.game_id.clone(),
            matchup: record.matchup_label(),
            game_time: record.game_time.clone(),
            moneyline: MarketPick {
                confidence: confidences.moneyline,
                pick: moneyline_side.clone(),
                line: None,
                odds: record.moneyline_odds.clone(),
                reasoning: market_reasoning(Market::Moneyline, confidences.moneyline, record),
            },
            spread: MarketPick {
                confidence: confidences.spread,
                pick: format!("{} {}", record.home_team, record.spread_label()),
                line: None,
                odds: record.spread_odds.clone(),
                reasoning: market_reasoning(Market::Spread, confidences.spread, record),
            },
            total: MarketPick {
                confidence: confidences.total,
                pick: total_side.to_string(),
                line: Some(record.total_line_label()),
                odds: record.total_odds.clone(),
                reasoning: market_reasoning(Market::Total, confidences.total, record),
            },
            best_bet,
            props,
            overall_confidence,
            parlay_eligible,
        }
    }

    /// Build ranked parlays from a completed batch of analyses.
    pub fn compose_parlays(&self, analyses: &[GameAnalysis]) -> Vec<Parlay> {
        compose_parlays(
            analyses,
            self.config.parlay_confidence_threshold,
            &self.parlay,
        )
    }
}
