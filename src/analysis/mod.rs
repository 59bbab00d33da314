pub mod engine;
pub mod reasoning;
pub mod slate;

use std::fmt;

use serde::Serialize;

use crate::market::models::{serialize_confidence, BestBet, MarketPick, PropOpportunity};

pub use engine::AnalysisEngine;
pub use slate::{SlateFailure, SlateReport, TopPick};

/// Complete per-game output of the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameAnalysis {
    pub game_id: String,
    /// `"<away> @ <home>"`.
    pub matchup: String,
    pub game_time: String,
    pub moneyline: MarketPick,
    pub spread: MarketPick,
    pub total: MarketPick,
    pub best_bet: BestBet,
    pub props: Vec<PropOpportunity>,
    /// Highest of the three market confidences.
    #[serde(serialize_with = "serialize_confidence")]
    pub overall_confidence: f64,
    pub parlay_eligible: bool,
}

impl fmt::Display for GameAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {} | {}", self.matchup, self.game_time, self.game_id)?;
        writeln!(
            f,
            "  Best bet: {} ({}) {:.1} {}",
            self.best_bet.pick, self.best_bet.market, self.best_bet.confidence, self.best_bet.stars
        )?;
        for (label, block) in [
            ("Moneyline", &self.moneyline),
            ("Spread", &self.spread),
            ("Total", &self.total),
        ] {
            let line = block
                .line
                .as_ref()
                .map(|l| format!(" {l}"))
                .unwrap_or_default();
            writeln!(
                f,
                "  {label:<9} {:.1}  {}{line} ({}) - {}",
                block.confidence, block.pick, block.odds, block.reasoning
            )?;
        }
        for prop in &self.props {
            writeln!(
                f,
                "  Prop: {} {} {} ({:.1}) - {}",
                prop.player, prop.prop_type, prop.line, prop.confidence, prop.reasoning
            )?;
        }
        write!(
            f,
            "  Overall: {:.1}{}",
            self.overall_confidence,
            if self.parlay_eligible { " | parlay eligible" } else { "" }
        )
    }
}
