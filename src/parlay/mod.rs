//! Parlay composition.
//!
//! Eligible picks are paired exhaustively (C(n, 2) two-leg parlays) and, when at least
//! three exist, the three strongest form one three-leg parlay. Candidates are ranked
//! by combined confidence and truncated. Pairing is O(n²) in eligible picks, which is
//! bounded by a single day's slate.
//!
//! Quoted payouts are placeholders from [`ParlayConfig`], not priced from the legs.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::analysis::GameAnalysis;
use crate::config::ParlayConfig;
use crate::market::models::{serialize_confidence, Market, Stars};

/// One leg of a parlay: the best bet of a single game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParlayLeg {
    pub game_id: String,
    pub matchup: String,
    pub market: Market,
    pub pick: String,
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
}

impl ParlayLeg {
    fn from_analysis(analysis: &GameAnalysis) -> Self {
        Self {
            game_id: analysis.game_id.clone(),
            matchup: analysis.matchup.clone(),
            market: analysis.best_bet.market,
            pick: analysis.best_bet.pick.clone(),
            confidence: analysis.overall_confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parlay {
    pub legs: Vec<ParlayLeg>,
    /// Mean of the legs' overall confidences.
    #[serde(serialize_with = "serialize_confidence")]
    pub combined_confidence: f64,
    pub estimated_odds: String,
    pub stars: Stars,
}

impl Parlay {
    fn from_legs(picks: &[&GameAnalysis], estimated_odds: &str) -> Self {
        let legs: Vec<ParlayLeg> = picks.iter().copied().map(ParlayLeg::from_analysis).collect();
        let combined_confidence =
            legs.iter().map(|leg| leg.confidence).sum::<f64>() / legs.len() as f64;
        Self {
            legs,
            combined_confidence,
            estimated_odds: estimated_odds.to_string(),
            stars: Stars::from_confidence(combined_confidence),
        }
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

impl fmt::Display for Parlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}-leg parlay {} | {:.1} {}",
            self.leg_count(),
            self.estimated_odds,
            self.combined_confidence,
            self.stars
        )?;
        let picks: Vec<String> = self
            .legs
            .iter()
            .map(|leg| format!("{} ({})", leg.pick, leg.matchup))
            .collect();
        write!(f, "  {}", picks.join(" + "))
    }
}

/// Compose and rank parlays from one completed batch of analyses.
///
/// Input order matters only for tie-breaking: both sorts are stable.
///
/// Candidates are ranked on full-precision combined confidence, not on the value
/// rounded for display. Two parlays that print the same score can therefore still
/// be ordered, and which ones survive truncation follows the unrounded means.
pub fn compose_parlays(
    analyses: &[GameAnalysis],
    parlay_threshold: f64,
    config: &ParlayConfig,
) -> Vec<Parlay> {
    // The eligibility flag already encodes the threshold; both are checked.
    let eligible: Vec<&GameAnalysis> = analyses
        .iter()
        .filter(|a| a.parlay_eligible && a.overall_confidence >= parlay_threshold)
        .collect();

    debug!(
        analyses = analyses.len(),
        eligible = eligible.len(),
        "Composing parlays"
    );

    if eligible.len() < 2 {
        return Vec::new();
    }

    let mut parlays = Vec::with_capacity(eligible.len() * (eligible.len() - 1) / 2 + 1);
    for (i, first) in eligible.iter().enumerate() {
        for second in &eligible[i + 1..] {
            parlays.push(Parlay::from_legs(&[*first, *second], &config.two_leg_odds));
        }
    }

    if eligible.len() >= 3 {
        let mut ranked = eligible.clone();
        ranked.sort_by(|a, b| b.overall_confidence.total_cmp(&a.overall_confidence));
        parlays.push(Parlay::from_legs(&ranked[..3], &config.three_leg_odds));
    }

    parlays.sort_by(|a, b| b.combined_confidence.total_cmp(&a.combined_confidence));
    parlays.truncate(config.max_parlays);
    parlays
}
