//! Short human-readable justifications for each market block.

use crate::data::GameRecord;
use crate::market::models::Market;

pub const HIGH_CONFIDENCE: f64 = 4.0;
pub const REASON_SEPARATOR: &str = " | ";
pub const FALLBACK_REASON: &str = "Solid value based on analytics";

/// Build the reasoning line for one market from simple conditional fragments.
pub fn market_reasoning(market: Market, confidence: f64, record: &GameRecord) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if confidence >= HIGH_CONFIDENCE {
        reasons.push("🔥 High confidence play".to_string());
    }

    match market {
        Market::Moneyline => {
            if record.home_rest_days > 2 {
                reasons.push("Home team well-rested".to_string());
            }
            if !record.away_key_injuries.is_empty() {
                reasons.push("Key away injuries".to_string());
            }
        }
        Market::Spread => {
            if record.public_betting_pct > 70.0 {
                reasons.push("Fading heavy public action".to_string());
            }
            reasons.push(format!("Home ATS: {}", record.home_ats_record));
        }
        Market::Total => {
            let pace = record.combined_pace();
            if pace > 102.0 {
                reasons.push(format!("High combined pace ({pace:.1})"));
            } else {
                reasons.push(format!("Slow pace matchup ({pace:.1})"));
            }
        }
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}
