//! Best-bet selection.

use crate::data::GameRecord;
use crate::market::models::{BestBet, Market, Stars};
use crate::scoring::MarketConfidences;

/// Moneyline confidence above this backs the home side.
pub const HOME_SIDE_CUTOFF: f64 = 2.5;
/// Total confidence above this backs the over.
pub const OVER_CUTOFF: f64 = 3.0;

/// Pick the market with the strictly greatest confidence, first in
/// [`Market::PRIORITY`] on ties, and describe the bet.
pub fn select_best_bet(confidences: &MarketConfidences, record: &GameRecord) -> BestBet {
    let mut best = Market::PRIORITY[0];
    for market in &Market::PRIORITY[1..] {
        if confidences.get(*market) > confidences.get(best) {
            best = *market;
        }
    }

    let confidence = confidences.get(best);
    BestBet {
        market: best,
        pick: describe_pick(best, confidences, record),
        confidence,
        stars: Stars::from_confidence(confidence),
    }
}

fn describe_pick(market: Market, confidences: &MarketConfidences, record: &GameRecord) -> String {
    match market {
        Market::Moneyline => {
            let side = if confidences.moneyline > HOME_SIDE_CUTOFF {
                &record.home_team
            } else {
                &record.away_team
            };
            format!("{side} ML")
        }
        Market::Spread => format!("{} {}", record.home_team, record.spread_label()),
        Market::Total => {
            let direction = if confidences.total > OVER_CUTOFF { "Over" } else { "Under" };
            format!("{direction} {}", record.total_line_label())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawGameRecord;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record() -> GameRecord {
        let raw: RawGameRecord = serde_json::from_value(json!({
            "game_id": "g1",
            "home_team": "Celtics",
            "away_team": "Knicks",
            "game_time": "7:30 PM ET",
        }))
        .unwrap();
        GameRecord::try_from(raw).unwrap()
    }

    fn confidences(moneyline: f64, spread: f64, total: f64) -> MarketConfidences {
        MarketConfidences {
            moneyline,
            spread,
            total,
        }
    }

    #[test]
    fn test_tie_goes_to_moneyline() {
        let best = select_best_bet(&confidences(4.0, 4.0, 3.0), &record());
        assert_eq!(best.market, Market::Moneyline);
        assert_eq!(best.pick, "Celtics ML");
        assert_eq!(best.stars.count(), 4);
    }

    #[test]
    fn test_spread_total_tie_goes_to_spread() {
        let best = select_best_bet(&confidences(2.0, 3.6, 3.6), &record());
        assert_eq!(best.market, Market::Spread);
        assert_eq!(best.pick, "Celtics N/A");
    }

    #[test]
    fn test_spread_pick_uses_line() {
        let mut record = record();
        record.spread = Some(dec!(-6.5));
        let best = select_best_bet(&confidences(3.0, 3.5, 2.0), &record);
        assert_eq!(best.pick, "Celtics -6.5");
    }

    #[test]
    fn test_moneyline_low_confidence_backs_away() {
        let best = select_best_bet(&confidences(2.4, 2.0, 1.5), &record());
        assert_eq!(best.market, Market::Moneyline);
        assert_eq!(best.pick, "Knicks ML");
        assert_eq!(best.stars.count(), 1);
    }

    #[test]
    fn test_total_over_and_under() {
        let mut record = record();
        record.total_line = Some(dec!(228.5));
        let over = select_best_bet(&confidences(2.0, 2.0, 3.9), &record);
        assert_eq!(over.market, Market::Total);
        assert_eq!(over.pick, "Over 228.5");
        let under = select_best_bet(&confidences(2.0, 2.0, 2.9), &record);
        assert_eq!(under.pick, "Under 228.5");
    }
}
