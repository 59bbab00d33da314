//! Player-prop scanner.
//!
//! Stub: the feed only tells us *that* a prop outlier exists. Until per-player
//! stat lines are part of the record, the flag produces a single canned entry.

use rust_decimal_macros::dec;

use crate::data::GameRecord;
use crate::market::models::PropOpportunity;

pub const PROP_CONFIDENCE: f64 = 4.2;
pub const PROP_TYPE: &str = "Points Over";
pub const PROP_REASONING: &str = "Favorable matchup vs weak perimeter defense";

pub fn find_prop_outliers(record: &GameRecord) -> Vec<PropOpportunity> {
    if !record.has_prop_outliers {
        return Vec::new();
    }
    vec![PropOpportunity {
        player: record.prop_player.clone(),
        prop_type: PROP_TYPE.to_string(),
        line: dec!(25.5),
        confidence: PROP_CONFIDENCE,
        reasoning: PROP_REASONING.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawGameRecord;
    use serde_json::json;

    fn record(extra: serde_json::Value) -> GameRecord {
        let mut value = json!({
            "game_id": "g1",
            "home_team": "Celtics",
            "away_team": "Knicks",
            "game_time": "7:30 PM ET",
        });
        for (k, v) in extra.as_object().unwrap() {
            value[k] = v.clone();
        }
        let raw: RawGameRecord = serde_json::from_value(value).unwrap();
        GameRecord::try_from(raw).unwrap()
    }

    #[test]
    fn test_no_flag_no_props() {
        assert!(find_prop_outliers(&record(json!({}))).is_empty());
        assert!(find_prop_outliers(&record(json!({"has_prop_outliers": false}))).is_empty());
    }

    #[test]
    fn test_flag_emits_single_canned_prop() {
        let props = find_prop_outliers(&record(json!({
            "has_prop_outliers": true,
            "prop_player": "Jayson Tatum",
        })));
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].player, "Jayson Tatum");
        assert_eq!(props[0].confidence, 4.2);
        assert_eq!(props[0].line, dec!(25.5));
    }

    #[test]
    fn test_flag_without_player_uses_placeholder() {
        let props = find_prop_outliers(&record(json!({"has_prop_outliers": true})));
        assert_eq!(props[0].player, "Player Name");
    }
}
