//! Game records: the loosely typed input as it arrives, and the validated form the
//! scorers consume.
//!
//! Every analytical field is optional on the wire. Defaults are applied exactly once,
//! in [`GameRecord::try_from`], so nothing downstream handles absence.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

pub const DEFAULT_OFFENSIVE_RATING: f64 = 110.0;
pub const DEFAULT_DEFENSIVE_RATING: f64 = 110.0;
pub const DEFAULT_HOME_LAST_5: &str = "3-2";
pub const DEFAULT_AWAY_LAST_5: &str = "2-3";
pub const DEFAULT_REST_DAYS: i64 = 1;
pub const DEFAULT_PACE: f64 = 100.0;
pub const DEFAULT_HOME_HOME_RECORD: &str = "15-10";
pub const DEFAULT_PUBLIC_BETTING_PCT: f64 = 50.0;
pub const DEFAULT_HOME_ATS_RECORD: &str = "12-8";
pub const DEFAULT_PROP_PLAYER: &str = "Player Name";
pub const DEFAULT_MONEYLINE_ODDS: &str = "N/A";
pub const DEFAULT_JUICE: &str = "-110";
/// Shown wherever a betting line was not supplied.
pub const MISSING_LINE: &str = "N/A";

/// A game record exactly as supplied by the data feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGameRecord {
    pub game_id: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub game_time: Option<String>,

    pub home_offensive_rating: Option<f64>,
    pub away_defensive_rating: Option<f64>,
    pub home_last_5_record: Option<String>,
    pub away_last_5_record: Option<String>,
    pub home_rest_days: Option<i64>,
    pub away_rest_days: Option<i64>,
    pub home_key_injuries: Option<Vec<String>>,
    pub away_key_injuries: Option<Vec<String>>,
    pub home_pace: Option<f64>,
    pub away_pace: Option<f64>,
    pub home_home_record: Option<String>,
    pub home_ats_record: Option<String>,

    pub power_rating_diff: Option<Decimal>,
    pub spread: Option<Decimal>,
    pub total_line: Option<Decimal>,
    pub public_betting_pct: Option<f64>,
    pub moneyline_odds: Option<String>,
    pub spread_odds: Option<String>,
    pub total_odds: Option<String>,

    pub has_prop_outliers: Option<bool>,
    pub prop_player: Option<String>,
}

impl RawGameRecord {
    /// Deserialize one slate entry. A field of the wrong type fails this record only.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| AnalysisError::InvalidRecord(e.to_string()))
    }
}

/// A win-loss record such as `"4-1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    /// Widened so that two `u32` counts cannot overflow.
    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Fraction of games won, or `None` when no games were played.
    pub fn win_pct(&self) -> Option<f64> {
        match self.games() {
            0 => None,
            games => Some(f64::from(self.wins) / games as f64),
        }
    }

    /// Parse a record, attributing failures to `field`.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_: ParseWinLossError| AnalysisError::MalformedRecordString {
                field,
                value: value.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseWinLossError;

impl FromStr for WinLoss {
    type Err = ParseWinLossError;

    /// Accepts two non-negative integers joined by exactly one hyphen. Leading and
    /// trailing whitespace around the whole record is ignored; whitespace inside it is not.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (wins, losses) = s.trim().split_once('-').ok_or(ParseWinLossError)?;
        let digits = |part: &str| -> std::result::Result<u32, ParseWinLossError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseWinLossError);
            }
            part.parse().map_err(|_| ParseWinLossError)
        };
        Ok(Self {
            wins: digits(wins)?,
            losses: digits(losses)?,
        })
    }
}

impl fmt::Display for WinLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// A fully populated game record. Produced only through validation of a
/// [`RawGameRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub game_time: String,

    pub home_offensive_rating: f64,
    pub away_defensive_rating: f64,
    pub home_last_5: WinLoss,
    pub away_last_5: WinLoss,
    pub home_rest_days: i64,
    pub away_rest_days: i64,
    pub home_key_injuries: Vec<String>,
    pub away_key_injuries: Vec<String>,
    pub home_pace: f64,
    pub away_pace: f64,
    pub home_home_record: WinLoss,
    /// Display only, never parsed.
    pub home_ats_record: String,

    pub power_rating_diff: Decimal,
    /// Posted spread from the home team's side. `None` when no line is up.
    pub spread: Option<Decimal>,
    pub total_line: Option<Decimal>,
    pub public_betting_pct: f64,
    pub moneyline_odds: String,
    pub spread_odds: String,
    pub total_odds: String,

    pub has_prop_outliers: bool,
    pub prop_player: String,
}

impl GameRecord {
    /// `"<away> @ <home>"`.
    pub fn matchup_label(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    pub fn combined_pace(&self) -> f64 {
        (self.home_pace + self.away_pace) / 2.0
    }

    /// Spread used for numeric comparisons; an absent line counts as pick'em.
    pub fn spread_points(&self) -> Decimal {
        self.spread.unwrap_or(Decimal::ZERO)
    }

    pub fn spread_label(&self) -> String {
        line_label(self.spread)
    }

    pub fn total_line_label(&self) -> String {
        line_label(self.total_line)
    }
}

fn line_label(line: Option<Decimal>) -> String {
    line.map(|l| l.normalize().to_string())
        .unwrap_or_else(|| MISSING_LINE.to_string())
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AnalysisError::MissingRequiredField(field)),
    }
}

fn win_loss(field: &'static str, value: Option<String>, default: &str) -> Result<WinLoss> {
    WinLoss::parse_field(field, value.as_deref().unwrap_or(default))
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = AnalysisError;

    fn try_from(raw: RawGameRecord) -> Result<Self> {
        Ok(Self {
            game_id: required("game_id", raw.game_id)?,
            home_team: required("home_team", raw.home_team)?,
            away_team: required("away_team", raw.away_team)?,
            game_time: required("game_time", raw.game_time)?,

            home_offensive_rating: raw
                .home_offensive_rating
                .unwrap_or(DEFAULT_OFFENSIVE_RATING),
            away_defensive_rating: raw
                .away_defensive_rating
                .unwrap_or(DEFAULT_DEFENSIVE_RATING),
            home_last_5: win_loss(
                "home_last_5_record",
                raw.home_last_5_record,
                DEFAULT_HOME_LAST_5,
            )?,
            away_last_5: win_loss(
                "away_last_5_record",
                raw.away_last_5_record,
                DEFAULT_AWAY_LAST_5,
            )?,
            home_rest_days: raw.home_rest_days.unwrap_or(DEFAULT_REST_DAYS),
            away_rest_days: raw.away_rest_days.unwrap_or(DEFAULT_REST_DAYS),
            home_key_injuries: raw.home_key_injuries.unwrap_or_default(),
            away_key_injuries: raw.away_key_injuries.unwrap_or_default(),
            home_pace: raw.home_pace.unwrap_or(DEFAULT_PACE),
            away_pace: raw.away_pace.unwrap_or(DEFAULT_PACE),
            home_home_record: win_loss(
                "home_home_record",
                raw.home_home_record,
                DEFAULT_HOME_HOME_RECORD,
            )?,
            home_ats_record: raw
                .home_ats_record
                .unwrap_or_else(|| DEFAULT_HOME_ATS_RECORD.to_string()),

            power_rating_diff: raw.power_rating_diff.unwrap_or(Decimal::ZERO),
            spread: raw.spread,
            total_line: raw.total_line,
            public_betting_pct: raw
                .public_betting_pct
                .unwrap_or(DEFAULT_PUBLIC_BETTING_PCT),
            moneyline_odds: raw
                .moneyline_odds
                .unwrap_or_else(|| DEFAULT_MONEYLINE_ODDS.to_string()),
            spread_odds: raw.spread_odds.unwrap_or_else(|| DEFAULT_JUICE.to_string()),
            total_odds: raw.total_odds.unwrap_or_else(|| DEFAULT_JUICE.to_string()),

            has_prop_outliers: raw.has_prop_outliers.unwrap_or(false),
            prop_player: raw
                .prop_player
                .unwrap_or_else(|| DEFAULT_PROP_PLAYER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawGameRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    fn identity() -> serde_json::Value {
        json!({
            "game_id": "g1",
            "home_team": "Celtics",
            "away_team": "Knicks",
            "game_time": "7:30 PM ET",
        })
    }

    #[test]
    fn test_defaults_applied_when_fields_absent() {
        let record = GameRecord::try_from(raw(identity())).unwrap();
        assert_eq!(record.home_offensive_rating, 110.0);
        assert_eq!(record.home_last_5, WinLoss { wins: 3, losses: 2 });
        assert_eq!(record.away_last_5, WinLoss { wins: 2, losses: 3 });
        assert_eq!(record.home_rest_days, 1);
        assert_eq!(record.home_home_record, WinLoss { wins: 15, losses: 10 });
        assert_eq!(record.spread, None);
        assert_eq!(record.spread_points(), Decimal::ZERO);
        assert_eq!(record.spread_label(), "N/A");
        assert_eq!(record.moneyline_odds, "N/A");
        assert_eq!(record.spread_odds, "-110");
        assert_eq!(record.prop_player, "Player Name");
        assert!(!record.has_prop_outliers);
        assert!(record.away_key_injuries.is_empty());
    }

    #[test]
    fn test_missing_identity_field_fails_fast() {
        let mut value = identity();
        value.as_object_mut().unwrap().remove("game_time");
        let err = GameRecord::try_from(raw(value)).unwrap_err();
        assert_eq!(err, AnalysisError::MissingRequiredField("game_time"));
    }

    #[test]
    fn test_blank_team_name_is_missing() {
        let mut value = identity();
        value["home_team"] = json!("  ");
        let err = GameRecord::try_from(raw(value)).unwrap_err();
        assert_eq!(err, AnalysisError::MissingRequiredField("home_team"));
    }

    #[test]
    fn test_malformed_record_string_names_field() {
        let mut value = identity();
        value["away_last_5_record"] = json!("two-three");
        let err = GameRecord::try_from(raw(value)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::MalformedRecordString {
                field: "away_last_5_record",
                value: "two-three".to_string(),
            }
        );
    }

    #[test]
    fn test_win_loss_parsing() {
        assert_eq!("4-1".parse::<WinLoss>(), Ok(WinLoss { wins: 4, losses: 1 }));
        assert_eq!(" 20-5 ".parse::<WinLoss>(), Ok(WinLoss { wins: 20, losses: 5 }));
        assert!("4".parse::<WinLoss>().is_err());
        assert!("4--1".parse::<WinLoss>().is_err());
        assert!("-4-1".parse::<WinLoss>().is_err());
        assert!("4-1-0".parse::<WinLoss>().is_err());
        assert!("+4-1".parse::<WinLoss>().is_err());
    }

    #[test]
    fn test_inner_whitespace_is_malformed() {
        assert!("20 -5".parse::<WinLoss>().is_err());
        assert!("20- 5".parse::<WinLoss>().is_err());
    }

    #[test]
    fn test_win_pct_extreme_counts_do_not_overflow() {
        let mut value = identity();
        value["home_home_record"] = json!("4294967295-1");
        let record = GameRecord::try_from(raw(value)).unwrap();
        assert_eq!(record.home_home_record.games(), 4_294_967_296);
        let pct = record.home_home_record.win_pct().unwrap();
        assert!(pct > 0.999_999 && pct < 1.0);
    }

    #[test]
    fn test_from_json_rejects_wrong_field_type() {
        let mut value = identity();
        value["home_rest_days"] = json!(1.5);
        let err = RawGameRecord::from_json(value).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRecord(ref msg) if msg.contains("1.5")));

        let mut value = identity();
        value["spread"] = json!({"points": -5.5});
        assert!(RawGameRecord::from_json(value).is_err());

        let record = RawGameRecord::from_json(identity()).unwrap();
        assert_eq!(record.game_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_win_pct_empty_record() {
        assert_eq!(WinLoss { wins: 0, losses: 0 }.win_pct(), None);
        assert_eq!(WinLoss { wins: 20, losses: 5 }.win_pct(), Some(0.8));
    }

    #[test]
    fn test_lines_accept_numbers_and_strings() {
        let mut value = identity();
        value["spread"] = json!(-5.5);
        value["total_line"] = json!("221.5");
        let record = GameRecord::try_from(raw(value)).unwrap();
        assert_eq!(record.spread, Some(dec!(-5.5)));
        assert_eq!(record.spread_label(), "-5.5");
        assert_eq!(record.total_line_label(), "221.5");
        assert_eq!(record.matchup_label(), "Knicks @ Celtics");
    }
}
