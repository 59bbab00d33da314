//! Factor scorers.
//!
//! Each scorer reads one slice of a [`GameRecord`] and maps it onto the 1–5 factor
//! scale. Linear scorers clamp; pace, line value and public skew are step functions
//! whose bucket edges are exact (no smoothing across a boundary).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::data::GameRecord;

pub const FACTOR_MIN: f64 = 1.0;
pub const FACTOR_MAX: f64 = 5.0;

/// Score for every analytical dimension of one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub matchup: f64,
    pub form: f64,
    pub rest: f64,
    pub injury: f64,
    pub pace: f64,
    pub home_court: f64,
    pub line_value: f64,
    pub public_fade: f64,
}

/// Run all eight scorers. They are independent of one another.
pub fn score_factors(record: &GameRecord) -> FactorScores {
    FactorScores {
        matchup: matchup(record),
        form: recent_form(record),
        rest: rest_advantage(record),
        injury: injury_impact(record),
        pace: pace(record),
        home_court: home_court(record),
        line_value: line_value(record),
        public_fade: public_betting(record),
    }
}

fn clamp_factor(raw: f64) -> f64 {
    raw.clamp(FACTOR_MIN, FACTOR_MAX)
}

/// Home offense against away defense, 10 rating points per factor point.
pub fn matchup(record: &GameRecord) -> f64 {
    let advantage = (record.home_offensive_rating - record.away_defensive_rating) / 10.0;
    clamp_factor(advantage + 2.5)
}

/// Win differential over the last five games.
pub fn recent_form(record: &GameRecord) -> f64 {
    let diff = f64::from(record.home_last_5.wins) - f64::from(record.away_last_5.wins);
    clamp_factor(diff / 2.0 + 3.0)
}

/// Rest differential. A zero-rest side overrides the linear term, away side first.
pub fn rest_advantage(record: &GameRecord) -> f64 {
    if record.away_rest_days == 0 {
        return 4.5;
    }
    if record.home_rest_days == 0 {
        return 1.5;
    }
    let diff = (record.home_rest_days as f64 - record.away_rest_days as f64) * 0.5;
    clamp_factor(diff + 3.0)
}

/// More away injuries favor the home side.
pub fn injury_impact(record: &GameRecord) -> f64 {
    let diff = record.away_key_injuries.len() as f64 - record.home_key_injuries.len() as f64;
    clamp_factor(diff * 0.7 + 3.0)
}

pub fn pace(record: &GameRecord) -> f64 {
    let combined = record.combined_pace();
    if combined > 102.0 {
        4.2
    } else if combined < 98.0 {
        2.0
    } else {
        3.0
    }
}

/// Home win percentage on the 0–5 scale. No home games played counts as .500.
pub fn home_court(record: &GameRecord) -> f64 {
    let win_pct = record.home_home_record.win_pct().unwrap_or(0.5);
    clamp_factor(win_pct * 5.0)
}

/// Gap between the power-rating margin and the posted spread.
pub fn line_value(record: &GameRecord) -> f64 {
    let gap = (record.power_rating_diff - record.spread_points()).abs();
    line_value_bucket(gap)
}

fn line_value_bucket(gap: Decimal) -> f64 {
    if gap > dec!(3) {
        4.5
    } else if gap > dec!(2) {
        3.8
    } else {
        2.5
    }
}

/// Lopsided public money at either extreme is a fade signal.
pub fn public_betting(record: &GameRecord) -> f64 {
    let pct = record.public_betting_pct;
    if pct > 75.0 || pct < 30.0 {
        4.0
    } else {
        2.5
    }
}
