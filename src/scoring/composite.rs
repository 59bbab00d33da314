//! Market composite scorers.
//!
//! Each market confidence is a fixed convex combination of factor scores. The weight
//! tables decide recommendations, so they are constants rather than config. Results
//! keep full precision; rounding happens only when an analysis is rendered.

use crate::market::models::Market;
use crate::scoring::factors::FactorScores;

/// Weights over the six factors that feed the moneyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneylineWeights {
    pub matchup: f64,
    pub form: f64,
    pub rest: f64,
    pub injury: f64,
    pub home_court: f64,
    pub line_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadWeights {
    pub matchup: f64,
    pub form: f64,
    pub rest: f64,
    pub injury: f64,
    pub home_court: f64,
    pub public_fade: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalWeights {
    pub pace: f64,
    pub matchup: f64,
    pub form: f64,
}

pub const MONEYLINE_WEIGHTS: MoneylineWeights = MoneylineWeights {
    matchup: 0.25,
    form: 0.20,
    rest: 0.15,
    injury: 0.20,
    home_court: 0.10,
    line_value: 0.10,
};

pub const SPREAD_WEIGHTS: SpreadWeights = SpreadWeights {
    matchup: 0.20,
    form: 0.25,
    rest: 0.15,
    injury: 0.20,
    home_court: 0.10,
    public_fade: 0.10,
};

pub const TOTAL_WEIGHTS: TotalWeights = TotalWeights {
    pace: 0.50,
    matchup: 0.30,
    form: 0.20,
};

impl MoneylineWeights {
    pub fn sum(&self) -> f64 {
        self.matchup + self.form + self.rest + self.injury + self.home_court + self.line_value
    }
}

impl SpreadWeights {
    pub fn sum(&self) -> f64 {
        self.matchup + self.form + self.rest + self.injury + self.home_court + self.public_fade
    }
}

impl TotalWeights {
    pub fn sum(&self) -> f64 {
        self.pace + self.matchup + self.form
    }
}

/// Confidence in each market for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConfidences {
    pub moneyline: f64,
    pub spread: f64,
    pub total: f64,
}

impl MarketConfidences {
    pub fn from_factors(factors: &FactorScores) -> Self {
        Self {
            moneyline: moneyline_confidence(factors),
            spread: spread_confidence(factors),
            total: total_confidence(factors),
        }
    }

    pub fn get(&self, market: Market) -> f64 {
        match market {
            Market::Moneyline => self.moneyline,
            Market::Spread => self.spread,
            Market::Total => self.total,
        }
    }

    /// Highest of the three confidences.
    pub fn overall(&self) -> f64 {
        self.moneyline.max(self.spread).max(self.total)
    }
}

pub fn moneyline_confidence(f: &FactorScores) -> f64 {
    let w = MONEYLINE_WEIGHTS;
    f.matchup * w.matchup
        + f.form * w.form
        + f.rest * w.rest
        + f.injury * w.injury
        + f.home_court * w.home_court
        + f.line_value * w.line_value
}

pub fn spread_confidence(f: &FactorScores) -> f64 {
    let w = SPREAD_WEIGHTS;
    f.matchup * w.matchup
        + f.form * w.form
        + f.rest * w.rest
        + f.injury * w.injury
        + f.home_court * w.home_court
        + f.public_fade * w.public_fade
}

pub fn total_confidence(f: &FactorScores) -> f64 {
    let w = TOTAL_WEIGHTS;
    f.pace * w.pace + f.matchup * w.matchup + f.form * w.form
}
