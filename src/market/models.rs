use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// The three markets offered on every game.
///
/// Declaration order is the tie-break priority when two markets share the top
/// confidence: the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Moneyline,
    Spread,
    Total,
}

impl Market {
    pub const PRIORITY: [Market; 3] = [Market::Moneyline, Market::Spread, Market::Total];
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moneyline => write!(f, "moneyline"),
            Self::Spread => write!(f, "spread"),
            Self::Total => write!(f, "total"),
        }
    }
}

/// One to five stars, derived from a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stars(u8);

impl Stars {
    /// Threshold ladder: 4.5 → 5, 4.0 → 4, 3.5 → 3, 3.0 → 2, anything lower → 1.
    pub fn from_confidence(confidence: f64) -> Self {
        let count = if confidence >= 4.5 {
            5
        } else if confidence >= 4.0 {
            4
        } else if confidence >= 3.5 {
            3
        } else if confidence >= 3.0 {
            2
        } else {
            1
        };
        Self(count)
    }

    pub fn count(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("⭐")?;
        }
        Ok(())
    }
}

impl Serialize for Stars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Round a confidence to one decimal place for display.
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 10.0).round() / 10.0
}

/// Serde adapter: confidences are carried at full precision and rounded on output.
pub fn serialize_confidence<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_confidence(*value))
}

/// Recommendation block for one market of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPick {
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
    pub pick: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    pub odds: String,
    pub reasoning: String,
}

/// The single market recommended for a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestBet {
    #[serde(rename = "type")]
    pub market: Market,
    pub pick: String,
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
    pub stars: Stars,
}

/// A flagged player-prop bet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropOpportunity {
    pub player: String,
    pub prop_type: String,
    pub line: Decimal,
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
    pub reasoning: String,
}
