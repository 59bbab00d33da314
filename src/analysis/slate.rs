//! Whole-slate analysis.
//!
//! Every record is analyzed independently; a record that fails validation is reported
//! and skipped without touching the others. Parlays are composed only after every
//! game in the slate has been analyzed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::analysis::{AnalysisEngine, GameAnalysis};
use crate::data::RawGameRecord;
use crate::error::AnalysisError;
use crate::market::models::BestBet;
use crate::parlay::Parlay;

/// A record that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlateFailure {
    /// Position of the record in the input slate.
    pub index: usize,
    pub game_id: Option<String>,
    #[serde(serialize_with = "serialize_error")]
    pub error: AnalysisError,
}

fn serialize_error<S: Serializer>(error: &AnalysisError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// A best bet that clears the engine's confidence threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPick {
    pub game_id: String,
    pub matchup: String,
    pub game_time: String,
    pub best_bet: BestBet,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlateReport {
    pub generated_at: DateTime<Utc>,
    pub analyses: Vec<GameAnalysis>,
    pub failures: Vec<SlateFailure>,
    pub top_picks: Vec<TopPick>,
    pub parlays: Vec<Parlay>,
}

impl AnalysisEngine {
    /// Analyze every record of a slate, then build top picks and parlays from the
    /// games that succeeded.
    #[instrument(skip_all, fields(games = records.len()))]
    pub fn analyze_slate(&self, records: Vec<Value>) -> SlateReport {
        let mut analyses = Vec::with_capacity(records.len());
        let mut failures = Vec::new();

        for (index, entry) in records.into_iter().enumerate() {
            let game_id = entry
                .get("game_id")
                .and_then(Value::as_str)
                .map(str::to_string);
            match RawGameRecord::from_json(entry).and_then(|raw| self.analyze_game(raw)) {
                Ok(analysis) => analyses.push(analysis),
                Err(error) => {
                    warn!(
                        index,
                        game_id = game_id.as_deref().unwrap_or("<unknown>"),
                        error = %error,
                        "Skipping game record"
                    );
                    failures.push(SlateFailure {
                        index,
                        game_id,
                        error,
                    });
                }
            }
        }

        let top_picks = self.top_picks(&analyses);
        let parlays = self.compose_parlays(&analyses);

        info!(
            analyzed = analyses.len(),
            failed = failures.len(),
            top_picks = top_picks.len(),
            parlays = parlays.len(),
            "Slate analyzed"
        );

        SlateReport {
            generated_at: Utc::now(),
            analyses,
            failures,
            top_picks,
            parlays,
        }
    }

    /// Best bets at or above `confidence_threshold`, strongest first. Ties keep
    /// slate order.
    pub fn top_picks(&self, analyses: &[GameAnalysis]) -> Vec<TopPick> {
        let mut picks: Vec<TopPick> = analyses
            .iter()
            .filter(|a| a.best_bet.confidence >= self.config().confidence_threshold)
            .map(|a| TopPick {
                game_id: a.game_id.clone(),
                matchup: a.matchup.clone(),
                game_time: a.game_time.clone(),
                best_bet: a.best_bet.clone(),
            })
            .collect();
        picks.sort_by(|a, b| b.best_bet.confidence.total_cmp(&a.best_bet.confidence));
        picks
    }
}

impl fmt::Display for SlateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Slate Report ({}) ===",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "Games: {} analyzed, {} skipped",
            self.analyses.len(),
            self.failures.len()
        )?;

        writeln!(f, "\n--- Top Picks ---")?;
        if self.top_picks.is_empty() {
            writeln!(f, "None")?;
        }
        for pick in &self.top_picks {
            writeln!(
                f,
                "{} {} | {} ({:.1})",
                pick.best_bet.stars, pick.best_bet.pick, pick.matchup, pick.best_bet.confidence
            )?;
        }

        writeln!(f, "\n--- Games ---")?;
        for analysis in &self.analyses {
            writeln!(f, "{analysis}")?;
        }

        writeln!(f, "\n--- Parlays ---")?;
        if self.parlays.is_empty() {
            writeln!(f, "None")?;
        }
        for parlay in &self.parlays {
            writeln!(f, "{parlay}")?;
        }

        for failure in &self.failures {
            writeln!(
                f,
                "Skipped #{} ({}): {}",
                failure.index,
                failure.game_id.as_deref().unwrap_or("unknown"),
                failure.error
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game(id: &str, home_off: f64) -> Value {
        json!({
            "game_id": id,
            "home_team": format!("Home {id}"),
            "away_team": format!("Away {id}"),
            "game_time": "8:00 PM ET",
            "home_offensive_rating": home_off,
            "home_last_5_record": "5-0",
            "away_last_5_record": "0-5",
            "away_rest_days": 0,
            "away_key_injuries": ["A", "B"],
            "home_home_record": "22-3",
        })
    }

    #[test]
    fn test_bad_record_is_isolated() {
        let engine = AnalysisEngine::default();
        let mut broken = game("g2", 120.0);
        broken["home_home_record"] = json!("22/3");
        let report = engine.analyze_slate(vec![game("g1", 120.0), broken, game("g3", 125.0)]);

        assert_eq!(report.analyses.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].game_id.as_deref(), Some("g2"));
        assert!(matches!(
            report.failures[0].error,
            AnalysisError::MalformedRecordString { field: "home_home_record", .. }
        ));
        assert_eq!(report.parlays.len(), 1);
    }

    #[test]
    fn test_wrongly_typed_record_is_isolated() {
        let engine = AnalysisEngine::default();
        let mut rest_as_float = game("g2", 120.0);
        rest_as_float["home_rest_days"] = json!(1.5);
        let mut spread_as_word = game("g3", 120.0);
        spread_as_word["spread"] = json!("minus five");
        let report = engine.analyze_slate(vec![
            game("g1", 120.0),
            rest_as_float,
            spread_as_word,
            game("g4", 125.0),
        ]);

        assert_eq!(report.analyses.len(), 2);
        assert_eq!(report.analyses[0].game_id, "g1");
        assert_eq!(report.analyses[1].game_id, "g4");
        let failed: Vec<(usize, Option<&str>)> = report
            .failures
            .iter()
            .map(|f| (f.index, f.game_id.as_deref()))
            .collect();
        assert_eq!(failed, vec![(1, Some("g2")), (2, Some("g3"))]);
        assert!(report
            .failures
            .iter()
            .all(|f| matches!(f.error, AnalysisError::InvalidRecord(_))));
        assert_eq!(report.parlays.len(), 1);
    }

    #[test]
    fn test_top_picks_sorted_and_thresholded() {
        let engine = AnalysisEngine::default();
        let weak = json!({
            "game_id": "weak",
            "home_team": "H",
            "away_team": "A",
            "game_time": "7:00 PM ET",
            "home_offensive_rating": 95,
            "home_last_5_record": "0-5",
            "away_last_5_record": "5-0",
        });
        let report = engine.analyze_slate(vec![game("g1", 112.0), weak, game("g2", 125.0)]);
        let ids: Vec<&str> = report.top_picks.iter().map(|p| p.game_id.as_str()).collect();
        assert_eq!(ids, vec!["g2", "g1"]);
    }

    #[test]
    fn test_report_serializes_failures_as_messages() {
        let engine = AnalysisEngine::default();
        let report = engine.analyze_slate(vec![json!({"game_id": "x"})]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["failures"][0]["error"],
            json!("missing required field: home_team")
        );
        assert!(value["parlays"].as_array().unwrap().is_empty());
        assert!(report.to_string().contains("Skipped #0 (x)"));
    }
}
