//! End-of-session summary records handed to the presentation layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Which mini-game a summary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    WordRain,
    SoccerMath,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WordRain => "Word Rain",
            Self::SoccerMath => "Soccer Math",
        }
    }
}

/// Final scoreboard for a finished (or in-progress) session.
///
/// `score` holds points for Word Rain and treasures for Soccer Math;
/// `routes_completed` is only populated by Soccer Math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub session_id: String,
    pub game: GameKind,
    pub level: Level,
    pub duration_secs: u32,
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub accuracy: f64,
    pub routes_completed: Option<u32>,
    /// Unix timestamp taken when the summary was produced.
    pub finished_at: i64,
}

impl GameSummary {
    pub fn new(
        session_id: &str,
        game: GameKind,
        level: Level,
        duration_secs: u32,
        score: u32,
        correct: u32,
        total: u32,
        routes_completed: Option<u32>,
    ) -> Self {
        GameSummary {
            session_id: session_id.to_string(),
            game,
            level,
            duration_secs,
            score,
            correct,
            total,
            accuracy: accuracy_percent(correct, total),
            routes_completed,
            finished_at: Utc::now().timestamp(),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Percentage of correct answers, with an empty session reading 0 rather
/// than NaN.
pub fn accuracy_percent(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}
