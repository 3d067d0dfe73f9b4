//! Word Rain data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROUND_RESPAWN_DELAY_SECS, WORD_OFFSCREEN_Y};
use crate::level::Level;
use crate::session::SessionPhase;
use crate::summary::{accuracy_percent, GameKind, GameSummary};

/// Built-in starter vocabulary (word + pictorial glyph).
pub const STARTER_WORDS: [(&str, &str); 12] = [
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("sun", "☀️"),
    ("moon", "🌙"),
    ("fish", "🐟"),
    ("bird", "🐦"),
    ("tree", "🌳"),
    ("star", "⭐"),
    ("ball", "⚽"),
    ("milk", "🥛"),
    ("frog", "🐸"),
    ("duck", "🦆"),
];

/// A vocabulary entry: the word to read aloud and its pictorial hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabWord {
    pub word: String,
    pub glyph: String,
}

impl VocabWord {
    pub fn new(word: &str, glyph: &str) -> Self {
        VocabWord {
            word: word.to_string(),
            glyph: glyph.to_string(),
        }
    }
}

/// Vocabulary built from [`STARTER_WORDS`].
pub fn starter_vocabulary() -> Vec<VocabWord> {
    STARTER_WORDS
        .iter()
        .map(|(word, glyph)| VocabWord::new(word, glyph))
        .collect()
}

/// How a falling word has been answered so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapState {
    Untapped,
    Correct,
    Wrong,
}

/// One word currently falling down the playfield.
///
/// Coordinates are normalized to the field: x and y in 0..=1 with y
/// increasing downward. Words spawn slightly above the top edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingWord {
    pub id: u32,
    pub word: String,
    pub glyph_hint: String,
    pub x: f64,
    pub y: f64,
    pub is_target: bool,
    pub tap_state: TapState,
}

impl FallingWord {
    pub fn is_tapped(&self) -> bool {
        self.tap_state != TapState::Untapped
    }

    /// A word is resolved once tapped or fallen past the bottom edge.
    pub fn is_resolved(&self) -> bool {
        self.is_tapped() || self.y > WORD_OFFSCREEN_Y
    }
}

impl Level {
    /// Fall speed in field-heights per second.
    pub fn fall_speed(&self) -> f64 {
        match self {
            Self::Easy => 0.12,
            Self::Medium => 0.18,
            Self::Hard => 0.25,
        }
    }

    /// Words per round set (one target plus distractors).
    pub fn words_per_round(&self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    /// Whether the pictorial hint is shown next to each word.
    pub fn show_glyph_hint(&self) -> bool {
        match self {
            Self::Easy => true,
            Self::Medium => true,
            Self::Hard => false,
        }
    }
}

/// A Word Rain session.
///
/// The driver calls [`super::logic`] functions against this struct; all
/// fields are plain data so the presentation layer can render from a
/// snapshot at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRainGame {
    pub session_id: String,
    pub level: Level,
    pub vocabulary: Vec<VocabWord>,
    pub phase: SessionPhase,
    pub duration_secs: u32,
    pub time_remaining_secs: u32,
    pub score: u32,
    pub correct_count: u32,
    pub total_count: u32,
    /// Current round set; empty between rounds.
    pub words: Vec<FallingWord>,
    /// The word to tap this round, `None` between rounds.
    pub target_word: Option<String>,
    /// Seconds until the next round spawns; `None` when no respawn is due.
    pub respawn_timer_secs: Option<f64>,
    pub respawn_delay_secs: f64,
    pub next_word_id: u32,
}

impl WordRainGame {
    pub fn new(level: Level, vocabulary: Vec<VocabWord>, duration_secs: u32) -> Self {
        WordRainGame {
            session_id: Uuid::new_v4().to_string(),
            level,
            vocabulary,
            phase: SessionPhase::NotStarted,
            duration_secs,
            time_remaining_secs: duration_secs,
            score: 0,
            correct_count: 0,
            total_count: 0,
            words: Vec::new(),
            target_word: None,
            respawn_timer_secs: None,
            respawn_delay_secs: ROUND_RESPAWN_DELAY_SECS,
            next_word_id: 0,
        }
    }

    pub fn is_round_active(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn accuracy(&self) -> f64 {
        accuracy_percent(self.correct_count, self.total_count)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary::new(
            &self.session_id,
            GameKind::WordRain,
            self.level,
            self.duration_secs,
            self.score,
            self.correct_count,
            self.total_count,
            None,
        )
    }
}
