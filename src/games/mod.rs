//! Mini-game cores: Word Rain and Soccer Math.

pub mod soccer_math;
pub mod word_rain;

pub use soccer_math::{
    Ball, FieldPlayer, KickKind, KickResult, PassRoute, SoccerEvent, SoccerMathGame,
};
pub use word_rain::{FallingWord, TapState, VocabWord, WordRainEvent, WordRainGame};

use crate::session::SessionPhase;
use crate::summary::{GameKind, GameSummary};

/// A currently active mini-game session. Only one runs at a time; the
/// driver holds this and dispatches frame ticks and input to whichever
/// game is inside.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    WordRain(WordRainGame),
    SoccerMath(SoccerMathGame),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::WordRain(_) => GameKind::WordRain,
            ActiveGame::SoccerMath(_) => GameKind::SoccerMath,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self {
            ActiveGame::WordRain(game) => game.phase,
            ActiveGame::SoccerMath(game) => game.phase,
        }
    }

    pub fn summary(&self) -> GameSummary {
        match self {
            ActiveGame::WordRain(game) => game.summary(),
            ActiveGame::SoccerMath(game) => game.summary(),
        }
    }
}
