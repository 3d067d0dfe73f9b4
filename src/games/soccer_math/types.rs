//! Soccer Math data structures.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::generation::{generate_players, generate_route, pick_holder};
use crate::level::Level;
use crate::session::SessionPhase;
use crate::summary::{accuracy_percent, GameKind, GameSummary};

/// A numbered player standing on the pitch. Coordinates are normalized
/// to the field: x and y in 0..=1 with a margin off every edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPlayer {
    pub id: u32,
    pub jersey_number: u8,
    pub x: f64,
    pub y: f64,
}

/// The ball. Kept in sync with whoever holds it; flight is animated by
/// the presentation layer, not simulated here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
}

/// An ordered list of jersey numbers the ball must visit before the
/// goal shot unlocks.
///
/// Progress is value-semantic: [`PassRoute::advanced`] returns the next
/// state and the caller replaces the route, so a route value can be
/// copied into events without aliasing live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRoute {
    pub target_numbers: Vec<u8>,
    pub current_step: usize,
}

impl PassRoute {
    pub fn new(target_numbers: Vec<u8>) -> Self {
        PassRoute {
            target_numbers,
            current_step: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.target_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target_numbers.is_empty()
    }

    /// The jersey number that must receive the next pass, or `None` once
    /// every pass is done.
    pub fn current_target_number(&self) -> Option<u8> {
        self.target_numbers.get(self.current_step).copied()
    }

    pub fn is_current_target(&self, jersey_number: u8) -> bool {
        self.current_target_number() == Some(jersey_number)
    }

    /// All passes done; the goal shot is unlocked.
    pub fn is_ready_for_goal(&self) -> bool {
        self.current_step == self.target_numbers.len()
    }

    /// One conceptual advance past ready-for-goal (the goal was scored).
    pub fn is_complete(&self) -> bool {
        self.current_step > self.target_numbers.len()
    }

    /// The route after one more completed step.
    pub fn advanced(&self) -> PassRoute {
        PassRoute {
            target_numbers: self.target_numbers.clone(),
            current_step: (self.current_step + 1).min(self.target_numbers.len() + 1),
        }
    }

    pub fn steps_completed(&self) -> usize {
        self.current_step.min(self.target_numbers.len())
    }
}

impl Level {
    /// How many players stand on the pitch by default.
    pub fn default_player_count(&self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 8,
            Self::Hard => 10,
        }
    }
}

/// A Soccer Math session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoccerMathGame {
    pub session_id: String,
    pub level: Level,
    pub phase: SessionPhase,
    pub duration_secs: u32,
    pub time_remaining_secs: u32,
    pub players: Vec<FieldPlayer>,
    pub ball: Ball,
    pub ball_holder_id: Option<u32>,
    pub route: Option<PassRoute>,
    /// Set after a successful kick; the driver clears it once the ball
    /// animation lands. Kicks are ignored while set.
    pub ball_in_transit: bool,
    pub treasure_count: u32,
    pub correct_pass_count: u32,
    pub total_attempt_count: u32,
    pub routes_completed_count: u32,
}

impl SoccerMathGame {
    pub fn new<R: Rng>(level: Level, duration_secs: u32, player_count: usize, rng: &mut R) -> Self {
        let players = generate_players(player_count, rng);
        let holder_id = pick_holder(&players, rng);
        let ball = players
            .iter()
            .find(|p| p.id == holder_id)
            .map(|p| Ball { x: p.x, y: p.y })
            .unwrap_or(Ball { x: 0.5, y: 0.5 });
        let route = generate_route(&players, holder_id, rng);

        SoccerMathGame {
            session_id: Uuid::new_v4().to_string(),
            level,
            phase: SessionPhase::NotStarted,
            duration_secs,
            time_remaining_secs: duration_secs,
            players,
            ball,
            ball_holder_id: Some(holder_id),
            route: Some(route),
            ball_in_transit: false,
            treasure_count: 0,
            correct_pass_count: 0,
            total_attempt_count: 0,
            routes_completed_count: 0,
        }
    }

    pub fn holder(&self) -> Option<&FieldPlayer> {
        let holder_id = self.ball_holder_id?;
        self.players.iter().find(|p| p.id == holder_id)
    }

    pub fn player_by_jersey(&self, jersey_number: u8) -> Option<&FieldPlayer> {
        self.players.iter().find(|p| p.jersey_number == jersey_number)
    }

    pub fn accuracy(&self) -> f64 {
        accuracy_percent(self.correct_pass_count, self.total_attempt_count)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary::new(
            &self.session_id,
            GameKind::SoccerMath,
            self.level,
            self.duration_secs,
            self.treasure_count,
            self.correct_pass_count,
            self.total_attempt_count,
            Some(self.routes_completed_count),
        )
    }
}
