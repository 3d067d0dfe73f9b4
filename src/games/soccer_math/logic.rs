//! Game logic for Soccer Math.
//!
//! Kicks are aimed by angle and resolved against the field by directional
//! alignment: the cosine similarity between the aim direction and the
//! direction to each candidate. The required route target is checked
//! first, then goal shots, then anyone else the kick might have reached.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generation::{generate_route, pick_holder};
use super::types::{Ball, PassRoute, SoccerMathGame};
use crate::constants::{
    AIM_ALIGNMENT_THRESHOLD, GOAL_AIM_HORIZONTAL_THRESHOLD, GOAL_CENTER_Y, GOAL_LEFT_X,
    GOAL_RIGHT_X,
};
use crate::session::SessionPhase;
use crate::summary::GameSummary;

/// How a kick resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KickKind {
    CorrectPass,
    GoalScored,
    WrongTarget,
    MissedAll,
}

/// Outcome of one kick, ready for the presentation layer: what happened,
/// a child-readable message, where the ball should fly, and which jersey
/// (if any) it reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickResult {
    pub kind: KickKind,
    pub message: String,
    pub target_position: Option<(f64, f64)>,
    pub hit_player: Option<u8>,
}

/// Events reported to the presentation layer. `AnnounceTarget` is a
/// request to speak the required jersey number aloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SoccerEvent {
    Kick(KickResult),
    AnnounceTarget { jersey_number: u8 },
    GoalShotReady,
    RouteStarted { length: usize },
    SessionEnded { summary: GameSummary },
}

/// Begin the session and announce the opening route.
pub fn start(game: &mut SoccerMathGame) -> Vec<SoccerEvent> {
    let mut events = Vec::new();
    if game.phase != SessionPhase::NotStarted {
        return events;
    }
    game.phase = SessionPhase::Running;
    if let Some(route) = &game.route {
        events.push(SoccerEvent::RouteStarted {
            length: route.len(),
        });
        match route.current_target_number() {
            Some(jersey_number) => events.push(SoccerEvent::AnnounceTarget { jersey_number }),
            None => events.push(SoccerEvent::GoalShotReady),
        }
    }
    events
}

/// Resolve one kick aimed at `aim_angle` radians (0 points toward +x,
/// y grows downward).
///
/// Outside `Running`, or while the ball is mid-flight, the kick is a
/// silent no-op and no counter moves. Otherwise every call counts as an
/// attempt; the returned events always begin with `Kick(KickResult)`.
pub fn process_kick(
    game: &mut SoccerMathGame,
    aim_angle: f64,
    rng: &mut impl Rng,
) -> Vec<SoccerEvent> {
    let mut events = Vec::new();
    if !game.phase.is_running() || game.ball_in_transit {
        return events;
    }
    let Some(route) = game.route.clone() else {
        return events;
    };

    game.total_attempt_count += 1;

    match resolve_aim(game, &route, aim_angle) {
        AimOutcome::Pass { player_id } => {
            let Some(player) = game.players.iter().find(|p| p.id == player_id).cloned() else {
                return events;
            };
            game.correct_pass_count += 1;
            game.ball_holder_id = Some(player.id);
            game.ball = Ball {
                x: player.x,
                y: player.y,
            };
            let advanced = route.advanced();
            game.ball_in_transit = true;
            events.push(SoccerEvent::Kick(KickResult {
                kind: KickKind::CorrectPass,
                message: format!("Great pass to number {}!", player.jersey_number),
                target_position: Some((player.x, player.y)),
                hit_player: Some(player.jersey_number),
            }));
            match advanced.current_target_number() {
                Some(jersey_number) => events.push(SoccerEvent::AnnounceTarget { jersey_number }),
                None => events.push(SoccerEvent::GoalShotReady),
            }
            game.route = Some(advanced);
        }
        AimOutcome::Goal { mouth_x } => {
            game.treasure_count += 1;
            game.routes_completed_count += 1;
            game.ball_in_transit = true;

            // Fresh route, fresh holder; the scored route is done.
            let holder_id = pick_holder(&game.players, rng);
            game.ball_holder_id = Some(holder_id);
            if let Some(holder) = game.players.iter().find(|p| p.id == holder_id) {
                game.ball = Ball {
                    x: holder.x,
                    y: holder.y,
                };
            }
            let new_route = generate_route(&game.players, holder_id, rng);

            events.push(SoccerEvent::Kick(KickResult {
                kind: KickKind::GoalScored,
                message: "It's a goal! You earned a treasure!".to_string(),
                target_position: Some((mouth_x, GOAL_CENTER_Y)),
                hit_player: None,
            }));
            events.push(SoccerEvent::RouteStarted {
                length: new_route.len(),
            });
            if let Some(jersey_number) = new_route.current_target_number() {
                events.push(SoccerEvent::AnnounceTarget { jersey_number });
            }
            game.route = Some(new_route);
        }
        AimOutcome::WrongPlayer { player_id } => {
            if let Some(player) = game.players.iter().find(|p| p.id == player_id) {
                events.push(SoccerEvent::Kick(KickResult {
                    kind: KickKind::WrongTarget,
                    message: format!("Oops, number {} is not next!", player.jersey_number),
                    target_position: Some((player.x, player.y)),
                    hit_player: Some(player.jersey_number),
                }));
            }
        }
        AimOutcome::EarlyShot => {
            events.push(SoccerEvent::Kick(KickResult {
                kind: KickKind::WrongTarget,
                message: "Finish all your passes before shooting!".to_string(),
                target_position: None,
                hit_player: None,
            }));
        }
        AimOutcome::Missed => {
            events.push(SoccerEvent::Kick(KickResult {
                kind: KickKind::MissedAll,
                message: "The ball rolled away. Try again!".to_string(),
                target_position: None,
                hit_player: None,
            }));
        }
    }
    events
}

/// The driver's callback once the ball-travel animation lands.
pub fn complete_transit(game: &mut SoccerMathGame) {
    game.ball_in_transit = false;
}

/// One second of session time; ends the session at zero with the summary
/// delivered exactly once.
pub fn tick_second(game: &mut SoccerMathGame) -> Vec<SoccerEvent> {
    let mut events = Vec::new();
    if !game.phase.is_running() {
        return events;
    }
    game.time_remaining_secs = game.time_remaining_secs.saturating_sub(1);
    if game.time_remaining_secs == 0 {
        game.phase = SessionPhase::Ended;
        events.push(SoccerEvent::SessionEnded {
            summary: game.summary(),
        });
    }
    events
}

pub fn pause(game: &mut SoccerMathGame) {
    game.phase = game.phase.paused();
}

pub fn resume(game: &mut SoccerMathGame) {
    game.phase = game.phase.resumed();
}

/// Re-request the audio cue for the current objective.
pub fn request_announcement(game: &SoccerMathGame) -> Vec<SoccerEvent> {
    if !game.phase.is_running() {
        return Vec::new();
    }
    match &game.route {
        Some(route) => match route.current_target_number() {
            Some(jersey_number) => vec![SoccerEvent::AnnounceTarget { jersey_number }],
            None => vec![SoccerEvent::GoalShotReady],
        },
        None => Vec::new(),
    }
}

enum AimOutcome {
    Pass { player_id: u32 },
    Goal { mouth_x: f64 },
    WrongPlayer { player_id: u32 },
    EarlyShot,
    Missed,
}

fn resolve_aim(game: &SoccerMathGame, route: &PassRoute, aim_angle: f64) -> AimOutcome {
    if !aim_angle.is_finite() {
        return AimOutcome::Missed;
    }
    let dir = (aim_angle.cos(), aim_angle.sin());
    let goal_ward = dir.0.abs() > GOAL_AIM_HORIZONTAL_THRESHOLD;

    if route.is_ready_for_goal() && goal_ward {
        let mouth_x = if dir.0 > 0.0 { GOAL_RIGHT_X } else { GOAL_LEFT_X };
        return AimOutcome::Goal { mouth_x };
    }

    // The required receiver gets first claim on the kick.
    if let Some(required) = route.current_target_number() {
        if let Some(target) = game.player_by_jersey(required) {
            if alignment_to(&game.ball, target.x, target.y, dir) >= AIM_ALIGNMENT_THRESHOLD {
                return AimOutcome::Pass {
                    player_id: target.id,
                };
            }
        }
    }

    // Otherwise the best-aligned other player absorbs it.
    let mut best: Option<(f64, u32)> = None;
    for player in &game.players {
        if Some(player.id) == game.ball_holder_id {
            continue;
        }
        let similarity = alignment_to(&game.ball, player.x, player.y, dir);
        if similarity >= AIM_ALIGNMENT_THRESHOLD
            && best.map_or(true, |(top, _)| similarity > top)
        {
            best = Some((similarity, player.id));
        }
    }
    if let Some((_, player_id)) = best {
        return AimOutcome::WrongPlayer { player_id };
    }

    if goal_ward && !route.is_ready_for_goal() {
        return AimOutcome::EarlyShot;
    }

    AimOutcome::Missed
}

/// Cosine similarity between the unit aim direction and the direction
/// from the ball to `(x, y)`. Standing on the exact spot counts as 1.
fn alignment_to(ball: &Ball, x: f64, y: f64, dir: (f64, f64)) -> f64 {
    let dx = x - ball.x;
    let dy = y - ball.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 1e-9 {
        return 1.0;
    }
    (dx * dir.0 + dy * dir.1) / dist
}
