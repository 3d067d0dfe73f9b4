//! Field and route generation for Soccer Math.
//!
//! Lays out uniquely numbered players on the pitch with a best-effort
//! spread, picks the opening ball holder, and deals pass routes.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{FieldPlayer, PassRoute};
use crate::constants::{
    FIELD_MARGIN, MAX_FIELD_PLAYERS, MIN_FIELD_PLAYERS, PLAYER_MIN_AXIS_GAP,
    PLAYER_PLACEMENT_ATTEMPTS, ROUTE_MAX_LEN, ROUTE_MIN_LEN,
};

/// Place `count` players (clamped to 2..=20) with unique jersey numbers
/// drawn from 1..=20 and positions spread across the field.
pub fn generate_players(count: usize, rng: &mut impl Rng) -> Vec<FieldPlayer> {
    let count = count.clamp(MIN_FIELD_PLAYERS, MAX_FIELD_PLAYERS);
    let mut jerseys: Vec<u8> = (1..=MAX_FIELD_PLAYERS as u8).collect();
    jerseys.shuffle(rng);

    let mut players: Vec<FieldPlayer> = Vec::with_capacity(count);
    for (i, jersey_number) in jerseys.into_iter().take(count).enumerate() {
        let (x, y) = place_player(&players, rng);
        players.push(FieldPlayer {
            id: i as u32,
            jersey_number,
            x,
            y,
        });
    }
    players
}

/// Uniformly random player id to open with the ball.
pub fn pick_holder(players: &[FieldPlayer], rng: &mut impl Rng) -> u32 {
    players.choose(rng).map(|p| p.id).unwrap_or(0)
}

/// Deal a pass route of 3 to 5 unique jersey numbers, never including
/// the holder. A small field deals a shorter route rather than failing.
pub fn generate_route(players: &[FieldPlayer], holder_id: u32, rng: &mut impl Rng) -> PassRoute {
    let length = rng.gen_range(ROUTE_MIN_LEN..=ROUTE_MAX_LEN);
    let mut candidates: Vec<u8> = players
        .iter()
        .filter(|p| p.id != holder_id)
        .map(|p| p.jersey_number)
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(length);
    PassRoute::new(candidates)
}

/// True when the candidate spot differs from every placed player by at
/// least the minimum gap on at least one axis.
fn is_spread_out(placed: &[FieldPlayer], x: f64, y: f64) -> bool {
    placed
        .iter()
        .all(|p| (p.x - x).abs() >= PLAYER_MIN_AXIS_GAP || (p.y - y).abs() >= PLAYER_MIN_AXIS_GAP)
}

fn random_spot(rng: &mut impl Rng) -> (f64, f64) {
    (
        rng.gen_range(FIELD_MARGIN..=1.0 - FIELD_MARGIN),
        rng.gen_range(FIELD_MARGIN..=1.0 - FIELD_MARGIN),
    )
}

fn place_player(placed: &[FieldPlayer], rng: &mut impl Rng) -> (f64, f64) {
    let mut candidate = random_spot(rng);
    for _ in 0..PLAYER_PLACEMENT_ATTEMPTS {
        if is_spread_out(placed, candidate.0, candidate.1) {
            return candidate;
        }
        candidate = random_spot(rng);
    }
    // A crowded field keeps the last roll; placement never fails.
    candidate
}
