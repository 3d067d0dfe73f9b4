//! Playbox - Educational Mini-Game Simulation Cores
//!
//! UI-agnostic, tick-driven game logic for the Word Rain and Soccer Math
//! children's games. A presentation layer drives the sessions through plain
//! function calls and renders from state snapshots and returned events.

pub mod build_info;
pub mod constants;
pub mod games;
pub mod level;
pub mod session;
pub mod summary;
