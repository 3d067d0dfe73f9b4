//! Word Rain mini-game.
//!
//! Words fall down the playfield and one of them is the announced target.
//! Tapping the target scores points and ends the round; tapping a
//! distractor or letting the target fall off the bottom counts against
//! accuracy. A countdown timer ends the session.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;
