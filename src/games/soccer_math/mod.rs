//! Soccer Math mini-game.
//!
//! Numbered players stand on a normalized pitch. A pass route dictates
//! which jersey numbers must receive the ball, in order; once the route
//! is complete the player shoots at a goal mouth for a treasure, a fresh
//! route is dealt, and play continues until the clock runs out.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;
