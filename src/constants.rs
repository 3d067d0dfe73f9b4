// Tick and timing
pub const NOMINAL_FRAME_MS: u64 = 16; // ~60 FPS driver cadence
pub const NOMINAL_FRAME_SECS: f64 = NOMINAL_FRAME_MS as f64 / 1000.0;
pub const MAX_FRAME_SECS: f64 = 0.1; // clamp runaway deltas after a stall
pub const DEFAULT_SESSION_SECONDS: u32 = 60;

// Word Rain
pub const WORD_SPAWN_Y_BASE: f64 = -0.05;
pub const WORD_SPAWN_Y_JITTER: f64 = 0.1;
pub const WORD_OFFSCREEN_Y: f64 = 1.1;
pub const ROUND_RESPAWN_DELAY_SECS: f64 = 0.75;
pub const CORRECT_TAP_BASE_SCORE: u32 = 10;

// Soccer Math
pub const AIM_ALIGNMENT_THRESHOLD: f64 = 0.5;
pub const GOAL_AIM_HORIZONTAL_THRESHOLD: f64 = 0.5;
pub const GOAL_LEFT_X: f64 = 0.05;
pub const GOAL_RIGHT_X: f64 = 0.95;
pub const GOAL_CENTER_Y: f64 = 0.5;
pub const FIELD_MARGIN: f64 = 0.08;
pub const PLAYER_MIN_AXIS_GAP: f64 = 0.15;
pub const PLAYER_PLACEMENT_ATTEMPTS: u32 = 50;
pub const MIN_FIELD_PLAYERS: usize = 2;
pub const MAX_FIELD_PLAYERS: usize = 20;
pub const ROUTE_MIN_LEN: usize = 3;
pub const ROUTE_MAX_LEN: usize = 5;
