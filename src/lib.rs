//! Yo-Drop - a falling-letter word-catch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (word/drop state, round resolution, particles)
//! - `session`: Host-side session adapter (frame pacing, UI-mode flags)
//! - `words`: Embedded vocabulary and the startup word-list contract

pub mod session;
pub mod sim;
pub mod words;

pub use session::GameSession;
pub use sim::{GameState, GameUiState, UiFlags};

/// Game tuning constants
pub mod consts {
    /// Default board dimensions (columns x rows)
    pub const DEFAULT_COLS: i32 = 16;
    pub const DEFAULT_ROWS: i32 = 22;

    /// Starting lives per run
    pub const START_LIVES: u32 = 3;

    /// Speed level bounds and score step
    pub const MIN_SPEED_LEVEL: u32 = 1;
    pub const MAX_SPEED_LEVEL: u32 = 7;
    pub const SCORE_PER_LEVEL: u32 = 4;

    /// Falling letter spawn height (row units above the board)
    pub const DROP_START_Y: f32 = -1.2;
    /// Fall speed: base + per-level increment (rows/sec)
    pub const DROP_BASE_SPEED: f32 = 4.2;
    pub const DROP_SPEED_PER_LEVEL: f32 = 1.15;
    /// The drop resolves when it reaches `rows - 1 - HIT_LINE_OFFSET`
    pub const HIT_LINE_OFFSET: f32 = 0.10;

    /// Resolution effect windows (seconds)
    pub const SUCCESS_EFFECT_DURATION: f32 = 0.22;
    pub const FAIL_EFFECT_DURATION: f32 = 0.32;

    /// Particle gravity (rows/sec^2)
    pub const PARTICLE_GRAVITY: f32 = 520.0;
    /// Burst sizes
    pub const GOOD_BURST_COUNT: usize = 22;
    pub const BAD_BURST_COUNT: usize = 14;
    /// Burst speed ranges (rows/sec)
    pub const GOOD_SPEED_MIN: f32 = 70.0;
    pub const GOOD_SPEED_MAX: f32 = 220.0;
    pub const BAD_SPEED_MIN: f32 = 60.0;
    pub const BAD_SPEED_MAX: f32 = 180.0;
    /// Burst lifespan ranges (seconds)
    pub const GOOD_LIFE_MIN: f32 = 0.25;
    pub const GOOD_LIFE_MAX: f32 = 0.55;
    pub const BAD_LIFE_MIN: f32 = 0.18;
    pub const BAD_LIFE_MAX: f32 = 0.40;

    /// Maximum frame delta forwarded to the sim (caps catch-up after stalls)
    pub const MAX_FRAME_DT: f32 = 0.033;
}

/// Linear interpolation between `a` and `b` by `t` in [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
