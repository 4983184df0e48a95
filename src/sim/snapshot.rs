//! Immutable snapshot handed to the presentation layer
//!
//! This is the entire render contract: a front end reads snapshots and
//! never reaches into the engine.

use serde::{Deserialize, Serialize};

use super::state::{Particle, WordEffect};

/// UI-mode flags folded into each snapshot.
///
/// These are session concerns, not simulation state: the engine never sets
/// them on its own (except the game-over flag returned from a tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiFlags {
    /// Start screen is showing; the run has not begun
    pub ready: bool,
    pub paused: bool,
    pub game_over: bool,
    /// Info dialog is visible
    pub show_info: bool,
}

/// Snapshot of everything a front end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameUiState {
    pub ready: bool,
    pub paused: bool,
    pub game_over: bool,
    pub show_info: bool,

    pub score: u32,
    pub speed_level: u32,
    pub lives: u32,

    pub cols: i32,
    pub rows: i32,

    pub word: String,
    /// Word as drawable cells with the hole rendered as `'_'`
    pub word_cells: Vec<char>,
    pub missing_index: usize,
    pub word_x: i32,

    pub drop_col: i32,
    pub drop_y: f32,

    pub effect: WordEffect,
    pub effect_t: f32,

    pub particles: Vec<Particle>,
}

impl GameUiState {
    /// Board column of the hole the falling letter must land in
    pub fn target_col(&self) -> i32 {
        self.word_x + self.missing_index as i32
    }

    /// True when the simulation should be driven (no overlay is up)
    pub fn playable(&self) -> bool {
        !self.ready && !self.paused && !self.game_over && !self.show_info
    }
}
