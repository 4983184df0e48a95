//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::snapshot::{GameUiState, UiFlags};
use crate::words;

/// Transient word-level visual effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordEffect {
    #[default]
    None,
    /// Ripple across the word after a catch
    SuccessWave,
    /// Burn when the letter lands off the hole
    FailBurn,
}

/// Queued round result awaiting the effect window before it is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PendingOutcome {
    #[default]
    None,
    Success,
    Fail,
}

/// Particle flavor (color lookup on the render side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Good,
    Bad,
}

/// A particle for visual effects (positions and velocities in row units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds alive so far
    pub age: f32,
    /// Lifespan in seconds; removed once `age >= life`
    pub life: f32,
    pub kind: ParticleKind,
}

/// Speed level is a pure function of score: one level per four catches,
/// clamped to [1, 7]
pub fn speed_from_score(score: u32) -> u32 {
    (MIN_SPEED_LEVEL + score / SCORE_PER_LEVEL).clamp(MIN_SPEED_LEVEL, MAX_SPEED_LEVEL)
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving word choice, drop column and particle jitter
    pub(crate) rng: Pcg32,
    /// Board dimensions
    pub cols: i32,
    pub rows: i32,
    /// Candidate words, each with exactly one hole marker (startup contract)
    pub words: Vec<String>,
    /// Catches so far
    pub score: u32,
    /// Difficulty level in [1, 7], derived from score
    pub speed_level: u32,
    /// Remaining lives; the run ends at 0
    pub lives: u32,
    /// Currently displayed word
    pub word: String,
    /// Word as drawable cells, hole rendered as `'_'`
    pub word_cells: Vec<char>,
    /// Index of the hole within the word
    pub missing_index: usize,
    /// Board column of the word's leftmost character (may be negative)
    pub word_x: i32,
    /// Column of the falling letter
    pub drop_col: i32,
    /// Vertical position of the falling letter in row units
    pub drop_y: f32,
    /// Fall speed in rows/sec
    pub drop_vy: f32,
    /// Active visual effect and its elapsed time
    pub effect: WordEffect,
    pub effect_t: f32,
    /// Queued round result awaiting the effect window
    pub pending: PendingOutcome,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Create a new game state with the given seed.
    ///
    /// The word list must be non-empty with exactly one hole marker per
    /// word (see [`crate::words::validate`]) and the board dimensions
    /// positive; callers check this once at startup.
    pub fn new(words: Vec<String>, cols: i32, rows: i32, seed: u64) -> Self {
        assert!(cols > 0 && rows > 0, "board dimensions must be positive");
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            cols,
            rows,
            words,
            score: 0,
            speed_level: MIN_SPEED_LEVEL,
            lives: START_LIVES,
            word: String::new(),
            word_cells: Vec::new(),
            missing_index: 0,
            word_x: 0,
            drop_col: 0,
            drop_y: DROP_START_Y,
            drop_vy: 0.0,
            effect: WordEffect::None,
            effect_t: 0.0,
            pending: PendingOutcome::None,
            particles: Vec::new(),
        };
        state.reset();
        state
    }

    /// Start a fresh run: zero the score, restore lives, clear transient
    /// effects and spawn the first word and drop. Always succeeds.
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed_level = MIN_SPEED_LEVEL;
        self.lives = START_LIVES;
        self.particles.clear();
        self.effect = WordEffect::None;
        self.effect_t = 0.0;
        self.pending = PendingOutcome::None;
        self.pick_word();
        self.spawn_drop();
        log::debug!("reset (seed {})", self.seed);
    }

    /// Shift the word horizontally, clamped so the hole stays on the board.
    /// No-op while a round resolution is in progress.
    pub fn move_word(&mut self, delta: i32) {
        if self.pending != PendingOutcome::None {
            return;
        }
        let min_x = -(self.missing_index as i32);
        let max_x = (self.cols - 1) - self.missing_index as i32;
        self.word_x = self.word_x.saturating_add(delta).clamp(min_x, max_x);
    }

    /// Board column of the hole the falling letter must land in
    pub fn target_col(&self) -> i32 {
        self.word_x + self.missing_index as i32
    }

    /// Pick the next word uniformly at random and center its hole on the
    /// board's middle column, clamped so the whole hole range stays valid.
    pub(crate) fn pick_word(&mut self) {
        let idx = self.rng.random_range(0..self.words.len());
        let w = self.words[idx].clone();
        // Word list is validated at startup; a missing marker is a content bug
        let missing = w.chars().position(|c| c == words::HOLE_MARKER).unwrap_or(0);
        self.missing_index = missing;
        self.word_cells = w
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == missing { words::HOLE_CELL } else { ch })
            .collect();
        self.word = w;

        let target_center = (self.cols - 1) / 2;
        let min_x = -(missing as i32);
        let max_x = (self.cols - 1) - missing as i32;
        self.word_x = (target_center - missing as i32).clamp(min_x, max_x);
    }

    /// Spawn the next falling letter in a random column, above the board,
    /// at the current level's fall speed.
    pub(crate) fn spawn_drop(&mut self) {
        self.drop_col = self.rng.random_range(0..self.cols);
        self.drop_y = DROP_START_Y;
        self.drop_vy = DROP_BASE_SPEED + self.speed_level as f32 * DROP_SPEED_PER_LEVEL;
    }

    /// Pure read of the current state plus the caller-owned UI-mode flags
    pub fn snapshot(&self, flags: UiFlags) -> GameUiState {
        GameUiState {
            ready: flags.ready,
            paused: flags.paused,
            game_over: flags.game_over,
            show_info: flags.show_info,
            score: self.score,
            speed_level: self.speed_level,
            lives: self.lives,
            cols: self.cols,
            rows: self.rows,
            word: self.word.clone(),
            word_cells: self.word_cells.clone(),
            missing_index: self.missing_index,
            word_x: self.word_x,
            drop_col: self.drop_col,
            drop_y: self.drop_y,
            effect: self.effect,
            effect_t: self.effect_t,
            particles: self.particles.clone(),
        }
    }
}
