//! Host-side game session
//!
//! Pure lifecycle adapter between a platform shell and the simulation: it
//! owns one engine instance, the caller-side UI-mode flags, and the frame
//! clock. Shells construct a session when their view starts, forward input
//! and vsync callbacks, and discard it on teardown. Nothing here spawns
//! threads or timers; time advances only through [`GameSession::on_frame`].

use crate::consts::MAX_FRAME_DT;
use crate::sim::{self, GameState, GameUiState, UiFlags};
use crate::words::{self, WordListError};

#[derive(Debug)]
pub struct GameSession {
    engine: GameState,
    running: bool,
    /// Timestamp of the previous frame; 0 means "no frame seen yet"
    last_nanos: u64,
    /// Latest published snapshot, including the session-owned flags
    ui: GameUiState,
}

impl GameSession {
    /// Build a session over a fresh engine. The word list is validated here,
    /// once; this is the only fallible step in the whole crate.
    pub fn new(
        word_list: Vec<String>,
        cols: i32,
        rows: i32,
        seed: u64,
    ) -> Result<Self, WordListError> {
        words::validate(&word_list)?;
        let engine = GameState::new(word_list, cols, rows, seed);
        let ui = engine.snapshot(UiFlags {
            ready: true,
            ..UiFlags::default()
        });
        Ok(Self {
            engine,
            running: false,
            last_nanos: 0,
            ui,
        })
    }

    /// Leave the ready screen (or a finished run) and begin playing
    pub fn start_game(&mut self) {
        self.engine.reset();
        self.ui = self.engine.snapshot(UiFlags::default());
        self.running = true;
        self.last_nanos = 0;
        log::info!("game started (seed {})", self.engine.seed);
    }

    pub fn restart(&mut self) {
        self.start_game();
    }

    /// Stop driving the simulation (view teardown)
    pub fn stop(&mut self) {
        self.running = false;
        self.last_nanos = 0;
    }

    /// Vsync callback. While any overlay is up (ready/paused/game-over/info)
    /// the clock is re-anchored so no catch-up jump happens on resume;
    /// otherwise the elapsed time, capped at 33ms, is fed to the sim.
    pub fn on_frame(&mut self, nanos: u64) {
        if !self.running {
            return;
        }
        if !self.ui.playable() {
            self.last_nanos = nanos;
            return;
        }

        let prev = self.last_nanos;
        self.last_nanos = nanos;
        if prev == 0 {
            return;
        }

        let dt = (nanos.saturating_sub(prev) as f32 / 1_000_000_000.0).min(MAX_FRAME_DT);
        self.ui = sim::tick(&mut self.engine, dt);
    }

    pub fn move_left(&mut self) {
        self.nudge(-1);
    }

    pub fn move_right(&mut self) {
        self.nudge(1);
    }

    fn nudge(&mut self, delta: i32) {
        if !self.ui.playable() {
            return;
        }
        self.engine.move_word(delta);
        self.ui = self.engine.snapshot(UiFlags::default());
    }

    /// Toggle pause; opening the pause overlay dismisses the info dialog
    pub fn toggle_pause(&mut self) {
        self.ui.paused = !self.ui.paused;
        self.ui.show_info = false;
    }

    pub fn set_info_visible(&mut self, visible: bool) {
        self.ui.show_info = visible;
    }

    /// Latest published snapshot (poll model; there is no push channel)
    pub fn ui_state(&self) -> &GameUiState {
        &self.ui
    }
}
