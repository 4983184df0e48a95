//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven timestep only (no internal timers or threads)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod snapshot;
pub mod state;
pub mod tick;

pub use snapshot::{GameUiState, UiFlags};
pub use state::{GameState, Particle, ParticleKind, PendingOutcome, WordEffect, speed_from_score};
pub use tick::tick;
