//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (time is derived from the tick counter)
//! - Seeded RNG only
//! - Stable iteration order (spawn order for adversaries, fire order for shots)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod combo;
pub mod invariants;
pub mod motion;
pub mod progression;
pub mod schedule;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::SimulationClock;
pub use collision::{KillEvent, find_collisions, overlaps, resolve_collisions};
pub use combo::{ComboState, score_for_combo};
pub use motion::{Direction, descent_rate, move_player};
pub use progression::{ProgressionState, kills_to_advance};
pub use schedule::{Schedule, ScheduledAction};
pub use snapshot::{GameOverSummary, Snapshot};
pub use spawn::{grid_dimensions, spawn_adversaries};
pub use state::{
    Adversary, AdversaryKind, BackgroundMood, Command, DefeatEffect, GameStatus, Kaomoji, Mood,
    MovementPattern, PlayerState, PowerUp, PowerUpKind, Projectile, SimulationState,
};
pub use tick::{TickInput, TickOutcome, tick};
