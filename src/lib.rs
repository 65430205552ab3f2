//! Emotion Battle - A kaomoji arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring)
//! - `settings`: Runtime configuration for the headless runner
//! - `error`: Invariant violations reported by the simulation checker

pub mod error;
pub mod settings;
pub mod sim;

pub use error::InvariantViolation;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (20 Hz)
    pub const TICK_MS: u64 = 50;
    /// Maximum ticks run per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player horizontal bounds and spawn column
    pub const PLAYER_MIN_X: i32 = 10;
    pub const PLAYER_MAX_X: i32 = 290;
    pub const PLAYER_START_X: i32 = 150;
    /// Horizontal step per move command
    pub const PLAYER_STEP: i32 = 10;
    pub const PLAYER_POWER_STEP: i32 = 15;

    /// Projectiles spawn at the avatar's row, centred on its glyph
    pub const PROJECTILE_SPAWN_Y: f32 = 360.0;
    pub const PROJECTILE_X_OFFSET: f32 = 15.0;
    /// Upward travel per tick
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Adversary grid layout
    pub const GRID_BASE_ROWS: u32 = 3;
    pub const GRID_MAX_ROWS: u32 = 5;
    pub const GRID_BASE_COLS: u32 = 6;
    pub const GRID_MAX_COLS: u32 = 8;
    pub const GRID_SPACING_X: f32 = 60.0;
    pub const GRID_OFFSET_X: f32 = 30.0;
    pub const GRID_SPACING_Y: f32 = 50.0;
    pub const GRID_OFFSET_Y: f32 = 20.0;
    /// Chance an adversary spawns with the zigzag pattern
    pub const ZIGZAG_CHANCE: f64 = 0.3;

    /// Adversary base descent speed (scaled per level)
    pub const ADVERSARY_BASE_SPEED: f32 = 1.0;
    /// Points awarded per adversary before combo multiplier
    pub const ADVERSARY_POINTS: u64 = 100;

    /// Hit box half-extents for projectile/adversary overlap
    pub const HIT_HALF_WIDTH: f32 = 30.0;
    pub const HIT_HALF_HEIGHT: f32 = 20.0;

    /// Consecutive kills inside this window extend the combo
    pub const COMBO_WINDOW_MS: u64 = 1000;
    /// Defeat effect lifetime
    pub const DEFEAT_EFFECT_MS: u64 = 1000;
    /// How long the player stays happy after a level-up
    pub const LEVEL_UP_MOOD_MS: u64 = 2000;
    /// Per-tick chance of the background mood shifting
    pub const BACKGROUND_SHIFT_CHANCE: f64 = 0.005;

    /// Any adversary below this line ends the run
    pub const GAME_OVER_Y: f32 = 350.0;
}

/// Convert a tick count to elapsed simulated milliseconds
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * consts::TICK_MS
}
