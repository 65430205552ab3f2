//! Game state and core simulation types
//!
//! All state the tick loop reads or writes lives in [`SimulationState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::combo::ComboState;
use super::motion::{self, Direction};
use super::progression::ProgressionState;
use super::schedule::Schedule;
use super::spawn::spawn_adversaries;
use crate::consts::*;
use crate::ticks_to_ms;

/// Whether the run is still live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    /// Terminal: an adversary crossed the bottom line
    Over,
}

/// Player avatar mood (drives the avatar glyph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Normal,
    Happy,
    Power,
    Focused,
}

impl Mood {
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Normal => "(っ･ω･)っ",
            Mood::Power => "(੭•̀ω•́)੭",
            Mood::Happy => "(ﾉ´ヮ`)ﾉ*:･ﾟ✧",
            Mood::Focused => "(●•̀ᴗ•́●)و ̑̑",
        }
    }
}

/// Ambient playfield mood, resampled at random
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundMood {
    #[default]
    Happy,
    Excited,
    Peaceful,
    Intense,
}

impl BackgroundMood {
    pub const ALL: [BackgroundMood; 4] = [
        BackgroundMood::Happy,
        BackgroundMood::Excited,
        BackgroundMood::Peaceful,
        BackgroundMood::Intense,
    ];

    /// Draw a mood uniformly (may return the current one)
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Faster horizontal movement
    Speed,
}

/// Active power-up effect on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerUp {
    pub active: bool,
    pub kind: Option<PowerUpKind>,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Horizontal offset, always within [PLAYER_MIN_X, PLAYER_MAX_X]
    pub position: i32,
    pub mood: Mood,
    pub power_up: PowerUp,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: PLAYER_START_X,
            mood: Mood::Normal,
            power_up: PowerUp::default(),
        }
    }
}

impl PlayerState {
    /// Distance covered by one move command
    pub fn step(&self) -> i32 {
        if self.power_up.active {
            PLAYER_POWER_STEP
        } else {
            PLAYER_STEP
        }
    }
}

/// A shot travelling up the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
}

impl Projectile {
    /// Spawn a shot from the player's current column
    pub fn fired_by(player: &PlayerState) -> Self {
        Self {
            pos: Vec2::new(
                player.position as f32 + PROJECTILE_X_OFFSET,
                PROJECTILE_SPAWN_Y,
            ),
        }
    }
}

/// Adversary types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdversaryKind {
    #[default]
    Angry,
}

/// Horizontal motion style, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementPattern {
    #[default]
    Normal,
    Zigzag,
}

/// Cosmetic glyphs carried through state for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kaomoji {
    Seething,
    Glaring,
    Shocked,
    Flailing,
    Fuming,
    /// Shown by a defeated adversary
    Victory,
}

impl Kaomoji {
    /// Glyphs an angry adversary can spawn with
    pub const ANGRY: [Kaomoji; 5] = [
        Kaomoji::Seething,
        Kaomoji::Glaring,
        Kaomoji::Shocked,
        Kaomoji::Flailing,
        Kaomoji::Fuming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kaomoji::Seething => "(╬ಠ益ಠ)",
            Kaomoji::Glaring => "(｀Д´)",
            Kaomoji::Shocked => "(°Д°)",
            Kaomoji::Flailing => "(ﾉ`Д´)ﾉ",
            Kaomoji::Fuming => "( #`Д´)",
            Kaomoji::Victory => "(≧▽≦)",
        }
    }
}

/// An enemy in the descending grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    /// Stable id encoding grid coordinates (`enemy-{col}-{row}`)
    pub id: String,
    pub pos: Vec2,
    pub kind: AdversaryKind,
    pub kaomoji: Kaomoji,
    pub pattern: MovementPattern,
}

/// Short-lived marker left where an adversary was destroyed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefeatEffect {
    pub id: String,
    pub pos: Vec2,
    pub kaomoji: Kaomoji,
    /// Simulated time of destruction (ms)
    pub timestamp_ms: u64,
}

impl DefeatEffect {
    pub fn from_adversary(adversary: &Adversary, now_ms: u64) -> Self {
        Self {
            id: adversary.id.clone(),
            pos: adversary.pos,
            kaomoji: Kaomoji::Victory,
            timestamp_ms: now_ms,
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp_ms) >= DEFEAT_EFFECT_MS
    }
}

/// Discrete player commands from the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every random draw goes through here
    pub rng: Pcg32,
    /// Simulation tick counter
    pub tick: u64,
    pub status: GameStatus,
    pub player: PlayerState,
    /// Live shots in fire order
    pub projectiles: Vec<Projectile>,
    /// Live adversaries in spawn order
    pub adversaries: Vec<Adversary>,
    /// Defeat markers in creation order
    pub effects: Vec<DefeatEffect>,
    pub combo: ComboState,
    pub progression: ProgressionState,
    pub background: BackgroundMood,
    /// Deferred transitions keyed by due time
    pub schedule: Schedule,
    /// Set once the field empties without a level-up
    pub(crate) stalled: bool,
}

impl SimulationState {
    /// Create a new run with the level 1 grid spawned
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let progression = ProgressionState::default();
        let adversaries = spawn_adversaries(progression.level, &mut rng);

        Self {
            seed,
            rng,
            tick: 0,
            status: GameStatus::Running,
            player: PlayerState::default(),
            projectiles: Vec::new(),
            adversaries,
            effects: Vec::new(),
            combo: ComboState::default(),
            progression,
            background: BackgroundMood::default(),
            schedule: Schedule::default(),
            stalled: false,
        }
    }

    /// Simulated time at the current tick (ms)
    pub fn elapsed_ms(&self) -> u64 {
        ticks_to_ms(self.tick)
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Apply one input command immediately. Ignored once the run is over.
    pub fn apply_command(&mut self, command: Command) {
        if self.is_over() {
            return;
        }
        match command {
            Command::MoveLeft => motion::move_player(&mut self.player, Direction::Left),
            Command::MoveRight => motion::move_player(&mut self.player, Direction::Right),
            Command::Fire => self.projectiles.push(Projectile::fired_by(&self.player)),
        }
    }

    /// Grant or clear the player's power-up
    pub fn set_power_up(&mut self, kind: Option<PowerUpKind>) {
        self.player.power_up = PowerUp {
            active: kind.is_some(),
            kind,
        };
    }
}
