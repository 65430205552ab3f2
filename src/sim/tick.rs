//! Fixed timestep simulation tick
//!
//! One call advances the run by exactly one 50ms step. Steps run in a fixed
//! order so the same seed and input stream always produce the same state.

use rand::Rng;

use super::collision::{self, KillEvent};
use super::motion;
use super::progression::apply_level_up;
use super::schedule::ScheduledAction;
use super::state::{BackgroundMood, Command, GameStatus, Mood, SimulationState};
use crate::consts::*;

/// Input commands for a single tick, applied before anything moves
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn with(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub kills: Vec<KillEvent>,
    pub score_gained: u64,
    pub level_ups: u32,
    /// True only on the tick that ended the run
    pub game_over: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut SimulationState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Over is absorbing: nothing moves, input is dropped
    if state.status == GameStatus::Over {
        return outcome;
    }

    for &command in &input.commands {
        state.apply_command(command);
    }

    state.tick += 1;
    let now = state.elapsed_ms();

    for action in state.schedule.take_due(now) {
        match action {
            ScheduledAction::RevertMood => state.player.mood = Mood::Normal,
        }
    }

    motion::advance_projectiles(&mut state.projectiles);
    motion::advance_adversaries(&mut state.adversaries, state.progression.level, now);

    state.effects.retain(|e| !e.is_expired(now));

    if state.rng.random_bool(BACKGROUND_SHIFT_CHANCE) {
        state.background = BackgroundMood::sample(&mut state.rng);
        log::trace!("Background mood -> {:?}", state.background);
    }

    let kills = collision::resolve_collisions(state, now);
    for kill in &kills {
        let delta = state.combo.on_kill(kill.timestamp_ms);
        state.progression.add_score(delta);
        outcome.score_gained += delta;

        if state.progression.record_kill() {
            apply_level_up(state, now);
            outcome.level_ups += 1;
        }
    }
    if kills.is_empty() {
        state.combo.decay(now);
    }
    outcome.kills = kills;

    if state.adversaries.is_empty() && !state.stalled {
        // Grids from level 9 on hold fewer adversaries than the level needs
        state.stalled = true;
        log::warn!(
            "Field cleared at level {} with {} kills still required",
            state.progression.level,
            state.progression.remaining()
        );
    }

    if state.adversaries.iter().any(|a| a.pos.y > GAME_OVER_Y) {
        state.status = GameStatus::Over;
        outcome.game_over = true;
        log::info!(
            "Game over at tick {}: score {}, level {}, best combo x{}",
            state.tick,
            state.progression.score,
            state.progression.level,
            state.combo.best
        );
    }

    debug_assert!(
        super::invariants::check(state).is_ok(),
        "invariant violated after tick {}: {:?}",
        state.tick,
        super::invariants::check(state)
    );

    outcome
}
