//! Demo mode - the simulation plays itself
//!
//! Produces ordinary commands, so a demo run goes through the same input
//! path as a human player.

use std::cmp::Ordering;

use super::state::{Command, SimulationState};
use crate::consts::*;

/// Ticks between autopilot shots
pub const FIRE_INTERVAL_TICKS: u64 = 4;

/// Decide this tick's commands: chase the lowest adversary the player can
/// reach and fire once lined up under it.
pub fn plan(state: &SimulationState) -> Vec<Command> {
    if state.is_over() {
        return Vec::new();
    }

    let shot_x = state.player.position as f32 + PROJECTILE_X_OFFSET;
    let min_x = PLAYER_MIN_X as f32 + PROJECTILE_X_OFFSET - HIT_HALF_WIDTH;
    let max_x = PLAYER_MAX_X as f32 + PROJECTILE_X_OFFSET + HIT_HALF_WIDTH;

    // Lowest first, nearest column breaks ties
    let target = state
        .adversaries
        .iter()
        .filter(|a| a.pos.x > min_x && a.pos.x < max_x)
        .min_by(|a, b| {
            b.pos
                .y
                .total_cmp(&a.pos.y)
                .then_with(|| {
                    (a.pos.x - shot_x)
                        .abs()
                        .partial_cmp(&(b.pos.x - shot_x).abs())
                        .unwrap_or(Ordering::Equal)
                })
        });

    let Some(target) = target else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(2);
    let offset = target.pos.x - shot_x;
    if offset.abs() > state.player.step() as f32 / 2.0 {
        commands.push(if offset < 0.0 {
            Command::MoveLeft
        } else {
            Command::MoveRight
        });
    }
    if offset.abs() < HIT_HALF_WIDTH / 2.0 && state.tick % FIRE_INTERVAL_TICKS == 0 {
        commands.push(Command::Fire);
    }
    commands
}
