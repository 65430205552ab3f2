//! Consistency checks over a whole simulation state

use std::collections::HashSet;

use super::progression::kills_to_advance;
use super::state::SimulationState;
use crate::consts::{PLAYER_MAX_X, PLAYER_MIN_X};
use crate::error::InvariantViolation;

/// Check the state invariants that must hold between ticks
pub fn check(state: &SimulationState) -> Result<(), InvariantViolation> {
    let mut ids = HashSet::with_capacity(state.adversaries.len());
    for (index, adversary) in state.adversaries.iter().enumerate() {
        if !ids.insert(adversary.id.as_str()) {
            return Err(InvariantViolation::DuplicateAdversaryId {
                id: adversary.id.clone(),
            });
        }
        if !adversary.pos.is_finite() {
            return Err(InvariantViolation::NonFiniteCoordinate {
                entity: "adversary",
                index,
            });
        }
    }

    if let Some(index) = state.projectiles.iter().position(|p| !p.pos.is_finite()) {
        return Err(InvariantViolation::NonFiniteCoordinate {
            entity: "projectile",
            index,
        });
    }

    if !(PLAYER_MIN_X..=PLAYER_MAX_X).contains(&state.player.position) {
        return Err(InvariantViolation::PlayerOutOfBounds {
            position: state.player.position,
        });
    }

    let progression = &state.progression;
    if progression.level == 0 {
        return Err(InvariantViolation::LevelZero);
    }
    let threshold = kills_to_advance(progression.level);
    if progression.defeated_this_level >= threshold {
        return Err(InvariantViolation::LevelThresholdPassed {
            defeated: progression.defeated_this_level,
            threshold,
        });
    }

    let now = state.elapsed_ms();
    if state.combo.count > 0 && state.combo.window_lapsed(now) {
        let idle_ms = state
            .combo
            .last_kill_ms
            .map_or(0, |last| now.saturating_sub(last));
        return Err(InvariantViolation::StaleCombo {
            count: state.combo.count,
            idle_ms,
        });
    }

    Ok(())
}
