//! Per-tick motion for projectiles and adversaries, plus event-driven player moves
//!
//! Adversary oscillation is a function of simulated elapsed time, never wall
//! time, so runs replay identically.

use super::state::{Adversary, MovementPattern, PlayerState, Projectile};
use crate::consts::*;

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Move the player one step, clamped to the playfield
pub fn move_player(player: &mut PlayerState, direction: Direction) {
    let delta = match direction {
        Direction::Left => -player.step(),
        Direction::Right => player.step(),
    };
    player.position = (player.position + delta).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
}

/// Advance shots upward and drop those that left the top of the field.
/// Returns the number pruned.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>) -> usize {
    let before = projectiles.len();
    for projectile in projectiles.iter_mut() {
        projectile.pos.y -= PROJECTILE_SPEED;
    }
    projectiles.retain(|p| p.pos.y > 0.0);
    before - projectiles.len()
}

/// Vertical descent per tick; strictly increasing with level
pub fn descent_rate(level: u32) -> f32 {
    ADVERSARY_BASE_SPEED * (0.2 + level as f32 * 0.05)
}

/// Horizontal offset for one tick.
///
/// Zigzag adversaries share a global phase; normal ones are phased by their
/// own row height so the grid ripples instead of moving in lockstep.
pub fn horizontal_drift(pattern: MovementPattern, elapsed_ms: u64, y: f32) -> f32 {
    let t = elapsed_ms as f64;
    let drift = match pattern {
        MovementPattern::Zigzag => (t / 500.0).sin() * 3.0,
        MovementPattern::Normal => (t / 1000.0 + y as f64).sin() * 2.0,
    };
    drift as f32
}

/// Move every adversary for the tick at `elapsed_ms`
pub fn advance_adversaries(adversaries: &mut [Adversary], level: u32, elapsed_ms: u64) {
    let descent = descent_rate(level);
    for adversary in adversaries.iter_mut() {
        adversary.pos.x += horizontal_drift(adversary.pattern, elapsed_ms, adversary.pos.y);
        adversary.pos.y += descent;
    }
}
