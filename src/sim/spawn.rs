//! Adversary grid generation
//!
//! The grid grows with level up to a 5x8 cap. Glyph and movement pattern are
//! drawn per adversary from the injected RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Adversary, AdversaryKind, Kaomoji, MovementPattern};
use crate::consts::*;

/// Grid size for a level as (rows, cols)
pub fn grid_dimensions(level: u32) -> (u32, u32) {
    let rows = (GRID_BASE_ROWS + level / 2).min(GRID_MAX_ROWS);
    let cols = (GRID_BASE_COLS + level / 3).min(GRID_MAX_COLS);
    (rows, cols)
}

/// Build the full adversary grid for a level, column by column.
///
/// The caller replaces its live collection with the result; grids are never
/// merged.
pub fn spawn_adversaries<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Vec<Adversary> {
    let (rows, cols) = grid_dimensions(level);
    let mut adversaries = Vec::with_capacity((rows * cols) as usize);

    for col in 0..cols {
        for row in 0..rows {
            let kaomoji = Kaomoji::ANGRY[rng.random_range(0..Kaomoji::ANGRY.len())];
            let pattern = if rng.random_bool(ZIGZAG_CHANCE) {
                MovementPattern::Zigzag
            } else {
                MovementPattern::Normal
            };

            adversaries.push(Adversary {
                id: format!("enemy-{col}-{row}"),
                pos: Vec2::new(
                    col as f32 * GRID_SPACING_X + GRID_OFFSET_X,
                    row as f32 * GRID_SPACING_Y + GRID_OFFSET_Y,
                ),
                kind: AdversaryKind::Angry,
                kaomoji,
                pattern,
            });
        }
    }

    log::debug!(
        "Level {} grid: {}x{} ({} adversaries)",
        level,
        rows,
        cols,
        adversaries.len()
    );
    adversaries
}
