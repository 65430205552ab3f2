//! Projectile/adversary collision detection and resolution
//!
//! Exhaustive pairwise scan. With at most 40 adversaries and a handful of
//! live shots per tick this is cheaper than maintaining a spatial index; if
//! entity counts grow, bucket adversaries by column first (results must stay
//! identical to the ordered scan below).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{DefeatEffect, Projectile, SimulationState};
use crate::consts::*;

/// An adversary destroyed by a shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    pub adversary_id: String,
    pub pos: Vec2,
    pub timestamp_ms: u64,
}

/// Axis-aligned overlap test between a shot and an adversary
#[inline]
pub fn overlaps(projectile: Vec2, adversary: Vec2) -> bool {
    let delta = (projectile - adversary).abs();
    delta.x < HIT_HALF_WIDTH && delta.y < HIT_HALF_HEIGHT
}

/// Find colliding (projectile, adversary) index pairs.
///
/// Shots are tested in list order against adversaries in list order. A shot
/// stops at its first hit and a hit adversary is not available to later shots.
pub fn find_collisions(
    projectiles: &[Projectile],
    adversary_positions: &[Vec2],
) -> Vec<(usize, usize)> {
    let mut taken = vec![false; adversary_positions.len()];
    let mut pairs = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let hit = adversary_positions
            .iter()
            .enumerate()
            .find(|&(ai, &pos)| !taken[ai] && overlaps(projectile.pos, pos))
            .map(|(ai, _)| ai);

        if let Some(ai) = hit {
            taken[ai] = true;
            pairs.push((pi, ai));
        }
    }

    pairs
}

/// Resolve this tick's collisions: remove matched shots and adversaries,
/// leave a defeat effect for each kill, and return the kills in order.
pub fn resolve_collisions(state: &mut SimulationState, now_ms: u64) -> Vec<KillEvent> {
    let positions: Vec<Vec2> = state.adversaries.iter().map(|a| a.pos).collect();
    let pairs = find_collisions(&state.projectiles, &positions);
    if pairs.is_empty() {
        return Vec::new();
    }

    let mut spent_projectiles = vec![false; state.projectiles.len()];
    let mut killed = vec![false; state.adversaries.len()];
    let mut kills = Vec::with_capacity(pairs.len());

    for &(pi, ai) in &pairs {
        spent_projectiles[pi] = true;
        killed[ai] = true;

        let adversary = &state.adversaries[ai];
        state
            .effects
            .push(DefeatEffect::from_adversary(adversary, now_ms));
        kills.push(KillEvent {
            adversary_id: adversary.id.clone(),
            pos: adversary.pos,
            timestamp_ms: now_ms,
        });
    }

    let mut index = 0;
    state.projectiles.retain(|_| {
        let keep = !spent_projectiles[index];
        index += 1;
        keep
    });

    let mut index = 0;
    state.adversaries.retain(|_| {
        let keep = !killed[index];
        index += 1;
        keep
    });

    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Adversary, AdversaryKind, Kaomoji, MovementPattern};

    fn adversary(id: &str, x: f32, y: f32) -> Adversary {
        Adversary {
            id: id.to_string(),
            pos: Vec2::new(x, y),
            kind: AdversaryKind::Angry,
            kaomoji: Kaomoji::Fuming,
            pattern: MovementPattern::Normal,
        }
    }

    fn shot(x: f32, y: f32) -> Projectile {
        Projectile { pos: Vec2::new(x, y) }
    }

    #[test]
    fn test_overlap_rule() {
        assert!(overlaps(Vec2::new(100.0, 100.0), Vec2::new(110.0, 110.0)));
        assert!(!overlaps(Vec2::new(100.0, 100.0), Vec2::new(100.0, 200.0)));
        // Edges are exclusive
        assert!(!overlaps(Vec2::new(100.0, 100.0), Vec2::new(130.0, 100.0)));
        assert!(!overlaps(Vec2::new(100.0, 100.0), Vec2::new(100.0, 120.0)));
        assert!(overlaps(Vec2::new(100.0, 100.0), Vec2::new(70.5, 80.5)));
    }

    #[test]
    fn test_adversary_taken_once_per_tick() {
        let shots = [shot(100.0, 100.0), shot(105.0, 100.0)];
        let positions = [Vec2::new(100.0, 100.0)];
        assert_eq!(find_collisions(&shots, &positions), vec![(0, 0)]);
    }

    #[test]
    fn test_shot_stops_at_first_hit() {
        let shots = [shot(100.0, 100.0)];
        let positions = [Vec2::new(90.0, 100.0), Vec2::new(110.0, 100.0)];
        assert_eq!(find_collisions(&shots, &positions), vec![(0, 0)]);
    }

    #[test]
    fn test_second_shot_falls_through_to_next_adversary() {
        let shots = [shot(100.0, 100.0), shot(100.0, 100.0)];
        let positions = [Vec2::new(90.0, 100.0), Vec2::new(110.0, 100.0)];
        assert_eq!(find_collisions(&shots, &positions), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_resolve_removes_matched_entities() {
        let mut state = SimulationState::new(3);
        state.adversaries = vec![
            adversary("enemy-0-0", 100.0, 100.0),
            adversary("enemy-1-0", 200.0, 100.0),
            adversary("enemy-2-0", 300.0, 100.0),
        ];
        state.projectiles = vec![shot(10.0, 300.0), shot(205.0, 95.0), shot(295.0, 110.0)];

        let kills = resolve_collisions(&mut state, 750);

        let ids: Vec<&str> = kills.iter().map(|k| k.adversary_id.as_str()).collect();
        assert_eq!(ids, vec!["enemy-1-0", "enemy-2-0"]);
        assert!(kills.iter().all(|k| k.timestamp_ms == 750));
        assert_eq!(kills[0].pos, Vec2::new(200.0, 100.0));
        assert_eq!(kills[1].pos, Vec2::new(300.0, 100.0));

        assert_eq!(state.adversaries.len(), 1);
        assert_eq!(state.adversaries[0].id, "enemy-0-0");
        assert_eq!(state.projectiles, vec![shot(10.0, 300.0)]);

        assert_eq!(state.effects.len(), 2);
        assert_eq!(state.effects[0].id, "enemy-1-0");
        assert_eq!(state.effects[0].kaomoji, Kaomoji::Victory);
        assert_eq!(state.effects[1].timestamp_ms, 750);
    }

    #[test]
    fn test_resolve_without_hits_is_noop() {
        let mut state = SimulationState::new(3);
        let before = state.adversaries.clone();
        state.projectiles = vec![shot(10.0, 355.0)];
        assert!(resolve_collisions(&mut state, 50).is_empty());
        assert_eq!(state.adversaries, before);
        assert_eq!(state.projectiles.len(), 1);
        assert!(state.effects.is_empty());
    }
}
