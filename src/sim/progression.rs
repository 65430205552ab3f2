//! Score, level and level-up side effects

use serde::{Deserialize, Serialize};

use super::schedule::ScheduledAction;
use super::spawn::spawn_adversaries;
use super::state::{Mood, SimulationState};
use crate::consts::LEVEL_UP_MOOD_MS;

/// Kills needed to clear a level
pub fn kills_to_advance(level: u32) -> u32 {
    15 + level * 3
}

/// Score and level tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub score: u64,
    /// Starts at 1, only ever increases
    pub level: u32,
    /// Kills since the last level-up
    pub defeated_this_level: u32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            defeated_this_level: 0,
        }
    }
}

impl ProgressionState {
    pub fn add_score(&mut self, delta: u64) {
        self.score = self.score.saturating_add(delta);
    }

    /// Count a kill. Returns true if it completed the level, in which case the
    /// level has already advanced and the counter reset.
    pub fn record_kill(&mut self) -> bool {
        self.defeated_this_level += 1;
        if self.defeated_this_level >= kills_to_advance(self.level) {
            self.level += 1;
            self.defeated_this_level = 0;
            return true;
        }
        false
    }

    /// Kills still needed on the current level
    pub fn remaining(&self) -> u32 {
        kills_to_advance(self.level).saturating_sub(self.defeated_this_level)
    }
}

/// Apply the side effects of a level-up that `record_kill` just reported:
/// fresh grid, celebratory mood, and a (superseding) mood revert.
pub fn apply_level_up(state: &mut SimulationState, now_ms: u64) {
    let level = state.progression.level;
    state.adversaries = spawn_adversaries(level, &mut state.rng);
    state.stalled = false;

    state.player.mood = Mood::Happy;
    let superseded = state
        .schedule
        .schedule(ScheduledAction::RevertMood, now_ms + LEVEL_UP_MOOD_MS);

    log::info!(
        "Level up! Now level {} (score {}, {} adversaries)",
        level,
        state.progression.score,
        state.adversaries.len()
    );
    if superseded {
        log::debug!("Pending mood revert superseded by new level-up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::grid_dimensions;

    #[test]
    fn test_threshold_formula() {
        assert_eq!(kills_to_advance(1), 18);
        assert_eq!(kills_to_advance(2), 21);
        assert_eq!(kills_to_advance(10), 45);
    }

    #[test]
    fn test_level_up_on_eighteenth_kill() {
        let mut progression = ProgressionState::default();
        for _ in 0..17 {
            assert!(!progression.record_kill());
        }
        assert_eq!(progression.level, 1);
        assert_eq!(progression.remaining(), 1);

        assert!(progression.record_kill());
        assert_eq!(progression.level, 2);
        assert_eq!(progression.defeated_this_level, 0);
        assert_eq!(progression.remaining(), 21);
    }

    #[test]
    fn test_score_saturates() {
        let mut progression = ProgressionState {
            score: u64::MAX - 10,
            ..Default::default()
        };
        progression.add_score(100);
        assert_eq!(progression.score, u64::MAX);
    }

    #[test]
    fn test_apply_level_up_respawns_and_celebrates() {
        let mut state = SimulationState::new(11);
        state.adversaries.truncate(2);
        state.progression.level = 2;

        apply_level_up(&mut state, 4000);

        let (rows, cols) = grid_dimensions(2);
        assert_eq!(state.adversaries.len(), (rows * cols) as usize);
        assert_eq!(state.player.mood, Mood::Happy);
        assert_eq!(
            state.schedule.pending(ScheduledAction::RevertMood),
            Some(6000)
        );

        // A second level-up replaces the pending revert instead of stacking
        state.progression.level = 3;
        apply_level_up(&mut state, 5000);
        assert_eq!(state.schedule.len(), 1);
        assert_eq!(
            state.schedule.pending(ScheduledAction::RevertMood),
            Some(7000)
        );
    }
}
