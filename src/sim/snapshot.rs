//! Read-only view of the simulation for the render boundary
//!
//! Built after each tick. Never feeds back into the simulation.

use serde::Serialize;

use super::state::{
    BackgroundMood, GameStatus, Kaomoji, Mood, MovementPattern, PowerUp, SimulationState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub position: i32,
    pub mood: Mood,
    pub glyph: &'static str,
    pub power_up: PowerUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdversaryView {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub kaomoji: Kaomoji,
    pub glyph: &'static str,
    pub pattern: MovementPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectView {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub glyph: &'static str,
    /// Time since the effect appeared, for fade-out
    pub age_ms: u64,
}

/// Final figures shown once the run is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub final_score: u64,
    pub level_reached: u32,
    pub max_combo: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub elapsed_ms: u64,
    pub status: GameStatus,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub adversaries: Vec<AdversaryView>,
    pub effects: Vec<EffectView>,
    pub score: u64,
    pub level: u32,
    pub combo: u32,
    pub background: BackgroundMood,
    pub summary: Option<GameOverSummary>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let now = state.elapsed_ms();

        let summary = (state.status == GameStatus::Over).then(|| GameOverSummary {
            final_score: state.progression.score,
            level_reached: state.progression.level,
            max_combo: state.combo.best,
        });

        Self {
            tick: state.tick,
            elapsed_ms: now,
            status: state.status,
            player: PlayerView {
                position: state.player.position,
                mood: state.player.mood,
                glyph: state.player.mood.glyph(),
                power_up: state.player.power_up,
            },
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    x: p.pos.x,
                    y: p.pos.y,
                })
                .collect(),
            adversaries: state
                .adversaries
                .iter()
                .map(|a| AdversaryView {
                    id: a.id.clone(),
                    x: a.pos.x,
                    y: a.pos.y,
                    kaomoji: a.kaomoji,
                    glyph: a.kaomoji.as_str(),
                    pattern: a.pattern,
                })
                .collect(),
            effects: state
                .effects
                .iter()
                .map(|e| EffectView {
                    id: e.id.clone(),
                    x: e.pos.x,
                    y: e.pos.y,
                    glyph: e.kaomoji.as_str(),
                    age_ms: now.saturating_sub(e.timestamp_ms),
                })
                .collect(),
            score: state.progression.score,
            level: state.progression.level,
            combo: state.combo.count,
            background: state.background,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Command;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = SimulationState::new(21);
        tick(&mut state, &TickInput::with([Command::Fire]));

        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.tick, 1);
        assert_eq!(snapshot.elapsed_ms, 50);
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.player.glyph, "(っ･ω･)っ");
        assert_eq!(snapshot.projectiles, vec![ProjectileView { x: 165.0, y: 355.0 }]);
        assert_eq!(snapshot.adversaries.len(), state.adversaries.len());
        assert_eq!(snapshot.adversaries[0].id, "enemy-0-0");
        assert_eq!(snapshot.adversaries[0].glyph, state.adversaries[0].kaomoji.as_str());
        assert_eq!(snapshot.level, 1);
        assert!(snapshot.summary.is_none());
    }

    #[test]
    fn test_summary_present_when_over() {
        let mut state = SimulationState::new(21);
        state.status = GameStatus::Over;
        state.progression.score = 1234;
        state.progression.level = 3;
        state.combo.best = 6;

        let snapshot = Snapshot::capture(&state);
        assert_eq!(
            snapshot.summary,
            Some(GameOverSummary {
                final_score: 1234,
                level_reached: 3,
                max_combo: 6
            })
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(21);
        let json = serde_json::to_value(Snapshot::capture(&state)).unwrap();
        assert_eq!(json["status"], "Running");
        assert_eq!(json["level"], 1);
        assert_eq!(json["adversaries"].as_array().map(Vec::len), Some(18));
        assert!(json["summary"].is_null());
    }
}
