//! Simulation invariant violations
//!
//! The simulation has no recoverable errors. These describe states that should
//! be unreachable; the checker in `sim::invariants` reports them to tests and
//! debug builds.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    DuplicateAdversaryId { id: String },
    NonFiniteCoordinate { entity: &'static str, index: usize },
    PlayerOutOfBounds { position: i32 },
    LevelZero,
    LevelThresholdPassed { defeated: u32, threshold: u32 },
    StaleCombo { count: u32, idle_ms: u64 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAdversaryId { id } => write!(f, "duplicate adversary id {id}"),
            Self::NonFiniteCoordinate { entity, index } => {
                write!(f, "non-finite coordinate on {entity} #{index}")
            }
            Self::PlayerOutOfBounds { position } => {
                write!(f, "player position {position} outside playfield")
            }
            Self::LevelZero => write!(f, "level must start at 1"),
            Self::LevelThresholdPassed {
                defeated,
                threshold,
            } => write!(
                f,
                "{defeated} kills recorded against a level threshold of {threshold}"
            ),
            Self::StaleCombo { count, idle_ms } => {
                write!(f, "combo x{count} still live after {idle_ms}ms without a kill")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
