//! Time-windowed combo scoring

use serde::{Deserialize, Serialize};

use crate::consts::{ADVERSARY_POINTS, COMBO_WINDOW_MS};

/// Combo counter state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboState {
    /// Kills in the current chain (0 = no chain)
    pub count: u32,
    /// Simulated time of the most recent kill
    pub last_kill_ms: Option<u64>,
    /// Highest count reached this run
    pub best: u32,
}

impl ComboState {
    /// Register a kill and return the points it is worth.
    ///
    /// A kill inside the window extends the chain, otherwise a new chain of
    /// one starts. The window re-arms from this kill either way.
    pub fn on_kill(&mut self, now_ms: u64) -> u64 {
        let chained = self
            .last_kill_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < COMBO_WINDOW_MS);

        self.count = if chained { self.count + 1 } else { 1 };
        self.last_kill_ms = Some(now_ms);
        self.best = self.best.max(self.count);

        score_for_combo(self.count)
    }

    /// Whether the window since the last kill has fully lapsed
    pub fn window_lapsed(&self, now_ms: u64) -> bool {
        self.last_kill_ms
            .is_some_and(|last| now_ms.saturating_sub(last) > COMBO_WINDOW_MS)
    }

    /// Drop the chain once the window lapses. Call on ticks without kills.
    /// Returns true if a live chain was reset.
    pub fn decay(&mut self, now_ms: u64) -> bool {
        if self.count > 0 && self.window_lapsed(now_ms) {
            log::trace!("Combo x{} expired at {}ms", self.count, now_ms);
            self.count = 0;
            return true;
        }
        false
    }
}

/// Points for a kill at the given chain length: base * (1 + count * 0.5)
pub fn score_for_combo(count: u32) -> u64 {
    // Integer form of the multiplier; exact because the base is even
    ADVERSARY_POINTS * (2 + count as u64) / 2
}
