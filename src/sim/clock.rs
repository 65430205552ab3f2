//! Fixed-interval driver
//!
//! [`SimulationClock`] owns the state, buffers commands from the input
//! boundary, and converts elapsed wall time into whole ticks.

use std::collections::VecDeque;

use super::snapshot::Snapshot;
use super::state::{Command, SimulationState};
use super::tick::{TickInput, TickOutcome, tick};
use crate::consts::{MAX_SUBSTEPS, TICK_MS};

pub struct SimulationClock {
    state: SimulationState,
    accumulator_ms: u64,
    pending: VecDeque<Command>,
}

impl SimulationClock {
    pub fn new(seed: u64) -> Self {
        Self::from_state(SimulationState::new(seed))
    }

    pub fn from_state(state: SimulationState) -> Self {
        Self {
            state,
            accumulator_ms: 0,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Queue a command for the next tick boundary
    pub fn push_command(&mut self, command: Command) {
        if self.state.is_over() {
            return;
        }
        self.pending.push_back(command);
    }

    /// Commands waiting for the next tick
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Run exactly one tick, consuming every queued command
    pub fn step(&mut self) -> TickOutcome {
        let input = TickInput {
            commands: self.pending.drain(..).collect(),
        };
        tick(&mut self.state, &input)
    }

    /// Feed elapsed wall time and run the ticks it covers.
    ///
    /// Long frames are clamped so at most `MAX_SUBSTEPS` ticks run per call;
    /// the remainder carries into the next call. Returns the ticks run.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        if self.state.is_over() {
            self.accumulator_ms = 0;
            return 0;
        }

        let max_frame_ms = TICK_MS * MAX_SUBSTEPS as u64;
        self.accumulator_ms += elapsed_ms.min(max_frame_ms);

        let mut substeps = 0;
        while self.accumulator_ms >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator_ms -= TICK_MS;
            substeps += 1;

            if self.state.is_over() {
                self.accumulator_ms = 0;
                self.pending.clear();
                break;
            }
        }
        substeps
    }

    /// Tick until the run ends or `max_ticks` total ticks have elapsed.
    /// Returns the final tick count.
    pub fn run_until_over(&mut self, max_ticks: u64) -> u64 {
        while !self.state.is_over() && self.state.tick < max_ticks {
            self.step();
        }
        self.state.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }
}
