//! Runner settings
//!
//! Loaded from a JSON file for the headless binary. Gameplay constants are
//! fixed in `consts`; these only control how a run is driven.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Headless runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed (None = derive from the system clock)
    pub seed: Option<u64>,
    /// Let the demo pilot play
    pub autopilot: bool,
    /// Stop after this many ticks even if the run is still going
    pub max_ticks: u64,
    /// Pace ticks at wall-clock speed instead of running flat out
    pub realtime: bool,
    /// Log a progress line every N ticks (0 = never)
    pub report_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            // Five minutes of play at 20 Hz
            max_ticks: 5 * 60 * 20,
            realtime: false,
            report_every: 200,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::debug!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Seed to run with
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
