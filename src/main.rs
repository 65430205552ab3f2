//! Emotion Battle entry point
//!
//! Runs the simulation headless and prints the final snapshot as JSON.
//! Usage: `emotion-battle [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use emotion_battle::Settings;
    use emotion_battle::consts::TICK_MS;
    use emotion_battle::sim::{SimulationClock, autopilot};

    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.resolved_seed();
    log::info!("Emotion Battle (headless) starting with seed {}", seed);

    let mut clock = SimulationClock::new(seed);
    let tick_interval = Duration::from_millis(TICK_MS);
    let mut last_frame = Instant::now();

    while !clock.state().is_over() && clock.state().tick < settings.max_ticks {
        if settings.autopilot {
            for command in autopilot::plan(clock.state()) {
                clock.push_command(command);
            }
        }

        if settings.realtime {
            std::thread::sleep(tick_interval);
            let now = Instant::now();
            let elapsed = now.duration_since(last_frame).as_millis() as u64;
            last_frame = now;
            clock.advance(elapsed);
        } else {
            clock.step();
        }

        let state = clock.state();
        if settings.report_every > 0 && state.tick % settings.report_every == 0 {
            log::info!(
                "tick {}: score {}, level {}, combo x{}, {} adversaries",
                state.tick,
                state.progression.score,
                state.progression.level,
                state.combo.count,
                state.adversaries.len()
            );
        }
    }

    match serde_json::to_string_pretty(&clock.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native only
}
