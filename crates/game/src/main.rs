//! Headless Fieldwalk run: drives a session with the autopilot at 60 frames per
//! second of simulated time and reports the score.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use game::autopilot::Autopilot;
use game::{GameConfig, Session};
use input::{ElementState, KeyCode};

/// Give up after this much simulated time.
const MAX_SECONDS: u32 = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from(&PathBuf::from(path)),
        None => GameConfig::load(),
    };
    let mut session = Session::new(config).context("invalid configuration")?;
    let mut pilot = Autopilot::new();

    let frame = Duration::from_secs_f64(1.0 / 60.0);
    let total = session.remaining();
    for n in 0..MAX_SECONDS * 60 {
        if !pilot.steer(&mut session) {
            break;
        }
        // Hop every few seconds; the jump only fires from the ground.
        if n % 180 == 0 {
            let input = session.input_mut();
            input.process_keyboard(KeyCode::Space, ElementState::Pressed);
            input.process_keyboard(KeyCode::Space, ElementState::Released);
        }
        session.frame(frame);
    }

    log::info!(
        "Collected {}/{} in {} ticks ({:.1}s), score {}",
        total - session.remaining(),
        total,
        session.ticks(),
        session.elapsed_seconds(),
        session.score()
    );
    Ok(())
}
