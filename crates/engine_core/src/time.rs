//! Time management for the game loop.

use std::time::Duration;

/// Manages frame timing and the fixed-timestep accumulator.
#[derive(Debug)]
pub struct Time {
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Fixed timestep for simulation (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Reference tick rate the per-tick simulation constants are tuned for.
    pub const REFERENCE_HZ: f32 = 60.0;

    /// Upper bound on the accumulator; excess time after a stall is dropped.
    pub const MAX_ACCUMULATED: Duration = Duration::from_millis(250);

    /// Lowest fixed rate that still ticks: one step must fit under the
    /// accumulator ceiling.
    pub fn min_fixed_rate() -> f64 {
        1.0 / Self::MAX_ACCUMULATED.as_secs_f64()
    }

    /// Create a new time manager.
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            fixed_timestep: Duration::from_secs_f64(1.0 / Self::REFERENCE_HZ as f64),
            accumulator: Duration::ZERO,
        }
    }

    /// Record a frame of the given length, as measured by the host.
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.accumulator += delta;
        if self.accumulator > Self::MAX_ACCUMULATED {
            log::warn!(
                "Frame clock fell behind by {:.3}s, dropping excess",
                (self.accumulator - Self::MAX_ACCUMULATED).as_secs_f32()
            );
            self.accumulator = Self::MAX_ACCUMULATED;
        }
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Set the fixed timestep rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}

/// Ratio of `dt` to one reference tick. Per-tick constants are multiplied by this.
pub fn tick_scale(dt: f32) -> f32 {
    dt * Time::REFERENCE_HZ
}
