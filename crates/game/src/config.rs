//! Game configuration (layout, world, tuning). Loaded from fieldwalk.ron at startup.

use engine_core::Time;
use physics::KinematicParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Session settings. Every field has a default so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Viewport width in logical pixels; used to place the on-screen controls.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    /// Viewport height in logical pixels.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// Side length of each joystick pad.
    #[serde(default = "default_pad_size")]
    pub joystick_pad_size: f32,
    /// Knob travel radius; full deflection distance.
    #[serde(default = "default_max_radius")]
    pub joystick_max_radius: f32,
    /// Radians of turn per tick for a unit look vector.
    #[serde(default = "default_look_sensitivity")]
    pub look_sensitivity: f32,

    /// Height of the ground plane (eye height of the player).
    #[serde(default = "default_ground_height")]
    pub ground_height: f32,
    #[serde(default = "default_damping")]
    pub horizontal_damping: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_thrust")]
    pub thrust: f32,
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,

    /// Number of collectibles scattered at session start.
    #[serde(default = "default_collectible_count")]
    pub collectible_count: usize,
    /// Collectibles spawn within +/- this on x and z.
    #[serde(default = "default_play_area")]
    pub play_area_half_extent: f32,
    #[serde(default = "default_collectible_height")]
    pub collectible_height: f32,
    /// Edge length of the collectible cube, for rendering.
    #[serde(default = "default_collectible_size")]
    pub collectible_size: f32,
    #[serde(default = "default_collectible_value")]
    pub collectible_value: i32,
    #[serde(default = "default_pickup_radius")]
    pub pickup_radius: f32,
    /// Fixed seed for collectible placement. `None` scatters randomly.
    #[serde(default)]
    pub spawn_seed: Option<u64>,

    /// Simulation ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f32,
}

fn default_viewport_width() -> f32 {
    1280.0
}
fn default_viewport_height() -> f32 {
    720.0
}
fn default_pad_size() -> f32 {
    140.0
}
fn default_max_radius() -> f32 {
    50.0
}
fn default_look_sensitivity() -> f32 {
    0.01
}
fn default_ground_height() -> f32 {
    10.0
}
fn default_damping() -> f32 {
    0.9
}
fn default_gravity() -> f32 {
    0.5
}
fn default_thrust() -> f32 {
    0.8
}
fn default_jump_impulse() -> f32 {
    18.0
}
fn default_collectible_count() -> usize {
    15
}
fn default_play_area() -> f32 {
    90.0
}
fn default_collectible_height() -> f32 {
    1.5
}
fn default_collectible_size() -> f32 {
    3.0
}
fn default_collectible_value() -> i32 {
    1
}
fn default_pickup_radius() -> f32 {
    5.0
}
fn default_tick_rate() -> f32 {
    60.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            joystick_pad_size: default_pad_size(),
            joystick_max_radius: default_max_radius(),
            look_sensitivity: default_look_sensitivity(),
            ground_height: default_ground_height(),
            horizontal_damping: default_damping(),
            gravity: default_gravity(),
            thrust: default_thrust(),
            jump_impulse: default_jump_impulse(),
            collectible_count: default_collectible_count(),
            play_area_half_extent: default_play_area(),
            collectible_height: default_collectible_height(),
            collectible_size: default_collectible_size(),
            collectible_value: default_collectible_value(),
            pickup_radius: default_pickup_radius(),
            spawn_seed: None,
            tick_rate: default_tick_rate(),
        }
    }
}

impl GameConfig {
    /// Load config from `fieldwalk.ron` in the current directory.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`. If the file is missing or invalid, returns default config.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(e) => log::info!("No config at {:?} ({}), using defaults", path, e),
        }
        Self::default()
    }

    /// Reject values that would break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("joystick_pad_size", self.joystick_pad_size),
            ("joystick_max_radius", self.joystick_max_radius),
            ("pickup_radius", self.pickup_radius),
            ("play_area_half_extent", self.play_area_half_extent),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        let finite = [
            ("look_sensitivity", self.look_sensitivity),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("thrust", self.thrust),
            ("jump_impulse", self.jump_impulse),
            ("collectible_height", self.collectible_height),
            ("collectible_size", self.collectible_size),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        let min_rate = Time::min_fixed_rate() as f32;
        if self.tick_rate < min_rate {
            return Err(ConfigError::TickRate {
                value: self.tick_rate,
                min: min_rate,
            });
        }
        if !(self.horizontal_damping > 0.0 && self.horizontal_damping <= 1.0) {
            return Err(ConfigError::Damping(self.horizontal_damping));
        }
        if self.collectible_value < 0 {
            return Err(ConfigError::NegativeValue(self.collectible_value));
        }
        Ok(())
    }

    /// Whether a player standing on the ground can get within pickup range of
    /// a collectible at all.
    pub fn collectibles_reachable(&self) -> bool {
        self.ground_height - self.collectible_height < self.pickup_radius
    }

    pub fn kinematic_params(&self) -> KinematicParams {
        KinematicParams {
            ground_height: self.ground_height,
            horizontal_damping: self.horizontal_damping,
            gravity: self.gravity,
            thrust: self.thrust,
            jump_impulse: self.jump_impulse,
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("fieldwalk.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GameConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.kinematic_params(), KinematicParams::default());
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let c: GameConfig = ron::from_str("(collectible_count: 40, spawn_seed: Some(7))").unwrap();
        assert_eq!(c.collectible_count, 40);
        assert_eq!(c.spawn_seed, Some(7));
        assert_eq!(c.pickup_radius, 5.0);
        assert_eq!(c.ground_height, 10.0);
    }

    #[test]
    fn zero_radius_rejected() {
        let c = GameConfig {
            joystick_max_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::NotPositive {
                field: "joystick_max_radius",
                value: 0.0
            })
        );
    }

    #[test]
    fn bad_damping_and_value_rejected() {
        let c = GameConfig {
            horizontal_damping: 1.5,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::Damping(1.5)));
        let c = GameConfig {
            collectible_value: -2,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::NegativeValue(-2)));
    }

    #[test]
    fn tick_rate_below_clock_ceiling_rejected() {
        let c = GameConfig {
            tick_rate: 2.0,
            ..Default::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::TickRate {
                value: 2.0,
                min: 4.0
            })
        );
        let c = GameConfig {
            tick_rate: 4.0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn source_heights_put_cubes_out_of_reach() {
        assert!(!GameConfig::default().collectibles_reachable());
        let c = GameConfig {
            collectible_height: 8.0,
            ..Default::default()
        };
        assert!(c.collectibles_reachable());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let c = GameConfig::load_from(Path::new("/nonexistent/fieldwalk.ron"));
        assert_eq!(c, GameConfig::default());
    }
}
