//! One play session: owns all mutable game state and drives it frame by frame.
//!
//! Each fixed tick runs, in order: kinematic step (move stick + pending jump),
//! look, then pickup detection. The host feeds input events between frames
//! through [`Session::input_mut`] and reads camera/collectible state for
//! rendering after each frame.

use std::time::Duration;

use engine_core::{Time, Transform, TransformRaw, Vec3, Visibility, World};
use input::{ControlLayout, InputState};
use physics::{KinematicIntegrator, PlayerState};

use crate::camera::{CameraController, CameraUniform};
use crate::collectible::{Collectible, CollectibleDetector};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::spawner::CollectibleSpawner;

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    /// Points gained this tick.
    pub gained: i32,
}

pub struct Session {
    config: GameConfig,
    time: Time,
    input: InputState,
    body: KinematicIntegrator,
    camera: CameraController,
    detector: CollectibleDetector,
    world: World,
    score: i32,
    ticks: u64,
}

impl Session {
    /// Validate `config`, place the player on the ground and scatter collectibles.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut time = Time::new();
        time.set_fixed_rate(config.tick_rate as f64);

        let layout = ControlLayout::for_viewport(
            config.viewport_width,
            config.viewport_height,
            config.joystick_pad_size,
            config.joystick_max_radius,
        );

        let mut world = World::new();
        let mut spawner = CollectibleSpawner::new(
            config.play_area_half_extent,
            config.collectible_height,
            config.collectible_value,
            config.spawn_seed,
        );
        spawner.spawn(&mut world, config.collectible_count);

        if !config.collectibles_reachable() {
            log::warn!(
                "Collectibles at y={} are beyond pickup radius {} from ground height {}",
                config.collectible_height,
                config.pickup_radius,
                config.ground_height
            );
        }
        log::info!(
            "Session started: {} collectibles, ground at {}",
            config.collectible_count,
            config.ground_height
        );

        Ok(Self {
            time,
            input: InputState::new(layout),
            body: KinematicIntegrator::new(config.kinematic_params()),
            camera: CameraController::new(config.look_sensitivity),
            detector: CollectibleDetector::new(config.pickup_radius),
            world,
            score: 0,
            ticks: 0,
            config,
        })
    }

    /// Advance by one rendered frame of length `dt`, running as many fixed
    /// ticks as have accumulated. Returns the number of ticks run.
    pub fn frame(&mut self, dt: Duration) -> u32 {
        self.time.advance(dt);
        let mut ran = 0;
        while self.time.should_fixed_update() {
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Run exactly one fixed tick.
    pub fn tick(&mut self) -> TickReport {
        let dt = self.time.fixed_timestep_seconds();
        let jump = self.input.take_jump();
        let jumped = self.body.step(self.input.move_vector(), jump, dt);
        self.camera.apply_look(self.body.state_mut(), self.input.look_vector(), dt);

        let gained = self.detector.detect(self.body.state().position, &mut self.world);
        if gained > 0 {
            self.score += gained;
            log::info!("Score: {}", self.score);
        }
        self.ticks += 1;
        TickReport { jumped, gained }
    }

    /// Host-side access for feeding input events.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn player(&self) -> &PlayerState {
        self.body.state()
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        self.body.state_mut()
    }

    /// Points collected so far. Never decreases.
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Host time fed through [`Session::frame`], in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.time.elapsed_seconds()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an extra collectible outside the scattered layout.
    #[cfg(test)]
    pub(crate) fn spawn_collectible(&mut self, position: Vec3, value: i32) -> engine_core::Entity {
        self.world.spawn((Collectible::new(position, value), Visibility::visible()))
    }

    /// Collectibles not yet picked up.
    pub fn remaining(&self) -> usize {
        self.world
            .query::<&Collectible>()
            .iter()
            .filter(|(_, c)| c.active)
            .count()
    }

    /// Positions of active collectibles.
    pub fn active_collectibles(&self) -> Vec<Vec3> {
        self.world
            .query::<&Collectible>()
            .iter()
            .filter(|(_, c)| c.active)
            .map(|(_, c)| c.position)
            .collect()
    }

    /// Camera for the renderer.
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform::from_player(self.body.state())
    }

    /// Instance transforms of every collectible that should be drawn.
    pub fn collectible_instances(&self) -> Vec<TransformRaw> {
        let size = self.config.collectible_size;
        self.world
            .query::<(&Collectible, &Visibility)>()
            .iter()
            .filter(|(_, (_, vis))| vis.is_visible())
            .map(|(_, (c, _))| {
                TransformRaw::from(Transform::from_position(c.position).with_uniform_scale(size))
            })
            .collect()
    }
}
