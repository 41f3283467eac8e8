//! Player body state shared by the integrator and the camera controller.

use engine_core::{Transform, Vec3};

/// Position, velocity and view orientation of the player.
///
/// Velocity is measured in world units per reference tick (1/60 s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Rotation about world Y in radians. Unbounded.
    pub yaw: f32,
    /// Rotation about the local X axis in radians.
    pub pitch: f32,
    /// True when the last step ended resting on the ground.
    pub grounded: bool,
}

impl PlayerState {
    /// Spawn at the world origin, standing on the ground.
    pub fn new(ground_height: f32) -> Self {
        Self::at(Vec3::new(0.0, ground_height, 0.0))
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            grounded: true,
        }
    }

    /// Camera transform for the current position and orientation.
    pub fn view_transform(&self) -> Transform {
        Transform::from_yaw_pitch(self.position, self.yaw, self.pitch)
    }

    /// Unit forward vector of the view.
    pub fn forward(&self) -> Vec3 {
        self.view_transform().forward()
    }

    /// Unit right vector of the view.
    pub fn right(&self) -> Vec3 {
        self.view_transform().right()
    }
}
