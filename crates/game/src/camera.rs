//! First-person look control and the camera data handed to the renderer.

use bytemuck::{Pod, Zeroable};
use engine_core::{tick_scale, Vec2};
use physics::PlayerState;
use std::f32::consts::FRAC_PI_2;

/// Turns look-stick deflection into yaw/pitch changes.
#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    /// Radians per tick for a unit look vector.
    pub sensitivity: f32,
    /// Pitch stays this far short of straight up/down.
    pub pitch_margin: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            sensitivity: 0.01,
            pitch_margin: 0.1,
        }
    }
}

impl CameraController {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Largest pitch magnitude allowed.
    pub fn max_pitch(&self) -> f32 {
        FRAC_PI_2 - self.pitch_margin
    }

    /// Apply one tick of look input. Stick right turns right, stick down looks down.
    pub fn apply_look(&self, player: &mut PlayerState, look: Vec2, dt: f32) {
        let k = tick_scale(dt) * self.sensitivity;
        player.yaw -= look.x * k;
        player.pitch -= look.y * k;

        // Clamp pitch to prevent flipping
        let max_pitch = self.max_pitch();
        player.pitch = player.pitch.clamp(-max_pitch, max_pitch);
    }
}

/// Camera data for the renderer. Projection is owned by the renderer since it
/// depends on the viewport.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub position: [f32; 4], // w unused, padding
}

impl CameraUniform {
    pub fn from_player(player: &PlayerState) -> Self {
        let view = player.view_transform().view_matrix();
        let p = player.position;
        Self {
            view: view.to_cols_array_2d(),
            position: [p.x, p.y, p.z, 1.0],
        }
    }
}
