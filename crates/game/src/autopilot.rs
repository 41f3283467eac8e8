//! Scripted player for headless runs: steers toward the nearest collectible by
//! dragging the on-screen sticks, the same way a touch player would.

use engine_core::{Vec2, Vec3};
use input::TouchPhase;
use std::f32::consts::{PI, TAU};

use crate::session::Session;

const MOVE_TOUCH: u64 = 1;
const LOOK_TOUCH: u64 = 2;

/// Drives a [`Session`] through its input surface.
#[derive(Debug, Default)]
pub struct Autopilot {
    engaged: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stick drags for the next frame. Returns false once nothing is
    /// left to collect (sticks are released).
    pub fn steer(&mut self, session: &mut Session) -> bool {
        let player = *session.player();
        let Some(target) = nearest(player.position, &session.active_collectibles()) else {
            self.release(session);
            return false;
        };

        let to = target - player.position;
        // Forward is (-sin yaw, 0, -cos yaw).
        let desired = (-to.x).atan2(-to.z);
        let err = wrap_angle(desired - player.yaw);

        // Positive look x decreases yaw.
        let look_x = (-err * 10.0).clamp(-1.0, 1.0);
        // Turn in place when off-heading, ease off near the target so momentum
        // does not carry the player through the pickup radius.
        let push = if err.abs() < 0.3 {
            (flat_distance(player.position, target) / 40.0).clamp(0.2, 1.0)
        } else {
            0.0
        };

        let input = session.input_mut();
        let move_c = input.move_stick().layout().center();
        let look_c = input.look_stick().layout().center();
        let r = input.move_stick().layout().max_radius;
        let move_p = move_c + Vec2::new(0.0, -push * r);
        let look_p = look_c + Vec2::new(look_x * r, 0.0);

        if !self.engaged {
            input.touch(MOVE_TOUCH, TouchPhase::Started, move_c);
            input.touch(LOOK_TOUCH, TouchPhase::Started, look_c);
            self.engaged = true;
        }
        input.touch(MOVE_TOUCH, TouchPhase::Moved, move_p);
        input.touch(LOOK_TOUCH, TouchPhase::Moved, look_p);
        true
    }

    /// Lift both fingers.
    pub fn release(&mut self, session: &mut Session) {
        if self.engaged {
            let input = session.input_mut();
            input.touch(MOVE_TOUCH, TouchPhase::Ended, Vec2::ZERO);
            input.touch(LOOK_TOUCH, TouchPhase::Ended, Vec2::ZERO);
            self.engaged = false;
        }
    }
}

fn nearest(from: Vec3, candidates: &[Vec3]) -> Option<Vec3> {
    candidates.iter().copied().min_by(|a, b| {
        flat_distance(from, *a).total_cmp(&flat_distance(from, *b))
    })
}

fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(b.x - a.x, b.z - a.z).length()
}

fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
