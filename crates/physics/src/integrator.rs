//! Per-tick kinematic integration against gravity and a flat ground.
//!
//! Constants are tuned per 1/60 s tick and scaled by [`tick_scale`], so a step
//! of exactly one reference tick reproduces them verbatim and other step
//! lengths cover the same distance per second.

use engine_core::{tick_scale, Vec2};

use crate::body::PlayerState;

/// Tuning for [`KinematicIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicParams {
    /// Height of the ground plane. The body never ends a step below it.
    pub ground_height: f32,
    /// Fraction of horizontal velocity kept per tick.
    pub horizontal_damping: f32,
    /// Downward velocity added per tick.
    pub gravity: f32,
    /// Velocity added per tick for a full-deflection move vector.
    pub thrust: f32,
    /// Vertical velocity set by a jump.
    pub jump_impulse: f32,
}

impl Default for KinematicParams {
    fn default() -> Self {
        Self {
            ground_height: 10.0,
            horizontal_damping: 0.9,
            gravity: 0.5,
            thrust: 0.8,
            jump_impulse: 18.0,
        }
    }
}

/// Owns the player body and advances it once per tick.
#[derive(Debug, Clone)]
pub struct KinematicIntegrator {
    params: KinematicParams,
    state: PlayerState,
}

impl KinematicIntegrator {
    /// Create an integrator with the player standing at the origin.
    pub fn new(params: KinematicParams) -> Self {
        Self {
            state: PlayerState::new(params.ground_height),
            params,
        }
    }

    pub fn params(&self) -> &KinematicParams {
        &self.params
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Order: damping, gravity, thrust along the current view basis, position,
    /// ground clamp, then jump. The jump fires only if this step ended on the
    /// ground, so a held request cannot re-trigger while airborne.
    /// Returns true when a jump fired.
    pub fn step(&mut self, move_vector: Vec2, jump_requested: bool, dt: f32) -> bool {
        let k = tick_scale(dt);
        let p = self.params;
        let forward = self.state.forward();
        let right = self.state.right();
        let s = &mut self.state;

        let keep = p.horizontal_damping.powf(k);
        s.velocity.x *= keep;
        s.velocity.z *= keep;
        s.velocity.y -= p.gravity * k;

        s.velocity += (forward * move_vector.y + right * move_vector.x) * p.thrust * k;
        s.position += s.velocity * k;

        s.grounded = false;
        if s.position.y < p.ground_height {
            s.position.y = p.ground_height;
            s.velocity.y = 0.0;
            s.grounded = true;
        }

        if jump_requested && s.grounded {
            s.velocity.y = p.jump_impulse;
            s.grounded = false;
            log::debug!("Jump from {:?}", s.position);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;

    const TICK: f32 = 1.0 / 60.0;

    fn integrator() -> KinematicIntegrator {
        KinematicIntegrator::new(KinematicParams::default())
    }

    #[test]
    fn jump_from_rest_then_one_step() {
        let mut k = integrator();
        assert!(k.step(Vec2::ZERO, true, TICK));
        assert!((k.state().velocity.y - 18.0).abs() < 1e-4);
        assert!(!k.state().grounded);
        assert!((k.state().position.y - 10.0).abs() < 1e-4);

        assert!(!k.step(Vec2::ZERO, false, TICK));
        assert!((k.state().position.y - 27.5).abs() < 1e-3);
        assert!((k.state().velocity.y - 17.5).abs() < 1e-3);
    }

    #[test]
    fn held_jump_does_not_refire_while_airborne() {
        let mut k = integrator();
        assert!(k.step(Vec2::ZERO, true, TICK));
        let vy = k.state().velocity.y;
        assert!(!k.step(Vec2::ZERO, true, TICK));
        assert!((k.state().velocity.y - (vy - 0.5)).abs() < 1e-3);
    }

    #[test]
    fn body_never_ends_below_ground() {
        let mut k = integrator();
        k.state_mut().pitch = -1.4;
        for i in 0..600 {
            let jump = i % 37 == 0;
            k.step(Vec2::new(0.3, 1.0), jump, TICK);
            assert!(k.state().position.y >= k.params().ground_height);
        }
    }

    #[test]
    fn lands_and_can_jump_again() {
        let mut k = integrator();
        k.step(Vec2::ZERO, true, TICK);
        let mut ticks = 0;
        while !k.state().grounded {
            k.step(Vec2::ZERO, false, TICK);
            ticks += 1;
            assert!(ticks < 200, "never landed");
        }
        assert_eq!(k.state().velocity.y, 0.0);
        assert!(k.step(Vec2::ZERO, true, TICK));
    }

    #[test]
    fn forward_thrust_follows_yaw() {
        let mut k = integrator();
        k.state_mut().yaw = std::f32::consts::FRAC_PI_2;
        k.step(Vec2::new(0.0, 1.0), false, TICK);
        let v = k.state().velocity;
        assert!((v.x + 0.8).abs() < 1e-4);
        assert!(v.z.abs() < 1e-4);
    }

    #[test]
    fn horizontal_drift_decays_without_input() {
        let mut k = integrator();
        k.state_mut().velocity = Vec3::new(5.0, 0.0, -5.0);
        k.step(Vec2::ZERO, false, TICK);
        assert!((k.state().velocity.x - 4.5).abs() < 1e-4);
        for _ in 0..200 {
            k.step(Vec2::ZERO, false, TICK);
        }
        let v = k.state().velocity;
        assert!(v.x.abs() < 1e-3 && v.z.abs() < 1e-3);
    }

    #[test]
    fn distance_per_second_is_independent_of_step_length() {
        let mut fast = integrator();
        let mut slow = integrator();
        fast.state_mut().velocity = Vec3::new(3.0, 0.0, 0.0);
        slow.state_mut().velocity = Vec3::new(3.0, 0.0, 0.0);
        for _ in 0..60 {
            fast.step(Vec2::ZERO, false, 1.0 / 60.0);
        }
        for _ in 0..30 {
            slow.step(Vec2::ZERO, false, 1.0 / 30.0);
        }
        // Damping matches exactly; position integration differs by one explicit-Euler step.
        assert!((fast.state().velocity.x - slow.state().velocity.x).abs() < 1e-3);
        assert!((fast.state().position.x - slow.state().position.x).abs() < 3.5);
    }
}
