//! Touch and pointer input for the on-screen controls.
//!
//! Two virtual joysticks (move, look) and a jump button. Input is sampled:
//! events overwrite the current stick state and only the latest value is seen
//! by the next frame. The jump request is latched and consumed exactly once.

pub mod joystick;

pub use joystick::*;

use glam::Vec2;
use std::collections::HashMap;

/// Pointer id used for the mouse, which behaves like a single touch.
pub const MOUSE_POINTER_ID: u64 = u64::MAX;

/// Circular on-screen button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRegion {
    pub center: Vec2,
    pub radius: f32,
}

impl ButtonRegion {
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// Placement of all on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLayout {
    pub move_pad: JoystickLayout,
    pub look_pad: JoystickLayout,
    pub jump_button: ButtonRegion,
}

impl ControlLayout {
    /// Move pad bottom-left, look pad bottom-right, jump button above the look pad.
    pub fn for_viewport(width: f32, height: f32, pad_size: f32, max_radius: f32) -> Self {
        let margin = 20.0;
        let top = height - pad_size - margin;
        let look_left = width - pad_size - margin;
        Self {
            move_pad: JoystickLayout::new(Vec2::new(margin, top), pad_size, max_radius),
            look_pad: JoystickLayout::new(Vec2::new(look_left, top), pad_size, max_radius),
            jump_button: ButtonRegion {
                center: Vec2::new(look_left + pad_size * 0.5, top - margin - 35.0),
                radius: 35.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    Move,
    Look,
    Jump,
}

/// Manages input state for the current frame.
#[derive(Debug)]
pub struct InputState {
    move_stick: Joystick,
    look_stick: Joystick,
    jump_button: ButtonRegion,
    /// Which control each live pointer started on.
    claims: HashMap<u64, Claim>,
    /// Pending jump, cleared by [`InputState::take_jump`].
    jump_latch: bool,
    jump_key_held: bool,
    mouse_position: Vec2,
    mouse_down: bool,
}

impl InputState {
    /// Look stick output is this many times the move stick's.
    pub const LOOK_SENSITIVITY: f32 = 2.0;

    pub fn new(layout: ControlLayout) -> Self {
        Self {
            move_stick: Joystick::new(layout.move_pad, 1.0),
            look_stick: Joystick::new(layout.look_pad, Self::LOOK_SENSITIVITY),
            jump_button: layout.jump_button,
            claims: HashMap::new(),
            jump_latch: false,
            jump_key_held: false,
            mouse_position: Vec2::ZERO,
            mouse_down: false,
        }
    }

    fn is_claimed(&self, claim: Claim) -> bool {
        self.claims.values().any(|c| *c == claim)
    }

    /// Route one pointer event. A pointer keeps the control it started on
    /// until it ends, even if it wanders off that control.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started => {
                if self.claims.contains_key(&id) {
                    return;
                }
                if self.move_stick.layout().contains(position) && !self.is_claimed(Claim::Move) {
                    self.claims.insert(id, Claim::Move);
                    self.move_stick.drag_start(position);
                } else if self.look_stick.layout().contains(position)
                    && !self.is_claimed(Claim::Look)
                {
                    self.claims.insert(id, Claim::Look);
                    self.look_stick.drag_start(position);
                } else if self.jump_button.contains(position) {
                    self.claims.insert(id, Claim::Jump);
                    self.jump_latch = true;
                }
                if let Some(claim) = self.claims.get(&id) {
                    log::trace!("Pointer {} claimed {:?}", id, claim);
                }
            }
            TouchPhase::Moved => match self.claims.get(&id) {
                Some(Claim::Move) => self.move_stick.drag_move(position),
                Some(Claim::Look) => self.look_stick.drag_move(position),
                _ => {}
            },
            TouchPhase::Ended | TouchPhase::Cancelled => match self.claims.remove(&id) {
                Some(Claim::Move) => self.move_stick.drag_end(),
                Some(Claim::Look) => self.look_stick.drag_end(),
                _ => {}
            },
        }
    }

    /// Process a keyboard event. Space requests a jump on press.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        if key != KeyCode::Space {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.jump_key_held {
                    self.jump_latch = true;
                }
                self.jump_key_held = true;
            }
            ElementState::Released => self.jump_key_held = false,
        }
    }

    /// Process a mouse button event. The left button drives the controls.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed if !self.mouse_down => {
                self.mouse_down = true;
                self.touch(MOUSE_POINTER_ID, TouchPhase::Started, self.mouse_position);
            }
            ElementState::Released if self.mouse_down => {
                self.mouse_down = false;
                self.touch(MOUSE_POINTER_ID, TouchPhase::Ended, self.mouse_position);
            }
            _ => {}
        }
    }

    /// Process cursor position update.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        self.mouse_position = Vec2::new(position.0 as f32, position.1 as f32);
        if self.mouse_down {
            self.touch(MOUSE_POINTER_ID, TouchPhase::Moved, self.mouse_position);
        }
    }

    /// Take the pending jump request, clearing it.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_latch)
    }

    /// Whether a jump request is waiting to be consumed.
    pub fn jump_pending(&self) -> bool {
        self.jump_latch
    }

    /// Movement intent: x strafes right, +y moves forward (stick pushed up).
    pub fn move_vector(&self) -> Vec2 {
        let v = self.move_stick.output();
        Vec2::new(v.x, -v.y)
    }

    /// Look rate in screen convention (+x right, +y down), sensitivity applied.
    pub fn look_vector(&self) -> Vec2 {
        self.look_stick.output()
    }

    pub fn move_stick(&self) -> &Joystick {
        &self.move_stick
    }

    pub fn look_stick(&self) -> &Joystick {
        &self.look_stick
    }

    pub fn jump_button(&self) -> &ButtonRegion {
        &self.jump_button
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton, TouchPhase};
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> InputState {
        InputState::new(ControlLayout::for_viewport(800.0, 600.0, 140.0, 50.0))
    }

    fn move_center(i: &InputState) -> Vec2 {
        i.move_stick().layout().center()
    }

    fn look_center(i: &InputState) -> Vec2 {
        i.look_stick().layout().center()
    }

    #[test]
    fn move_pad_drag_up_is_forward() {
        let mut i = input();
        let c = move_center(&i);
        i.touch(1, TouchPhase::Started, c);
        i.touch(1, TouchPhase::Moved, c + Vec2::new(0.0, -25.0));
        assert!((i.move_vector() - Vec2::new(0.0, 0.5)).length() < 1e-6);
        assert_eq!(i.look_vector(), Vec2::ZERO);
    }

    #[test]
    fn sticks_are_independent() {
        let mut i = input();
        let mc = move_center(&i);
        let lc = look_center(&i);
        i.touch(1, TouchPhase::Started, mc + Vec2::new(25.0, 0.0));
        i.touch(2, TouchPhase::Started, lc + Vec2::new(25.0, 0.0));
        assert!((i.move_vector() - Vec2::new(0.5, 0.0)).length() < 1e-6);
        assert!((i.look_vector() - Vec2::new(1.0, 0.0)).length() < 1e-6);

        i.touch(2, TouchPhase::Ended, lc);
        assert_eq!(i.look_vector(), Vec2::ZERO);
        assert!((i.move_vector() - Vec2::new(0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn second_finger_cannot_steal_a_claimed_stick() {
        let mut i = input();
        let c = move_center(&i);
        i.touch(1, TouchPhase::Started, c + Vec2::new(10.0, 0.0));
        i.touch(2, TouchPhase::Started, c + Vec2::new(-40.0, 0.0));
        i.touch(2, TouchPhase::Moved, c + Vec2::new(-50.0, 0.0));
        assert!((i.move_vector() - Vec2::new(0.2, 0.0)).length() < 1e-6);
    }

    #[test]
    fn latest_move_wins() {
        let mut i = input();
        let c = move_center(&i);
        i.touch(1, TouchPhase::Started, c);
        for dx in [5.0, 30.0, 15.0] {
            i.touch(1, TouchPhase::Moved, c + Vec2::new(dx, 0.0));
        }
        assert!((i.move_vector() - Vec2::new(0.3, 0.0)).length() < 1e-6);
    }

    #[test]
    fn cancel_resets_stick() {
        let mut i = input();
        let c = move_center(&i);
        i.touch(7, TouchPhase::Started, c + Vec2::new(50.0, 50.0));
        i.touch(7, TouchPhase::Cancelled, c);
        assert_eq!(i.move_stick().state(), JoystickState::default());
    }

    #[test]
    fn jump_button_latches_once() {
        let mut i = input();
        let b = i.jump_button().center;
        i.touch(3, TouchPhase::Started, b);
        assert!(i.jump_pending());
        assert!(i.take_jump());
        assert!(!i.take_jump());
        // Holding the button does not re-raise the request.
        i.touch(3, TouchPhase::Moved, b);
        assert!(!i.jump_pending());
    }

    #[test]
    fn held_space_requests_one_jump() {
        let mut i = input();
        i.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(i.take_jump());
        i.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(!i.take_jump());
        i.process_keyboard(KeyCode::Space, ElementState::Released);
        i.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(i.take_jump());
    }

    #[test]
    fn mouse_drives_the_pad_it_pressed() {
        let mut i = input();
        let c = look_center(&i);
        i.process_cursor_position((c.x as f64, c.y as f64));
        i.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        i.process_cursor_position((c.x as f64, (c.y + 50.0) as f64));
        assert!((i.look_vector() - Vec2::new(0.0, 2.0)).length() < 1e-5);
        i.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(i.look_vector(), Vec2::ZERO);
    }

    #[test]
    fn touch_off_controls_is_ignored() {
        let mut i = input();
        i.touch(1, TouchPhase::Started, Vec2::new(400.0, 100.0));
        i.touch(1, TouchPhase::Moved, Vec2::new(10.0, 10.0));
        assert_eq!(i.move_vector(), Vec2::ZERO);
        assert!(!i.jump_pending());
    }
}
