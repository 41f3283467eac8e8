//! On-screen virtual joystick.
//!
//! A drag inside a square pad is turned into a direction vector. The visible
//! knob is clamped to the ring of radius `max_radius`; the logical vector is the
//! displacement divided by `max_radius`, capped at unit length so that it
//! always agrees with what the knob shows.

use glam::Vec2;

/// Screen placement of a joystick pad, in window pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickLayout {
    /// Top-left corner of the pad.
    pub origin: Vec2,
    /// Side length of the square pad.
    pub size: f32,
    /// Knob travel radius. A drag this far from centre is full deflection.
    pub max_radius: f32,
}

impl JoystickLayout {
    pub fn new(origin: Vec2, size: f32, max_radius: f32) -> Self {
        Self {
            origin,
            size,
            max_radius,
        }
    }

    /// Centre of the pad; drags are measured from here.
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size * 0.5)
    }

    /// Whether a pointer at `p` lands on the pad.
    pub fn contains(&self, p: Vec2) -> bool {
        let rel = p - self.origin;
        rel.x >= 0.0 && rel.y >= 0.0 && rel.x <= self.size && rel.y <= self.size
    }
}

impl Default for JoystickLayout {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 140.0, 50.0)
    }
}

/// Snapshot of a joystick's logical output.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoystickState {
    /// Normalized deflection, each component in [-1, 1], length at most 1.
    pub vector: Vec2,
    /// A drag is in progress.
    pub active: bool,
}

/// One virtual joystick instance.
#[derive(Debug, Clone)]
pub struct Joystick {
    layout: JoystickLayout,
    /// Multiplier applied by [`Joystick::output`].
    sensitivity: f32,
    state: JoystickState,
    knob_offset: Vec2,
}

impl Joystick {
    pub fn new(layout: JoystickLayout, sensitivity: f32) -> Self {
        Self {
            layout,
            sensitivity,
            state: JoystickState::default(),
            knob_offset: Vec2::ZERO,
        }
    }

    pub fn layout(&self) -> &JoystickLayout {
        &self.layout
    }

    /// Begin a drag at `pointer`.
    pub fn drag_start(&mut self, pointer: Vec2) {
        self.state.active = true;
        self.track(pointer);
    }

    /// Continue a drag. Ignored unless a drag is active.
    pub fn drag_move(&mut self, pointer: Vec2) {
        if self.state.active {
            self.track(pointer);
        }
    }

    /// End the drag and recentre.
    pub fn drag_end(&mut self) {
        self.state = JoystickState::default();
        self.knob_offset = Vec2::ZERO;
    }

    fn track(&mut self, pointer: Vec2) {
        let max = self.layout.max_radius;
        let d = pointer - self.layout.center();
        let dist = d.length().min(max);
        let angle = d.y.atan2(d.x);
        self.knob_offset = Vec2::new(dist * angle.cos(), dist * angle.sin());
        self.state.vector = (d / max).clamp_length_max(1.0);
    }

    /// Copy of the current logical state.
    pub fn state(&self) -> JoystickState {
        self.state
    }

    pub fn vector(&self) -> Vec2 {
        self.state.vector
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Vector scaled by this joystick's sensitivity.
    pub fn output(&self) -> Vec2 {
        self.state.vector * self.sensitivity
    }

    /// Knob displacement from the pad centre, in pixels, for drawing.
    pub fn knob_offset(&self) -> Vec2 {
        self.knob_offset
    }
}
