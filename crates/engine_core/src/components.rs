//! Common ECS components used across the engine.

/// Render visibility flag. The renderer skips entities whose flag is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility(pub bool);

impl Visibility {
    pub fn visible() -> Self {
        Self(true)
    }

    pub fn hidden() -> Self {
        Self(false)
    }

    pub fn is_visible(&self) -> bool {
        self.0
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::visible()
    }
}
