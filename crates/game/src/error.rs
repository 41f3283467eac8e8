//! Errors raised while setting up a session.

use thiserror::Error;

/// Configuration that cannot produce a playable session.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("horizontal damping must be in (0, 1], got {0}")]
    Damping(f32),
    #[error("tick rate must be at least {min} Hz, got {value}")]
    TickRate { value: f32, min: f32 },
    #[error("collectible value must not be negative, got {0}")]
    NegativeValue(i32),
}
