//! Kinematic player body for Fieldwalk.
//!
//! No general rigid-body simulation: a single body integrates velocity under
//! gravity, horizontal damping and camera-relative thrust, and rests on one
//! flat ground plane.

pub mod body;
pub mod integrator;

pub use body::*;
pub use integrator::*;
