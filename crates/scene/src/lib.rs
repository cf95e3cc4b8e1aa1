//! Scene State: the cube's orientation, owned by the main loop.
//!
//! # Invariants
//! - Pitch and yaw are plain degrees; they are never clamped or wrapped.
//! - The model transform is always `Rx(pitch) * Ry(yaw)`, pitch first.
//! - Only the input handler writes the state; renderers only read it.

pub mod state;

pub use state::{ROTATION_STEP_DEGREES, Rotation, SceneState};
