//! Rendering Adapter: backend-agnostic frame description.
//!
//! # Invariants
//! - Renderers read [`SceneState`](litcube_scene::SceneState); they never mutate it.
//! - Every frame carries the model matrix and the four fixed lighting uniforms.
//! - Uniform names unknown to a block are ignored, never fatal.
//!
//! Backends implement [`Renderer`]. [`DebugTextRenderer`] renders frames to
//! text for headless use and tests.

mod frame;
mod lighting;
mod renderer;
mod uniforms;

pub use frame::{DRAW_INDEX_COUNT, Frame};
pub use lighting::Lighting;
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use uniforms::{UniformBlock, UniformValue, names};

pub fn crate_info() -> &'static str {
    "litcube-render v0.1.0"
}
