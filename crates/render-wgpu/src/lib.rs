//! wgpu render backend for the cube demo.
//!
//! Uploads the static geometry once, then draws the lit cube and platform
//! every frame with one pipeline.
//!
//! # Invariants
//! - Geometry buffers are written exactly once, at initialization.
//! - Renderer never mutates scene state.
//! - Presentation is vsync-paced by the surface configuration.

mod context;
mod error;
mod geometry;
mod renderer;
mod shaders;

pub use context::GpuContext;
pub use error::RenderError;
pub use geometry::{BufferUpload, GpuGeometry, geometry_uploads, vertex_layouts};
pub use renderer::{FrameOutcome, WgpuRenderer};
