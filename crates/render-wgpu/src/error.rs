use litcube_geometry::GeometryError;

/// Errors from GPU setup and frame presentation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("no GPU adapter compatible with the window surface")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    SurfaceUnsupported,
    #[error("GPU rejected {what}: {message}")]
    Gpu { what: &'static str, message: String },
    #[error("out of GPU memory while acquiring a frame")]
    OutOfMemory,
}
