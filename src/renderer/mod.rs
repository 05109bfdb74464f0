pub mod camera;
pub mod gpu;
pub mod lighting;
pub mod surface_buffers;

pub use camera::{CameraController, Projection, Response};
pub use gpu::GpuState;
pub use lighting::LightingUniform;
