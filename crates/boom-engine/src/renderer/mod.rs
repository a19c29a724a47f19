pub mod camera;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera, CameraUniform};
pub use instance::{DrawInstance, RenderBuffer, SphereInstance, STATIC_POSE};
pub use traits::{DrawTiming, FrameData, Renderer};
