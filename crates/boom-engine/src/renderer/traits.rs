//! Renderer trait for mesh backends.
//!
//! The engine never draws by itself: it fills a `RenderBuffer` and a backend
//! (WebGL on the host page, or a native GPU renderer) turns it into pixels.

use super::camera::CameraUniform;
use super::instance::{DrawInstance, RenderBuffer, SphereInstance};

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
    /// Time spent in GPU rasterization (microseconds, if measurable)
    pub raster_us: u32,
}

/// Renderer trait for mesh backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlRenderer {
///     meshes: Vec<GlMesh>,
///     // ...
/// }
///
/// impl Renderer for GlRenderer {
///     fn backend(&self) -> &'static str { "webgl" }
///
///     fn draw(&mut self, frame: &FrameData) -> DrawTiming {
///         // Bind camera, draw meshes, then blend spheres without depth test...
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Update viewport...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "webgl", "wgpu")
    fn backend(&self) -> &'static str;

    /// Draw a complete frame. Returns timing information for profiling.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    pub camera: &'a CameraUniform,
    /// Mesh draws, in scene order.
    pub instances: &'a [DrawInstance],
    /// Explosion spheres, blended over the meshes.
    pub spheres: &'a [SphereInstance],
}

impl<'a> FrameData<'a> {
    pub fn from_buffer(buffer: &'a RenderBuffer) -> Self {
        Self {
            camera: &buffer.camera,
            instances: &buffer.instances,
            spheres: &buffer.spheres,
        }
    }
}
