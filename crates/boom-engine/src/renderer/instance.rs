use bytemuck::{Pod, Zeroable};

use super::camera::CameraUniform;

/// Animation index meaning "draw the mesh's static pose".
pub const STATIC_POSE: u32 = u32::MAX;

/// One mesh draw: model matrix plus what to draw.
/// 20 words = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Column-major model matrix (translate, scale, rotate x, y, z).
    pub model: [[f32; 4]; 4],
    /// Mesh handle in the scene's mesh cache.
    pub mesh: u32,
    /// Index into the mesh's animation table, or `STATIC_POSE`.
    pub animation: u32,
    /// Frame within the animation.
    pub frame: u32,
    pub _pad: u32,
}

impl DrawInstance {
    pub const WORDS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::WORDS * 4;
}

/// One alpha-blended sphere of an explosion, drawn without depth testing.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub center: [f32; 3],
    pub radius: f32,
    /// RGBA, alpha already faded by blast progress.
    pub color: [f32; 4],
}

impl SphereInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Everything a backend needs to draw one frame.
pub struct RenderBuffer {
    /// Mesh draws in scene order.
    pub instances: Vec<DrawInstance>,
    /// Explosion spheres, drawn after the meshes.
    pub spheres: Vec<SphereInstance>,
    pub camera: CameraUniform,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
            spheres: Vec::with_capacity(32),
            camera: CameraUniform::zeroed(),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.spheres.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn push_sphere(&mut self, sphere: SphereInstance) {
        self.spheres.push(sphere);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.len() as u32
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn spheres_ptr(&self) -> *const f32 {
        self.spheres.as_ptr() as *const f32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_layout() {
        assert_eq!(std::mem::size_of::<DrawInstance>(), DrawInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<SphereInstance>(), SphereInstance::STRIDE_BYTES);
    }

    #[test]
    fn clear_keeps_camera() {
        let mut buf = RenderBuffer::new();
        buf.camera.eye = [1.0, 2.0, 3.0, 1.0];
        buf.push(DrawInstance::default());
        buf.push_sphere(SphereInstance::default());
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.sphere_count(), 1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.sphere_count(), 0);
        assert_eq!(buf.camera.eye, [1.0, 2.0, 3.0, 1.0]);
    }
}
