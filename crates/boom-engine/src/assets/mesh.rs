//! Geometry provider contract.
//!
//! The simulation only needs a mesh's bounding radius and its animation
//! table. Loading polygons and drawing them is the render backend's job,
//! which identifies meshes by `MeshHandle`.

use super::error::AssetError;
use super::manifest::MeshManifest;
use super::vfs::AssetSource;

/// Backend-facing handle of a cached mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(pub u32);

/// Highest playback rate accepted from a manifest.
pub const MAX_FPS: f32 = 240.0;

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub name: String,
    pub frame_count: u32,
    /// Seconds per frame. Zero means the animation never advances.
    pub frame_duration: f32,
}

impl AnimationDef {
    /// `fps` is capped at `MAX_FPS`; zero, negative or NaN rates never advance.
    pub fn new(name: impl Into<String>, frame_count: u32, fps: f32) -> Self {
        let frame_duration = if fps > 0.0 { 1.0 / fps.min(MAX_FPS) } else { 0.0 };
        Self {
            name: name.into(),
            frame_count,
            frame_duration,
        }
    }

    /// Total duration of one loop.
    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frame_count as f32
    }
}

/// Simulation-side view of a mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Bounding radius in world units.
    pub radius: f32,
    pub animations: Vec<AnimationDef>,
}

impl Mesh {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            animations: Vec::new(),
        }
    }

    /// Placeholder stored when loading fails: no extent, no animations.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_animation(mut self, def: AnimationDef) -> Self {
        self.animations.push(def);
        self
    }

    pub fn from_manifest(manifest: &MeshManifest) -> Self {
        Self {
            radius: manifest.radius,
            animations: manifest
                .animations
                .iter()
                .map(|a| AnimationDef::new(a.name.clone(), a.frames, a.fps))
                .collect(),
        }
    }

    /// Look up an animation by name, with its index in the animation table.
    pub fn animation(&self, name: &str) -> Option<(usize, &AnimationDef)> {
        self.animations
            .iter()
            .enumerate()
            .find(|(_, def)| def.name == name)
    }

    pub fn frame_count(&self, animation: &str) -> Option<u32> {
        self.animation(animation).map(|(_, def)| def.frame_count)
    }

    pub fn frame_duration(&self, animation: &str) -> Option<f32> {
        self.animation(animation).map(|(_, def)| def.frame_duration)
    }
}

/// Produces meshes by name. Called at most once per name by the mesh cache.
pub trait MeshLoader {
    fn load(&mut self, name: &str) -> Result<Mesh, AssetError>;
}

/// Loads `{dir}/{name}.json` manifests from an asset source.
pub struct ManifestMeshLoader<S: AssetSource> {
    source: S,
    dir: String,
}

impl<S: AssetSource> ManifestMeshLoader<S> {
    pub fn new(source: S, dir: impl Into<String>) -> Self {
        Self {
            source,
            dir: dir.into(),
        }
    }

    fn path_for(&self, name: &str) -> String {
        if self.dir.is_empty() {
            format!("{name}.json")
        } else {
            format!("{}/{name}.json", self.dir.trim_end_matches('/'))
        }
    }
}

impl<S: AssetSource> MeshLoader for ManifestMeshLoader<S> {
    fn load(&mut self, name: &str) -> Result<Mesh, AssetError> {
        let bytes = self.source.open(&self.path_for(name))?;
        let manifest = MeshManifest::from_slice(&bytes)?;
        Ok(Mesh::from_manifest(&manifest))
    }
}
