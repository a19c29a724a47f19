use serde::{Deserialize, Serialize};

/// Mesh manifest describing what the simulation needs to know about a mesh.
/// Loaded from `{mesh_dir}/{name}.json`; geometry stays with the render backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshManifest {
    /// Bounding radius in world units.
    pub radius: f32,
    /// Named animation sequences.
    #[serde(default)]
    pub animations: Vec<AnimationDescriptor>,
}

/// Describes a single animation of a mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Animation name (e.g., "walk").
    pub name: String,
    /// Number of frames in the sequence.
    pub frames: u32,
    /// Playback rate in frames per second (default: 10).
    #[serde(default = "default_fps")]
    pub fps: f32,
}

fn default_fps() -> f32 {
    10.0
}

impl MeshManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a manifest from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
