use serde::{Deserialize, Serialize};

/// Engine configuration, provided by the game.
/// Every field has a default, so a JSON file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Upper bound for a single frame step in seconds (default: 0.25).
    /// Larger frame times (debugger stalls, tab switches) are clamped to this.
    pub max_dt: f32,
    /// Seconds between AI re-evaluations (default: 0.1).
    pub ai_decision_interval: f32,
    /// Directory in the asset source holding mesh manifests (default: "Meshes").
    pub mesh_dir: String,
    /// Seed for the loot roll of blocks without a fixed drop.
    pub loot_seed: u64,
    /// Initial camera position.
    pub camera_eye: [f32; 3],
    /// Initial camera look-at point.
    pub camera_target: [f32; 3],
    /// Camera up vector.
    pub camera_up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_dt: 0.25,
            ai_decision_interval: 0.1,
            mesh_dir: "Meshes".to_string(),
            loot_seed: 42,
            camera_eye: [0.0, -25.0, 25.0],
            camera_target: [0.0, 0.0, 0.0],
            camera_up: [0.0, 0.0, 1.0],
            fov_y_degrees: 45.0,
            aspect: 4.0 / 3.0,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "max_dt": 0.1, "mesh_dir": "Assets/Meshes" }"#).unwrap();
        assert_eq!(config.max_dt, 0.1);
        assert_eq!(config.mesh_dir, "Assets/Meshes");
        assert_eq!(config.ai_decision_interval, 0.1);
        assert_eq!(config.camera_eye, [0.0, -25.0, 25.0]);
    }

    #[test]
    fn empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{ max_dt: }").is_err());
    }
}
