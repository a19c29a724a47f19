pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::state::{GameState, StateStack, Transition};
pub use api::types::{CollisionMode, ObjectId, ObjectType, SceneEvent};
pub use assets::{
    AnimationDef, AssetError, AssetSource, DirSource, ManifestMeshLoader, MemorySource, Mesh,
    MeshHandle, MeshLoader, MeshManifest, MeshRegistry,
};
pub use components::ai::{AiGoal, AiState};
pub use components::animation::AnimationState;
pub use components::bomb::{BombPhase, BombState};
pub use components::item::{ItemKind, ItemState};
pub use components::motion::Motion;
pub use components::movement::Movement;
pub use components::object::Object;
pub use components::player::PlayerStats;
pub use crate::core::scene::Scene;
pub use crate::core::time::Clock;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera, CameraUniform};
pub use renderer::instance::{DrawInstance, RenderBuffer, SphereInstance, STATIC_POSE};
pub use renderer::traits::{DrawTiming, FrameData, Renderer};
