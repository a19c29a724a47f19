use boom_engine::{ItemKind, MemorySource};

pub const MESH_DIR: &str = "Meshes";

const ARENA: &str = r#"{ "radius": 9.0 }"#;
const PLAYER: &str = r#"{
    "radius": 0.45,
    "animations": [
        { "name": "idle", "frames": 2, "fps": 4.0 },
        { "name": "walk", "frames": 8, "fps": 12.0 }
    ]
}"#;
const BOMB: &str = r#"{ "radius": 0.4 }"#;
const BLOCK: &str = r#"{ "radius": 0.5 }"#;
const ITEM: &str = r#"{ "radius": 0.3 }"#;

/// Mesh manifests baked into the module, keyed by VFS path.
pub fn mesh_source() -> MemorySource {
    let mut source = MemorySource::new()
        .with_file(path("arena"), ARENA)
        .with_file(path("player"), PLAYER)
        .with_file(path("bomb"), BOMB)
        .with_file(path("block"), BLOCK);
    for kind in ItemKind::ALL {
        source.insert(path(kind.mesh_name()), ITEM);
    }
    source
}

fn path(name: &str) -> String {
    format!("{MESH_DIR}/{name}.json")
}
