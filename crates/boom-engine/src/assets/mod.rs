pub mod error;
pub mod manifest;
pub mod mesh;
pub mod registry;
pub mod vfs;

pub use error::AssetError;
pub use manifest::{AnimationDescriptor, MeshManifest};
pub use mesh::{AnimationDef, ManifestMeshLoader, Mesh, MeshHandle, MeshLoader};
pub use registry::MeshRegistry;
pub use vfs::{AssetSource, DirSource, MemorySource};
