use std::collections::HashMap;

use super::mesh::{Mesh, MeshHandle, MeshLoader};

/// Cache of meshes keyed by name, shared by every object using the same mesh.
/// Meshes are loaded lazily on first reference; a failed load is logged and
/// cached as an empty mesh so it is not retried every frame.
pub struct MeshRegistry {
    meshes: Vec<Mesh>,
    by_name: HashMap<String, MeshHandle>,
    loader: Option<Box<dyn MeshLoader>>,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            by_name: HashMap::new(),
            loader: None,
        }
    }

    /// Create a registry that loads unknown meshes through `loader`.
    pub fn with_loader(loader: Box<dyn MeshLoader>) -> Self {
        Self {
            loader: Some(loader),
            ..Self::new()
        }
    }

    pub fn set_loader(&mut self, loader: Box<dyn MeshLoader>) {
        self.loader = Some(loader);
    }

    /// Register a mesh under `name`, replacing an existing entry but keeping its handle.
    pub fn insert(&mut self, name: impl Into<String>, mesh: Mesh) -> MeshHandle {
        let name = name.into();
        if let Some(&handle) = self.by_name.get(&name) {
            self.meshes[handle.0 as usize] = mesh;
            return handle;
        }
        let handle = MeshHandle(self.meshes.len() as u32);
        self.meshes.push(mesh);
        self.by_name.insert(name, handle);
        handle
    }

    /// Return the handle for `name`, loading the mesh first if it is not cached.
    pub fn ensure(&mut self, name: &str) -> MeshHandle {
        if let Some(&handle) = self.by_name.get(name) {
            return handle;
        }
        let mesh = match self.loader.as_mut() {
            Some(loader) => match loader.load(name) {
                Ok(mesh) => {
                    log::debug!("Loaded mesh '{}' (radius {})", name, mesh.radius);
                    mesh
                }
                Err(err) => {
                    log::error!("Failed to load mesh '{}': {}", name, err);
                    Mesh::empty()
                }
            },
            None => {
                log::error!("Failed to load mesh '{}': no mesh loader configured", name);
                Mesh::empty()
            }
        };
        self.insert(name, mesh)
    }

    /// Look up a cached mesh by name. Never triggers a load.
    pub fn get(&self, name: &str) -> Option<&Mesh> {
        self.by_name.get(name).map(|h| &self.meshes[h.0 as usize])
    }

    pub fn handle(&self, name: &str) -> Option<MeshHandle> {
        self.by_name.get(name).copied()
    }

    pub fn by_handle(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0 as usize)
    }

    /// Bounding radius of a cached mesh; unknown meshes have no extent.
    pub fn radius(&self, name: &str) -> f32 {
        self.get(name).map_or(0.0, |m| m.radius)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop all cached meshes. Handles handed out before are invalid afterwards.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.by_name.clear();
    }
}

impl Default for MeshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::error::AssetError;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingLoader {
        calls: Rc<Cell<u32>>,
    }

    impl MeshLoader for CountingLoader {
        fn load(&mut self, name: &str) -> Result<Mesh, AssetError> {
            self.calls.set(self.calls.get() + 1);
            if name == "broken" {
                Err(AssetError::NotFound(name.to_string()))
            } else {
                Ok(Mesh::new(1.5))
            }
        }
    }

    #[test]
    fn loads_each_name_once() {
        let calls = Rc::new(Cell::new(0));
        let mut reg = MeshRegistry::with_loader(Box::new(CountingLoader { calls: calls.clone() }));
        let a = reg.ensure("bomb");
        let b = reg.ensure("bomb");
        assert_eq!(a, b);
        assert_eq!(calls.get(), 1);
        assert_eq!(reg.radius("bomb"), 1.5);
    }

    #[test]
    fn failed_load_caches_empty_mesh() {
        let calls = Rc::new(Cell::new(0));
        let mut reg = MeshRegistry::with_loader(Box::new(CountingLoader { calls: calls.clone() }));
        reg.ensure("broken");
        reg.ensure("broken");
        assert_eq!(calls.get(), 1);
        assert_eq!(reg.get("broken"), Some(&Mesh::empty()));
    }

    #[test]
    fn no_loader_yields_empty_mesh() {
        let mut reg = MeshRegistry::new();
        let handle = reg.ensure("level");
        assert_eq!(reg.by_handle(handle).unwrap().radius, 0.0);
    }

    #[test]
    fn insert_keeps_handle() {
        let mut reg = MeshRegistry::new();
        let first = reg.insert("block", Mesh::new(0.5));
        let second = reg.insert("block", Mesh::new(0.6));
        assert_eq!(first, second);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.radius("block"), 0.6);
        assert_eq!(reg.radius("unknown"), 0.0);
    }
}
