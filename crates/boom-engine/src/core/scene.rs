use std::collections::HashMap;

use glam::Vec3;

use crate::api::config::GameConfig;
use crate::api::types::{ObjectId, ObjectType, SceneEvent};
use crate::assets::mesh::MeshLoader;
use crate::assets::registry::MeshRegistry;
use crate::components::item::ItemKind;
use crate::components::object::Object;
use crate::core::time::sanitize_dt;
use crate::renderer::camera::Camera;
use crate::renderer::instance::RenderBuffer;
use crate::systems;
use crate::systems::rng::Rng;

/// Object storage for one match.
///
/// Objects live in index-stable slots. The flat `order` list gives update and
/// render order (insertion order); `buckets` group ids by `ObjectType` for
/// targeted scans. While an update pass runs, `add` and `remove` are deferred
/// and applied once the pass completes.
pub struct Scene {
    slots: Vec<Option<Object>>,
    free_slots: Vec<usize>,
    index: HashMap<ObjectId, usize>,
    order: Vec<ObjectId>,
    buckets: HashMap<ObjectType, Vec<ObjectId>>,
    next_id: u64,
    updating: bool,
    pending_add: Vec<Object>,
    pending_remove: Vec<ObjectId>,
    events: Vec<SceneEvent>,
    meshes: MeshRegistry,
    camera: Camera,
    config: GameConfig,
    loot: Rng,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            slots: Vec::with_capacity(256),
            free_slots: Vec::new(),
            index: HashMap::new(),
            order: Vec::with_capacity(256),
            buckets: HashMap::new(),
            next_id: 0,
            updating: false,
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            events: Vec::new(),
            meshes: MeshRegistry::new(),
            camera: Camera::from_config(&config),
            loot: Rng::new(config.loot_seed),
            config,
        }
    }

    /// Create a scene whose mesh cache loads through `loader`.
    pub fn with_loader(config: GameConfig, loader: Box<dyn MeshLoader>) -> Self {
        let mut scene = Self::with_config(config);
        scene.meshes.set_loader(loader);
        scene
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn meshes(&self) -> &MeshRegistry {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut MeshRegistry {
        &mut self.meshes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // -- Membership --

    /// Add an object and return its new id.
    /// During an update pass the object is committed when the pass ends.
    pub fn add(&mut self, mut object: Object) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        object.id = id;
        if !object.mesh.is_empty() {
            self.meshes.ensure(&object.mesh);
        }
        if self.updating {
            self.pending_add.push(object);
        } else {
            self.insert_now(object);
        }
        id
    }

    /// Remove an object. During an update pass removal is deferred until the pass ends.
    /// Unknown ids are logged and ignored. Returns whether the id was known.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        if !self.updating {
            return self.remove_now(id);
        }
        if self.is_removal_pending(id) {
            return true;
        }
        if self.index.contains_key(&id) || self.pending_add.iter().any(|o| o.id == id) {
            self.pending_remove.push(id);
            true
        } else {
            log::warn!("Scene::remove: unknown object {:?}", id);
            false
        }
    }

    /// Whether `id` was marked for removal in the running pass.
    pub fn is_removal_pending(&self, id: ObjectId) -> bool {
        self.pending_remove.contains(&id)
    }

    /// Whether `id` is live (committed and not marked for removal).
    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        if self.is_removal_pending(id) {
            return None;
        }
        let slot = *self.index.get(&id)?;
        self.slots.get(slot)?.as_ref()
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        if self.is_removal_pending(id) {
            return None;
        }
        let slot = *self.index.get(&id)?;
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Iterate over live objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.order.iter().filter_map(|id| self.get(*id))
    }

    /// Iterate over live objects of one type, in insertion order.
    pub fn of_type(&self, kind: ObjectType) -> impl Iterator<Item = &Object> {
        self.buckets
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|id| self.get(*id))
    }

    /// Snapshot of live ids of one type, for scans that mutate the scene.
    pub fn ids_of_type(&self, kind: ObjectType) -> Vec<ObjectId> {
        self.of_type(kind).map(|o| o.id).collect()
    }

    pub fn count(&self, kind: ObjectType) -> usize {
        self.of_type(kind).count()
    }

    /// Number of committed objects.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Drop every object and pending change. Meshes stay cached.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
        self.index.clear();
        self.order.clear();
        self.buckets.clear();
        self.pending_add.clear();
        self.pending_remove.clear();
    }

    // -- Queries --

    /// Bounding radius of an object: mesh radius times its largest planar scale.
    pub fn bounding_radius(&self, object: &Object) -> f32 {
        self.meshes.radius(&object.mesh) * object.planar_scale()
    }

    /// Closest live object of `kind` to `pos` by squared planar distance.
    /// `exclude` is skipped. Ties go to the earlier object.
    pub fn closest(
        &self,
        kind: ObjectType,
        pos: Vec3,
        exclude: ObjectId,
    ) -> Option<(ObjectId, f32)> {
        let mut best: Option<(ObjectId, f32)> = None;
        for object in self.of_type(kind) {
            if object.id == exclude {
                continue;
            }
            let d2 = crate::core::proximity::distance2d(pos, object.pos);
            if best.map_or(true, |(_, b)| d2 < b) {
                best = Some((object.id, d2));
            }
        }
        best
    }

    // -- Events --

    pub fn emit(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Roll a random item kind for a block without fixed loot.
    pub fn roll_loot(&mut self) -> ItemKind {
        self.loot.pick(&ItemKind::ALL).unwrap_or(ItemKind::ExtraBomb)
    }

    // -- Frame --

    /// Run one update pass over every object in insertion order, then apply
    /// deferred removals and additions.
    pub fn update(&mut self, dt: f32) {
        let dt = sanitize_dt(dt, self.config.max_dt);
        self.updating = true;

        let order = self.order.clone();
        for id in order {
            if self.is_removal_pending(id) {
                continue;
            }
            let Some(&slot) = self.index.get(&id) else {
                continue;
            };
            // Taken out of its slot so the object can mutate the rest of the scene.
            let Some(mut object) = self.slots[slot].take() else {
                continue;
            };
            let keep = systems::lifecycle::update_object(&mut object, self, dt);
            self.slots[slot] = Some(object);
            if !keep {
                self.remove(id);
            }
        }

        self.camera.update(dt);
        self.updating = false;
        self.commit();
    }

    /// Lay a bomb for the player `id`. See `systems::explosion::lay_bomb`.
    pub fn lay_bomb(&mut self, id: ObjectId) -> Option<ObjectId> {
        let slot = *self.index.get(&id)?;
        let mut player = self.slots[slot].take()?;
        let bomb = systems::explosion::lay_bomb(&mut player, self);
        self.slots[slot] = Some(player);
        bomb
    }

    /// Fill `buffer` with this frame's draws.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        systems::render::build_render_buffer(self, buffer);
    }

    // -- Internals --

    fn commit(&mut self) {
        // Raw bucket length: players marked this pass still count as present
        let players_before = self.buckets.get(&ObjectType::Player).map_or(0, |b| b.len());
        let removals = std::mem::take(&mut self.pending_remove);
        let removed_any = !removals.is_empty();
        for id in removals {
            self.remove_now(id);
        }
        for object in std::mem::take(&mut self.pending_add) {
            self.insert_now(object);
        }

        // A death only counts if the field had more than one player before the pass.
        let players = self.ids_of_type(ObjectType::Player);
        if removed_any && players_before > 1 && players.len() == 1 {
            let winner = players[0];
            log::info!("Match won by {:?}", winner);
            self.emit(SceneEvent::MatchWon { winner });
        }
    }

    fn insert_now(&mut self, object: Object) {
        let id = object.id;
        let kind = object.kind;
        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.slots[slot] = Some(object);
                slot
            }
            None => {
                self.slots.push(Some(object));
                self.slots.len() - 1
            }
        };
        self.index.insert(id, slot);
        self.order.push(id);
        self.buckets.entry(kind).or_default().push(id);
    }

    fn remove_now(&mut self, id: ObjectId) -> bool {
        let Some(slot) = self.index.remove(&id) else {
            if let Some(pos) = self.pending_add.iter().position(|o| o.id == id) {
                self.pending_add.remove(pos);
                return true;
            }
            log::warn!("Scene::remove: unknown object {:?}", id);
            return false;
        };
        let object = self.slots[slot].take();
        self.free_slots.push(slot);
        self.order.retain(|o| *o != id);
        if let Some(object) = object {
            if let Some(bucket) = self.buckets.get_mut(&object.kind) {
                bucket.retain(|o| *o != id);
            }
            self.release_bomb(&object);
        }
        true
    }

    /// Give a removed bomb's slot back to the player that laid it.
    fn release_bomb(&mut self, object: &Object) {
        let Some(owner) = object.bomb.as_ref().and_then(|b| b.owner) else {
            return;
        };
        if let Some(stats) = self.get_mut(owner).and_then(|o| o.player.as_mut()) {
            stats.active_bombs = stats.active_bombs.saturating_sub(1);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
