use glam::Vec3;

use crate::api::types::{CollisionMode, ObjectId, ObjectType};
use crate::components::ai::AiState;
use crate::components::animation::AnimationState;
use crate::components::block::BlockState;
use crate::components::bomb::BombState;
use crate::components::item::{ItemKind, ItemState};
use crate::components::motion::Motion;
use crate::components::movement::Movement;
use crate::components::player::{PlayerStats, DEFAULT_SPEED};

/// Lifetime value meaning "never expires".
pub const LIFE_INFINITE: f32 = -1.0;

/// Bob of a freshly laid bomb: amplitude, phase speed.
pub const BOMB_BOB: (f32, f32) = (0.1, 3.0);
/// Throb of a freshly laid bomb: amplitude, phase speed.
pub const BOMB_THROB: (f32, f32) = (0.06, 5.0);
/// Spin of an item, in degrees per second.
pub const ITEM_SPIN: f32 = 90.0;
/// Bob of an item: amplitude, phase speed.
pub const ITEM_BOB: (f32, f32) = (0.15, 2.0);

/// Fat Object: one struct with optional behaviour components.
/// The `kind` decides which typed bucket the scene files it under;
/// the components decide what it does each frame.
#[derive(Debug, Clone)]
pub struct Object {
    /// Assigned by the scene on `add`.
    pub id: ObjectId,
    pub kind: ObjectType,
    /// Name of the mesh in the scene's mesh cache.
    pub mesh: String,
    pub animation: AnimationState,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler rotation in degrees, applied x then y then z.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Seconds left to live. Negative means infinite.
    pub life: f32,
    /// Invisible objects still update but are not drawn.
    pub visible: bool,
    pub collision: CollisionMode,
    pub movement: Option<Movement>,
    pub motion: Option<Motion>,
    pub player: Option<PlayerStats>,
    pub ai: Option<AiState>,
    pub bomb: Option<BombState>,
    pub item: Option<ItemState>,
    pub block: Option<BlockState>,
}

impl Object {
    /// Create a plain object at the origin.
    pub fn new(kind: ObjectType, mesh: impl Into<String>) -> Self {
        Self {
            id: ObjectId::UNASSIGNED,
            kind,
            mesh: mesh.into(),
            animation: AnimationState::default(),
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            life: LIFE_INFINITE,
            visible: true,
            collision: CollisionMode::default(),
            movement: None,
            motion: None,
            player: None,
            ai: None,
            bomb: None,
            item: None,
            block: None,
        }
    }

    // -- Archetypes --

    /// Static level geometry. Never takes part in movement collisions.
    pub fn level(mesh: impl Into<String>) -> Self {
        Self::new(ObjectType::Level, mesh).with_collision(CollisionMode::None)
    }

    /// Player with default stats, standing still.
    pub fn player(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        let mut object = Self::new(ObjectType::Player, mesh);
        object.movement = Some(Movement::new(DEFAULT_SPEED));
        object.player = Some(PlayerStats::named(name));
        object
    }

    /// Player driven by the bomb-dodging AI.
    pub fn ai_player(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        let mut object = Self::player(name, mesh);
        object.ai = Some(AiState::new());
        object
    }

    /// Armed bomb that ignites after `fuse` seconds.
    pub fn bomb(radius: f32, fuse: f32) -> Self {
        let mut object = Self::new(ObjectType::Bomb, "bomb")
            .with_life(fuse)
            .with_motion(
                Motion::new()
                    .with_bob(BOMB_BOB.0, BOMB_BOB.1)
                    .with_throb(BOMB_THROB.0, BOMB_THROB.1),
            );
        object.bomb = Some(BombState::new(radius));
        object
    }

    /// Destructible block. `loot` fixes the dropped item; `None` rolls one.
    pub fn block(mesh: impl Into<String>, loot: Option<ItemKind>) -> Self {
        let mut object = Self::new(ObjectType::Block, mesh);
        object.block = Some(BlockState { loot });
        object
    }

    /// Pickup spawned by the blast of `parent`.
    pub fn item(kind: ItemKind, parent: ObjectId) -> Self {
        let mut object = Self::new(ObjectType::Item, kind.mesh_name()).with_motion(
            Motion::new()
                .with_spin(ITEM_SPIN)
                .with_bob(ITEM_BOB.0, ITEM_BOB.1),
        );
        object.item = Some(ItemState { kind, parent });
        object
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    /// Rotation in degrees.
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_life(mut self, life: f32) -> Self {
        self.life = life;
        self
    }

    pub fn with_animation(mut self, name: &str) -> Self {
        self.animation.play(name);
        self
    }

    pub fn with_collision(mut self, collision: CollisionMode) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn with_owner(mut self, owner: ObjectId) -> Self {
        if let Some(bomb) = self.bomb.as_mut() {
            bomb.owner = Some(owner);
        }
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    // -- Queries --

    pub fn is_exploding(&self) -> bool {
        self.bomb.as_ref().is_some_and(|b| b.is_exploding())
    }

    pub fn is_moving(&self) -> bool {
        self.movement.as_ref().is_some_and(|m| m.moving)
    }

    pub fn set_moving(&mut self, moving: bool) {
        if let Some(movement) = self.movement.as_mut() {
            movement.moving = moving;
        }
    }

    /// Largest planar scale factor, used to size the bounding sphere.
    pub fn planar_scale(&self) -> f32 {
        self.scale.x.abs().max(self.scale.y.abs())
    }
}
