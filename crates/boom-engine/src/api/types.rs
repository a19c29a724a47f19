use crate::components::item::ItemKind;

/// Unique identifier for an object in a scene.
/// Allocated by the owning `Scene`, monotonically increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Placeholder id carried by objects that have not been added to a scene yet.
    pub const UNASSIGNED: ObjectId = ObjectId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

/// Type tag fixing which typed bucket an object lives in.
/// Immutable once the object is inside a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Level,
    Player,
    Bomb,
    Block,
    Item,
    /// Game-defined props (decorations, markers). The number is free for the game to use.
    Custom(u16),
}

/// Collision detection mode. Only radius checks are implemented; every mode
/// other than `None` behaves like a bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    None,
    #[default]
    BoundingSphere,
    ConvexHull,
    Exact,
}

impl CollisionMode {
    pub fn collides(self) -> bool {
        self != CollisionMode::None
    }
}

/// Something that happened during a scene update.
/// Queued by the scene and drained by the active game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// A bomb left the armed phase.
    BombExploded { bomb: ObjectId },
    /// A player was caught in a blast.
    PlayerKilled { player: ObjectId, by: ObjectId },
    /// A block was destroyed and dropped an item.
    BlockDestroyed { block: ObjectId, item: ObjectId },
    /// A player walked over an item and received its effect.
    ItemPicked { player: ObjectId, item: ObjectId, kind: ItemKind },
    /// Only one player is left standing.
    MatchWon { winner: ObjectId },
}
