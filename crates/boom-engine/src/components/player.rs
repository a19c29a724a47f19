/// Default movement speed of a player, in units per second.
pub const DEFAULT_SPEED: f32 = 3.0;
pub const DEFAULT_BOMB_CAPACITY: u32 = 1;
pub const DEFAULT_BOMB_SIZE: f32 = 2.0;
pub const DEFAULT_BOMB_FUSE: f32 = 3.0;

/// Bomb-laying stats of a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub name: String,
    /// Maximum number of bombs on the field at once.
    pub bomb_capacity: u32,
    /// Blast radius of newly laid bombs.
    pub bomb_size: f32,
    /// Fuse of newly laid bombs, in seconds.
    pub bomb_fuse: f32,
    /// Bombs laid by this player that are still in the scene.
    pub active_bombs: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            name: String::from("Player"),
            bomb_capacity: DEFAULT_BOMB_CAPACITY,
            bomb_size: DEFAULT_BOMB_SIZE,
            bomb_fuse: DEFAULT_BOMB_FUSE,
            active_bombs: 0,
        }
    }
}

impl PlayerStats {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn can_lay_bomb(&self) -> bool {
        self.active_bombs < self.bomb_capacity
    }
}
