use crate::api::types::ObjectId;
use crate::components::movement::Movement;
use crate::components::player::PlayerStats;

/// Speed change per speed item.
pub const SPEED_STEP: f32 = 0.5;
/// Blast radius change per bomb-size item.
pub const BOMB_SIZE_STEP: f32 = 0.5;
/// Fuse change per fuse item, in seconds.
pub const FUSE_STEP: f32 = 0.5;
/// Lower bound for speed, bomb size and fuse after "down" items.
pub const STAT_FLOOR: f32 = 1.0;

/// Effect an item has on the player that picks it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    SpeedUp,
    SpeedDown,
    ExtraBomb,
    BiggerBombs,
    SmallerBombs,
    LongerFuse,
    ShorterFuse,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::SpeedUp,
        ItemKind::SpeedDown,
        ItemKind::ExtraBomb,
        ItemKind::BiggerBombs,
        ItemKind::SmallerBombs,
        ItemKind::LongerFuse,
        ItemKind::ShorterFuse,
    ];

    /// Mesh drawn for this kind of item.
    pub fn mesh_name(self) -> &'static str {
        match self {
            ItemKind::SpeedUp => "item_speed_up",
            ItemKind::SpeedDown => "item_speed_down",
            ItemKind::ExtraBomb => "item_extra_bomb",
            ItemKind::BiggerBombs => "item_bigger_bombs",
            ItemKind::SmallerBombs => "item_smaller_bombs",
            ItemKind::LongerFuse => "item_longer_fuse",
            ItemKind::ShorterFuse => "item_shorter_fuse",
        }
    }

    /// Apply the effect to a player's stats and, for speed items, its movement.
    pub fn apply(self, stats: &mut PlayerStats, movement: Option<&mut Movement>) {
        match self {
            ItemKind::SpeedUp => {
                if let Some(m) = movement {
                    m.speed += SPEED_STEP;
                }
            }
            ItemKind::SpeedDown => {
                if let Some(m) = movement {
                    m.speed = (m.speed - SPEED_STEP).max(STAT_FLOOR);
                }
            }
            ItemKind::ExtraBomb => stats.bomb_capacity += 1,
            ItemKind::BiggerBombs => stats.bomb_size += BOMB_SIZE_STEP,
            ItemKind::SmallerBombs => {
                stats.bomb_size = (stats.bomb_size - BOMB_SIZE_STEP).max(STAT_FLOOR);
            }
            ItemKind::LongerFuse => stats.bomb_fuse += FUSE_STEP,
            ItemKind::ShorterFuse => {
                stats.bomb_fuse = (stats.bomb_fuse - FUSE_STEP).max(STAT_FLOOR);
            }
        }
    }
}

/// Pickup state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemState {
    pub kind: ItemKind,
    /// Bomb whose blast spawned this item. That blast never destroys it.
    pub parent: ObjectId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_items_adjust_stats() {
        let mut stats = PlayerStats::default();
        ItemKind::ExtraBomb.apply(&mut stats, None);
        ItemKind::BiggerBombs.apply(&mut stats, None);
        ItemKind::LongerFuse.apply(&mut stats, None);
        assert_eq!(stats.bomb_capacity, 2);
        assert_eq!(stats.bomb_size, 2.5);
        assert_eq!(stats.bomb_fuse, 3.5);
    }

    #[test]
    fn down_items_respect_floor() {
        let mut stats = PlayerStats {
            bomb_size: 1.2,
            bomb_fuse: 1.0,
            ..Default::default()
        };
        let mut movement = Movement::new(1.2);
        ItemKind::SmallerBombs.apply(&mut stats, Some(&mut movement));
        ItemKind::ShorterFuse.apply(&mut stats, Some(&mut movement));
        ItemKind::SpeedDown.apply(&mut stats, Some(&mut movement));
        assert_eq!(stats.bomb_size, STAT_FLOOR);
        assert_eq!(stats.bomb_fuse, STAT_FLOOR);
        assert_eq!(movement.speed, STAT_FLOOR);
    }

    #[test]
    fn speed_up_changes_movement() {
        let mut stats = PlayerStats::default();
        let mut movement = Movement::new(3.0);
        ItemKind::SpeedUp.apply(&mut stats, Some(&mut movement));
        assert_eq!(movement.speed, 3.5);
    }

    #[test]
    fn every_kind_has_a_distinct_mesh() {
        let mut names: Vec<_> = ItemKind::ALL.iter().map(|k| k.mesh_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ItemKind::ALL.len());
    }
}
