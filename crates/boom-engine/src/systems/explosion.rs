//! Bomb lifecycle: laying, ignition, blast growth and blast effects.

use glam::Vec3;

use crate::api::types::{ObjectId, ObjectType, SceneEvent};
use crate::components::object::Object;
use crate::core::proximity::{distance2d, within_blast};
use crate::core::scene::Scene;

/// Lay a bomb at the player's position with the player's current bomb stats.
/// Returns `None` when the player has no bomb left to lay.
pub fn lay_bomb(player: &mut Object, scene: &mut Scene) -> Option<ObjectId> {
    let stats = player.player.as_mut()?;
    if !stats.can_lay_bomb() {
        return None;
    }
    stats.active_bombs += 1;
    let bomb = Object::bomb(stats.bomb_size, stats.bomb_fuse)
        .with_owner(player.id)
        .with_pos(player.pos);
    let id = scene.add(bomb);
    log::debug!("{} laid bomb {:?}", stats.name, id);
    Some(id)
}

/// Switch a bomb from armed to exploding.
pub fn detonate(object: &mut Object, scene: &mut Scene) {
    let ignited = object.bomb.as_mut().is_some_and(|b| b.ignite());
    if ignited {
        log::debug!("Bomb {:?} exploding", object.id);
        scene.emit(SceneEvent::BombExploded { bomb: object.id });
    }
}

/// One frame of an exploding bomb: grow, apply the blast, then check completion.
/// Returns false once the blast reached its final radius.
pub fn step(object: &mut Object, scene: &mut Scene, dt: f32) -> bool {
    let Some(bomb) = object.bomb.as_mut() else {
        return true;
    };
    bomb.grow(dt);
    let reach = bomb.current_radius;
    resolve_blast(scene, object.id, object.pos, reach);
    !bomb.is_spent()
}

/// Apply a blast of radius `reach` centered at `center`, in bucket order:
/// bombs, players, items, blocks. Victims are removed after the scan.
pub fn resolve_blast(scene: &mut Scene, bomb_id: ObjectId, center: Vec3, reach: f32) {
    let mut victims: Vec<ObjectId> = Vec::new();

    for id in caught(scene, ObjectType::Bomb, bomb_id, center, reach) {
        let ignited = scene
            .get_mut(id)
            .and_then(|o| o.bomb.as_mut())
            .is_some_and(|b| b.ignite());
        if ignited {
            log::debug!("Bomb {:?} set off by {:?}", id, bomb_id);
            scene.emit(SceneEvent::BombExploded { bomb: id });
        }
    }

    for id in caught(scene, ObjectType::Player, bomb_id, center, reach) {
        if let Some(name) = scene.get(id).and_then(|o| o.player.as_ref()).map(|p| p.name.clone()) {
            log::info!("{} killed by bomb {:?}", name, bomb_id);
        }
        victims.push(id);
        scene.emit(SceneEvent::PlayerKilled {
            player: id,
            by: bomb_id,
        });
    }

    for id in caught(scene, ObjectType::Item, bomb_id, center, reach) {
        let spawned_here = scene
            .get(id)
            .and_then(|o| o.item)
            .is_some_and(|i| i.parent == bomb_id);
        if !spawned_here {
            victims.push(id);
        }
    }

    for id in caught(scene, ObjectType::Block, bomb_id, center, reach) {
        let Some((pos, loot)) = scene.get(id).map(|o| (o.pos, o.block.and_then(|b| b.loot))) else {
            continue;
        };
        let kind = match loot {
            Some(kind) => kind,
            None => scene.roll_loot(),
        };
        let item = scene.add(Object::item(kind, bomb_id).with_pos(pos));
        log::debug!("Block {:?} destroyed, dropped {:?}", id, kind);
        victims.push(id);
        scene.emit(SceneEvent::BlockDestroyed { block: id, item });
    }

    for id in victims {
        scene.remove(id);
    }
}

/// Live objects of `kind` other than `bomb_id` within the blast.
fn caught(scene: &Scene, kind: ObjectType, bomb_id: ObjectId, center: Vec3, reach: f32) -> Vec<ObjectId> {
    scene
        .of_type(kind)
        .filter(|o| o.id != bomb_id && within_blast(distance2d(center, o.pos), reach))
        .map(|o| o.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::mesh::Mesh;
    use crate::components::bomb::BombPhase;
    use crate::components::item::ItemKind;
    use proptest::prelude::*;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.meshes_mut().insert("block", Mesh::new(0.5));
        scene.meshes_mut().insert("player", Mesh::new(0.5));
        scene
    }

    #[test]
    fn item_spawned_by_this_bomb_survives() {
        let mut scene = scene();
        let own = scene.add(Object::item(ItemKind::SpeedUp, ObjectId(42)).with_pos(Vec3::new(0.5, 0.0, 0.0)));
        let other = scene.add(Object::item(ItemKind::SpeedUp, ObjectId(7)).with_pos(Vec3::new(0.0, 0.5, 0.0)));
        resolve_blast(&mut scene, ObjectId(42), Vec3::ZERO, 1.0);
        assert!(scene.contains(own));
        assert!(!scene.contains(other));
    }

    #[test]
    fn chain_ignites_only_armed_bombs() {
        let mut scene = scene();
        let armed = scene.add(Object::bomb(2.0, 10.0).with_pos(Vec3::new(1.0, 0.0, 0.0)));
        let mut burning = Object::bomb(3.0, 10.0).with_pos(Vec3::new(0.0, 1.0, 0.0));
        if let Some(b) = burning.bomb.as_mut() {
            b.ignite();
            b.current_radius = 1.7;
        }
        let burning = scene.add(burning);

        resolve_blast(&mut scene, ObjectId(1000), Vec3::ZERO, 1.5);
        assert_eq!(scene.get(armed).unwrap().bomb.unwrap().phase, BombPhase::Exploding);
        assert_eq!(scene.get(burning).unwrap().bomb.unwrap().current_radius, 1.7);
        assert_eq!(scene.drain_events(), vec![SceneEvent::BombExploded { bomb: armed }]);
    }

    #[test]
    fn blocks_drop_fixed_loot_or_roll() {
        let mut scene = scene();
        scene.add(Object::block("block", Some(ItemKind::LongerFuse)).with_pos(Vec3::new(1.0, 0.0, 0.0)));
        scene.add(Object::block("block", None).with_pos(Vec3::new(-1.0, 0.0, 0.0)));
        resolve_blast(&mut scene, ObjectId(500), Vec3::ZERO, 1.0);
        assert_eq!(scene.count(ObjectType::Block), 0);
        let kinds: Vec<_> = scene.of_type(ObjectType::Item).map(|o| o.item.unwrap()).collect();
        assert_eq!(kinds.len(), 2);
        assert_eq!(kinds[0].kind, ItemKind::LongerFuse);
        assert!(kinds.iter().all(|i| i.parent == ObjectId(500)));
    }

    #[test]
    fn blast_skips_the_bomb_itself_and_far_objects() {
        let mut scene = scene();
        let far_block = scene.add(Object::block("block", None).with_pos(Vec3::new(3.0, 0.0, 0.0)));
        let far_player = scene.add(Object::player("P", "player").with_pos(Vec3::new(0.0, -3.0, 0.0)));
        let near_player = scene.add(Object::player("Q", "player").with_pos(Vec3::new(0.0, 1.0, 5.0)));
        resolve_blast(&mut scene, ObjectId(900), Vec3::ZERO, 2.0);
        assert!(scene.contains(far_block));
        assert!(scene.contains(far_player));
        // z is ignored by the planar test
        assert!(!scene.contains(near_player));
    }

    #[test]
    fn lay_bomb_inherits_player_stats() {
        let mut scene = scene();
        let mut player = Object::player("P", "player").with_pos(Vec3::new(2.0, 3.0, 0.0));
        player.id = ObjectId(77);
        if let Some(stats) = player.player.as_mut() {
            stats.bomb_size = 3.5;
            stats.bomb_fuse = 1.5;
        }
        let bomb = lay_bomb(&mut player, &mut scene).unwrap();
        let bomb = scene.get(bomb).unwrap();
        assert_eq!(bomb.pos, Vec3::new(2.0, 3.0, 0.0));
        assert_eq!(bomb.life, 1.5);
        assert_eq!(bomb.bomb.unwrap().radius, 3.5);
        assert_eq!(bomb.bomb.unwrap().owner, Some(ObjectId(77)));
        assert!(lay_bomb(&mut player, &mut scene).is_none());
    }

    proptest! {
        #[test]
        fn objects_outside_reach_are_untouched(
            reach in 0.5f32..4.0,
            angle in 0.0f32..std::f32::consts::TAU,
            margin in 0.05f32..5.0,
        ) {
            let mut scene = scene();
            // Squared distance strictly beyond reach²
            let dist = (reach * reach + margin).sqrt();
            let pos = Vec3::new(angle.cos() * dist, angle.sin() * dist, 0.0);
            let block = scene.add(Object::block("block", None).with_pos(pos));
            let player = scene.add(Object::player("P", "player").with_pos(pos));
            let item = scene.add(Object::item(ItemKind::SpeedUp, ObjectId(1)).with_pos(pos));
            let bomb = scene.add(Object::bomb(1.0, 10.0).with_pos(pos));
            resolve_blast(&mut scene, ObjectId(9999), Vec3::ZERO, reach);
            prop_assert!(scene.contains(block));
            prop_assert!(scene.contains(player));
            prop_assert!(scene.contains(item));
            prop_assert!(!scene.get(bomb).unwrap().is_exploding());
            prop_assert!(scene.events().is_empty());
        }
    }
}
