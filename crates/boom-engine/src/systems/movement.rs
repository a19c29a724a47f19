use crate::api::types::{ObjectId, ObjectType, SceneEvent};
use crate::components::object::Object;
use crate::core::proximity::blocks_move;
use crate::core::scene::Scene;

/// Move an object along its heading, unless the step runs into another object.
///
/// Level geometry and objects without collision never block. A player
/// running into an item picks it up instead of being blocked.
pub fn step(object: &mut Object, scene: &mut Scene, dt: f32) {
    let Some(movement) = object.movement else {
        return;
    };
    if !movement.moving || dt <= 0.0 {
        return;
    }

    let from = object.pos;
    let to = from + movement.displacement(object.rotation.z, dt);

    if !object.collision.collides() {
        object.pos = to;
        return;
    }

    let radius = scene.bounding_radius(object);
    let is_player = object.player.is_some();
    let mut blocked = false;
    let mut pickups: Vec<ObjectId> = Vec::new();

    for other in scene.iter() {
        if other.id == object.id || other.kind == ObjectType::Level || !other.collision.collides() {
            continue;
        }
        if !blocks_move(from, to, other.pos, radius, scene.bounding_radius(other)) {
            continue;
        }
        if is_player && other.item.is_some() {
            pickups.push(other.id);
        } else {
            blocked = true;
            break;
        }
    }

    if blocked {
        return;
    }
    for item in pickups {
        pick_up(object, scene, item);
    }
    object.pos = to;
}

/// Apply an item's effect to `player` and take the item out of the scene.
pub fn pick_up(player: &mut Object, scene: &mut Scene, item: ObjectId) {
    let Some(kind) = scene.get(item).and_then(|o| o.item).map(|i| i.kind) else {
        return;
    };
    let Some(stats) = player.player.as_mut() else {
        return;
    };
    kind.apply(stats, player.movement.as_mut());
    log::debug!("{} picked up {:?}", stats.name, kind);
    scene.remove(item);
    scene.emit(SceneEvent::ItemPicked {
        player: player.id,
        item,
        kind,
    });
}
