//! Bomb-dodging AI: periodic goal selection plus per-frame steering.

use glam::Vec3;

use crate::api::types::{ObjectId, ObjectType};
use crate::components::ai::AiGoal;
use crate::components::motion::wrap_degrees;
use crate::components::object::Object;
use crate::core::proximity::{distance2d, explosion_radius_threshold, within_blast};
use crate::core::scene::Scene;
use crate::systems::explosion;

/// Squared distance below which two points count as coincident for steering.
const COINCIDENT_EPSILON: f32 = 1e-8;

/// Run the decision timer and steer toward or away from the current target.
pub fn think(object: &mut Object, scene: &mut Scene, dt: f32) {
    let interval = scene.config().ai_decision_interval;
    let Some(ai) = object.ai.as_mut() else {
        return;
    };
    if !ai.enabled {
        return;
    }
    ai.decision_timer += dt;
    if ai.decision_timer >= interval {
        ai.decision_timer = 0.0;
        select_action(object, scene);
    }
    steer(object, scene);
}

/// Pick a new goal. First match wins:
/// flee a bomb whose blast reaches us, chase the closest item,
/// chase the closest player, or bomb it when close enough.
pub fn select_action(object: &mut Object, scene: &mut Scene) -> AiGoal {
    let pos = object.pos;
    let id = object.id;

    let threat = scene
        .of_type(ObjectType::Bomb)
        .find(|b| {
            b.bomb
                .as_ref()
                .is_some_and(|s| within_blast(distance2d(pos, b.pos), s.radius))
        })
        .map(|b| b.id);
    if let Some(bomb) = threat {
        return choose(object, AiGoal::Flee, Some(bomb));
    }

    if let Some((item, _)) = scene.closest(ObjectType::Item, pos, id) {
        return choose(object, AiGoal::Chase, Some(item));
    }

    let Some((opponent, d2)) = scene.closest(ObjectType::Player, pos, id) else {
        return choose(object, AiGoal::Idle, None);
    };
    if let Some(ai) = object.ai.as_mut() {
        ai.last_opponent = Some(opponent);
    }
    let bomb_size = object.player.as_ref().map_or(0.0, |p| p.bomb_size);
    if d2 >= explosion_radius_threshold(bomb_size) {
        choose(object, AiGoal::Chase, Some(opponent))
    } else {
        explosion::lay_bomb(object, scene);
        choose(object, AiGoal::Flee, Some(opponent))
    }
}

fn choose(object: &mut Object, goal: AiGoal, target: Option<ObjectId>) -> AiGoal {
    if let Some(ai) = object.ai.as_mut() {
        ai.goal = goal;
        ai.target = target;
    }
    object.set_moving(goal != AiGoal::Idle);
    goal
}

/// Point the heading at (chase) or away from (flee) the target.
///
/// Fleeing steers away from the last opponent seen, even when the threat
/// is a bomb; the bomb is used only if no opponent was ever seen.
pub fn steer(object: &mut Object, scene: &Scene) {
    let Some(ai) = object.ai.as_ref() else {
        return;
    };
    let reference = match ai.goal {
        AiGoal::Idle => return,
        AiGoal::Chase => ai.target.and_then(|t| position_of(scene, t)),
        AiGoal::Flee => ai
            .last_opponent
            .and_then(|t| position_of(scene, t))
            .or_else(|| ai.target.and_then(|t| position_of(scene, t))),
    };
    let goal = ai.goal;

    let Some(target) = reference else {
        // Target gone since the last decision: wait for the next one
        object.set_moving(false);
        return;
    };

    let away = object.pos - target;
    if away.x * away.x + away.y * away.y <= COINCIDENT_EPSILON {
        return;
    }
    let alpha = away.y.atan2(away.x).to_degrees();
    object.rotation.z = match goal {
        AiGoal::Flee => wrap_degrees(alpha + 90.0),
        _ => wrap_degrees(alpha - 90.0),
    };
    object.set_moving(true);
}

fn position_of(scene: &Scene, id: ObjectId) -> Option<Vec3> {
    scene.get(id).map(|o| o.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::mesh::Mesh;
    use crate::components::item::ItemKind;
    use crate::components::movement::heading_radians;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.meshes_mut().insert("player", Mesh::new(0.5));
        scene.meshes_mut().insert("bomb", Mesh::new(0.4));
        scene
    }

    fn bot_at(pos: Vec3) -> Object {
        let mut bot = Object::ai_player("Bot", "player").with_pos(pos);
        bot.id = ObjectId(1000);
        bot
    }

    fn heading(obj: &Object) -> Vec3 {
        let h = heading_radians(obj.rotation.z);
        Vec3::new(h.cos(), h.sin(), 0.0)
    }

    #[test]
    fn bomb_in_range_beats_item() {
        let mut scene = scene();
        let bomb = scene.add(Object::bomb(2.0, 5.0).with_pos(Vec3::new(1.0, 0.0, 0.0)));
        scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(-8.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Flee);
        assert_eq!(bot.ai.as_ref().unwrap().target, Some(bomb));
        assert!(bot.is_moving());
    }

    #[test]
    fn out_of_range_bomb_is_ignored() {
        let mut scene = scene();
        scene.add(Object::bomb(2.0, 5.0).with_pos(Vec3::new(3.0, 0.0, 0.0)));
        let item = scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(-8.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Chase);
        assert_eq!(bot.ai.as_ref().unwrap().target, Some(item));
    }

    #[test]
    fn chases_closest_item() {
        let mut scene = scene();
        scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(5.0, 0.0, 0.0)));
        let near = scene.add(Object::item(ItemKind::ExtraBomb, ObjectId(0)).with_pos(Vec3::new(0.0, 2.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        select_action(&mut bot, &mut scene);
        steer(&mut bot, &scene);
        assert_eq!(bot.ai.as_ref().unwrap().target, Some(near));
        let dir = heading(&bot);
        assert!((dir - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn far_player_is_chased() {
        let mut scene = scene();
        let other = scene.add(Object::player("P", "player").with_pos(Vec3::new(-5.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Chase);
        steer(&mut bot, &scene);
        assert_eq!(bot.ai.as_ref().unwrap().last_opponent, Some(other));
        assert!((heading(&bot) - Vec3::NEG_X).length() < 1e-4);
        assert_eq!(scene.count(ObjectType::Bomb), 0);
    }

    #[test]
    fn close_player_gets_bombed_and_fled() {
        let mut scene = scene();
        scene.add(Object::player("P", "player").with_pos(Vec3::new(1.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Flee);
        steer(&mut bot, &scene);
        assert_eq!(scene.count(ObjectType::Bomb), 1);
        assert_eq!(bot.player.as_ref().unwrap().active_bombs, 1);
        assert!((heading(&bot) - Vec3::NEG_X).length() < 1e-4);
    }

    #[test]
    fn flee_from_bomb_uses_last_opponent_for_heading() {
        let mut scene = scene();
        scene.add(Object::player("P", "player").with_pos(Vec3::new(0.0, 10.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        select_action(&mut bot, &mut scene);
        // Bomb to the east; heading still points away from the opponent (north)
        scene.add(Object::bomb(2.0, 5.0).with_pos(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Flee);
        steer(&mut bot, &scene);
        assert!((heading(&bot) - Vec3::NEG_Y).length() < 1e-4);
    }

    #[test]
    fn flee_without_opponent_runs_from_bomb() {
        let mut scene = scene();
        scene.add(Object::bomb(2.0, 5.0).with_pos(Vec3::new(1.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        select_action(&mut bot, &mut scene);
        steer(&mut bot, &scene);
        assert!((heading(&bot) - Vec3::NEG_X).length() < 1e-4);
    }

    #[test]
    fn alone_means_idle() {
        let mut scene = scene();
        let mut bot = bot_at(Vec3::ZERO);
        bot.set_moving(true);
        assert_eq!(select_action(&mut bot, &mut scene), AiGoal::Idle);
        assert!(!bot.is_moving());
    }

    #[test]
    fn coincident_target_keeps_heading() {
        let mut scene = scene();
        scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)));
        let mut bot = bot_at(Vec3::ZERO).with_rotation(Vec3::new(0.0, 0.0, 33.0));
        select_action(&mut bot, &mut scene);
        steer(&mut bot, &scene);
        assert_eq!(bot.rotation.z, 33.0);
        assert!(bot.rotation.z.is_finite());
    }

    #[test]
    fn vanished_target_stops_movement() {
        let mut scene = scene();
        let item = scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(4.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        select_action(&mut bot, &mut scene);
        scene.remove(item);
        steer(&mut bot, &scene);
        assert!(!bot.is_moving());
    }

    #[test]
    fn decisions_wait_for_interval() {
        let mut scene = scene();
        scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(4.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        think(&mut bot, &mut scene, 0.05);
        assert_eq!(bot.ai.as_ref().unwrap().goal, AiGoal::Idle);
        think(&mut bot, &mut scene, 0.05);
        assert_eq!(bot.ai.as_ref().unwrap().goal, AiGoal::Chase);
        assert_eq!(bot.ai.as_ref().unwrap().decision_timer, 0.0);
    }

    #[test]
    fn disabled_ai_does_nothing() {
        let mut scene = scene();
        scene.add(Object::item(ItemKind::SpeedUp, ObjectId(0)).with_pos(Vec3::new(4.0, 0.0, 0.0)));
        let mut bot = bot_at(Vec3::ZERO);
        if let Some(ai) = bot.ai.as_mut() {
            ai.enabled = false;
        }
        think(&mut bot, &mut scene, 1.0);
        assert_eq!(bot.ai.as_ref().unwrap().goal, AiGoal::Idle);
        assert!(!bot.is_moving());
    }
}
