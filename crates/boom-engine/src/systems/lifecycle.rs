//! Per-object update dispatch, life countdown and animation advance.

use crate::components::object::{Object, LIFE_INFINITE};
use crate::core::scene::Scene;
use crate::systems::{ai, explosion, movement};

/// Update one object for a frame. Returns false when the object asks to be removed.
///
/// The object is detached from the scene while this runs, so scene scans
/// never see it.
pub fn update_object(object: &mut Object, scene: &mut Scene, dt: f32) -> bool {
    if object.is_exploding() {
        return explosion::step(object, scene, dt);
    }

    if object.ai.is_some() {
        ai::think(object, scene, dt);
    }
    if object.movement.is_some() {
        movement::step(object, scene, dt);
    }
    if let Some(motion) = object.motion.as_mut() {
        motion.apply(&mut object.pos, &mut object.rotation, &mut object.scale, dt);
    }

    tick(object, scene, dt)
}

/// Count down life and advance the current animation.
pub fn tick(object: &mut Object, scene: &mut Scene, dt: f32) -> bool {
    if object.life >= 0.0 {
        object.life -= dt;
        if object.life <= 0.0 {
            object.life = LIFE_INFINITE;
            return timeout(object, scene);
        }
    }

    if !object.animation.is_static() {
        if let Some((_, def)) = scene
            .meshes()
            .get(&object.mesh)
            .and_then(|mesh| mesh.animation(&object.animation.current))
        {
            object.animation.advance(def, dt);
        }
    }
    true
}

/// Called once when life runs out. Bombs ignite and survive; everything else expires.
pub fn timeout(object: &mut Object, scene: &mut Scene) -> bool {
    if object.bomb.is_some() {
        explosion::detonate(object, scene);
        return true;
    }
    false
}
