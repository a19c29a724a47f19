use glam::{Mat4, Vec3};

use crate::components::bomb::BombState;
use crate::components::object::Object;
use crate::core::scene::Scene;
use crate::renderer::instance::{DrawInstance, RenderBuffer, SphereInstance, STATIC_POSE};

/// Height of explosion spheres above the bomb's position.
const BLAST_LIFT: f32 = 0.5;
/// Radius of the bright core sphere.
const BLAST_CORE_RADIUS: f32 = 0.5;
/// Progress after which the outer haze is no longer drawn.
const BLAST_HAZE_CUTOFF: f32 = 0.8;

/// Fill `buffer` with every visible object, in scene order.
pub fn build_render_buffer(scene: &Scene, buffer: &mut RenderBuffer) {
    buffer.clear();
    buffer.camera = scene.camera().uniform();

    for object in scene.iter() {
        if !object.visible {
            continue;
        }
        if let Some(bomb) = object.bomb.as_ref().filter(|b| b.is_exploding()) {
            push_blast(buffer, object.pos, bomb);
            continue;
        }
        if let Some(instance) = draw_instance(scene, object) {
            buffer.push(instance);
        }
    }
}

/// Mesh draw for one object, or `None` if its animation can't be resolved.
pub fn draw_instance(scene: &Scene, object: &Object) -> Option<DrawInstance> {
    let meshes = scene.meshes();
    let handle = meshes.handle(&object.mesh)?;
    let animation = if object.animation.is_static() {
        STATIC_POSE
    } else {
        match meshes
            .by_handle(handle)
            .and_then(|m| m.animation(&object.animation.current))
        {
            Some((index, _)) => index as u32,
            None => {
                log::warn!(
                    "Mesh '{}' has no animation '{}'",
                    object.mesh,
                    object.animation.current
                );
                return None;
            }
        }
    };
    Some(DrawInstance {
        model: model_matrix(object).to_cols_array_2d(),
        mesh: handle.0,
        animation,
        frame: object.animation.frame,
        _pad: 0,
    })
}

/// Translate, then scale, then rotate about x, y and z (degrees).
pub fn model_matrix(object: &Object) -> Mat4 {
    let mut model = Mat4::from_translation(object.pos);
    if object.scale != Vec3::ONE {
        model *= Mat4::from_scale(object.scale);
    }
    model
        * Mat4::from_rotation_x(object.rotation.x.to_radians())
        * Mat4::from_rotation_y(object.rotation.y.to_radians())
        * Mat4::from_rotation_z(object.rotation.z.to_radians())
}

/// Three layered spheres for an exploding bomb: haze, fireball, core.
pub fn push_blast(buffer: &mut RenderBuffer, pos: Vec3, bomb: &BombState) {
    let p = bomb.percent_complete();
    let r = bomb.current_radius;
    let center = [pos.x, pos.y, pos.z + BLAST_LIFT];

    if p <= BLAST_HAZE_CUTOFF {
        buffer.push_sphere(SphereInstance {
            center,
            radius: r * r * r,
            color: [0.7, 0.7, 1.0, 0.5 * (BLAST_HAZE_CUTOFF - p)],
        });
    }
    buffer.push_sphere(SphereInstance {
        center,
        radius: r,
        color: [0.8, 0.8 * p, 0.8 * p, 1.0 - p],
    });
    buffer.push_sphere(SphereInstance {
        center,
        radius: BLAST_CORE_RADIUS,
        color: [1.0, 1.0, 0.8 * (1.0 - p), 1.0 - p],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ObjectType;
    use crate::assets::mesh::{AnimationDef, Mesh, MeshHandle};

    fn scene() -> Scene {
        let mut scene = Scene::new();
        scene.meshes_mut().insert("crate", Mesh::new(0.5));
        scene.meshes_mut().insert(
            "player",
            Mesh::new(0.5)
                .with_animation(AnimationDef::new("idle", 2, 4.0))
                .with_animation(AnimationDef::new("walk", 8, 12.0)),
        );
        scene
    }

    #[test]
    fn draws_visible_objects_in_order() {
        let mut scene = scene();
        scene.add(Object::new(ObjectType::Custom(0), "crate"));
        scene.add(Object::new(ObjectType::Custom(0), "crate").hidden());
        scene.add(Object::player("P", "player").with_animation("walk"));

        let mut buf = RenderBuffer::new();
        scene.render(&mut buf);
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.instances[0].animation, STATIC_POSE);
        assert_eq!(buf.instances[1].animation, 1);
        assert_eq!(buf.instances[1].mesh, scene.meshes().handle("player").map_or(0, |h: MeshHandle| h.0));
        assert_eq!(buf.camera, scene.camera().uniform());
    }

    #[test]
    fn unknown_animation_skips_draw() {
        let mut scene = scene();
        scene.add(Object::player("P", "player").with_animation("dance"));
        let mut buf = RenderBuffer::new();
        scene.render(&mut buf);
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn model_matrix_translates_then_scales() {
        let obj = Object::new(ObjectType::Custom(0), "crate")
            .with_pos(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::splat(2.0))
            .with_rotation(Vec3::new(0.0, 0.0, 90.0));
        let p = model_matrix(&obj).transform_point3(Vec3::X);
        // Rotated onto +y, scaled by 2, then moved
        assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn exploding_bomb_draws_three_spheres() {
        let mut scene = scene();
        let mut bomb = Object::bomb(2.0, 5.0).with_pos(Vec3::new(1.0, 1.0, 0.0));
        if let Some(b) = bomb.bomb.as_mut() {
            b.ignite();
        }
        scene.add(bomb);
        let mut buf = RenderBuffer::new();
        scene.render(&mut buf);
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.sphere_count(), 3);
        // p = 0.25
        let [haze, fire, core] = [buf.spheres[0], buf.spheres[1], buf.spheres[2]];
        assert_eq!(haze.center, [1.0, 1.0, 0.5]);
        assert!((haze.radius - 0.125).abs() < 1e-6);
        assert!((haze.color[3] - 0.275).abs() < 1e-6);
        assert_eq!(fire.radius, 0.5);
        assert!((fire.color[1] - 0.2).abs() < 1e-6);
        assert_eq!(core.radius, BLAST_CORE_RADIUS);
        assert!((core.color[3] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn late_blast_drops_haze() {
        let mut buf = RenderBuffer::new();
        let mut bomb = BombState::new(1.0);
        bomb.ignite();
        bomb.current_radius = 0.9;
        push_blast(&mut buf, Vec3::ZERO, &bomb);
        assert_eq!(buf.sphere_count(), 2);

        // Zero radius counts as a finished blast
        let mut buf = RenderBuffer::new();
        let mut empty = BombState::new(0.0);
        empty.ignite();
        push_blast(&mut buf, Vec3::ZERO, &empty);
        assert_eq!(buf.sphere_count(), 2);
        assert_eq!(buf.spheres[0].color[3], 0.0);
    }
}
