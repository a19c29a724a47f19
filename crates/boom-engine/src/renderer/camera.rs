use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

use crate::api::config::GameConfig;

pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera looking down at the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Smoothing factor for `follow` (0.0 = instant, 0.99 = very slow).
    pub smoothing: f32,
    zoom: Option<Zoom>,
    turn: Option<Turn>,
}

/// Dolly along the eye-target axis in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Zoom {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

/// Roll of the whole view onto a new up axis in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Turn {
    axis: Vec3,
    angle: f32,
    start_up: Vec3,
    /// Unit eye offset from the target when the roll started.
    start_dir: Vec3,
    elapsed: f32,
    duration: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y: 45f32.to_radians(),
            aspect: 4.0 / 3.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            smoothing: 0.0,
            zoom: None,
            turn: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Self::new(
            Vec3::from(config.camera_eye),
            Vec3::from(config.camera_target),
            Vec3::from(config.camera_up),
        );
        camera.fov_y = config.fov_y_degrees.to_radians();
        camera.aspect = config.aspect;
        camera
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.eye.extend(1.0).to_array(),
        }
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Set smoothing factor for camera movement.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    /// Distance between eye and target.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Move eye and target together so the camera looks at `point`.
    pub fn look_at(&mut self, point: Vec3) {
        let offset = point - self.target;
        self.eye += offset;
        self.target = point;
    }

    /// Smoothly move camera toward `point`.
    /// Call this each frame with the followed object's position.
    pub fn follow(&mut self, point: Vec3, dt: f32) {
        if self.smoothing <= 0.0 {
            self.look_at(point);
        } else {
            let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
            let offset = (point - self.target) * lerp_factor;
            self.eye += offset;
            self.target += offset;
        }
    }

    /// Start a smooth dolly to `distance` from the target over `duration` seconds.
    /// Ignored while another zoom runs or when already at that distance.
    pub fn zoom_to(&mut self, distance: f32, duration: f32) {
        let current = self.distance();
        if self.zoom.is_some() || (distance - current).abs() < 1e-4 {
            return;
        }
        self.zoom = Some(Zoom {
            from: current,
            to: distance,
            elapsed: 0.0,
            duration,
        });
    }

    pub fn is_zooming(&self) -> bool {
        self.zoom.is_some()
    }

    /// Start rolling the view so `up` becomes the up axis after `duration` seconds.
    /// The eye swings around the target by the same rotation, keeping its distance.
    /// Ignored while another roll runs, for a zero vector, or when `up` is unchanged.
    pub fn rotate_to(&mut self, up: Vec3, duration: f32) {
        let to = up.normalize_or_zero();
        let from = self.up.normalize_or_zero();
        if self.turn.is_some() || to == Vec3::ZERO || from == Vec3::ZERO {
            return;
        }
        let (axis, angle) = Quat::from_rotation_arc(from, to).to_axis_angle();
        if angle.abs() < 1e-4 {
            return;
        }
        self.turn = Some(Turn {
            axis,
            angle,
            start_up: from,
            start_dir: (self.eye - self.target).normalize_or_zero(),
            elapsed: 0.0,
            duration,
        });
    }

    pub fn is_rotating(&self) -> bool {
        self.turn.is_some()
    }

    /// Advance a running roll, then a running zoom.
    pub fn update(&mut self, dt: f32) {
        self.step_turn(dt);
        self.step_zoom(dt);
    }

    fn step_turn(&mut self, dt: f32) {
        let Some(mut turn) = self.turn else {
            return;
        };
        turn.elapsed += dt;
        let done = turn.elapsed >= turn.duration;
        let t = if done {
            1.0
        } else {
            ease_progress(turn.elapsed, turn.duration)
        };
        let rotation = Quat::from_axis_angle(turn.axis, turn.angle * t);
        let distance = self.distance();
        self.up = rotation * turn.start_up;
        self.eye = self.target + rotation * turn.start_dir * distance;
        self.turn = if done { None } else { Some(turn) };
    }

    fn step_zoom(&mut self, dt: f32) {
        let Some(mut zoom) = self.zoom else {
            return;
        };
        zoom.elapsed += dt;
        if zoom.elapsed >= zoom.duration {
            self.set_distance(zoom.to);
            self.zoom = None;
        } else {
            let t = ease_progress(zoom.elapsed, zoom.duration);
            self.set_distance(zoom.from + (zoom.to - zoom.from) * t);
            self.zoom = Some(zoom);
        }
    }

    fn set_distance(&mut self, distance: f32) {
        let mut dir = (self.eye - self.target).normalize_or_zero();
        if dir == Vec3::ZERO {
            dir = Vec3::new(0.0, -1.0, 1.0).normalize();
        }
        self.eye = self.target + dir * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Camera easing shared by zoom and roll: `1 - sin(k)/k + 0.1 sin(k)` with `k = 3π t/T`.
/// Starts at 0, overshoots slightly and lands on 1.
pub fn ease_progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    let k = 3.0 * PI * (elapsed / duration).clamp(0.0, 1.0);
    if k <= f32::EPSILON {
        return 0.0;
    }
    1.0 - k.sin() / k + 0.1 * k.sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_at_origin_from_above() {
        let cam = Camera::default();
        assert_eq!(cam.eye, Vec3::new(0.0, -25.0, 25.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert_eq!(cam.up, Vec3::Z);
        let origin = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(origin.x.abs() < 1e-5 && origin.y.abs() < 1e-5);
    }

    #[test]
    fn zoom_lands_exactly() {
        let mut cam = Camera::default();
        cam.zoom_to(10.0, 1.0);
        assert!(cam.is_zooming());
        for _ in 0..12 {
            cam.update(0.1);
        }
        assert!(!cam.is_zooming());
        assert!((cam.distance() - 10.0).abs() < 1e-4);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn zoom_ignored_while_running_or_unchanged() {
        let mut cam = Camera::default();
        let start = cam.distance();
        cam.zoom_to(start, 1.0);
        assert!(!cam.is_zooming());

        cam.zoom_to(20.0, 1.0);
        cam.zoom_to(50.0, 1.0);
        cam.update(5.0);
        assert!((cam.distance() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn zoom_easing_endpoints() {
        assert_eq!(ease_progress(0.0, 2.0), 0.0);
        assert!((ease_progress(2.0, 2.0) - 1.0).abs() < 1e-5);
        assert_eq!(ease_progress(0.3, 0.0), 1.0);
    }

    #[test]
    fn rotate_swings_view_onto_new_up() {
        let mut cam = Camera::default();
        let distance = cam.distance();
        cam.rotate_to(Vec3::Y, 1.0);
        assert!(cam.is_rotating());
        cam.update(0.5);
        assert!(cam.is_rotating());
        assert!((cam.distance() - distance).abs() < 1e-3);
        for _ in 0..6 {
            cam.update(0.1);
        }
        assert!(!cam.is_rotating());
        assert!((cam.up - Vec3::Y).length() < 1e-4);
        // Z up to Y up is a -90° turn about X: (0, -25, 25) ends at (0, 25, 25)
        assert!((cam.eye - Vec3::new(0.0, 25.0, 25.0)).length() < 1e-3);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn rotate_ignored_while_running_or_unchanged() {
        let mut cam = Camera::default();
        cam.rotate_to(Vec3::new(0.0, 0.0, 3.0), 1.0);
        assert!(!cam.is_rotating());
        cam.rotate_to(Vec3::ZERO, 1.0);
        assert!(!cam.is_rotating());

        cam.rotate_to(Vec3::X, 1.0);
        cam.rotate_to(Vec3::Y, 1.0);
        cam.update(2.0);
        assert!((cam.up - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn rotate_and_zoom_compose() {
        let mut cam = Camera::default();
        cam.rotate_to(Vec3::Y, 1.0);
        cam.zoom_to(10.0, 1.0);
        cam.update(2.0);
        assert!((cam.distance() - 10.0).abs() < 1e-3);
        assert!((cam.up - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn follow_without_smoothing_snaps() {
        let mut cam = Camera::default();
        cam.follow(Vec3::new(3.0, 4.0, 0.0), 0.016);
        assert_eq!(cam.target, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(cam.eye, Vec3::new(3.0, -21.0, 25.0));
    }

    #[test]
    fn follow_with_smoothing_interpolates() {
        let mut cam = Camera::default();
        cam.set_smoothing(0.9);
        cam.follow(Vec3::new(10.0, 0.0, 0.0), 0.016);
        assert!(cam.target.x > 0.0 && cam.target.x < 10.0);
        assert!((cam.eye.x - cam.target.x).abs() < 1e-5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera::default();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
        cam.resize(0.0, 100.0);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
    }
}
