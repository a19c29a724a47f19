//! Radius-based proximity policy.
//!
//! Every interaction test works on the squared planar distance (z ignored).
//! Movement collision and explosion reach use different threshold shapes;
//! they are kept as two separate functions and must not be unified.

use glam::Vec3;

/// Fraction of the combined bounding radii used by movement collision.
pub const MOVEMENT_COLLISION_FACTOR: f32 = 0.6;

/// Squared planar distance: `(ax - bx)² + (ay - by)²`.
#[inline]
pub fn distance2d(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Threshold a squared distance is compared against for movement collision.
/// Note: the combined radius is scaled, not squared.
#[inline]
pub fn movement_collision_threshold(radius_a: f32, radius_b: f32) -> f32 {
    (radius_a + radius_b) * MOVEMENT_COLLISION_FACTOR
}

/// Threshold a squared distance is compared against for blast reach.
#[inline]
pub fn explosion_radius_threshold(radius: f32) -> f32 {
    radius * radius
}

/// Whether a point at squared distance `dist2` is inside a blast of `radius`.
#[inline]
pub fn within_blast(dist2: f32, radius: f32) -> bool {
    dist2 <= explosion_radius_threshold(radius)
}

/// Whether a move from `from` to `to` runs into an obstacle at `other`.
///
/// Only fires when the move does not increase the distance to the obstacle,
/// so objects that overlap can always separate.
pub fn blocks_move(from: Vec3, to: Vec3, other: Vec3, radius_a: f32, radius_b: f32) -> bool {
    let new_dist = distance2d(to, other);
    let old_dist = distance2d(from, other);
    new_dist <= old_dist && new_dist <= movement_collision_threshold(radius_a, radius_b)
}
