use glam::Vec3;

/// Offset between an object's z rotation and its direction of travel, in degrees.
/// A rotation of 90° travels along +x; 0° travels along -y.
pub const HEADING_OFFSET_DEGREES: f32 = -90.0;

/// Self-propelled movement along the heading implied by `rotation.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// World units per second.
    pub speed: f32,
    /// Whether the object is currently travelling.
    pub moving: bool,
}

impl Movement {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            moving: false,
        }
    }

    /// Planar displacement for one step of `dt` seconds facing `rotation_z` degrees.
    pub fn displacement(&self, rotation_z: f32, dt: f32) -> Vec3 {
        let heading = heading_radians(rotation_z);
        let distance = self.speed * dt;
        Vec3::new(heading.cos() * distance, heading.sin() * distance, 0.0)
    }
}

/// Direction of travel in radians for a z rotation in degrees.
pub fn heading_radians(rotation_z: f32) -> f32 {
    (rotation_z + HEADING_OFFSET_DEGREES).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_90_moves_along_x() {
        let m = Movement { speed: 2.0, moving: true };
        let d = m.displacement(90.0, 1.0);
        assert!((d.x - 2.0).abs() < 1e-5);
        assert!(d.y.abs() < 1e-5);
    }

    #[test]
    fn rotation_0_moves_along_negative_y() {
        let m = Movement { speed: 1.5, moving: true };
        let d = m.displacement(0.0, 2.0);
        assert!(d.x.abs() < 1e-5);
        assert!((d.y + 3.0).abs() < 1e-5);
        assert_eq!(d.z, 0.0);
    }
}
