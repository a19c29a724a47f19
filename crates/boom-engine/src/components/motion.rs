//! Simple procedural animation: spin, bob, throb and "go to target" ramps.
//!
//! Oscillations are applied as deltas: the offset of the old phase is
//! removed and the offset of the new phase added, so the object swings
//! around its rest transform without drifting.

use glam::Vec3;
use std::f32::consts::TAU;

/// Settling tolerance for position ramps.
pub const MOVE_EPSILON: f32 = 0.1;
/// Settling tolerance for rotation ramps, in degrees.
pub const ROTATE_EPSILON: f32 = 0.1;
/// Settling tolerance for scale ramps.
pub const SCALE_EPSILON: f32 = 0.01;

/// Sine oscillator driving a bob or throb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Peak offset.
    pub amplitude: f32,
    /// Phase speed in radians per second.
    pub speed: f32,
    /// Current phase in radians, kept in `[0, TAU)`.
    pub phase: f32,
}

impl Oscillator {
    pub fn new(amplitude: f32, speed: f32) -> Self {
        Self {
            amplitude,
            speed,
            phase: 0.0,
        }
    }

    /// Current offset from the rest value.
    pub fn offset(&self) -> f32 {
        self.amplitude * self.phase.sin()
    }

    /// Advance the phase by `dt` and return how much the offset changed.
    pub fn step(&mut self, dt: f32) -> f32 {
        let before = self.offset();
        self.phase = (self.phase + self.speed * dt).rem_euclid(TAU);
        self.offset() - before
    }
}

/// Fixed-rate approach toward a target vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub target: Vec3,
    /// Units (or degrees) per second, per axis.
    pub rate: f32,
}

impl Ramp {
    pub fn new(target: Vec3, rate: f32) -> Self {
        Self { target, rate }
    }
}

/// Procedural animation toggles for an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Motion {
    /// Continuous z rotation in degrees per second.
    pub spin: Option<f32>,
    /// Vertical bob along z.
    pub bob: Option<Oscillator>,
    /// Scale pulse on all three axes.
    pub throb: Option<Oscillator>,
    pub move_to: Option<Ramp>,
    pub rotate_to: Option<Ramp>,
    pub scale_to: Option<Ramp>,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_spin(mut self, degrees_per_second: f32) -> Self {
        self.spin = Some(degrees_per_second);
        self
    }

    pub fn with_bob(mut self, amplitude: f32, speed: f32) -> Self {
        self.bob = Some(Oscillator::new(amplitude, speed));
        self
    }

    pub fn with_throb(mut self, amplitude: f32, speed: f32) -> Self {
        self.throb = Some(Oscillator::new(amplitude, speed));
        self
    }

    // -- One-shot ramps --

    pub fn move_to(&mut self, target: Vec3, rate: f32) {
        self.move_to = Some(Ramp::new(target, rate));
    }

    /// Rotate toward `target` (degrees, any range) along the shortest way round.
    pub fn rotate_to(&mut self, target: Vec3, rate: f32) {
        let wrapped = Vec3::new(
            wrap_degrees(target.x),
            wrap_degrees(target.y),
            wrap_degrees(target.z),
        );
        self.rotate_to = Some(Ramp::new(wrapped, rate));
    }

    pub fn scale_to(&mut self, target: Vec3, rate: f32) {
        self.scale_to = Some(Ramp::new(target, rate));
    }

    /// Whether any one-shot ramp is still running.
    pub fn is_ramping(&self) -> bool {
        self.move_to.is_some() || self.rotate_to.is_some() || self.scale_to.is_some()
    }

    /// Apply every enabled effect for a step of `dt` seconds.
    pub fn apply(&mut self, pos: &mut Vec3, rotation: &mut Vec3, scale: &mut Vec3, dt: f32) {
        if let Some(speed) = self.spin {
            rotation.z = wrap_degrees(rotation.z + speed * dt);
        }

        if let Some(bob) = self.bob.as_mut() {
            pos.z += bob.step(dt);
        }

        if let Some(throb) = self.throb.as_mut() {
            *scale += Vec3::splat(throb.step(dt));
        }

        if let Some(ramp) = self.move_to {
            let step = ramp.rate * dt;
            let settled = [
                step_linear(&mut pos.x, ramp.target.x, step, MOVE_EPSILON),
                step_linear(&mut pos.y, ramp.target.y, step, MOVE_EPSILON),
                step_linear(&mut pos.z, ramp.target.z, step, MOVE_EPSILON),
            ];
            if settled.iter().all(|s| *s) {
                self.move_to = None;
            }
        }

        if let Some(ramp) = self.rotate_to {
            let step = ramp.rate * dt;
            let settled = [
                step_angle(&mut rotation.x, ramp.target.x, step, ROTATE_EPSILON),
                step_angle(&mut rotation.y, ramp.target.y, step, ROTATE_EPSILON),
                step_angle(&mut rotation.z, ramp.target.z, step, ROTATE_EPSILON),
            ];
            if settled.iter().all(|s| *s) {
                self.rotate_to = None;
            }
        }

        if let Some(ramp) = self.scale_to {
            let step = ramp.rate * dt;
            let settled = [
                step_linear(&mut scale.x, ramp.target.x, step, SCALE_EPSILON),
                step_linear(&mut scale.y, ramp.target.y, step, SCALE_EPSILON),
                step_linear(&mut scale.z, ramp.target.z, step, SCALE_EPSILON),
            ];
            if settled.iter().all(|s| *s) {
                self.scale_to = None;
            }
        }
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]` degrees.
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let delta = wrap_degrees(to - from);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Move `value` toward `target` by at most `step`. Returns true once within `epsilon`.
fn step_linear(value: &mut f32, target: f32, step: f32, epsilon: f32) -> bool {
    let delta = target - *value;
    if delta.abs() <= epsilon {
        return true;
    }
    if delta.abs() <= step {
        *value = target;
    } else {
        *value += step * delta.signum();
    }
    (target - *value).abs() <= epsilon
}

/// Angular variant of `step_linear`; the result stays wrapped into `[0, 360)`.
fn step_angle(value: &mut f32, target: f32, step: f32, epsilon: f32) -> bool {
    let delta = shortest_delta(*value, target);
    if delta.abs() <= epsilon {
        return true;
    }
    let amount = if delta.abs() <= step {
        delta
    } else {
        step * delta.signum()
    };
    *value = wrap_degrees(*value + amount);
    shortest_delta(*value, target).abs() <= epsilon
}
