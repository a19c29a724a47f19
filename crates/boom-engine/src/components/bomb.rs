use crate::api::types::ObjectId;

/// Blast radius an explosion starts from.
pub const SEED_RADIUS: f32 = 0.5;

/// Lifecycle phase of a bomb. Removal is the terminal state and is owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BombPhase {
    /// Counting down its fuse.
    #[default]
    Armed,
    /// Blast growing toward `radius`.
    Exploding,
}

/// Bomb state: fixed blast radius and the growing current blast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BombState {
    /// Final blast radius, fixed at creation.
    pub radius: f32,
    /// Current blast radius while exploding.
    pub current_radius: f32,
    pub phase: BombPhase,
    /// Player that laid the bomb, if any.
    pub owner: Option<ObjectId>,
}

impl BombState {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            current_radius: 0.0,
            phase: BombPhase::Armed,
            owner: None,
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.phase == BombPhase::Exploding
    }

    /// Switch from armed to exploding. Returns false if the bomb was already exploding.
    pub fn ignite(&mut self) -> bool {
        if self.is_exploding() {
            return false;
        }
        self.phase = BombPhase::Exploding;
        self.current_radius = SEED_RADIUS;
        true
    }

    /// Grow the blast: `current += dt * ((radius - current) + 0.5) * 2`.
    pub fn grow(&mut self, dt: f32) {
        let remaining = self.radius - self.current_radius;
        self.current_radius += dt * (remaining + 0.5) * 2.0;
    }

    /// Whether the blast has reached its final radius.
    pub fn is_spent(&self) -> bool {
        self.is_exploding() && self.current_radius >= self.radius
    }

    /// Blast progress in `[0, 1]`. A bomb without radius counts as complete.
    pub fn percent_complete(&self) -> f32 {
        if self.radius <= 0.0 {
            return 1.0;
        }
        (self.current_radius / self.radius).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ignite_seeds_radius_once() {
        let mut bomb = BombState::new(2.0);
        assert!(bomb.ignite());
        assert_eq!(bomb.current_radius, SEED_RADIUS);
        bomb.grow(0.1);
        let grown = bomb.current_radius;
        assert!(!bomb.ignite());
        assert_eq!(bomb.current_radius, grown);
    }

    #[test]
    fn growth_law() {
        let mut bomb = BombState::new(2.0);
        bomb.ignite();
        bomb.grow(0.02);
        // 0.5 + 0.02 * (1.5 + 0.5) * 2
        assert!((bomb.current_radius - 0.58).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_is_complete() {
        let mut bomb = BombState::new(0.0);
        bomb.ignite();
        assert_eq!(bomb.percent_complete(), 1.0);
        assert!(bomb.is_spent());
    }

    proptest! {
        #[test]
        fn blast_grows_monotonically_and_finishes(radius in 0.6f32..20.0, dt in 0.001f32..0.5) {
            let mut bomb = BombState::new(radius);
            bomb.ignite();
            // Each step adds at least dt, so this bound is generous
            let max_steps = ((radius / dt).ceil() as usize) + 2;
            let mut steps = 0;
            while !bomb.is_spent() {
                let before = bomb.current_radius;
                bomb.grow(dt);
                prop_assert!(bomb.current_radius >= before);
                steps += 1;
                prop_assert!(steps <= max_steps);
            }
        }
    }
}
