//! Animation playback state for an object.
//!
//! The frame table lives in the mesh (`AnimationDef`); an object only tracks
//! which animation it plays, the current frame and the time banked toward the
//! next frame.

use crate::assets::mesh::AnimationDef;

/// Animation state for an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    /// Currently playing animation name. Empty means the static pose.
    pub current: String,
    /// Current frame index.
    pub frame: u32,
    /// Time accumulated since the last frame advance.
    pub frame_timer: f32,
}

impl AnimationState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            current: name.into(),
            ..Default::default()
        }
    }

    /// Play a named animation from the beginning.
    pub fn play(&mut self, name: &str) {
        self.current = name.to_string();
        self.frame = 0;
        self.frame_timer = 0.0;
    }

    /// Play animation only if it's different from current.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Whether the object shows its static pose rather than an animation.
    pub fn is_static(&self) -> bool {
        self.current.is_empty()
    }

    /// Advance by dt seconds through `def`. Returns true if the frame changed.
    /// Frames always wrap, so `frame` stays below `def.frame_count`.
    pub fn advance(&mut self, def: &AnimationDef, dt: f32) -> bool {
        if def.frame_count == 0 || !(def.frame_duration > 0.0 && def.frame_duration.is_finite()) {
            return false;
        }

        self.frame_timer += dt;
        if !self.frame_timer.is_finite() {
            self.frame_timer = 0.0;
            return false;
        }
        if self.frame_timer < def.frame_duration {
            return false;
        }

        // Skip whole frames in one step; tiny durations would stall a subtract loop
        let elapsed = (self.frame_timer / def.frame_duration).floor();
        self.frame_timer = (self.frame_timer - elapsed * def.frame_duration).max(0.0);
        let skipped = (elapsed as u64 % def.frame_count as u64) as u32;
        self.frame = (self.frame % def.frame_count + skipped) % def.frame_count;
        true
    }
}
