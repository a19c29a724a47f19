pub mod ai;
pub mod explosion;
pub mod lifecycle;
pub mod movement;
pub mod render;
pub mod rng;
