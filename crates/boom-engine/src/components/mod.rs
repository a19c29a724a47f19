pub mod ai;
pub mod animation;
pub mod block;
pub mod bomb;
pub mod item;
pub mod motion;
pub mod movement;
pub mod object;
pub mod player;
