pub mod proximity;
pub mod scene;
pub mod time;
