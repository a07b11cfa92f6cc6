pub mod debug;
pub mod particles;
pub mod physics;
pub mod plants;
pub mod render;
