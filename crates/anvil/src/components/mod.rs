pub mod emitter;
pub mod entity;
pub mod sprite;
