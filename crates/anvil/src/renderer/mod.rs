pub mod camera;
pub mod draw;
pub mod traits;

pub use traits::{Renderer, TextureHandle};
