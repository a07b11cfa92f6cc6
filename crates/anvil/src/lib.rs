pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience
pub use api::error::{ConfigError, StartupError};
pub use api::game::{GameConfig, GameState};
pub use runner::GameRunner;
pub use crate::core::math::Range2;
pub use crate::core::pool::FixedPool;
pub use crate::core::rng::Rng;
pub use crate::core::world::{EntityHandle, GardenSprites, World};
pub use components::entity::{Entity, RenderRect, PlantGrowth};
pub use components::emitter::{Emitter, EmitterKind, EmitContext};
pub use components::sprite::{ImageId, Sprite, SpriteId};
pub use systems::particles::{Particle, ParticlePool};
pub use systems::physics::PhysicsConfig;
pub use renderer::camera::Camera;
pub use renderer::draw::{DrawCommand, DrawList, QuadInstance};
pub use renderer::traits::{Renderer, TextureHandle};
pub use input::queue::{InputEvent, InputQueue, MouseButton};
pub use input::state::InputState;
pub use assets::error::AssetError;
pub use assets::images::{DecodedImage, ImageLoader, ImageTable};
#[cfg(feature = "decode")]
pub use assets::images::FileImageLoader;
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
