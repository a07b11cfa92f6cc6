use thiserror::Error;
use crate::assets::error::AssetError;

/// Rejected [`GameConfig`](crate::api::game::GameConfig) values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("camera_scale_range [{min}, {max}] must satisfy 0 < min <= max")]
    ScaleRange { min: f32, max: f32 },

    #[error("camera_scale {0} is not a finite number")]
    Scale(f32),
}

/// Anything that stops the game from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("asset loading failed: {0}")]
    Asset(#[from] AssetError),
}
