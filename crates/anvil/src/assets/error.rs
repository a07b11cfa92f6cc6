use std::path::PathBuf;
use thiserror::Error;

/// Startup asset failures. The host treats any of these as fatal.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("renderer rejected texture {name:?}: {reason}")]
    Texture { name: String, reason: String },

    #[error("sprite {sprite:?} references unknown atlas {atlas}")]
    UnknownAtlas { sprite: String, atlas: u32 },
}
