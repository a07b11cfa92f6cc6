use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::core::math::Range2;

/// Asset manifest describing all atlases and named sprites for a game.
/// Loaded from JSON at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + pixel rect.
    #[serde(default)]
    pub sprites: BTreeMap<String, SpriteDescriptor>,
    /// Rows of equally sized animation frames.
    #[serde(default)]
    pub strips: Vec<StripDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Lookup name for the loaded image.
    pub name: String,
    /// Path handed to the image loader.
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// `[x0, y0, x1, y1]` in atlas pixels.
    pub rect: [f32; 4],
}

/// `count` frames of `frame_size`, laid out left to right from `origin`,
/// registered as `{prefix}0`, `{prefix}1`, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripDescriptor {
    pub prefix: String,
    pub atlas: u32,
    #[serde(default)]
    pub origin: [f32; 2],
    pub frame_size: [f32; 2],
    pub count: u32,
}

impl StripDescriptor {
    /// Expand into `(name, descriptor)` pairs.
    pub fn frames(&self) -> impl Iterator<Item = (String, SpriteDescriptor)> + '_ {
        let [ox, oy] = self.origin;
        let [w, h] = self.frame_size;
        (0..self.count).map(move |i| {
            let x0 = ox + w * i as f32;
            let name = format!("{}{}", self.prefix, i);
            (name, SpriteDescriptor { atlas: self.atlas, rect: [x0, oy, x0 + w, oy + h] })
        })
    }
}

impl SpriteDescriptor {
    pub fn sub_rect(&self) -> Range2 {
        Range2::from_array(self.rect)
    }
}

/// Plant atlas: eight 16x64 growth frames followed by a 4x4 seed icon.
pub const GARDEN_MANIFEST: &str = r#"{
    "atlases": [
        { "name": "plant", "path": "plant.png" }
    ],
    "strips": [
        { "prefix": "plant", "atlas": 0, "origin": [0, 0], "frame_size": [16, 64], "count": 8 }
    ],
    "sprites": {
        "resource1": { "atlas": 0, "rect": [128, 0, 132, 4] }
    }
}"#;

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in garden manifest.
    pub fn garden() -> Result<Self, serde_json::Error> {
        Self::from_json(GARDEN_MANIFEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "tiles", "path": "tiles.png" }
            ],
            "sprites": {
                "hero": { "atlas": 0, "rect": [0, 0, 16, 16] }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases.len(), 1);
        assert_eq!(manifest.sprites["hero"].atlas, 0);
        assert!(manifest.strips.is_empty());
    }

    #[test]
    fn strip_expands_consecutive_frames() {
        let strip = StripDescriptor {
            prefix: "walk".into(),
            atlas: 1,
            origin: [0.0, 32.0],
            frame_size: [16.0, 16.0],
            count: 3,
        };
        let frames: Vec<_> = strip.frames().collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].0, "walk2");
        assert_eq!(frames[2].1.rect, [32.0, 32.0, 48.0, 48.0]);
    }

    #[test]
    fn garden_manifest_parses() {
        let manifest = AssetManifest::garden().unwrap();
        assert_eq!(manifest.atlases[0].path, "plant.png");
        let plants: Vec<_> = manifest.strips[0].frames().collect();
        assert_eq!(plants.len(), 8);
        assert_eq!(plants[7].1.rect, [112.0, 0.0, 128.0, 64.0]);
        assert_eq!(manifest.sprites["resource1"].sub_rect().size(), glam::Vec2::new(4.0, 4.0));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(AssetManifest::from_json(r#"{ "sprites": {} }"#).is_err());
    }
}
