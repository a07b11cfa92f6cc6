use std::collections::HashMap;
use std::path::Path;
use crate::assets::error::AssetError;
use crate::assets::images::{ImageLoader, ImageTable};
use crate::assets::manifest::{AssetManifest, SpriteDescriptor};
use crate::components::sprite::{ImageId, Sprite, SpriteId};
use crate::renderer::traits::Renderer;

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based sprite lookup for game code.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: Vec<Sprite>,
    by_name: HashMap<String, SpriteId>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sprite. Re-registering a name replaces the lookup entry.
    pub fn insert(&mut self, name: impl Into<String>, sprite: Sprite) -> SpriteId {
        let id = SpriteId(self.sprites.len() as u32);
        self.sprites.push(sprite);
        self.by_name.insert(name.into(), id);
        id
    }

    /// Load every atlas in `manifest` into `images` and register its sprites.
    pub fn load_manifest(
        &mut self,
        manifest: &AssetManifest,
        images: &mut ImageTable,
        loader: &dyn ImageLoader,
        renderer: &mut dyn Renderer,
    ) -> Result<(), AssetError> {
        let mut atlas_ids: Vec<ImageId> = Vec::with_capacity(manifest.atlases.len());
        for atlas in &manifest.atlases {
            atlas_ids.push(images.load(&atlas.name, Path::new(&atlas.path), loader, renderer)?);
        }

        let strip_frames = manifest.strips.iter().flat_map(|s| s.frames());
        let named = manifest.sprites.iter().map(|(n, d)| (n.clone(), d.clone()));
        for (name, desc) in strip_frames.chain(named) {
            let image = Self::atlas_for(&atlas_ids, &name, &desc)?;
            self.insert(name, Sprite { image, sub_rect: desc.sub_rect() });
        }
        log::info!("registered {} sprites from {} atlases", self.sprites.len(), atlas_ids.len());
        Ok(())
    }

    fn atlas_for(atlas_ids: &[ImageId], name: &str, desc: &SpriteDescriptor) -> Result<ImageId, AssetError> {
        atlas_ids
            .get(desc.atlas as usize)
            .copied()
            .ok_or_else(|| AssetError::UnknownAtlas { sprite: name.to_string(), atlas: desc.atlas })
    }

    /// Look up a sprite id by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<SpriteId> {
        self.by_name.get(name).copied()
    }

    /// Look up a sprite id by name. A missing name is a fatal programming error.
    pub fn lookup(&self, name: &str) -> SpriteId {
        match self.get(name) {
            Some(id) => id,
            None => panic!("no sprite named {name:?} registered"),
        }
    }

    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
