use std::path::Path;
use glam::UVec2;
use crate::assets::error::AssetError;
use crate::components::sprite::ImageId;
use crate::core::pool::FixedPool;
use crate::renderer::traits::{Renderer, TextureHandle};

/// Max images loaded per game.
pub const MAX_IMAGES: usize = 64;

/// Raw RGBA8 pixels, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decodes an image file into [`DecodedImage`], flipped vertically.
pub trait ImageLoader {
    fn decode(&self, path: &Path) -> Result<DecodedImage, AssetError>;
}

/// [`ImageLoader`] backed by the `image` crate.
#[cfg(feature = "decode")]
#[derive(Debug, Clone, Default)]
pub struct FileImageLoader {
    /// Directory asset paths are resolved against.
    pub root: std::path::PathBuf,
}

#[cfg(feature = "decode")]
impl FileImageLoader {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "decode")]
impl ImageLoader for FileImageLoader {
    fn decode(&self, path: &Path) -> Result<DecodedImage, AssetError> {
        let full = self.root.join(path);
        let img = image::open(&full).map_err(|e| AssetError::Decode {
            path: full.clone(),
            reason: e.to_string(),
        })?;
        let rgba = img.flipv().into_rgba8();
        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// A loaded, GPU-resident image.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub name: String,
    pub texture: TextureHandle,
    pub size: UVec2,
}

/// Images acquired at startup and released at shutdown.
#[derive(Debug, Default)]
pub struct ImageTable {
    images: FixedPool<Image, MAX_IMAGES>,
}

impl ImageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and upload it under `name`. Panics if the table is full.
    pub fn load(
        &mut self,
        name: &str,
        path: &Path,
        loader: &dyn ImageLoader,
        renderer: &mut dyn Renderer,
    ) -> Result<ImageId, AssetError> {
        let decoded = loader.decode(path)?;
        let texture = renderer
            .create_texture(name, &decoded)
            .map_err(|reason| AssetError::Texture { name: name.to_string(), reason })?;

        let id = ImageId(self.images.len() as u32);
        *self.images.push() = Image {
            name: name.to_string(),
            texture,
            size: UVec2::new(decoded.width, decoded.height),
        };
        log::info!(
            "loaded image {name:?} from {} ({}x{}) on {}",
            path.display(),
            decoded.width,
            decoded.height,
            renderer.backend()
        );
        Ok(id)
    }

    /// Look up an image by name. A missing name is a fatal programming error.
    pub fn find(&self, name: &str) -> ImageId {
        match self.images.iter().position(|img| img.name == name) {
            Some(index) => ImageId(index as u32),
            None => panic!("no image named {name:?} loaded"),
        }
    }

    pub fn get(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id.0 as usize)
    }

    pub fn texture(&self, id: ImageId) -> TextureHandle {
        self.images[id.0 as usize].texture
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Release every texture and empty the table.
    pub fn release(&mut self, renderer: &mut dyn Renderer) {
        for image in &self.images {
            renderer.destroy_texture(image.texture);
        }
        log::info!("released {} images", self.images.len());
        self.images.reset();
    }
}
