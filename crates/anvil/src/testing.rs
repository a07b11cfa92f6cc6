//! In-memory collaborators for driving the core without a GPU or files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use crate::assets::error::AssetError;
use crate::assets::images::{DecodedImage, ImageLoader};
use crate::renderer::draw::{DrawCommand, DrawList, QuadInstance};
use crate::renderer::traits::{Renderer, TextureHandle};

/// Serves solid white images from memory.
#[derive(Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<PathBuf, DecodedImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        let rgba = vec![255; (width * height * 4) as usize];
        self.images.insert(PathBuf::from(path), DecodedImage { width, height, rgba });
        self
    }
}

impl ImageLoader for MemoryImageLoader {
    fn decode(&self, path: &Path) -> Result<DecodedImage, AssetError> {
        self.images.get(path).cloned().ok_or_else(|| AssetError::Decode {
            path: path.to_path_buf(),
            reason: "not in memory loader".to_string(),
        })
    }
}

/// Keeps a copy of every submitted frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_texture: u32,
    live: Vec<TextureHandle>,
    pub frames: Vec<RecordedFrame>,
}

#[derive(Debug, Clone)]
pub struct RecordedFrame {
    pub commands: Vec<DrawCommand>,
    pub quads: Vec<QuadInstance>,
}

impl RecordingRenderer {
    pub fn live_textures(&self) -> usize {
        self.live.len()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn create_texture(&mut self, _name: &str, _image: &DecodedImage) -> Result<TextureHandle, String> {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        self.live.push(handle);
        Ok(handle)
    }

    fn destroy_texture(&mut self, handle: TextureHandle) {
        self.live.retain(|h| *h != handle);
    }

    fn draw(&mut self, frame: &DrawList) {
        self.frames.push(RecordedFrame {
            commands: frame.commands().to_vec(),
            quads: frame.quads().to_vec(),
        });
    }
}
