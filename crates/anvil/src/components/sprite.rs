use crate::core::math::Range2;

/// Index of a loaded image in the [`ImageTable`](crate::assets::images::ImageTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageId(pub u32);

/// Index of a named sprite in the [`SpriteRegistry`](crate::assets::registry::SpriteRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u32);

/// A sub-rectangle of an atlas image, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Which atlas this sprite is cut from.
    pub image: ImageId,
    /// Source region within the atlas.
    pub sub_rect: Range2,
}
