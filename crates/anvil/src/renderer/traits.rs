//! Contract for the graphics backend that owns the window and GPU context.
//!
//! The core never touches a GPU. A host wraps its graphics library in a
//! [`Renderer`]; the core uploads atlases once at startup and hands over one
//! finished [`DrawList`] per frame.

use crate::assets::images::DecodedImage;
use crate::renderer::draw::DrawList;

/// Opaque GPU texture handle issued by a [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Graphics backend.
///
/// # Example Implementation
///
/// ```ignore
/// struct GlRenderer { /* context, shaders, ... */ }
///
/// impl Renderer for GlRenderer {
///     fn backend(&self) -> &'static str { "gl33" }
///
///     fn create_texture(&mut self, name: &str, image: &DecodedImage) -> Result<TextureHandle, String> {
///         // glTexImage2D(...)
///     }
///
///     fn destroy_texture(&mut self, handle: TextureHandle) { /* glDeleteTextures */ }
///
///     fn draw(&mut self, frame: &DrawList) {
///         // upload frame.quad_bytes(), replay frame.commands() ...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g. "gl33", "d3d11", "recording").
    fn backend(&self) -> &'static str;

    /// Upload decoded RGBA pixels. Called once per atlas at startup.
    fn create_texture(&mut self, name: &str, image: &DecodedImage) -> Result<TextureHandle, String>;

    /// Release a texture. Called once per atlas at shutdown.
    fn destroy_texture(&mut self, handle: TextureHandle);

    /// Submit one finished render pass.
    fn draw(&mut self, frame: &DrawList);
}
