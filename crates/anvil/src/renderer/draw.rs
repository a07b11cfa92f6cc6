use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};
use crate::core::math::Range2;
use crate::renderer::traits::TextureHandle;

/// One screen-space quad, flat for direct upload.
/// 12 floats + 2 words = 56 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Screen rect, window pixels, Y down: x0, y0, x1, y1.
    pub rect: [f32; 4],
    /// Source rect in texture pixels (zero when untextured).
    pub src: [f32; 4],
    pub color: [f32; 4],
    /// Raw [`TextureHandle`] value. Meaningless unless `textured` is 1.
    pub texture: u32,
    /// 1 for a textured quad, 0 for a solid fill.
    pub textured: u32,
}

impl QuadInstance {
    pub const STRIDE: usize = 56;

    pub fn solid(rect: Range2, color: Vec4) -> Self {
        Self {
            rect: rect.to_array(),
            src: [0.0; 4],
            color: color.to_array(),
            texture: 0,
            textured: 0,
        }
    }

    pub fn textured(rect: Range2, texture: TextureHandle, src: Range2, color: Vec4) -> Self {
        Self {
            rect: rect.to_array(),
            src: src.to_array(),
            color: color.to_array(),
            texture: texture.0,
            textured: 1,
        }
    }

    pub fn texture_handle(&self) -> Option<TextureHandle> {
        (self.textured != 0).then_some(TextureHandle(self.texture))
    }
}

/// Draw call in submission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Vec4),
    /// Index into [`DrawList::quads`].
    Quad(u32),
    Line { from: Vec2, to: Vec2, color: Vec4 },
}

/// One render pass worth of draw calls, in screen space.
/// Commands may only be recorded between [`DrawList::begin`] and [`DrawList::end`].
pub struct DrawList {
    commands: Vec<DrawCommand>,
    quads: Vec<QuadInstance>,
    window_size: Vec2,
    open: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(512),
            quads: Vec::with_capacity(512),
            window_size: Vec2::ZERO,
            open: false,
        }
    }

    /// Open a pass, discarding the previous frame.
    pub fn begin(&mut self, window_size: Vec2) {
        assert!(!self.open, "DrawList::begin called twice without end");
        self.commands.clear();
        self.quads.clear();
        self.window_size = window_size;
        self.open = true;
    }

    pub fn end(&mut self) {
        assert!(self.open, "DrawList::end called without begin");
        self.open = false;
    }

    fn record(&mut self, command: DrawCommand) {
        assert!(self.open, "draw command {command:?} issued outside a render pass");
        self.commands.push(command);
    }

    pub fn clear(&mut self, color: Vec4) {
        self.record(DrawCommand::Clear(color));
    }

    pub fn quad(&mut self, quad: QuadInstance) {
        let index = self.quads.len() as u32;
        self.record(DrawCommand::Quad(index));
        self.quads.push(quad);
    }

    pub fn filled_rect(&mut self, rect: Range2, color: Vec4) {
        self.quad(QuadInstance::solid(rect, color));
    }

    pub fn textured_rect(&mut self, rect: Range2, texture: TextureHandle, src: Range2, color: Vec4) {
        self.quad(QuadInstance::textured(rect, texture, src, color));
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        self.record(DrawCommand::Line { from, to, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn quads(&self) -> &[QuadInstance] {
        &self.quads
    }

    /// Raw quad stream for a vertex/instance buffer upload.
    pub fn quad_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Vec4)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_instance_stride() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), QuadInstance::STRIDE);
    }

    #[test]
    fn records_in_order_within_pass() {
        let mut list = DrawList::new();
        list.begin(Vec2::new(640.0, 480.0));
        list.clear(Vec4::ZERO);
        list.filled_rect(Range2::from_size(Vec2::ONE), Vec4::ONE);
        list.line(Vec2::ZERO, Vec2::ONE, Vec4::ONE);
        list.end();

        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.commands()[1], DrawCommand::Quad(0));
        assert_eq!(list.quads().len(), 1);
        assert_eq!(list.quad_bytes().len(), QuadInstance::STRIDE);
        assert_eq!(list.lines().count(), 1);
    }

    #[test]
    fn begin_discards_previous_frame() {
        let mut list = DrawList::new();
        list.begin(Vec2::ONE);
        list.filled_rect(Range2::ZERO, Vec4::ONE);
        list.end();
        list.begin(Vec2::ONE);
        assert!(list.commands().is_empty());
        assert!(list.quads().is_empty());
    }

    #[test]
    #[should_panic(expected = "outside a render pass")]
    fn drawing_outside_pass_panics() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::ONE, Vec4::ONE);
    }

    #[test]
    fn texture_handle_round_trips_through_quad() {
        let q = QuadInstance::textured(Range2::ZERO, TextureHandle(0), Range2::ZERO, Vec4::ONE);
        assert_eq!(q.texture_handle(), Some(TextureHandle(0)));
        assert_eq!(QuadInstance::solid(Range2::ZERO, Vec4::ONE).texture_handle(), None);
    }

    #[test]
    fn wide_texture_handles_survive_the_quad() {
        for raw in [0x0100_0002, u32::MAX] {
            let q = QuadInstance::textured(Range2::ZERO, TextureHandle(raw), Range2::ZERO, Vec4::ONE);
            assert_eq!(q.texture_handle(), Some(TextureHandle(raw)));
        }
    }
}
