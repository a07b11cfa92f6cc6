use glam::{Vec2, Vec4};
use crate::components::sprite::SpriteId;
use crate::core::math::Range2;
use crate::core::pool::FixedPool;

/// Max render rects per entity.
pub const MAX_RENDER_RECTS: usize = 8;

pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// One drawable quad attached to an entity, in entity-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRect {
    pub rect: Range2,
    pub color: Vec4,
    /// Textured when set, solid color otherwise.
    pub sprite: Option<SpriteId>,
}

impl Default for RenderRect {
    fn default() -> Self {
        Self {
            rect: Range2::ZERO,
            color: WHITE,
            sprite: None,
        }
    }
}

/// Growth state for plant entities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlantGrowth {
    /// Continuously increasing growth value, saturating at 8.
    pub stage: f32,
}

/// Fat Entity: a single record with fixed capability flags.
/// Lives in the world's entity pool; only a world reset destroys it.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    /// Position in world space.
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-tick force accumulator, zeroed by the integrator.
    pub acc: Vec2,
    /// Collider bounds in local space.
    pub bounds: Range2,
    pub render_rects: FixedPool<RenderRect, MAX_RENDER_RECTS>,
    /// Mirror render rects about the local origin.
    pub flip_horizontal: bool,
    /// Subject to the physics integrator.
    pub rigid_body: bool,
    /// Drawn by the render pass.
    pub renderable: bool,
    pub plant: Option<PlantGrowth>,
}

impl Entity {
    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_bounds(mut self, bounds: Range2) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_rigid_body(mut self) -> Self {
        self.rigid_body = true;
        self
    }

    pub fn with_plant(mut self) -> Self {
        self.plant = Some(PlantGrowth::default());
        self
    }

    /// Attach a solid render rect covering `bounds`.
    pub fn render_rect_from_bounds(&mut self, color: Vec4) -> &mut RenderRect {
        self.renderable = true;
        let bounds = self.bounds;
        let render = self.render_rects.push();
        render.rect = bounds;
        render.color = color;
        render
    }

    /// Attach a sprite-textured render rect.
    pub fn push_sprite_rect(&mut self, rect: Range2, sprite: SpriteId) -> &mut RenderRect {
        self.renderable = true;
        let render = self.render_rects.push();
        render.rect = rect;
        render.sprite = Some(sprite);
        render
    }

    /// World-space rect of a local rect, honoring `flip_horizontal`.
    pub fn world_rect(&self, local: Range2) -> Range2 {
        let rect = if self.flip_horizontal { local.flip_x() } else { local };
        rect.shift(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entity_is_inert() {
        let e = Entity::default();
        assert!(!e.rigid_body);
        assert!(!e.renderable);
        assert!(e.plant.is_none());
        assert!(e.render_rects.is_empty());
    }

    #[test]
    fn render_rect_from_bounds_marks_renderable() {
        let mut e = Entity::default()
            .with_bounds(Range2::new(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 20.0)));
        e.render_rect_from_bounds(BLACK);
        assert!(e.renderable);
        assert_eq!(e.render_rects[0].rect, e.bounds);
        assert_eq!(e.render_rects[0].color, BLACK);
        assert!(e.render_rects[0].sprite.is_none());
    }

    #[test]
    fn world_rect_flips_about_local_origin() {
        let mut e = Entity::default().with_pos(Vec2::new(100.0, 0.0));
        let local = Range2::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
        assert_eq!(e.world_rect(local).to_array(), [100.0, 0.0, 110.0, 5.0]);
        e.flip_horizontal = true;
        assert_eq!(e.world_rect(local).to_array(), [90.0, 0.0, 100.0, 5.0]);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn render_rect_capacity_is_fatal() {
        let mut e = Entity::default();
        for _ in 0..=MAX_RENDER_RECTS {
            e.render_rect_from_bounds(WHITE);
        }
    }
}
