//! World-to-draw-list submission. Everything here converts world space to
//! screen space through the camera before recording.

use glam::{Vec2, Vec4};
use crate::assets::images::ImageTable;
use crate::assets::registry::SpriteRegistry;
use crate::core::math::Range2;
use crate::core::world::World;
use crate::renderer::camera::Camera;
use crate::renderer::draw::DrawList;
use crate::systems::particles::ParticlePool;

/// Shared inputs for the world draw helpers.
pub struct View<'a> {
    pub camera: &'a Camera,
    pub window_size: Vec2,
}

impl View<'_> {
    pub fn rect(&self, world: Range2) -> Range2 {
        self.camera.world_rect_to_screen(world, self.window_size)
    }

    pub fn point(&self, world: Vec2) -> Vec2 {
        self.camera.world_to_screen(world, self.window_size)
    }

    pub fn line(&self, list: &mut DrawList, from: Vec2, to: Vec2, color: Vec4) {
        list.line(self.point(from), self.point(to), color);
    }
}

/// Alive particles as `size_mult`-sized squares with their envelope alpha.
pub fn draw_particles(list: &mut DrawList, view: &View, particles: &ParticlePool) {
    for p in particles.iter_alive() {
        let half = Vec2::splat(0.5 * p.size_mult);
        let rect = Range2::new(p.pos - half, p.pos + half);
        list.filled_rect(view.rect(rect), p.render_color());
    }
}

/// Every render rect of every renderable entity, flipped about the local
/// origin when the entity is flipped.
pub fn draw_entities(
    list: &mut DrawList,
    view: &View,
    world: &World,
    sprites: &SpriteRegistry,
    images: &ImageTable,
) {
    for entity in world.iter().filter(|e| e.renderable) {
        for render in &entity.render_rects {
            let screen = view.rect(entity.world_rect(render.rect));
            match render.sprite {
                Some(id) => {
                    let sprite = sprites.sprite(id);
                    let texture = images.texture(sprite.image);
                    list.textured_rect(screen, texture, sprite.sub_rect, render.color);
                }
                None => list.filled_rect(screen, render.color),
            }
        }
    }
}
