//! Debug rendering: opt-in collider outlines.
//!
//! Enabled with `GameConfig::render_colliders`. Draws the world-space
//! bounds of every rigid body as four lines.

use glam::{Vec2, Vec4};
use crate::core::math::Range2;
use crate::core::world::World;
use crate::renderer::draw::DrawList;
use crate::systems::render::View;

pub const COLLIDER_COLOR: Vec4 = Vec4::new(1.0, 0.5, 0.5, 1.0);

/// The four edges of a rect as line segments.
pub fn rect_outline(rect: Range2) -> [(Vec2, Vec2); 4] {
    let (min, max) = (rect.min, rect.max);
    [
        (min, Vec2::new(min.x, max.y)),
        (min, Vec2::new(max.x, min.y)),
        (max, Vec2::new(min.x, max.y)),
        (max, Vec2::new(max.x, min.y)),
    ]
}

/// Outline every rigid body's bounds.
pub fn draw_colliders(list: &mut DrawList, view: &View, world: &World) {
    for entity in world.iter().filter(|e| e.rigid_body) {
        let rect = entity.bounds.shift(entity.pos);
        for (from, to) in rect_outline(rect) {
            view.line(list, from, to, COLLIDER_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::renderer::camera::Camera;

    #[test]
    fn outline_touches_all_corners() {
        let rect = Range2::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0));
        let points: Vec<Vec2> = rect_outline(rect).iter().flat_map(|(a, b)| [*a, *b]).collect();
        for corner in [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(2.0, 1.0)] {
            assert!(points.contains(&corner), "missing {corner}");
        }
    }

    #[test]
    fn only_rigid_bodies_get_outlines() {
        let mut world = World::new();
        world.spawn(Entity::default().with_rigid_body());
        world.spawn(Entity::default());
        let camera = Camera::default();
        let view = View { camera: &camera, window_size: Vec2::new(100.0, 100.0) };

        let mut list = DrawList::new();
        list.begin(view.window_size);
        draw_colliders(&mut list, &view, &world);
        list.end();
        assert_eq!(list.lines().count(), 4);
    }
}
