use glam::Vec2;
use crate::core::math::Range2;

/// 2D camera: a world-space focus point plus a zoom factor.
/// Screen space is window pixels with Y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space point at the center of the window.
    pub pos: Vec2,
    /// Zoom factor: screen pixels per world unit.
    pub scale: f32,
    /// Unused by the transforms.
    pub rotation: f32,
}

impl Camera {
    pub fn new(scale: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            scale,
            rotation: 0.0,
        }
    }

    /// Map a world-space point to window pixels.
    pub fn world_to_screen(&self, world: Vec2, window_size: Vec2) -> Vec2 {
        let mut screen = (world - self.pos) * self.scale;
        screen += window_size * 0.5;
        screen.y = window_size.y - screen.y;
        screen
    }

    /// Exact inverse of [`Camera::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2, window_size: Vec2) -> Vec2 {
        let mut world = screen;
        world.y = window_size.y - world.y;
        world -= window_size * 0.5;
        world /= self.scale;
        world + self.pos
    }

    /// Map a world-space rect to a normalized screen rect.
    /// The Y flip swaps top and bottom, so corners are re-sorted.
    pub fn world_rect_to_screen(&self, rect: Range2, window_size: Vec2) -> Range2 {
        Range2::from_corners(
            self.world_to_screen(rect.min, window_size),
            self.world_to_screen(rect.max, window_size),
        )
    }

    /// Visible world-space rect: the window centered on the origin, shrunk
    /// by the zoom `scale` and moved to `pos`. Not the raw `[-w/2, w/2]`
    /// window extent.
    pub fn visible_bounds(&self, window_size: Vec2) -> Range2 {
        Range2::from_size(window_size)
            .centered()
            .scale(1.0 / self.scale)
            .shift(self.pos)
    }

    /// Apply a scroll-wheel delta: `scale += dy / 8`, clamped to `[min, max]`.
    pub fn zoom(&mut self, scroll_y: f32, [min, max]: [f32; 2]) {
        self.scale = (self.scale + scroll_y / 8.0).clamp(min, max);
    }

    /// Follow a target horizontally at a fixed height.
    pub fn track(&mut self, target_x: f32, fixed_y: f32) {
        self.pos = Vec2::new(target_x, fixed_y);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn origin_maps_to_window_center() {
        let cam = Camera::default();
        assert_eq!(cam.world_to_screen(Vec2::ZERO, WINDOW), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn world_up_is_screen_up() {
        let cam = Camera::new(2.0);
        let s = cam.world_to_screen(Vec2::new(10.0, 10.0), WINDOW);
        assert_eq!(s, Vec2::new(420.0, 280.0));
    }

    #[test]
    fn round_trip_is_identity() {
        let cams = [
            Camera::default(),
            Camera { pos: Vec2::new(-120.5, 20.0), scale: 3.25, rotation: 0.0 },
            Camera { pos: Vec2::new(9000.0, -40.0), scale: 10.0, rotation: 0.0 },
        ];
        let points = [
            Vec2::ZERO,
            Vec2::new(13.7, -250.0),
            Vec2::new(-4000.0, 88.8),
        ];
        for cam in &cams {
            for &p in &points {
                let back = cam.screen_to_world(cam.world_to_screen(p, WINDOW), WINDOW);
                assert!((back - p).length() < 1e-2, "{p} came back as {back}");
            }
        }
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut cam = Camera::new(5.0);
        cam.zoom(80.0, [1.0, 10.0]); // raw 15
        assert_eq!(cam.scale, 10.0);

        let mut cam = Camera::new(5.0);
        cam.zoom(-64.0, [1.0, 10.0]); // raw -3
        assert_eq!(cam.scale, 1.0);

        let mut cam = Camera::new(5.0);
        cam.zoom(4.0, [1.0, 10.0]);
        assert_eq!(cam.scale, 5.5);
    }

    #[test]
    fn visible_bounds_follow_position_and_zoom() {
        let mut cam = Camera::default();
        let b = cam.visible_bounds(WINDOW);
        assert_eq!(b.to_array(), [-400.0, -300.0, 400.0, 300.0]);

        cam.track(100.0, 20.0);
        cam.scale = 2.0;
        let b = cam.visible_bounds(WINDOW);
        assert_eq!(b.to_array(), [-100.0, -130.0, 300.0, 170.0]);
    }

    #[test]
    fn visible_bounds_corners_hit_window_corners() {
        let cam = Camera { pos: Vec2::new(50.0, 20.0), scale: 4.0, rotation: 0.0 };
        let b = cam.visible_bounds(WINDOW);
        let screen = cam.world_rect_to_screen(b, WINDOW);
        assert!((screen.min - Vec2::ZERO).length() < 1e-3);
        assert!((screen.max - WINDOW).length() < 1e-3);
    }
}
