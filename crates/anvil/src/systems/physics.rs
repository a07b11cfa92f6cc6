//! Rigid-body integrator for the fat entity.
//!
//! The step order is observable: the half-step position uses the
//! acceleration accumulated *before* the velocity update, and the ground
//! clamp happens last. Trajectories depend on it, so don't reorder.

use serde::Deserialize;
use crate::components::entity::Entity;

/// Integrator constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Horizontal velocity damping coefficient.
    pub damping: f32,
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
    /// Gravity multiplier while moving down.
    pub fall_multiplier: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            damping: 15.0,
            gravity: 1000.0,
            fall_multiplier: 2.0,
        }
    }
}

/// Advance one rigid body by `dt`. No-op for entities without the flag.
pub fn integrate(entity: &mut Entity, config: &PhysicsConfig, dt: f32) {
    if !entity.rigid_body {
        return;
    }

    entity.acc.x += -config.damping * entity.vel.x;

    let falling = entity.vel.y < 0.0;
    let multiplier = if falling { config.fall_multiplier } else { 1.0 };
    entity.acc.y -= multiplier * config.gravity;

    let mut next_pos = 0.5 * entity.acc * (dt * dt) + entity.vel * dt + entity.pos;

    entity.vel += entity.acc * dt;
    entity.acc = glam::Vec2::ZERO;

    if next_pos.y < 0.0 {
        next_pos.y = 0.0;
        entity.vel.y = 0.0;
    }

    entity.pos = next_pos;
}

/// Integrate every entity in the slice.
pub fn step<'a>(entities: impl IntoIterator<Item = &'a mut Entity>, config: &PhysicsConfig, dt: f32) {
    for entity in entities {
        integrate(entity, config, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body(pos: Vec2, vel: Vec2) -> Entity {
        Entity {
            pos,
            vel,
            rigid_body: true,
            ..Default::default()
        }
    }

    #[test]
    fn drop_from_ten_clamps_to_ground() {
        let mut e = body(Vec2::new(0.0, 10.0), Vec2::ZERO);
        integrate(&mut e, &PhysicsConfig::default(), 1.0);
        assert_eq!(e.pos.y, 0.0);
        assert_eq!(e.vel.y, 0.0);
        assert_eq!(e.acc, Vec2::ZERO);
    }

    #[test]
    fn uses_pre_tick_acceleration_for_position_and_velocity() {
        let config = PhysicsConfig::default();
        let mut e = body(Vec2::new(3.0, 500.0), Vec2::new(2.0, 40.0));
        e.acc = Vec2::new(100.0, 0.0);
        let dt = 0.1;

        // rising: 1x gravity; damping on x
        let acc = Vec2::new(100.0 - 15.0 * 2.0, -1000.0);
        let expected_pos = e.pos + e.vel * dt + 0.5 * acc * dt * dt;
        let expected_vel = e.vel + acc * dt;

        integrate(&mut e, &config, dt);
        assert!((e.pos - expected_pos).length() < 1e-4, "pos {:?}", e.pos);
        assert!((e.vel - expected_vel).length() < 1e-4, "vel {:?}", e.vel);
        assert_eq!(e.acc, Vec2::ZERO);
    }

    #[test]
    fn falling_doubles_gravity() {
        let config = PhysicsConfig::default();
        let mut e = body(Vec2::new(0.0, 1000.0), Vec2::new(0.0, -1.0));
        integrate(&mut e, &config, 0.01);
        // vel.y = -1 + (-2000 * 0.01)
        assert!((e.vel.y - -21.0).abs() < 1e-4);
    }

    #[test]
    fn ground_clamp_ignores_velocity_magnitude() {
        let mut e = body(Vec2::new(0.0, 0.5), Vec2::new(0.0, -1.0e6));
        integrate(&mut e, &PhysicsConfig::default(), 0.016);
        assert_eq!(e.pos.y, 0.0);
        assert_eq!(e.vel.y, 0.0);
    }

    #[test]
    fn non_rigid_entities_are_untouched() {
        let mut e = Entity {
            pos: Vec2::new(1.0, 1.0),
            vel: Vec2::new(5.0, 5.0),
            ..Default::default()
        };
        integrate(&mut e, &PhysicsConfig::default(), 1.0);
        assert_eq!(e.pos, Vec2::new(1.0, 1.0));
        assert_eq!(e.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn zero_dt_only_consumes_acceleration() {
        let mut e = body(Vec2::new(0.0, 50.0), Vec2::new(1.0, 0.0));
        e.acc = Vec2::new(10.0, 10.0);
        integrate(&mut e, &PhysicsConfig::default(), 0.0);
        assert_eq!(e.pos, Vec2::new(0.0, 50.0));
        assert_eq!(e.vel, Vec2::new(1.0, 0.0));
        assert_eq!(e.acc, Vec2::ZERO);
    }

    #[test]
    fn damping_slows_horizontal_motion() {
        let mut e = body(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        integrate(&mut e, &PhysicsConfig::default(), 0.016);
        assert!(e.vel.x < 100.0 && e.vel.x > 0.0);
    }
}
