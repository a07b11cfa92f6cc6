use glam::{Vec2, Vec4};
use crate::core::math::Range2;
use crate::core::rng::Rng;
use crate::systems::particles::Particle;

/// Max emitters per game.
pub const MAX_EMITTERS: usize = 16;

/// What an emitter does with a freshly claimed particle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitterKind {
    /// Drifting dust scattered across the visible screen.
    #[default]
    AmbientScreen,
}

/// Per-tick inputs an emission behavior may read.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext {
    /// Visible world-space rect of the camera.
    pub camera_bounds: Range2,
}

/// Spawns particles at a target rate.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    /// Anchor position. Ambient emitters ignore it.
    pub pos: Vec2,
    /// Particles per frame. The fractional part is the chance of one extra
    /// particle: 0.2 spawns one particle on 20% of frames.
    pub frequency: f32,
    pub kind: EmitterKind,
}

impl Emitter {
    pub fn new(kind: EmitterKind, frequency: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            frequency,
            kind,
        }
    }

    /// Number of particles to spawn this tick.
    pub fn emit_count(&self, rng: &mut Rng) -> u32 {
        let whole = self.frequency.floor();
        let remainder = self.frequency - whole;
        let extra = if rng.next_f32() < remainder { 1 } else { 0 };
        whole as u32 + extra
    }

    /// Initialize a claimed particle slot.
    pub fn emit(&self, particle: &mut Particle, ctx: &EmitContext, rng: &mut Rng) {
        match self.kind {
            EmitterKind::AmbientScreen => {
                let bounds = ctx.camera_bounds;
                *particle = Particle {
                    pos: Vec2::new(
                        rng.range(bounds.min.x, bounds.max.x),
                        rng.range(bounds.min.y, bounds.max.y),
                    ),
                    vel: Vec2::new(rng.range(-1.0, 1.0), rng.range(2.0, 4.0)),
                    color: Vec4::new(0.7, 0.7, 0.7, 1.0),
                    start_life: 2.0,
                    life: 2.0,
                    size_mult: 1.0,
                    fade_in: true,
                    fade_out: true,
                    alpha: 0.0,
                };
            }
        }
    }
}
