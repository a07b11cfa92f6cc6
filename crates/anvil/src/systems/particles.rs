//! Particle ring buffer and the per-tick emit/age pass.

use glam::{Vec2, Vec4};
use crate::components::emitter::{EmitContext, Emitter, MAX_EMITTERS};
use crate::core::math::{alpha_between, sin_mid};
use crate::core::pool::FixedPool;
use crate::core::rng::Rng;

/// Particle slots in the ring.
pub const MAX_PARTICLES: usize = 2048;

/// A single particle. A slot with no life left is free; the zeroed
/// `Particle::default()` is exactly a never-spawned slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Vec4,
    pub start_life: f32,
    /// Remaining life in seconds.
    pub life: f32,
    pub size_mult: f32,
    pub fade_in: bool,
    pub fade_out: bool,
    /// Render opacity computed on the last tick.
    pub alpha: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Age by `dt`. Returns false (and zeroes the slot) when expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.life -= dt;
        if !self.is_alive() {
            *self = Particle::default();
            return false;
        }

        self.pos += self.vel * dt;

        let elapsed = alpha_between(self.life, self.start_life, 0.0);
        let fading = if elapsed < 0.5 { self.fade_in } else { self.fade_out };
        self.alpha = if fading { sin_mid(elapsed) } else { 1.0 };
        true
    }

    /// Color with the envelope applied to alpha.
    pub fn render_color(&self) -> Vec4 {
        Vec4::new(self.color.x, self.color.y, self.color.z, self.color.w * self.alpha)
    }
}

/// Fixed ring of particles. New particles overwrite slots in order,
/// alive or not.
pub struct ParticlePool {
    slots: Box<[Particle]>,
    cursor: usize,
    overwrites: u64,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::with_capacity(MAX_PARTICLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "particle pool needs at least one slot");
        Self {
            slots: vec![Particle::default(); capacity].into_boxed_slice(),
            cursor: 0,
            overwrites: 0,
        }
    }

    /// Advance the write cursor and hand out the slot under it.
    pub fn claim(&mut self) -> &mut Particle {
        self.cursor = (self.cursor + 1) % self.slots.len();
        let slot = &mut self.slots[self.cursor];
        if slot.is_alive() {
            self.overwrites += 1;
            log::warn!(
                "particle slot {} overwritten with {:.2}s of life left",
                self.cursor,
                slot.life
            );
        }
        slot
    }

    /// Age every alive particle, freeing the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for p in self.slots.iter_mut().filter(|p| p.is_alive()) {
            p.tick(dt);
        }
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }

    /// Total unexpired particles lost to ring overwrite.
    pub fn overwrites(&self) -> u64 {
        self.overwrites
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit from every emitter, then age all particles. Returns the number emitted.
pub fn tick_particles(
    emitters: &FixedPool<Emitter, MAX_EMITTERS>,
    particles: &mut ParticlePool,
    ctx: &EmitContext,
    rng: &mut Rng,
    dt: f32,
) -> u32 {
    let mut emitted = 0;
    for emitter in emitters {
        let count = emitter.emit_count(rng);
        for _ in 0..count {
            let slot = particles.claim();
            emitter.emit(slot, ctx, rng);
        }
        emitted += count;
    }
    particles.tick(dt);
    emitted
}
