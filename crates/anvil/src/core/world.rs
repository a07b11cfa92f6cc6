use glam::{Vec2, Vec4};
use crate::components::entity::Entity;
use crate::components::sprite::SpriteId;
use crate::core::math::Range2;
use crate::core::pool::FixedPool;

/// Max entities alive in one world.
pub const MAX_ENTITIES: usize = 64;

/// Number of plant growth frames in the atlas.
pub const PLANT_FRAMES: usize = 8;

/// Weak reference into the entity pool. Resolves to `None` once the
/// world it was issued from has been reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle {
    index: u32,
    generation: u32,
}

impl EntityHandle {
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// Sprites the entity factories attach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GardenSprites {
    pub plant_frames: [SpriteId; PLANT_FRAMES],
    pub seed: SpriteId,
}

/// Entity store plus the two designated weak references.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: FixedPool<Entity, MAX_ENTITIES>,
    generation: u32,
    pub player: Option<EntityHandle>,
    pub held_seed: Option<EntityHandle>,
}

const PLAYER_COLOR: Vec4 = Vec4::new(0.85, 0.75, 0.55, 1.0);

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy every entity and invalidate all outstanding handles.
    pub fn reset(&mut self) {
        self.entities.reset();
        self.generation = self.generation.wrapping_add(1);
        self.player = None;
        self.held_seed = None;
    }

    /// Populate a fresh world: the player and the seed they hold.
    pub fn init(&mut self, sprites: &GardenSprites) {
        let player = self.spawn_player(Vec2::ZERO);
        self.player = Some(player);
        let seed = self.spawn_held_seed(sprites);
        self.held_seed = Some(seed);
        log::debug!("world initialized (generation {})", self.generation);
    }

    /// Claim a pool slot and fill it with `entity`. Panics when full.
    pub fn spawn(&mut self, entity: Entity) -> EntityHandle {
        let index = self.entities.len() as u32;
        *self.entities.push() = entity;
        EntityHandle {
            index,
            generation: self.generation,
        }
    }

    pub fn spawn_player(&mut self, pos: Vec2) -> EntityHandle {
        let mut player = Entity::default()
            .with_pos(pos)
            .with_bounds(Range2::new(Vec2::new(-8.0, 0.0), Vec2::new(8.0, 24.0)))
            .with_rigid_body();
        player.render_rect_from_bounds(PLAYER_COLOR);
        let handle = self.spawn(player);
        log::debug!("spawned player at {pos}");
        handle
    }

    pub fn spawn_held_seed(&mut self, sprites: &GardenSprites) -> EntityHandle {
        let bounds = Range2::new(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 4.0));
        let mut seed = Entity::default().with_bounds(bounds);
        seed.push_sprite_rect(bounds, sprites.seed);
        self.spawn(seed)
    }

    pub fn spawn_plant(&mut self, pos: Vec2, sprites: &GardenSprites) -> EntityHandle {
        let bounds = Range2::new(Vec2::new(-8.0, 0.0), Vec2::new(8.0, 64.0));
        let mut plant = Entity::default()
            .with_pos(pos)
            .with_bounds(bounds)
            .with_plant();
        plant.push_sprite_rect(bounds, sprites.plant_frames[0]);
        let handle = self.spawn(plant);
        log::debug!("planted at {pos} ({} entities)", self.entities.len());
        handle
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        if handle.generation != self.generation {
            return None;
        }
        self.entities.get(handle.index())
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        if handle.generation != self.generation {
            return None;
        }
        self.entities.get_mut(handle.index())
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        let handle = self.player?;
        self.get_mut(handle)
    }

    pub fn held_seed_mut(&mut self) -> Option<&mut Entity> {
        let handle = self.held_seed?;
        self.get_mut(handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
