use glam::{Vec2, Vec4};
use serde::Deserialize;
use crate::api::error::{ConfigError, StartupError};
use crate::assets::error::AssetError;
use crate::assets::images::{ImageLoader, ImageTable};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SpriteRegistry;
use crate::components::emitter::{EmitContext, Emitter, EmitterKind, MAX_EMITTERS};
use crate::components::entity::WHITE;
use crate::core::pool::FixedPool;
use crate::core::rng::Rng;
use crate::core::world::{GardenSprites, World, PLANT_FRAMES};
use crate::input::queue::{InputEvent, MouseButton};
use crate::input::state::{keys, InputState};
use crate::renderer::camera::Camera;
use crate::renderer::draw::DrawList;
use crate::renderer::traits::Renderer;
use crate::systems::particles::{tick_particles, ParticlePool};
use crate::systems::physics::{self, PhysicsConfig};
use crate::systems::render::{draw_entities, draw_particles, View};
use crate::systems::{debug, plants};

pub const CLEAR_COLOR: Vec4 = Vec4::new(0.1, 0.1, 0.1, 1.0);

/// Tuning for the game, provided by the host. Every field has a default,
/// so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Horizontal acceleration per unit of axis input.
    pub move_speed: f32,
    /// Vertical velocity assigned on jump.
    pub jump_velocity: f32,
    pub physics: PhysicsConfig,
    /// Initial camera zoom.
    pub camera_scale: f32,
    /// Zoom clamp `[min, max]`.
    pub camera_scale_range: [f32; 2],
    /// Height the camera holds while tracking the player.
    pub camera_y: f32,
    /// Half length of the ground reference line.
    pub ground_half_width: f32,
    /// Plant growth stages per second.
    pub plant_growth_rate: f32,
    /// Ambient particles per frame.
    pub ambient_frequency: f32,
    /// Outline rigid-body bounds.
    pub render_colliders: bool,
    pub rng_seed: u64,
    /// Asset manifest JSON. The built-in garden manifest when unset.
    pub manifest: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_speed: 2000.0,
            jump_velocity: 300.0,
            physics: PhysicsConfig::default(),
            camera_scale: 1.0,
            camera_scale_range: [1.0, 10.0],
            camera_y: 20.0,
            ground_half_width: 200.0,
            plant_growth_rate: 4.0,
            ambient_frequency: 10.0,
            render_colliders: false,
            rng_seed: 42,
            manifest: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a host can get wrong. The zoom range must be
    /// positive and ordered; `camera_scale` is clamped into it at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [min, max] = self.camera_scale_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ScaleRange { min, max });
        }
        if !self.camera_scale.is_finite() {
            return Err(ConfigError::Scale(self.camera_scale));
        }
        Ok(())
    }
}

/// Everything the game owns. Constructed once at startup and passed by
/// `&mut` into [`GameState::frame`]; there is no global instance.
pub struct GameState {
    pub config: GameConfig,
    pub world: World,
    pub input: InputState,
    pub emitters: FixedPool<Emitter, MAX_EMITTERS>,
    pub particles: ParticlePool,
    pub camera: Camera,
    pub images: ImageTable,
    pub sprites: SpriteRegistry,
    pub garden: GardenSprites,
    pub rng: Rng,
    /// Pointer position in world space, as of the start of the last frame.
    pub mouse_world: Vec2,
    pub window_size: Vec2,
}

impl GameState {
    /// Load assets, create the ambient emitter and populate the world.
    pub fn new(
        config: GameConfig,
        loader: &dyn ImageLoader,
        renderer: &mut dyn Renderer,
    ) -> Result<Self, StartupError> {
        config.validate()?;

        let manifest = match &config.manifest {
            Some(json) => AssetManifest::from_json(json),
            None => AssetManifest::garden(),
        }
        .map_err(AssetError::from)?;

        let mut images = ImageTable::new();
        let mut sprites = SpriteRegistry::new();
        sprites.load_manifest(&manifest, &mut images, loader, renderer)?;

        let garden = GardenSprites {
            plant_frames: std::array::from_fn::<_, PLANT_FRAMES, _>(|i| {
                sprites.lookup(&format!("plant{i}"))
            }),
            seed: sprites.lookup("resource1"),
        };

        let mut emitters = FixedPool::new();
        *emitters.push() = Emitter::new(EmitterKind::AmbientScreen, config.ambient_frequency);

        let mut world = World::new();
        world.init(&garden);

        let [min_scale, max_scale] = config.camera_scale_range;
        let scale = config.camera_scale.clamp(min_scale, max_scale);
        if scale != config.camera_scale {
            log::warn!("camera_scale {} clamped to {scale}", config.camera_scale);
        }

        Ok(Self {
            camera: Camera::new(scale),
            rng: Rng::new(config.rng_seed),
            config,
            world,
            input: InputState::new(),
            emitters,
            particles: ParticlePool::new(),
            images,
            sprites,
            garden,
            mouse_world: Vec2::ZERO,
            window_size: Vec2::ZERO,
        })
    }

    /// Fold a host event into input state. Scroll zooms immediately.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.apply(event);
        if let InputEvent::Scroll { dy } = *event {
            self.camera.zoom(dy, self.config.camera_scale_range);
        }
    }

    /// Run one frame to completion, recording one render pass into `list`.
    pub fn frame(&mut self, dt: f32, window_size: Vec2, list: &mut DrawList) {
        if self.input.key_pressed(keys::B) {
            self.world.reset();
            self.world.init(&self.garden);
            log::info!("world reset (generation {})", self.world.generation());
        }

        self.window_size = window_size;
        self.mouse_world = self.camera.screen_to_world(self.input.mouse_pos, window_size);

        self.apply_player_input();

        let ctx = EmitContext {
            camera_bounds: self.camera.visible_bounds(window_size),
        };
        tick_particles(&self.emitters, &mut self.particles, &ctx, &mut self.rng, dt);

        physics::step(self.world.iter_mut(), &self.config.physics, dt);

        let player_x = self.world.player.and_then(|h| self.world.get(h)).map(|p| p.pos.x);
        if let Some(x) = player_x {
            self.camera.track(x, self.config.camera_y);
        }

        self.render(dt, list);

        self.input.clear_edges();
    }

    fn apply_player_input(&mut self) {
        let jump = self.input.key_pressed(keys::SPACE);
        let left = self.input.key_down(keys::A);
        let right = self.input.key_down(keys::D);
        let (move_speed, jump_velocity) = (self.config.move_speed, self.config.jump_velocity);

        let Some(player) = self.world.player_mut() else {
            return;
        };
        if jump {
            player.vel.y = jump_velocity;
        }
        let mut axis = Vec2::ZERO;
        if left {
            axis.x -= 1.0;
            player.flip_horizontal = true;
        }
        if right {
            axis.x += 1.0;
            player.flip_horizontal = false;
        }
        player.acc = axis * move_speed;
    }

    fn render(&mut self, dt: f32, list: &mut DrawList) {
        let view = View {
            camera: &self.camera,
            window_size: self.window_size,
        };
        list.begin(self.window_size);
        list.clear(CLEAR_COLOR);

        let mouse_world = self.mouse_world;
        let mut planted_at = None;
        if let Some(seed) = self.world.held_seed_mut() {
            seed.pos = Vec2::new(mouse_world.x.round(), 0.0);
            view.line(list, Vec2::new(seed.pos.x, mouse_world.y), seed.pos, WHITE);
            if self.input.mouse_pressed(MouseButton::Left) {
                planted_at = Some(seed.pos);
            }
        }
        if let Some(pos) = planted_at {
            self.world.spawn_plant(pos, &self.garden);
        }

        plants::grow(&mut self.world, &self.garden, self.config.plant_growth_rate, dt);

        draw_particles(list, &view, &self.particles);

        let ground = self.config.ground_half_width;
        view.line(list, Vec2::new(-ground, 0.0), Vec2::new(ground, 0.0), WHITE);

        draw_entities(list, &view, &self.world, &self.sprites, &self.images);

        if self.config.render_colliders {
            debug::draw_colliders(list, &view, &self.world);
        }

        list.end();
    }

    /// Release GPU resources. Call once at shutdown.
    pub fn shutdown(&mut self, renderer: &mut dyn Renderer) {
        self.images.release(renderer);
    }
}
