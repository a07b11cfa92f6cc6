use glam::Vec2;
use crate::api::error::StartupError;
use crate::api::game::{GameConfig, GameState};
use crate::assets::images::ImageLoader;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::draw::DrawList;
use crate::renderer::traits::Renderer;

/// Wires the game loop to a host renderer.
///
/// The host pushes events as they arrive and calls [`GameRunner::tick`] once
/// per displayed frame. Everything runs on the calling thread.
pub struct GameRunner<R: Renderer> {
    state: GameState,
    renderer: R,
    input: InputQueue,
    draw_list: DrawList,
    frames: u64,
}

impl<R: Renderer> GameRunner<R> {
    /// Load assets through `loader`, upload them to `renderer` and build the
    /// initial world. Startup failures are logged and returned.
    pub fn new(config: GameConfig, mut renderer: R, loader: &dyn ImageLoader) -> Result<Self, StartupError> {
        let state = match GameState::new(config, loader, &mut renderer) {
            Ok(state) => state,
            Err(err) => {
                log::error!("startup failed on {} backend: {err}", renderer.backend());
                return Err(err);
            }
        };
        log::info!(
            "game ready: {} images, {} sprites, {} backend",
            state.images.len(),
            state.sprites.len(),
            renderer.backend()
        );

        Ok(Self {
            state,
            renderer,
            input: InputQueue::new(),
            draw_list: DrawList::new(),
            frames: 0,
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fold queued input, update, record and submit the pass.
    pub fn tick(&mut self, dt: f32, window_size: Vec2) {
        for event in self.input.drain() {
            self.state.handle_event(&event);
        }

        self.state.frame(dt, window_size, &mut self.draw_list);
        self.renderer.draw(&self.draw_list);

        self.frames += 1;
        log::trace!(
            "frame {}: {} quads, {} particles",
            self.frames,
            self.draw_list.quads().len(),
            self.state.particles.alive_count()
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Release textures and hand the renderer back to the host.
    pub fn shutdown(mut self) -> R {
        self.state.shutdown(&mut self.renderer);
        log::info!("shut down after {} frames", self.frames);
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::error::AssetError;
    use crate::input::queue::MouseButton;
    use crate::input::state::keys;
    use crate::renderer::draw::DrawCommand;
    use crate::testing::{MemoryImageLoader, RecordingRenderer};

    const WINDOW: Vec2 = Vec2::new(640.0, 480.0);

    fn runner() -> GameRunner<RecordingRenderer> {
        let loader = MemoryImageLoader::new().with_image("plant.png", 144, 64);
        GameRunner::new(GameConfig::default(), RecordingRenderer::default(), &loader).unwrap()
    }

    #[test]
    fn missing_atlas_fails_startup() {
        let result = GameRunner::new(GameConfig::default(), RecordingRenderer::default(), &MemoryImageLoader::new());
        assert!(result.is_err());
    }

    #[test]
    fn bad_manifest_fails_startup() {
        let config = GameConfig { manifest: Some("{ not json".to_string()), ..Default::default() };
        let result = GameRunner::new(config, RecordingRenderer::default(), &MemoryImageLoader::new());
        assert!(matches!(result, Err(StartupError::Asset(AssetError::Manifest(_)))));
    }

    #[test]
    fn each_tick_submits_one_frame() {
        let mut runner = runner();
        runner.tick(1.0 / 60.0, WINDOW);
        runner.tick(1.0 / 60.0, WINDOW);
        assert_eq!(runner.renderer().frames.len(), 2);
        assert_eq!(runner.frame_count(), 2);

        let frame = runner.renderer().last_frame().unwrap();
        assert!(matches!(frame.commands[0], DrawCommand::Clear(_)));
        // particles, player and seed all land as quads
        assert!(frame.quads.len() >= 12);
    }

    #[test]
    fn queued_input_reaches_the_frame() {
        let mut runner = runner();
        runner.push_input(InputEvent::MouseMove { x: 320.0, y: 240.0 });
        runner.push_input(InputEvent::MouseDown { button: MouseButton::Left });
        runner.tick(1.0 / 60.0, WINDOW);
        assert_eq!(runner.state().world.len(), 3);

        runner.push_input(InputEvent::KeyDown { key_code: keys::B });
        runner.tick(1.0 / 60.0, WINDOW);
        assert_eq!(runner.state().world.len(), 2);
    }

    #[test]
    fn scroll_zooms_before_the_frame() {
        let mut runner = runner();
        runner.push_input(InputEvent::Scroll { dy: 16.0 });
        runner.tick(1.0 / 60.0, WINDOW);
        assert_eq!(runner.state().camera.scale, 3.0);
    }

    #[test]
    fn shutdown_returns_renderer_without_live_textures() {
        let mut runner = runner();
        runner.tick(1.0 / 60.0, WINDOW);
        let renderer = runner.shutdown();
        assert_eq!(renderer.live_textures(), 0);
        assert_eq!(renderer.frames.len(), 1);
    }
}
