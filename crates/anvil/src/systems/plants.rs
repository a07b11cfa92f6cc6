use crate::core::world::{GardenSprites, World};

/// Growth value at which a plant stops growing.
pub const MAX_STAGE: f32 = 8.0;
/// Highest frame index shown. The last atlas frame is never displayed.
pub const MAX_FRAME: usize = 6;

/// Frame index for a continuous growth value.
pub fn frame_for_stage(stage: f32) -> usize {
    (stage.max(0.0).floor() as usize).min(MAX_FRAME)
}

/// Advance every plant by `dt` at `rate` stages per second and point its
/// first render rect at the matching frame.
pub fn grow(world: &mut World, sprites: &GardenSprites, rate: f32, dt: f32) {
    for entity in world.iter_mut() {
        let Some(growth) = entity.plant.as_mut() else {
            continue;
        };

        growth.stage += dt * rate;
        if growth.stage > MAX_STAGE - 0.001 {
            growth.stage = MAX_STAGE;
        }

        let frame = frame_for_stage(growth.stage);
        if let Some(render) = entity.render_rects.get_mut(0) {
            render.sprite = Some(sprites.plant_frames[frame]);
        }
    }
}
