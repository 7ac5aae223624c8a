//! Punch-zone feedback: bounce animations on launched-from tiles and hit sounds.
//!
//! `BounceEffects` is the collaborator a punchable body reports to. Games own
//! one per level, hand it to every `Body::update()` call, tick it once per
//! frame, and drain its sound queue into the audio layer.

mod bounce;
mod sound_pool;

pub use bounce::{Bounce, BOUNCE_DISTANCE, BOUNCE_LENGTH};
pub use sound_pool::SoundPool;

use crate::api::types::{Direction, SoundEvent};
use crate::body::PunchFeedback;
use crate::config::HIT_SOUND_COUNT;
use crate::core::rect::PixelRect;
use crate::level::{HorizontalSide, Level, VerticalSide};
use crate::renderer::camera::CameraTransform;
use crate::renderer::instance::{Color, DebugSurface, MAGENTA};

/// Active bounces plus pending sound events.
#[derive(Debug, Clone)]
pub struct BounceEffects {
    pub bounces: Vec<Bounce>,
    pub sounds: Vec<SoundEvent>,
    hit_sounds: SoundPool,
}

impl BounceEffects {
    /// Hit sounds use event ids `0..HIT_SOUND_COUNT`.
    pub fn new(seed: u64) -> Self {
        Self::with_hit_sounds(0, HIT_SOUND_COUNT, seed)
    }

    /// Hit sounds use event ids `base..base + count`.
    pub fn with_hit_sounds(base: u32, count: u32, seed: u64) -> Self {
        Self {
            bounces: Vec::new(),
            sounds: Vec::new(),
            hit_sounds: SoundPool::new(base, count, seed),
        }
    }

    /// Start a bounce on a tile. A tile that is already bouncing restarts.
    pub fn add(&mut self, column: i32, row: i32, direction: Direction) {
        if let Some(existing) = self.bounces.iter_mut().find(|b| b.same_tile(column, row)) {
            *existing = Bounce::new(column, row, direction);
        } else {
            self.bounces.push(Bounce::new(column, row, direction));
        }
    }

    /// Bounce currently running on a tile, if any.
    pub fn bounce_at(&self, column: i32, row: i32) -> Option<&Bounce> {
        self.bounces.iter().find(|b| b.same_tile(column, row))
    }

    /// Advance every bounce by one tick, dropping finished ones.
    pub fn tick(&mut self) {
        self.bounces.retain_mut(|b| b.tick());
    }

    /// Hand pending sound events to the caller.
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    /// Draw each bouncing tile at its displaced position.
    pub fn draw<L, C>(&self, surface: &mut DebugSurface, cam: &C, level: &L, color: Color)
    where
        L: Level + ?Sized,
        C: CameraTransform + ?Sized,
    {
        for bounce in &self.bounces {
            let left = level.tile_edge_x(bounce.column, HorizontalSide::Left);
            let top = level.tile_edge_y(bounce.row, VerticalSide::Top);
            let tile = PixelRect::new(
                left,
                top,
                level.tile_edge_x(bounce.column, HorizontalSide::Right) - left,
                level.tile_edge_y(bounce.row, VerticalSide::Bottom) - top,
            );
            surface.push(cam.move_rect(tile.translate(bounce.offset())), color);
        }
    }

    /// Draw with the default punch-zone colour.
    pub fn draw_default<L, C>(&self, surface: &mut DebugSurface, cam: &C, level: &L)
    where
        L: Level + ?Sized,
        C: CameraTransform + ?Sized,
    {
        self.draw(surface, cam, level, MAGENTA);
    }

    /// Drop all bounces and pending sounds (e.g. on room change).
    pub fn clear(&mut self) {
        self.bounces.clear();
        self.sounds.clear();
    }
}

impl PunchFeedback for BounceEffects {
    fn play_hit_sound(&mut self) {
        if let Some(sound) = self.hit_sounds.pick() {
            self.sounds.push(sound);
        }
    }

    fn register_bounce(&mut self, column: i32, row: i32, direction: Direction) {
        self.add(column, row, direction);
    }
}
