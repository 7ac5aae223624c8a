use bytemuck::{Pod, Zeroable};

use crate::core::rect::PixelRect;

/// RGBA colour, 0.0..=1.0 per channel.
pub type Color = [f32; 4];

pub const RED: Color = [1.0, 15.0 / 255.0, 15.0 / 255.0, 1.0];
pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
pub const MAGENTA: Color = [1.0, 0.0, 1.0, 1.0];

/// Filled debug rectangle in screen space.
/// 8 floats = 32 bytes stride, so a renderer can read the surface as one flat buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DebugRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

impl DebugRect {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_rect(rect: PixelRect, color: Color) -> Self {
        Self {
            x: rect.x as f32,
            y: rect.y as f32,
            w: rect.w as f32,
            h: rect.h as f32,
            color,
        }
    }
}

/// Draw target for the debug hooks. Collects rectangles until cleared.
#[derive(Debug, Clone, Default)]
pub struct DebugSurface {
    pub rects: Vec<DebugRect>,
}

impl DebugSurface {
    pub fn new() -> Self {
        Self {
            rects: Vec::with_capacity(64),
        }
    }

    pub fn push(&mut self, rect: PixelRect, color: Color) {
        self.rects.push(DebugRect::from_rect(rect, color));
    }

    /// Clear rectangles (call at the start of each frame before re-drawing).
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The surface as a flat float buffer, `DebugRect::FLOATS` per rectangle.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.rects)
    }
}
