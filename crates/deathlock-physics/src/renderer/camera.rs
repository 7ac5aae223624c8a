use glam::IVec2;

use crate::core::rect::PixelRect;

/// World-to-screen transform used by the debug draw hooks.
pub trait CameraTransform {
    /// Map a world-space rectangle into screen space.
    fn move_rect(&self, rect: PixelRect) -> PixelRect;
}

/// Pixel camera: a top-left world offset, no scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCamera {
    /// World position shown at the screen's top-left corner.
    pub pos: IVec2,
    /// Screen size in pixels.
    pub size: IVec2,
}

impl PixelCamera {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::ZERO,
            size: IVec2::new(width, height),
        }
    }

    /// Center the view on a world point.
    pub fn look_at(&mut self, target: IVec2) {
        self.pos = target - self.size / 2;
    }

    /// Whether any part of a world rectangle is on screen.
    pub fn is_rect_visible(&self, rect: &PixelRect) -> bool {
        PixelRect::new(self.pos.x, self.pos.y, self.size.x, self.size.y).intersects(rect)
    }
}

impl CameraTransform for PixelCamera {
    fn move_rect(&self, rect: PixelRect) -> PixelRect {
        rect.translate(-self.pos)
    }
}
