use glam::IVec2;

/// Axis-aligned pixel rectangle, top-left anchored, Y-down.
///
/// Edge arithmetic saturates at the `i32` limits instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    /// Rectangle with its top-left corner at `(x, y)`.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner.
    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// One past the rightmost pixel.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottommost pixel.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Center pixel, rounded toward the top-left.
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    /// Grow by `margin` on every side.
    pub fn inflate(&self, margin: IVec2) -> Self {
        Self {
            x: self.x.saturating_sub(margin.x),
            y: self.y.saturating_sub(margin.y),
            w: self.w.saturating_add(margin.x.saturating_mul(2)),
            h: self.h.saturating_add(margin.y.saturating_mul(2)),
        }
    }

    /// Same size, moved by `offset`.
    pub fn translate(&self, offset: IVec2) -> Self {
        Self {
            x: self.x.saturating_add(offset.x),
            y: self.y.saturating_add(offset.y),
            ..*self
        }
    }

    /// Whether a pixel lies inside (right and bottom edges excluded).
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}
