use glam::IVec2;

use crate::api::types::Direction;

/// Ticks a punch-zone bounce animation lasts.
pub const BOUNCE_LENGTH: u32 = 12;
/// Peak displacement of a bouncing tile, in pixels.
pub const BOUNCE_DISTANCE: f32 = 6.0;

/// A punch-zone tile recoiling after launching a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub column: i32,
    pub row: i32,
    pub direction: Direction,
    /// Ticks elapsed since the bounce was registered.
    pub frame: u32,
}

impl Bounce {
    pub fn new(column: i32, row: i32, direction: Direction) -> Self {
        Self {
            column,
            row,
            direction,
            frame: 0,
        }
    }

    /// Advance one tick. Returns false once finished.
    pub fn tick(&mut self) -> bool {
        self.frame += 1;
        self.frame < BOUNCE_LENGTH
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        (self.frame as f32 / BOUNCE_LENGTH as f32).clamp(0.0, 1.0)
    }

    /// Pixel displacement along the launch direction: out to the peak at
    /// half-time, then back to rest.
    pub fn offset(&self) -> IVec2 {
        let t = self.progress();
        let magnitude = (BOUNCE_DISTANCE * (1.0 - (2.0 * t - 1.0).abs())) as i32;
        let (dx, dy) = self.direction.step();
        IVec2::new(dx, dy) * magnitude
    }

    pub fn same_tile(&self, column: i32, row: i32) -> bool {
        self.column == column && self.row == row
    }
}
