use glam::{IVec2, Vec2};

use crate::api::types::Facing;

/// Point-mass integrator: integer pixel position, real-valued velocity and acceleration.
///
/// Positions are truncated toward zero whenever a real value is written back,
/// so sub-pixel motion only accumulates in the velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics {
    pos: IVec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Acceleration in pixels per tick squared.
    pub acc: Vec2,
    facing_x: Facing,
    facing_y: Facing,
}

impl Kinematics {
    /// At rest at `pos`, facing nowhere.
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            facing_x: Facing::None,
            facing_y: Facing::None,
        }
    }

    /// Pixel position.
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    /// Horizontal pixel position.
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    /// Vertical pixel position.
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Raw position write. Bodies go through `Body::set_position` instead.
    pub(crate) fn set_pos(&mut self, pos: IVec2) {
        self.pos = pos;
    }

    /// Sign of the horizontal velocity at the last refresh.
    pub fn facing_x(&self) -> Facing {
        self.facing_x
    }

    /// Sign of the vertical velocity at the last refresh.
    pub fn facing_y(&self) -> Facing {
        self.facing_y
    }

    /// One integration step: velocity, then position, then facing.
    pub fn update(&mut self) {
        self.accelerate();
        self.pos = self.displaced();
        self.refresh_facing();
    }

    /// `vel += acc`.
    pub(crate) fn accelerate(&mut self) {
        self.vel += self.acc;
    }

    /// Position after applying the current velocity, truncated per axis.
    pub(crate) fn displaced(&self) -> IVec2 {
        IVec2::new(
            truncate(self.pos.x as f32 + self.vel.x),
            truncate(self.pos.y as f32 + self.vel.y),
        )
    }

    /// Recompute both facings from the velocity signs.
    pub(crate) fn refresh_facing(&mut self) {
        self.facing_x = Facing::of(self.vel.x);
        self.facing_y = Facing::of(self.vel.y);
    }

    /// Horizontal position expected after the upcoming integration step.
    pub fn predict_next_x(&self) -> f32 {
        self.pos.x as f32 + self.vel.x + self.acc.x
    }

    /// Vertical position expected after the upcoming integration step.
    pub fn predict_next_y(&self) -> f32 {
        self.pos.y as f32 + self.vel.y + self.acc.y
    }

    /// Zero horizontal velocity and acceleration and clear the facing.
    pub fn stop_x(&mut self) {
        self.facing_x = Facing::None;
        self.vel.x = 0.0;
        self.acc.x = 0.0;
    }

    /// Zero vertical velocity and acceleration and clear the facing.
    pub fn stop_y(&mut self) {
        self.facing_y = Facing::None;
        self.vel.y = 0.0;
        self.acc.y = 0.0;
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::new(IVec2::ZERO)
    }
}

/// Real-to-pixel conversion used for every position write.
#[inline]
pub(crate) fn truncate(value: f32) -> i32 {
    value as i32
}
