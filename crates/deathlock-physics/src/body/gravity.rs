use crate::level::Level;

use super::Body;

/// Gravity module: constant downward pull while airborne, capped fall speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    terminal_velocity: f32,
}

impl Gravity {
    /// Negative terminal velocities are raised to zero.
    pub fn new(terminal_velocity: f32) -> Self {
        Self {
            terminal_velocity: terminal_velocity.max(0.0),
        }
    }

    pub fn terminal_velocity(&self) -> f32 {
        self.terminal_velocity
    }
}

impl Body {
    /// Resting on solid ground and not moving upward.
    pub fn grounded<L: Level + ?Sized>(&self, level: &L) -> bool {
        if self.kinematics.vel.y < 0.0 {
            return false;
        }
        self.against_floor(level)
    }

    /// Set this tick's vertical acceleration when airborne. Grounded bodies
    /// keep whatever acceleration they already have.
    pub(crate) fn apply_gravity<L: Level + ?Sized>(&mut self, level: &L) {
        if self.gravity.is_none() || self.ignore_gravity {
            return;
        }
        if !self.grounded(level) {
            self.kinematics.acc.y = self.config.gravity;
        }
    }

    /// Cap downward speed. Upward speed is never limited.
    pub(crate) fn clamp_fall_speed(&mut self) {
        if let Some(gravity) = self.gravity {
            self.kinematics.vel.y = self.kinematics.vel.y.min(gravity.terminal_velocity);
        }
    }
}
