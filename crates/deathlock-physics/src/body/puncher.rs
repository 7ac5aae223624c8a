use crate::api::types::Direction;
use crate::level::{Level, TileKind};

use super::Body;

/// Side effects of a punch-zone launch. Implemented by whatever owns the
/// bounce animations and hit sounds; the body only fires and forgets.
pub trait PunchFeedback {
    fn play_hit_sound(&mut self);
    fn register_bounce(&mut self, column: i32, row: i32, direction: Direction);
}

/// Discards all feedback. Handy for headless simulation.
impl PunchFeedback for () {
    fn play_hit_sound(&mut self) {}
    fn register_bounce(&mut self, _column: i32, _row: i32, _direction: Direction) {}
}

/// Punch-zone module: launch velocity plus the post-launch immunity window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Puncher {
    pub(crate) invuln_frames: u32,
    /// Horizontal velocity from the last launch, kept apart from `vel.x`.
    pub(crate) launch_x_vel: f32,
}

impl Puncher {
    /// Ticks of immunity left.
    pub fn invuln_frames(&self) -> u32 {
        self.invuln_frames
    }

    /// Current launch velocity.
    pub fn launch_x_vel(&self) -> f32 {
        self.launch_x_vel
    }

    /// Move the launch velocity toward zero by `deceleration`, stopping at zero.
    pub fn decay(&mut self, deceleration: f32) {
        if self.launch_x_vel < 0.0 {
            self.launch_x_vel = (self.launch_x_vel + deceleration).min(0.0);
        } else if self.launch_x_vel > 0.0 {
            self.launch_x_vel = (self.launch_x_vel - deceleration).max(0.0);
        }
    }
}

impl Body {
    /// Check the tiles around the body for punch zones and launch from the
    /// first one found. While the immunity window is open this only counts
    /// it down.
    pub fn collide_punch_zones<L, F>(&mut self, level: &L, feedback: &mut F)
    where
        L: Level + ?Sized,
        F: PunchFeedback + ?Sized,
    {
        let Some(puncher) = self.puncher.as_mut() else {
            return;
        };
        if puncher.invuln_frames > 0 {
            puncher.invuln_frames -= 1;
            return;
        }

        let center_column = level.column_of(self.center_x());
        let center_row = level.row_of(self.center_y());
        if let Some(direction) = punch_direction(level, center_column, center_row) {
            self.activate_punch_zone(center_column, center_row, direction, feedback);
            return;
        }

        // Upward pads also catch the body by its edges so it never balances
        // on the rim of one. Skipped while already rising.
        if self.kinematics.vel.y < 0.0 {
            return;
        }
        let edge_columns = [
            level.column_of(self.x().saturating_add(2)),
            level.column_of(self.x().saturating_add(self.size.x - 3)),
        ];
        for column in edge_columns {
            if punch_direction(level, column, center_row) == Some(Direction::Up) {
                self.activate_punch_zone(column, center_row, Direction::Up, feedback);
                return;
            }
        }
    }

    /// Launch the body from the punch zone at `(column, row)`.
    ///
    /// Horizontal launches go into the launch velocity and cancel ordinary
    /// motion heading the other way. Vertical launches overwrite `vel.y`.
    /// Does nothing on bodies without the punch-zone module.
    pub fn activate_punch_zone<F>(&mut self, column: i32, row: i32, direction: Direction, feedback: &mut F)
    where
        F: PunchFeedback + ?Sized,
    {
        let config = self.config;
        let Some(puncher) = self.puncher.as_mut() else {
            return;
        };

        puncher.invuln_frames = config.invuln_length;
        feedback.play_hit_sound();
        feedback.register_bounce(column, row, direction);

        let vel = &mut self.kinematics.vel;
        match direction {
            Direction::Left => {
                puncher.launch_x_vel = -config.puncher_x_vel;
                if vel.x > 0.0 {
                    vel.x = 0.0;
                }
            }
            Direction::Right => {
                puncher.launch_x_vel = config.puncher_x_vel;
                if vel.x < 0.0 {
                    vel.x = 0.0;
                }
            }
            Direction::Up => vel.y = -config.puncher_up_vel,
            Direction::Down => vel.y = config.puncher_down_vel,
        }
        log::debug!("punch zone ({}, {}) launched body {}", column, row, direction.as_str());
    }
}

fn punch_direction<L: Level + ?Sized>(level: &L, column: i32, row: i32) -> Option<Direction> {
    level
        .get_tile(TileKind::PunchZone, column, row)
        .and_then(|tile| tile.direction())
}
