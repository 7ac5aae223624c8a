//! Stage sweep: sub-stepped collision against the level, resolved before the
//! tick's position update.

use crate::api::types::Facing;
use crate::core::kinematics::truncate;
use crate::level::{HorizontalSide, Level, VerticalSide};

use super::Body;

/// The horizontal pass always advances in quarters of the tick's
/// displacement, independent of `check_steps`.
const HORIZONTAL_STEP_DIVISOR: f32 = 4.0;

impl Body {
    /// Sweep the upcoming tick's displacement against the level and snap to
    /// tile boundaries on contact.
    ///
    /// Each sub-step re-reads the predicted displacement, so an axis stopped
    /// by an earlier sub-step stays put for the rest of the sweep.
    pub fn resolve_stage_collision<L: Level + ?Sized>(&mut self, level: &L) {
        let steps = self.config.check_steps;

        for step in 1..=steps {
            let diff_x = self.predict_next_x() - self.x() as f32;
            let diff_y = self.predict_next_y() - self.y() as f32;

            // Vertical pass
            let left_x = self.x();
            let right_x = left_x.saturating_add(self.size.x - 1);
            let top_y = truncate(self.y() as f32 + diff_y * (step as f32 / steps as f32));
            let bottom_y = top_y.saturating_add(self.size.y - 1);

            match Facing::of(diff_y) {
                Facing::Negative => {
                    if level.collide_horizontal_span(left_x, right_x, top_y, self.collide_deathlock) {
                        self.snap_y(level, level.row_of(top_y), VerticalSide::Bottom);
                    }
                }
                Facing::Positive => {
                    if level.collide_horizontal_span(left_x, right_x, bottom_y, self.collide_deathlock) {
                        self.snap_y(level, level.row_of(bottom_y), VerticalSide::Top);
                    }
                }
                Facing::None => {}
            }

            // Horizontal pass
            let left_x = truncate(self.x() as f32 + diff_x * (step as f32 / HORIZONTAL_STEP_DIVISOR));
            let right_x = left_x.saturating_add(self.size.x - 1);
            let top_y = self.y();
            let bottom_y = top_y.saturating_add(self.size.y - 1);

            match Facing::of(diff_x) {
                Facing::Negative => {
                    if level.collide_vertical_span(left_x, top_y, bottom_y, self.collide_deathlock) {
                        self.snap_x(level, level.column_of(left_x), HorizontalSide::Right);
                    }
                }
                Facing::Positive => {
                    if level.collide_vertical_span(right_x, top_y, bottom_y, self.collide_deathlock) {
                        self.snap_x(level, level.column_of(right_x), HorizontalSide::Left);
                    }
                }
                Facing::None => {}
            }
        }
    }

    /// Put the body flush against one side of a tile column and halt horizontal motion.
    fn snap_x<L: Level + ?Sized>(&mut self, level: &L, column: i32, side: HorizontalSide) {
        let x = match side {
            HorizontalSide::Left => level.tile_edge_x(column, HorizontalSide::Left).saturating_sub(self.size.x),
            HorizontalSide::Right => level.tile_edge_x(column, HorizontalSide::Right),
        };
        log::trace!("snap x: column {} {:?} -> x = {}", column, side, x);
        self.set_x(x);
        self.stop_x();
    }

    /// Put the body flush against the top or bottom of a tile row and halt vertical motion.
    fn snap_y<L: Level + ?Sized>(&mut self, level: &L, row: i32, side: VerticalSide) {
        let y = match side {
            VerticalSide::Top => level.tile_edge_y(row, VerticalSide::Top).saturating_sub(self.size.y),
            VerticalSide::Bottom => level.tile_edge_y(row, VerticalSide::Bottom),
        };
        log::trace!("snap y: row {} {:?} -> y = {}", row, side, y);
        self.set_y(y);
        self.stop_y();
    }

    /// Whether a solid tile sits one pixel past the leading edge, in the
    /// current horizontal facing. Always false while not moving horizontally.
    pub fn against_wall<L: Level + ?Sized>(&self, level: &L) -> bool {
        let top_y = self.y();
        let bottom_y = top_y.saturating_add(self.size.y - 1);
        let x = match self.facing_x() {
            Facing::Negative => self.x().saturating_sub(1),
            Facing::Positive => self.x().saturating_add(self.size.x),
            Facing::None => return false,
        };
        level.collide_vertical_span(x, top_y, bottom_y, self.collide_deathlock)
    }

    /// Whether solid ground lies in the pixel row directly below the body.
    /// The probe starts one pixel in from the left edge and runs to the right edge.
    pub fn against_floor<L: Level + ?Sized>(&self, level: &L) -> bool {
        let x1 = self.x().saturating_add(1);
        let x2 = x1.saturating_add(self.size.x - 2);
        let y = self.y().saturating_add(self.size.y);
        level.collide_horizontal_span(x1, x2, y, self.collide_deathlock)
    }
}
