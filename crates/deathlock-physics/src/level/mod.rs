//! The level collaborator: tile-grid collision queries and pixel/tile conversion.
//!
//! Bodies only ever read a level. The owner lends it to each `update()` call,
//! so any number of bodies can share one level and the owner (or an editor)
//! is free to change it between ticks.

mod grid;

pub use grid::TileGrid;

use crate::api::types::Direction;

/// Tile categories a level can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    /// Hazard tile; solid only for bodies that collide with deathlock.
    Deathlock,
    PunchZone,
}

/// A single grid cell's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Deathlock,
    PunchZone { direction: Direction },
}

impl Tile {
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Wall => TileKind::Wall,
            Tile::Deathlock => TileKind::Deathlock,
            Tile::PunchZone { .. } => TileKind::PunchZone,
        }
    }

    /// Launch direction, for punch zones.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Tile::PunchZone { direction } => Some(*direction),
            _ => None,
        }
    }

    /// Whether this tile blocks movement. Hazards only count when asked to.
    pub fn is_solid(&self, count_hazard: bool) -> bool {
        match self {
            Tile::Wall => true,
            Tile::Deathlock => count_hazard,
            Tile::PunchZone { .. } => false,
        }
    }

    /// Fixture character: `#` wall, `x` deathlock, `<` `^` `>` `v` punch zones.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            'x' => Some(Tile::Deathlock),
            '<' => Some(Tile::PunchZone { direction: Direction::Left }),
            '^' => Some(Tile::PunchZone { direction: Direction::Up }),
            '>' => Some(Tile::PunchZone { direction: Direction::Right }),
            'v' => Some(Tile::PunchZone { direction: Direction::Down }),
            _ => None,
        }
    }
}

/// Which vertical edge of a tile column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Which horizontal edge of a tile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Read-only queries a body makes against the level.
///
/// Implementations must answer "not solid" / "no tile" for coordinates
/// outside the level: fast bodies probe past the edges during a sweep.
pub trait Level {
    /// Whether any solid tile touches the pixel row `y` between `x1` and `x2` inclusive.
    fn collide_horizontal_span(&self, x1: i32, x2: i32, y: i32, count_hazard: bool) -> bool;

    /// Whether any solid tile touches the pixel column `x` between `y1` and `y2` inclusive.
    fn collide_vertical_span(&self, x: i32, y1: i32, y2: i32, count_hazard: bool) -> bool;

    /// Tile column containing pixel `x`.
    fn column_of(&self, x: i32) -> i32;

    /// Tile row containing pixel `y`.
    fn row_of(&self, y: i32) -> i32;

    /// Pixel coordinate of a column's edge. The right edge is one past the last pixel.
    fn tile_edge_x(&self, column: i32, side: HorizontalSide) -> i32;

    /// Pixel coordinate of a row's edge. The bottom edge is one past the last pixel.
    fn tile_edge_y(&self, row: i32, side: VerticalSide) -> i32;

    /// The tile of `kind` at a cell, if there is one.
    fn get_tile(&self, kind: TileKind, column: i32, row: i32) -> Option<Tile>;

    fn has_tile(&self, kind: TileKind, column: i32, row: i32) -> bool {
        self.get_tile(kind, column, row).is_some()
    }
}
