//! Dense tile grid implementing [`Level`].
//!
//! Tiles are stored in row-major order: index = row * width + column.
//! Pixel (0, 0) is the top-left corner of tile (0, 0); Y grows downward.

use glam::IVec2;

use super::{HorizontalSide, Level, Tile, TileKind, VerticalSide};

/// Fixed-size grid of optional tiles.
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Width of the grid in tiles.
    pub width: u32,
    /// Height of the grid in tiles.
    pub height: u32,
    /// Tile width in pixels.
    pub tile_w: i32,
    /// Tile height in pixels.
    pub tile_h: i32,
    tiles: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Create an empty grid. Non-positive tile dimensions are raised to 1.
    pub fn new(width: u32, height: u32, tile_w: i32, tile_h: i32) -> Self {
        if tile_w <= 0 || tile_h <= 0 {
            log::warn!("TileGrid: invalid tile size {}x{}, clamping to 1", tile_w, tile_h);
        }
        let count = (width * height) as usize;
        Self {
            width,
            height,
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            tiles: vec![None; count],
        }
    }

    /// Build a grid from fixture rows, one character per tile (see [`Tile::from_char`]).
    /// Short rows are padded with empty tiles.
    pub fn from_ascii(rows: &[&str], tile_w: i32, tile_h: i32) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut grid = Self::new(width, rows.len() as u32, tile_w, tile_h);
        for (row, line) in rows.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                grid.set(column as i32, row as i32, Tile::from_char(c));
            }
        }
        grid
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if column < 0 || row < 0 || column >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((row as u32 * self.width + column as u32) as usize)
    }

    /// Tile at a cell. Out-of-grid cells are empty.
    pub fn get(&self, column: i32, row: i32) -> Option<&Tile> {
        self.index(column, row).and_then(|i| self.tiles[i].as_ref())
    }

    /// Set a tile at a cell. Out-of-grid writes are ignored.
    pub fn set(&mut self, column: i32, row: i32, tile: Option<Tile>) {
        if let Some(i) = self.index(column, row) {
            self.tiles[i] = tile;
        }
    }

    /// Fill a rectangular block of cells.
    pub fn fill_rect(&mut self, column: i32, row: i32, w: u32, h: u32, tile: Option<Tile>) {
        for r in row..row + h as i32 {
            for c in column..column + w as i32 {
                self.set(c, r, tile);
            }
        }
    }

    /// Clear all tiles.
    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// Pixel-space bounds: (top-left, bottom-right exclusive).
    pub fn pixel_bounds(&self) -> (IVec2, IVec2) {
        (
            IVec2::ZERO,
            IVec2::new(self.width as i32 * self.tile_w, self.height as i32 * self.tile_h),
        )
    }

    /// Count of non-empty tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Total capacity in tiles.
    pub fn capacity(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Clamp an inclusive cell range to `0..len`. `None` when nothing is left.
    fn clamp_range(first: i32, last: i32, len: u32) -> Option<(i32, i32)> {
        let first = first.max(0);
        let last = last.min(len as i32 - 1);
        (first <= last).then_some((first, last))
    }

    fn solid_at(&self, column: i32, row: i32, count_hazard: bool) -> bool {
        self.get(column, row)
            .is_some_and(|tile| tile.is_solid(count_hazard))
    }
}

impl Level for TileGrid {
    fn collide_horizontal_span(&self, x1: i32, x2: i32, y: i32, count_hazard: bool) -> bool {
        let row = self.row_of(y);
        let Some((first, last)) =
            Self::clamp_range(self.column_of(x1.min(x2)), self.column_of(x1.max(x2)), self.width)
        else {
            return false;
        };
        (first..=last).any(|column| self.solid_at(column, row, count_hazard))
    }

    fn collide_vertical_span(&self, x: i32, y1: i32, y2: i32, count_hazard: bool) -> bool {
        let column = self.column_of(x);
        let Some((first, last)) =
            Self::clamp_range(self.row_of(y1.min(y2)), self.row_of(y1.max(y2)), self.height)
        else {
            return false;
        };
        (first..=last).any(|row| self.solid_at(column, row, count_hazard))
    }

    fn column_of(&self, x: i32) -> i32 {
        x.div_euclid(self.tile_w)
    }

    fn row_of(&self, y: i32) -> i32 {
        y.div_euclid(self.tile_h)
    }

    fn tile_edge_x(&self, column: i32, side: HorizontalSide) -> i32 {
        match side {
            HorizontalSide::Left => column.saturating_mul(self.tile_w),
            HorizontalSide::Right => column.saturating_add(1).saturating_mul(self.tile_w),
        }
    }

    fn tile_edge_y(&self, row: i32, side: VerticalSide) -> i32 {
        match side {
            VerticalSide::Top => row.saturating_mul(self.tile_h),
            VerticalSide::Bottom => row.saturating_add(1).saturating_mul(self.tile_h),
        }
    }

    fn get_tile(&self, kind: TileKind, column: i32, row: i32) -> Option<Tile> {
        self.get(column, row)
            .copied()
            .filter(|tile| tile.kind() == kind)
    }
}
