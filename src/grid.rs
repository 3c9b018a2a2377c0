use rand::Rng;

use crate::config::GameConfig;
use crate::error::ConfigError;

/// Largest number of cells a grid may have.
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Grid coordinate in pixel units, always a multiple of the cell size while
/// inside the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this cell moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size playing field without wrap-around.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Grid {
    /// Creates a grid of `width` x `height` cells, each `cell_size` pixels.
    pub fn new(width: u16, height: u16, cell_size: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let grid = Self {
            width,
            height,
            cell_size,
        };
        let pixel_limit = i32::MAX as u32;
        if u32::from(width) * u32::from(cell_size) > pixel_limit
            || u32::from(height) * u32::from(cell_size) > pixel_limit
            || grid.total_cells() > MAX_GRID_CELLS
        {
            return Err(ConfigError::GridTooLarge {
                width,
                height,
                cell_size,
            });
        }

        Ok(grid)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.grid_width, config.grid_height, config.cell_size)
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> u16 {
        self.cell_size
    }

    /// Horizontal extent in pixel units.
    #[must_use]
    pub fn pixel_width(self) -> i32 {
        i32::from(self.width) * i32::from(self.cell_size)
    }

    /// Vertical extent in pixel units.
    #[must_use]
    pub fn pixel_height(self) -> i32 {
        i32::from(self.height) * i32::from(self.cell_size)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `cell` lies inside the grid on both axes.
    #[must_use]
    pub fn is_within_bounds(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.pixel_width() && cell.y < self.pixel_height()
    }

    /// Cell the snake starts on: the grid center, snapped to the cell lattice.
    #[must_use]
    pub fn start_cell(self) -> Cell {
        self.cell_at(self.width / 2, self.height / 2)
    }

    /// Converts column/row indices into a pixel-space cell.
    #[must_use]
    pub fn cell_at(self, column: u16, row: u16) -> Cell {
        let size = i32::from(self.cell_size);
        Cell {
            x: i32::from(column) * size,
            y: i32::from(row) * size,
        }
    }

    /// Converts an in-bounds cell back into column/row indices.
    #[must_use]
    pub fn column_row(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.is_within_bounds(cell) {
            return None;
        }
        let size = i32::from(self.cell_size);
        let column = u16::try_from(cell.x / size).ok()?;
        let row = u16::try_from(cell.y / size).ok()?;
        Some((column, row))
    }

    /// Draws a uniformly random cell, column and row independently.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let column = rng.gen_range(0..self.width);
        let row = rng.gen_range(0..self.height);
        self.cell_at(column, row)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |column| self.cell_at(column, row)))
    }
}
