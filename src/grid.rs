//! Occupancy board for one region's packing search.
//!
//! The board is a flat boolean grid in row-major order, owned exclusively by
//! one in-progress search. `place` and `remove` are exact inverses, so the
//! recursive solver restores the board on backtrack without copying it.

use crate::pieces::{Region, Shape};

/// Mutable `height x width` occupancy grid. `true` means filled.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    /// Creates an empty board sized to a region.
    pub fn for_region(region: &Region) -> Self {
        Self::new(region.width, region.height)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns true iff every cell the shape would cover is free.
    ///
    /// The caller guarantees the anchor keeps the shape's bounding box inside
    /// the board; anchor ranges are pre-restricted by the solver's loops.
    pub fn fits(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .cells
            .iter()
            .all(|&(row, col)| !self.cells[self.index(x + col, y + row)])
    }

    /// Marks every cell the shape covers as filled.
    ///
    /// The caller must have checked `fits` first; overlapping cells are
    /// silently overwritten otherwise.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32) {
        for &(row, col) in &shape.cells {
            let index = self.index(x + col, y + row);
            self.cells[index] = true;
        }
    }

    /// Clears every cell the shape covers.
    ///
    /// Must be called with the same shape and anchor previously passed to
    /// `place`, forming an exact inverse.
    pub fn remove(&mut self, shape: &Shape, x: i32, y: i32) {
        for &(row, col) in &shape.cells {
            let index = self.index(x + col, y + row);
            self.cells[index] = false;
        }
    }

    /// Number of unoccupied cells, by a full scan of the grid.
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|&&filled| !filled).count()
    }

    /// Renders the board as `#`/`.` rows.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                output.push(if self.cells[self.index(x, y)] { '#' } else { '.' });
            }
            output.push('\n');
        }
        output
    }
}
