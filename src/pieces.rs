//! Gift, shape, and region definitions and coordinate types.
//!
//! A gift is a flat polyomino-style piece; each of its orientations is a set
//! of unit cell positions in 2D space, normalized to start at the origin.

use std::fmt;

use crate::error::Error;
use crate::geometry::all_orientations;

/// A 2D coordinate representing a unit cell position, as (row, column).
pub type Coord = (i32, i32);

/// One orientation of a gift: a normalized cell set with its bounding box.
///
/// Cells are relative to the top-left corner of the bounding box, which is
/// tight: at least one cell lies on row 0 and at least one on column 0.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Occupied cells, sorted, all within `[0, height) x [0, width)`.
    pub cells: Vec<Coord>,
    /// Bounding box width (max column + 1).
    pub width: i32,
    /// Bounding box height (max row + 1).
    pub height: i32,
    /// Number of occupied cells.
    pub area: usize,
}

impl Shape {
    /// Builds a shape from a normalized cell set.
    ///
    /// Callers pass cells already translated so the minimum row and column
    /// are zero (the canonicalizer guarantees this).
    fn new(cells: Vec<Coord>) -> Self {
        let width = cells.iter().map(|&(_, c)| c).max().unwrap_or(-1) + 1;
        let height = cells.iter().map(|&(r, _)| r).max().unwrap_or(-1) + 1;
        let area = cells.len();
        Self {
            cells,
            width,
            height,
            area,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let filled = self.cells.binary_search(&(row, col)).is_ok();
                f.write_str(if filled { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// A gift from the catalogue: an id plus every unique orientation of its
/// shape.
///
/// Built once from raw input, read-only afterward, shared across all regions
/// that reference it by id.
#[derive(Debug, Clone)]
pub struct Gift {
    /// Catalogue identifier; regions reference gifts by this index.
    pub id: usize,
    /// Deduplicated orientations, densely indexed from 0. Length 1..=8.
    pub shapes: Vec<Shape>,
    /// Cell count, identical across all orientations.
    pub area: usize,
}

impl Gift {
    /// Builds a gift from its base grid, where `'#'` marks a filled cell.
    ///
    /// Generates and deduplicates the full orientation set. A grid with no
    /// filled cells has no bounding box and is rejected.
    pub fn new(id: usize, rows: &[&str]) -> Result<Self, Error> {
        let cells: Vec<Coord> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(col, _)| (row as i32, col as i32))
            })
            .collect();

        if cells.is_empty() {
            return Err(Error::EmptyShape { id });
        }

        let shapes: Vec<Shape> = all_orientations(&cells)
            .into_iter()
            .map(Shape::new)
            .collect();
        let area = shapes[0].area;

        Ok(Self { id, shapes, area })
    }

    /// Largest cell count over all orientations.
    ///
    /// Orientations never change a shape's area, so this equals `self.area`;
    /// the sort heuristic still asks for the maximum explicitly.
    pub fn max_area(&self) -> usize {
        self.shapes.iter().map(|shape| shape.area).max().unwrap_or(0)
    }
}

/// A rectangular region together with the gifts that must be packed into it.
///
/// Built once from raw input, consumed by the solver, never mutated.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: usize,
    pub width: i32,
    pub height: i32,
    /// Required instance count per gift id. Gifts past the end of the
    /// vector are required zero times.
    pub must_fit: Vec<usize>,
}

impl Region {
    pub fn new(id: usize, width: i32, height: i32, must_fit: Vec<usize>) -> Self {
        Self {
            id,
            width,
            height,
            must_fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_rejects_empty_grid() {
        let result = Gift::new(3, &["...", "..."]);
        assert!(matches!(result, Err(Error::EmptyShape { id: 3 })));
    }

    #[test]
    fn test_gift_orientations_share_area() {
        let gift = Gift::new(0, &["##.", ".##"]).unwrap();
        for shape in &gift.shapes {
            assert_eq!(shape.area, gift.area);
        }
        assert_eq!(gift.area, 4);
    }

    #[test]
    fn test_shape_bounding_box_is_tight() {
        let gift = Gift::new(0, &[".#.", "###"]).unwrap();
        for shape in &gift.shapes {
            assert!(shape.cells.iter().any(|&(r, _)| r == 0));
            assert!(shape.cells.iter().any(|&(_, c)| c == 0));
            assert!(shape
                .cells
                .iter()
                .all(|&(r, c)| r < shape.height && c < shape.width));
        }
    }

    #[test]
    fn test_solid_square_gift_has_one_orientation() {
        let gift = Gift::new(0, &["##", "##"]).unwrap();
        assert_eq!(gift.shapes.len(), 1);
    }

    #[test]
    fn test_shape_render() {
        let gift = Gift::new(0, &["#..", "###"]).unwrap();
        insta::assert_snapshot!(gift.shapes[0].to_string(), @r"
        #..
        ###
        ");
    }

    #[test]
    fn test_rotated_shape_swaps_dimensions() {
        let gift = Gift::new(0, &["###"]).unwrap();
        assert_eq!(gift.shapes.len(), 2);
        assert_eq!((gift.shapes[0].width, gift.shapes[0].height), (3, 1));
        assert_eq!((gift.shapes[1].width, gift.shapes[1].height), (1, 3));
    }
}
