//! 2D rotation and reflection utilities.
//!
//! A flat shape has 8 possible orientations in the plane (the dihedral
//! group of the square): the identity, three quarter-turn rotations, and
//! the mirror image of each.

use rustc_hash::FxHashSet;

use crate::pieces::Coord;

/// All 8 symmetry transforms for a flat shape, as (row, column) maps.
///
/// Organized as the four rotations followed by their horizontal mirrors,
/// matching the order orientations are assigned when a gift is built:
/// rotations first, then the flip of each rotation.
pub const TRANSFORMS: [fn(Coord) -> Coord; 8] = [
    // rotations
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (c, -r),  // 90 degrees
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (-c, r),  // 270 degrees
    // horizontal mirror of each rotation
    |(r, c)| (r, -c),
    |(r, c)| (c, r),
    |(r, c)| (-r, c),
    |(r, c)| (-c, -r),
];

/// Generates all unique orientations of a shape's cell set.
///
/// Applies all 8 transforms, normalizes each result so the minimum row and
/// column are zero, then deduplicates by the sorted cell list, keeping the
/// first occurrence of each distinct pattern. Symmetric shapes collapse to
/// fewer orientations; a fully symmetric one (a single cell, a solid square)
/// collapses to exactly one.
pub fn all_orientations(cells: &[Coord]) -> Vec<Vec<Coord>> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut orientations = Vec::new();

    for transform in TRANSFORMS {
        let mut transformed: Vec<Coord> = cells.iter().map(|&cell| transform(cell)).collect();
        normalize_to_origin(&mut transformed);
        // sorted cell list is the canonical form used for deduplication
        transformed.sort_unstable();
        if seen.insert(transformed.clone()) {
            orientations.push(transformed);
        }
    }

    orientations
}

/// Translates cells so the minimum row and column values are both zero.
///
/// This normalization ensures that two orientations that differ only by
/// translation will be recognized as identical.
fn normalize_to_origin(cells: &mut [Coord]) {
    let min_row = cells.iter().map(|(r, _)| *r).min().unwrap();
    let min_col = cells.iter().map(|(_, c)| *c).min().unwrap();

    for (r, c) in cells {
        *r -= min_row;
        *c -= min_col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orientation_set(cells: &[Coord]) -> FxHashSet<Vec<Coord>> {
        all_orientations(cells).into_iter().collect()
    }

    #[test]
    fn test_single_cell_has_one_orientation() {
        assert_eq!(all_orientations(&[(0, 0)]).len(), 1);
    }

    #[test]
    fn test_solid_square_collapses_to_one_orientation() {
        let square = [(0, 0), (0, 1), (1, 0), (1, 1)];
        assert_eq!(all_orientations(&square).len(), 1);
    }

    #[test]
    fn test_domino_has_two_orientations() {
        assert_eq!(all_orientations(&[(0, 0), (0, 1)]).len(), 2);
    }

    #[test]
    fn test_corner_tromino_has_four_orientations() {
        // achiral: mirrors coincide with rotations
        assert_eq!(all_orientations(&[(0, 0), (1, 0), (1, 1)]).len(), 4);
    }

    #[test]
    fn test_l_tetromino_has_eight_orientations() {
        let l = [(0, 0), (1, 0), (2, 0), (2, 1)];
        assert_eq!(all_orientations(&l).len(), 8);
    }

    #[test]
    fn test_orientation_count_bounds_and_areas() {
        let shapes: [&[Coord]; 4] = [
            &[(0, 0)],
            &[(0, 0), (0, 1), (0, 2)],
            &[(0, 1), (0, 2), (1, 0), (1, 1)],
            &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
        ];
        for cells in shapes {
            let orientations = all_orientations(cells);
            assert!((1..=8).contains(&orientations.len()));
            for orientation in &orientations {
                assert_eq!(orientation.len(), cells.len());
            }
        }
    }

    #[test]
    fn test_orientations_are_normalized() {
        let s = [(0, 1), (0, 2), (1, 0), (1, 1)];
        for orientation in all_orientations(&s) {
            assert!(orientation.iter().any(|&(r, _)| r == 0));
            assert!(orientation.iter().any(|&(_, c)| c == 0));
            assert!(orientation.iter().all(|&(r, c)| r >= 0 && c >= 0));
        }
    }

    #[test]
    fn test_closure_from_any_orientation() {
        // re-deriving the group from any member must reproduce the same set
        let l = [(0, 0), (1, 0), (2, 0), (2, 1)];
        let base_set = orientation_set(&l);
        for member in all_orientations(&l) {
            assert_eq!(orientation_set(&member), base_set);
        }
    }
}
