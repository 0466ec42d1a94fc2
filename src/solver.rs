//! Backtracking feasibility solver for gift packing.
//!
//! For each region the required gift counts are expanded into a flat instance
//! list, sorted largest-piece-first, and searched exhaustively over
//! orientation x anchor combinations. The search decides feasibility only: it
//! stops at the first complete packing and reports a boolean.

use crate::error::Error;
use crate::grid::Board;
use crate::pieces::{Gift, Region};

/// Expands a region's required counts into one entry per gift instance,
/// ordered by the placement heuristic.
///
/// The key `(-max_area, orientation_count)` puts the largest pieces first
/// and, among equal areas, the pieces with the fewest orientation choices.
/// Placing the most constrained, highest-footprint pieces early prunes the
/// search tree fastest.
fn instance_list(region: &Region, gifts: &[Gift]) -> Vec<usize> {
    let mut to_place: Vec<usize> = region
        .must_fit
        .iter()
        .enumerate()
        .flat_map(|(gift_id, &count)| std::iter::repeat(gift_id).take(count))
        .collect();

    to_place.sort_by_key(|&gift_id| {
        let gift = &gifts[gift_id];
        (-(gift.max_area() as i64), gift.shapes.len())
    });

    to_place
}

/// Recursive backtracking step: tries to place the head of `remaining` at
/// every orientation and anchor, then recurses on the tail.
///
/// The anchor loops are restricted to `[0, region - shape]` per axis, so
/// `fits` never sees an out-of-bounds cell; a shape larger than the region
/// in some orientation simply yields empty anchor ranges. The area prune
/// skips recursion whenever the free cells left cannot hold the remaining
/// pieces; it only discards provably infeasible branches.
fn place_remaining(region: &Region, gifts: &[Gift], board: &mut Board, remaining: &[usize]) -> bool {
    let Some((&gift_id, rest)) = remaining.split_first() else {
        return true;
    };

    let gift = &gifts[gift_id];
    let pending_area: usize = rest.iter().map(|&id| gifts[id].area).sum();

    for shape in &gift.shapes {
        for y in 0..=(region.height - shape.height) {
            for x in 0..=(region.width - shape.width) {
                if board.fits(shape, x, y) {
                    board.place(shape, x, y);
                    if board.free_cells() >= pending_area
                        && place_remaining(region, gifts, board, rest)
                    {
                        return true;
                    }
                    board.remove(shape, x, y);
                }
            }
        }
    }

    false
}

/// Decides whether the region's full instance list can be packed without
/// overlap.
///
/// A required gift id absent from the catalogue is a configuration error,
/// not an infeasible region; the two outcomes are semantically different and
/// must not be conflated.
pub fn can_pack(region: &Region, gifts: &[Gift]) -> Result<bool, Error> {
    for (gift_id, &count) in region.must_fit.iter().enumerate() {
        if count > 0 && gift_id >= gifts.len() {
            return Err(Error::UnknownGift {
                region: region.id,
                gift: gift_id,
            });
        }
    }

    let to_place = instance_list(region, gifts);
    log::debug!(
        "region {}: packing {} instances into {}x{}",
        region.id,
        to_place.len(),
        region.width,
        region.height
    );

    let mut board = Board::for_region(region);
    Ok(place_remaining(region, gifts, &mut board, &to_place))
}

/// Runs one search per region and returns the verdicts in input order.
///
/// Regions are independent: each search owns a fresh board and shares
/// nothing with the others. Configuration errors abort the whole run.
pub fn feasible_regions(regions: &[Region], gifts: &[Gift]) -> Result<Vec<bool>, Error> {
    regions
        .iter()
        .map(|region| can_pack(region, gifts))
        .collect()
}

/// Counts the regions whose instance list can be packed.
pub fn count_feasible(regions: &[Region], gifts: &[Gift]) -> Result<usize, Error> {
    let verdicts = feasible_regions(regions, gifts)?;
    Ok(verdicts.into_iter().filter(|&feasible| feasible).count())
}
