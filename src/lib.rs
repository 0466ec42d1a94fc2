//! Gift Packing Feasibility Solver Library
//!
//! Decides, per rectangular region, whether a required multiset of flat
//! gift pieces can be placed without overlap, with every piece free to use
//! any of its rotated or mirrored orientations.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod parser;
pub mod pieces;
pub mod solver;

pub use error::Error;
pub use solver::{can_pack, count_feasible, feasible_regions};
