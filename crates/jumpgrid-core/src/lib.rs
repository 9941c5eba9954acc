//! **jumpgrid-core** — geometry primitives and occupancy grids.
//!
//! This crate provides the foundational types used by the *jumpgrid*
//! planner: integer points and ranges, the eight unit directions, and a
//! read-only-at-search-time [`OccupancyGrid`] of free and blocked cells.

pub mod error;
pub mod geom;
pub mod occupancy;

pub use error::GridError;
pub use geom::{DIRECTIONS, Point, Range, RangeIter};
pub use occupancy::{CellState, OccupancyGrid};
