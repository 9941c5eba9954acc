//! Error types for building and validating occupancy grids.

use crate::geom::Point;

/// Errors raised while constructing or editing an
/// [`OccupancyGrid`](crate::OccupancyGrid).
///
/// `Empty`, `Jagged` and `InvalidCell` together describe a malformed grid;
/// the remaining variants come from the map-building helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// The grid has no rows, or a dimension is zero or negative.
    #[error("grid is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Jagged {
        /// Index of the offending row (0-based).
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell value other than 0 (free) or 1 (blocked).
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// A point outside the grid was passed to an editing helper.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),

    /// The two ends of a wall segment are not on one straight line.
    #[error("segment {from} -> {to} is not horizontal, vertical or diagonal")]
    UnalignedSegment { from: Point, to: Point },

    /// The frame margin leaves no room for a frame inside the grid.
    #[error("frame margin {0} does not fit inside the grid")]
    FrameTooLarge(i32),
}

impl GridError {
    /// Returns `true` for the malformed-input variants.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::Jagged { .. } | Self::InvalidCell { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jagged_display() {
        let err = GridError::Jagged {
            row: 3,
            expected: 10,
            found: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("expected 10"));
    }

    #[test]
    fn out_of_bounds_uses_row_col() {
        let err = GridError::OutOfBounds(Point::rc(4, 7));
        assert_eq!(err.to_string(), "point (4, 7) is outside the grid");
    }

    #[test]
    fn malformed_classification() {
        assert!(GridError::Empty.is_malformed());
        assert!(
            GridError::InvalidCell {
                row: 0,
                col: 0,
                value: 2
            }
            .is_malformed()
        );
        assert!(!GridError::FrameTooLarge(9).is_malformed());
    }
}
