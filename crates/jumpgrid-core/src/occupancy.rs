//! The [`OccupancyGrid`] type — a fixed-size map of free and blocked cells.
//!
//! Cells outside the grid read as blocked, so callers may probe any
//! neighbour of an in-bounds cell without a separate bounds check. The bounds
//! test happens before the backing buffer is touched.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Blocked,
}

impl CellState {
    /// Decode the 0 = free / 1 = blocked convention.
    pub const fn from_value(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Free),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Encode as 0 (free) or 1 (blocked).
    pub const fn value(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Blocked => 1,
        }
    }
}

/// A rectangular occupancy map with origin `(0, 0)`.
///
/// Serializes as a list of rows of `0`/`1` values; deserialization runs the
/// same validation as [`from_rows`](OccupancyGrid::from_rows).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct OccupancyGrid {
    cells: Vec<CellState>,
    bounds: Range,
}

impl OccupancyGrid {
    /// Create an all-free grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            cells: vec![CellState::Free; bounds.len()],
            bounds,
        })
    }

    /// Build a grid from rows of 0 (free) / 1 (blocked) values.
    ///
    /// Rejects empty input, rows of unequal length and unknown cell values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = CellState::from_value(value)
                    .ok_or(GridError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, rows.len() as i32),
        })
    }

    /// The bounding range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// State of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is blocked. Points outside the grid are blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p) != Some(CellState::Free)
    }

    /// Whether `p` is an in-bounds free cell.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Blocked)
            .count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    // -----------------------------------------------------------------------
    // Map building
    // -----------------------------------------------------------------------

    /// Set the state of the cell at `p`.
    pub fn set(&mut self, p: Point, state: CellState) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Mark the cell at `p` as blocked.
    pub fn set_blocked(&mut self, p: Point) -> Result<(), GridError> {
        self.set(p, CellState::Blocked)
    }

    /// Block every cell on the straight segment `from..=to`.
    ///
    /// The segment must be horizontal, vertical or 45° diagonal and both ends
    /// must be inside the grid. Returns the number of cells on the segment.
    pub fn block_segment(&mut self, from: Point, to: Point) -> Result<usize, GridError> {
        if !from.is_aligned_with(to) {
            return Err(GridError::UnalignedSegment { from, to });
        }
        for p in [from, to] {
            if !self.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }

        let step = (to - from).signum();
        let mut p = from;
        let mut n = 1;
        self.set_blocked(p)?;
        while p != to {
            p = p + step;
            self.set_blocked(p)?;
            n += 1;
        }
        Ok(n)
    }

    /// Block a one-cell rectangular ring inset by `margin`.
    ///
    /// The ring's corners are `(margin, margin)` and
    /// `(height - margin, width - margin)` in `(row, col)` terms, clamped to
    /// the last row and column, so a margin of 0 walls the grid's edge.
    pub fn block_frame(&mut self, margin: i32) -> Result<(), GridError> {
        let top = margin;
        let left = margin;
        let bottom = (self.height() - margin).min(self.height() - 1);
        let right = (self.width() - margin).min(self.width() - 1);
        if margin < 0 || top > bottom || left > right {
            return Err(GridError::FrameTooLarge(margin));
        }

        self.block_segment(Point::rc(top, left), Point::rc(top, right))?;
        self.block_segment(Point::rc(bottom, left), Point::rc(bottom, right))?;
        self.block_segment(Point::rc(top, left), Point::rc(bottom, left))?;
        self.block_segment(Point::rc(top, right), Point::rc(bottom, right))?;
        Ok(())
    }

    /// Export as rows of 0/1 values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let w = self.width() as usize;
        self.cells
            .chunks(w)
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for OccupancyGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<OccupancyGrid> for Vec<Vec<u8>> {
    fn from(grid: OccupancyGrid) -> Self {
        grid.to_rows()
    }
}
