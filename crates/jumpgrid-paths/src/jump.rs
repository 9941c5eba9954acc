//! Directional jump scan.
//!
//! From a position the scanner slides along one of the eight directions and
//! stops at the first *jump point*: the goal, a cell with a forced neighbour,
//! or (for diagonal moves) a cell from which a cardinal scan finds a jump
//! point. Grid reads outside the map see blocked cells.

use jumpgrid_core::{OccupancyGrid, Point};

/// Jump scanner bound to one grid and one goal.
pub(crate) struct JumpScanner<'a> {
    grid: &'a OccupancyGrid,
    goal: Point,
}

impl<'a> JumpScanner<'a> {
    pub(crate) fn new(grid: &'a OccupancyGrid, goal: Point) -> Self {
        Self { grid, goal }
    }

    /// Jump along `dir` from `from` until a jump point is found or the scan
    /// runs into a blocked cell.
    ///
    /// Sliding is a loop; the only recursion is the single level of cardinal
    /// sub-scans made at each diagonal step.
    pub(crate) fn jump(&self, from: Point, dir: Point) -> Option<Point> {
        debug_assert!(dir.is_unit_step(), "jump direction {dir:?} is not a unit step");
        let mut n = from;

        loop {
            n = n + dir;
            if self.grid.is_blocked(n) {
                return None;
            }
            if n == self.goal || self.has_forced_neighbor(n, dir) {
                return Some(n);
            }
            if dir.is_diagonal()
                && (self.jump(n, Point::new(dir.x, 0)).is_some()
                    || self.jump(n, Point::new(0, dir.y)).is_some())
            {
                return Some(n);
            }
        }
    }

    /// Whether `p`, reached by moving along `dir`, has a forced neighbour.
    fn has_forced_neighbor(&self, p: Point, dir: Point) -> bool {
        let blocked = |dx: i32, dy: i32| self.grid.is_blocked(p.shift(dx, dy));
        let free = |dx: i32, dy: i32| !blocked(dx, dy);

        match (dir.x, dir.y) {
            // Vertical: look east and west.
            (0, dy) => (blocked(1, 0) && free(1, dy)) || (blocked(-1, 0) && free(-1, dy)),
            // Horizontal: look south and north.
            (dx, 0) => (blocked(0, 1) && free(dx, 1)) || (blocked(0, -1) && free(dx, -1)),
            // Diagonal: look one row back and one column back.
            (dx, dy) => (blocked(0, -dy) && free(dx, -dy)) || (blocked(-dx, 0) && free(-dx, dy)),
        }
    }
}
