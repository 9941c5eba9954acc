//! Jump Point Search pathfinding on occupancy grids.
//!
//! [`Planner`] runs a best-first search whose successors are *jump points*
//! found by sliding along the eight grid directions, rather than every
//! neighbouring cell as in plain A*.  Moves and the heuristic both use
//! Euclidean distance, so returned costs are true geometric path lengths.
//!
//! ```
//! use jumpgrid_core::{OccupancyGrid, Point};
//! use jumpgrid_paths::Planner;
//!
//! let mut grid = OccupancyGrid::new(10, 10).unwrap();
//! grid.block_frame(0).unwrap();
//!
//! let plan = Planner::new(&grid).plan(Point::rc(1, 1), Point::rc(8, 8)).unwrap();
//! assert!(plan.found());
//! assert_eq!(plan.path(), &[Point::rc(1, 1), Point::rc(8, 8)]);
//! ```
//!
//! # Search state
//!
//! | Piece | Role |
//! |---|---|
//! | frontier | min-heap by `f = g + h`, then `h`, then push order |
//! | visited set | finalized positions; stale frontier entries are skipped |
//! | jump scanner | straight-line slide to the next jump point |

mod distance;
mod error;
mod jump;
mod node;
mod planner;

pub use distance::{chebyshev, euclidean};
pub use error::{Endpoint, EndpointFault, PlanError};
pub use planner::{Plan, Planner, PlannerConfig, Route};
