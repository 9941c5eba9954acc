//! Jump Point Search (JPS) best-first planner.
//!
//! JPS is an A* variant for uniform-cost grids.  Instead of queueing every
//! neighbouring cell it "jumps" along straight lines and only adds nodes to
//! the open list at *jump points*.  Step cost and heuristic are both
//! Euclidean distance, so the first time the goal is popped its cost is
//! minimal.

use jumpgrid_core::{DIRECTIONS, OccupancyGrid, Point};

use crate::distance;
use crate::error::{Endpoint, EndpointFault, PlanError};
use crate::jump::JumpScanner;
use crate::node::{Frontier, Node, VisitedSet};

/// Planner options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Record every jump point pushed onto the frontier in [`Plan::trace`].
    pub record_trace: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { record_trace: true }
    }
}

/// A found path and its length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Total Euclidean length of the path.
    pub cost: f64,
    /// Jump points from start to goal, both included.
    pub path: Vec<Point>,
}

impl Route {
    /// Expand the jump-point path into a step-by-step path.
    ///
    /// Each step moves one cell towards the segment's end, so an aligned
    /// segment is walked with a constant unit step and an unaligned one
    /// (only possible in a hand-built route) bends once into a staircase.
    pub fn steps(&self) -> Vec<Point> {
        let Some(&last) = self.path.last() else {
            return Vec::new();
        };
        let len: i32 = self
            .path
            .windows(2)
            .map(|w| distance::chebyshev(w[0], w[1]))
            .sum();
        let mut result = Vec::with_capacity(len as usize + 1);
        for w in self.path.windows(2) {
            let (a, b) = (w[0], w[1]);
            let mut c = a;
            while c != b {
                result.push(c);
                c = c + (b - c).signum();
            }
        }
        result.push(last);
        result
    }

    /// Whether every segment is a straight cardinal or diagonal line made of
    /// free cells only.
    pub fn is_clear(&self, grid: &OccupancyGrid) -> bool {
        self.path.windows(2).all(|w| w[0].is_aligned_with(w[1]))
            && self.steps().into_iter().all(|p| grid.is_free(p))
    }
}

/// Outcome of one [`Planner::plan`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub start: Point,
    pub goal: Point,
    /// `None` when the goal is unreachable.
    pub route: Option<Route>,
    /// Jump points in the order they were pushed onto the frontier. Empty
    /// unless [`PlannerConfig::record_trace`] is set.
    pub trace: Vec<Point>,
    /// Number of finalized positions.
    pub expanded: usize,
    /// Frontier entries skipped because their position was already
    /// finalized through a cheaper or earlier copy.
    pub stale: usize,
}

impl Plan {
    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.route.is_some()
    }

    /// Path cost, if a path was found.
    pub fn cost(&self) -> Option<f64> {
        self.route.as_ref().map(|r| r.cost)
    }

    /// The jump-point path, empty when no path was found.
    pub fn path(&self) -> &[Point] {
        match &self.route {
            Some(r) => &r.path,
            None => &[],
        }
    }

    /// Take the route, turning an unreachable goal into
    /// [`PlanError::NoPathFound`].
    pub fn into_route(self) -> Result<Route, PlanError> {
        self.route.ok_or(PlanError::NoPathFound {
            start: self.start,
            goal: self.goal,
        })
    }
}

/// Jump Point Search over a read-only [`OccupancyGrid`].
///
/// The planner holds no search state between calls: each
/// [`plan`](Planner::plan) owns its frontier and visited set, so one grid can
/// be shared by any number of planners.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    grid: &'a OccupancyGrid,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with the default configuration.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self::with_config(grid, PlannerConfig::default())
    }

    /// Create a planner with an explicit configuration.
    pub fn with_config(grid: &'a OccupancyGrid, config: PlannerConfig) -> Self {
        Self { grid, config }
    }

    /// Compute a shortest path from `start` to `goal`.
    ///
    /// Fails fast with [`PlanError::InvalidEndpoint`] when either endpoint is
    /// outside the grid or blocked. An unreachable goal is not an error: the
    /// returned [`Plan`] has no route.
    pub fn plan(&self, start: Point, goal: Point) -> Result<Plan, PlanError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;
        log::debug!("jps: planning {start} -> {goal}");

        let scanner = JumpScanner::new(self.grid, goal);
        let mut nodes = vec![Node::new(start, 0.0, heuristic(start, goal), None)];
        let mut open = Frontier::default();
        let mut closed = VisitedSet::new(self.grid.bounds());
        let mut trace = Vec::new();
        let mut stale = 0usize;
        let mut peak_open = 1usize;
        open.push(0, &nodes[0]);

        let found = 'search: loop {
            let Some(ci) = open.pop() else {
                break 'search None;
            };
            let cur = nodes[ci];
            if !closed.insert(cur.pos) {
                stale += 1;
                continue;
            }
            log::trace!("jps: expand {} g={:.3} h={:.3}", cur.pos, cur.g, cur.h);

            if cur.pos == goal {
                break 'search Some(ci);
            }

            for dir in DIRECTIONS {
                let Some(jp) = scanner.jump(cur.pos, dir) else {
                    continue;
                };
                if closed.contains(jp) {
                    continue;
                }
                let node = Node::new(jp, cur.g + cost(cur.pos, jp), heuristic(jp, goal), Some(ci));
                log::trace!("jps: push {jp} via {} f={:.3}", cur.pos, node.f());
                open.push(nodes.len(), &node);
                nodes.push(node);
                if self.config.record_trace {
                    trace.push(jp);
                }
            }
            peak_open = peak_open.max(open.len());
        };

        let route = found.map(|gi| Route {
            cost: nodes[gi].g,
            path: reconstruct(&nodes, gi),
        });
        log::debug!(
            "jps: {} after {} expansions ({} stale, {} nodes, peak frontier {}), cost {:?}",
            if route.is_some() { "found" } else { "no path" },
            closed.len(),
            stale,
            nodes.len(),
            peak_open,
            route.as_ref().map(|r| r.cost),
        );

        Ok(Plan {
            start,
            goal,
            route,
            trace,
            expanded: closed.len(),
            stale,
        })
    }

    fn check_endpoint(&self, endpoint: Endpoint, pos: Point) -> Result<(), PlanError> {
        let fault = if !self.grid.contains(pos) {
            EndpointFault::OutOfBounds
        } else if self.grid.is_blocked(pos) {
            EndpointFault::Blocked
        } else {
            return Ok(());
        };
        Err(PlanError::InvalidEndpoint {
            endpoint,
            pos,
            fault,
        })
    }
}

/// Estimated remaining cost from `p` to `goal`.
#[inline]
fn heuristic(p: Point, goal: Point) -> f64 {
    distance::euclidean(p, goal)
}

/// Cost of the straight move from `a` to jump point `b`.
#[inline]
fn cost(a: Point, b: Point) -> f64 {
    distance::euclidean(a, b)
}

/// Walk parent links back from `goal_idx` and return the path start-first.
fn reconstruct(nodes: &[Node], goal_idx: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = Some(goal_idx);
    while let Some(i) = ci {
        path.push(nodes[i].pos);
        ci = nodes[i].parent;
    }
    path.reverse();
    path
}
