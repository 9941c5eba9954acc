//! Error types for planning.

use std::fmt;

use jumpgrid_core::Point;

/// Which end of a query an [`PlanError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("is outside the grid"),
            Self::Blocked => f.write_str("is on a blocked cell"),
        }
    }
}

/// Errors that can occur while planning.
///
/// Exhausting the search is reported through [`Plan`](crate::Plan) as a
/// normal outcome; `NoPathFound` is only produced by
/// [`Plan::into_route`](crate::Plan::into_route).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PlanError {
    /// The start or goal is outside the grid or on a blocked cell.
    #[error("{endpoint} position {pos} {fault}")]
    InvalidEndpoint {
        endpoint: Endpoint,
        pos: Point,
        fault: EndpointFault,
    },

    /// The search exhausted its frontier without reaching the goal.
    #[error("no path found from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },
}

impl PlanError {
    /// Returns `true` if this is an invalid-endpoint error.
    #[must_use]
    pub const fn is_invalid_endpoint(&self) -> bool {
        matches!(self, Self::InvalidEndpoint { .. })
    }

    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_display() {
        let err = PlanError::InvalidEndpoint {
            endpoint: Endpoint::Goal,
            pos: Point::rc(3, 4),
            fault: EndpointFault::Blocked,
        };
        assert_eq!(err.to_string(), "goal position (3, 4) is on a blocked cell");
        assert!(err.is_invalid_endpoint());
        assert!(!err.is_no_path_found());
    }

    #[test]
    fn no_path_display() {
        let err = PlanError::NoPathFound {
            start: Point::rc(1, 1),
            goal: Point::rc(5, 5),
        };
        assert!(err.to_string().contains("no path found"));
        assert!(err.is_no_path_found());
    }
}
