//! Shortest-path query description.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes one shortest-path search: endpoints, early termination, and
/// repel points.
///
/// The query owns its repel points; the engine only reads them for the
/// duration of one search. Each repel point is resolved to the nearest
/// mesh vertex, and that vertex is treated as maximal-cost so the path
/// routes away from it. Repel points that resolve to the start or end
/// vertex, or fail to resolve at all, are skipped.
///
/// # Example
///
/// ```
/// use surface_geodesic::PathQuery;
/// use nalgebra::Point3;
///
/// let query = PathQuery::between(0, 9)
///     .with_stop_at_end(true)
///     .with_repel_point(Point3::new(0.5, 0.5, 0.0));
///
/// assert_eq!(query.start(), 0);
/// assert_eq!(query.end(), 9);
/// assert!(query.stop_at_end());
/// assert_eq!(query.repel_points().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathQuery {
    /// Start vertex id.
    start: u32,
    /// End vertex id.
    end: u32,
    /// Stop the search once the end vertex is finalized.
    stop_at_end: bool,
    /// Locations the path should route away from.
    repel_points: Vec<Point3<f64>>,
}

impl PathQuery {
    /// Creates a query between two vertices.
    ///
    /// Early termination is off by default: the search then computes
    /// shortest paths from the start to every reachable vertex.
    #[must_use]
    pub const fn between(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            stop_at_end: false,
            repel_points: Vec::new(),
        }
    }

    /// Sets whether the search stops once the end vertex is finalized.
    #[must_use]
    pub const fn with_stop_at_end(mut self, stop: bool) -> Self {
        self.stop_at_end = stop;
        self
    }

    /// Adds one repel point.
    #[must_use]
    pub fn with_repel_point(mut self, point: Point3<f64>) -> Self {
        self.repel_points.push(point);
        self
    }

    /// Replaces the repel point set.
    #[must_use]
    pub fn with_repel_points(mut self, points: Vec<Point3<f64>>) -> Self {
        self.repel_points = points;
        self
    }

    /// Returns the start vertex.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Returns the end vertex.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` if the search stops at the end vertex.
    #[inline]
    #[must_use]
    pub const fn stop_at_end(&self) -> bool {
        self.stop_at_end
    }

    /// Returns the repel points.
    #[inline]
    #[must_use]
    pub fn repel_points(&self) -> &[Point3<f64>] {
        &self.repel_points
    }
}
