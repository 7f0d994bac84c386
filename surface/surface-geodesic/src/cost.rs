//! Edge-cost strategies.
//!
//! The search engine is polymorphic over an injected [`EdgeCost`] value.
//! The static term is computed once per edge when the cost graph is built;
//! the dynamic term is evaluated during the search and may depend on the
//! partial path already constructed (via the predecessor of the edge
//! source).

use surface_types::SurfaceMesh;

/// Edge-cost strategy for the shortest-path engine.
///
/// Implementations provide a static per-edge cost, cached in the adjacency
/// graph, and optionally a dynamic cost added during the search. A strategy
/// whose parameters change after the graph was built reports
/// [`costs_dirty`](Self::costs_dirty) so the engine can refresh cached
/// costs in place without rebuilding topology.
pub trait EdgeCost {
    /// Static cost of traversing the edge `from → to`.
    ///
    /// Called once per edge direction when the cost graph is built or
    /// refreshed. Costs may be asymmetric.
    fn static_cost(&self, mesh: &SurfaceMesh, from: u32, to: u32) -> f64;

    /// Dynamic cost of traversing `from → to` given the predecessor of
    /// `from` on the current best path.
    ///
    /// The default contributes nothing, yielding a pure static-cost
    /// Dijkstra search. A history-dependent term weakens strict optimality
    /// guarantees; that trade-off belongs to the implementor.
    fn dynamic_cost(&self, mesh: &SurfaceMesh, from: u32, to: u32, prev: Option<u32>) -> f64 {
        let _ = (mesh, from, to, prev);
        0.0
    }

    /// Returns `true` when cached static costs are out of date with this
    /// strategy's parameters.
    fn costs_dirty(&self) -> bool {
        false
    }

    /// Acknowledges that cached costs have been refreshed.
    fn clear_costs_dirty(&mut self) {}
}

/// Euclidean edge cost, optionally weighted by per-vertex scalars.
///
/// With scalar weighting enabled, the distance is divided by the square of
/// the destination vertex's scalar (left unmodified when that square is
/// zero or no scalars are attached). Because only the destination scalar
/// enters, cost(u → v) and cost(v → u) differ wherever the scalars do.
///
/// # Example
///
/// ```
/// use surface_geodesic::{EdgeCost, EuclideanCost};
/// use surface_types::SurfaceMesh;
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.add_point(Point3::new(0.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(3.0, 4.0, 0.0));
///
/// let cost = EuclideanCost::new();
/// assert!((cost.static_cost(&mesh, 0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EuclideanCost {
    scalar_weighted: bool,
    dirty: bool,
}

impl EuclideanCost {
    /// Creates an unweighted Euclidean cost.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scalar_weighted: false,
            dirty: false,
        }
    }

    /// Sets scalar weighting at construction.
    #[must_use]
    pub const fn with_scalar_weights(mut self, enabled: bool) -> Self {
        self.scalar_weighted = enabled;
        self
    }

    /// Returns `true` if scalar weighting is enabled.
    #[must_use]
    pub const fn scalar_weighted(&self) -> bool {
        self.scalar_weighted
    }

    /// Enables or disables scalar weighting.
    ///
    /// Marks cached costs dirty only when the setting actually changes.
    pub fn set_scalar_weighted(&mut self, enabled: bool) {
        if self.scalar_weighted != enabled {
            self.scalar_weighted = enabled;
            self.dirty = true;
        }
    }
}

impl EdgeCost for EuclideanCost {
    fn static_cost(&self, mesh: &SurfaceMesh, from: u32, to: u32) -> f64 {
        let (Some(p0), Some(p1)) = (mesh.point(from), mesh.point(to)) else {
            return 0.0;
        };
        let distance = (p1 - p0).norm();
        if self.scalar_weighted {
            if let Some(s) = mesh.scalar(to) {
                let s2 = s * s;
                if s2 != 0.0 {
                    return distance / s2;
                }
            }
        }
        distance
    }

    fn costs_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_costs_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn two_point_mesh() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        mesh.add_point(Point3::new(0.0, 0.0, 0.0));
        mesh.add_point(Point3::new(2.0, 0.0, 0.0));
        mesh
    }

    #[test]
    fn euclidean_distance() {
        let mesh = two_point_mesh();
        let cost = EuclideanCost::new();
        assert_relative_eq!(cost.static_cost(&mesh, 0, 1), 2.0);
        assert_relative_eq!(cost.static_cost(&mesh, 1, 0), 2.0);
    }

    #[test]
    fn scalar_weighting_divides_by_destination_square() {
        let mut mesh = two_point_mesh();
        assert!(mesh.set_scalars(vec![1.0, 2.0]));

        let cost = EuclideanCost::new().with_scalar_weights(true);
        // Toward vertex 1: scalar 2, so distance / 4.
        assert_relative_eq!(cost.static_cost(&mesh, 0, 1), 0.5);
        // Toward vertex 0: scalar 1, so the plain distance.
        assert_relative_eq!(cost.static_cost(&mesh, 1, 0), 2.0);
    }

    #[test]
    fn zero_scalar_leaves_distance_unmodified() {
        let mut mesh = two_point_mesh();
        assert!(mesh.set_scalars(vec![1.0, 0.0]));

        let cost = EuclideanCost::new().with_scalar_weights(true);
        assert_relative_eq!(cost.static_cost(&mesh, 0, 1), 2.0);
    }

    #[test]
    fn missing_scalars_fall_back_to_distance() {
        let mesh = two_point_mesh();
        let cost = EuclideanCost::new().with_scalar_weights(true);
        assert_relative_eq!(cost.static_cost(&mesh, 0, 1), 2.0);
    }

    #[test]
    fn dirty_only_on_change() {
        let mut cost = EuclideanCost::new();
        cost.set_scalar_weighted(false);
        assert!(!cost.costs_dirty());

        cost.set_scalar_weighted(true);
        assert!(cost.costs_dirty());

        cost.clear_costs_dirty();
        cost.set_scalar_weighted(true);
        assert!(!cost.costs_dirty());
    }

    #[test]
    fn default_dynamic_cost_is_zero() {
        let mesh = two_point_mesh();
        let cost = EuclideanCost::new();
        assert_eq!(cost.dynamic_cost(&mesh, 0, 1, Some(0)), 0.0);
    }
}
