//! Topological-distance flood fill.
//!
//! Marks every vertex with its breadth-first edge distance to a boundary
//! loop, signed by which side of the loop it falls on: positive for the
//! side containing the seed, negative for the far side, zero on the loop
//! itself.

use std::collections::VecDeque;

use hashbrown::HashSet;
use surface_geodesic::{CostGraph, EuclideanCost};
use surface_types::SurfaceMesh;
use tracing::debug;

use crate::error::{SelectError, SelectResult};

/// Signed topological distances produced by [`select_region`].
#[derive(Debug, Clone)]
pub struct RegionSelection {
    /// Signed distance per vertex; `None` for vertices in components the
    /// boundary never reaches.
    distances: Vec<Option<i64>>,
}

impl RegionSelection {
    /// Returns a vertex's signed topological distance to the boundary.
    ///
    /// Zero on the boundary, positive on the seed side, negative on the
    /// far side, `None` when the vertex is out of range or disconnected
    /// from the boundary.
    #[inline]
    #[must_use]
    pub fn distance(&self, vertex: u32) -> Option<i64> {
        self.distances.get(vertex as usize).copied().flatten()
    }

    /// Returns `true` if the vertex lies on the boundary loop.
    #[must_use]
    pub fn is_boundary(&self, vertex: u32) -> bool {
        self.distance(vertex) == Some(0)
    }

    /// Iterates over the seed-side vertices.
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; meshes beyond 4B vertices are unsupported
    pub fn inside(&self) -> impl Iterator<Item = u32> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| matches!(d, Some(d) if *d > 0))
            .map(|(v, _)| v as u32)
    }

    /// Iterates over the far-side vertices.
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; meshes beyond 4B vertices are unsupported
    pub fn outside(&self) -> impl Iterator<Item = u32> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| matches!(d, Some(d) if *d < 0))
            .map(|(v, _)| v as u32)
    }

    /// Returns the number of vertices on the seed side.
    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.inside().count()
    }

    /// Returns the number of vertices on the far side.
    #[must_use]
    pub fn outside_count(&self) -> usize {
        self.outside().count()
    }

}

/// Marks regions on either side of a boundary loop.
///
/// Runs two breadth-first passes over the mesh edge graph: one from the
/// seed, stopped by boundary vertices, to decide which side each vertex is
/// on; and one from the whole boundary at once to measure topological
/// distance. The result combines both as a signed distance.
///
/// # Errors
///
/// Returns an error when the mesh is empty, any index is out of range, or
/// the seed lies on the boundary itself.
///
/// # Example
///
/// ```
/// use surface_select::select_region;
/// use surface_types::{Cell, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// for x in 0..5 {
///     mesh.add_point(Point3::new(f64::from(x), 0.0, 0.0));
/// }
/// mesh.add_cell(Cell::Line(vec![0, 1, 2, 3, 4]));
///
/// // Vertex 2 splits the line; the seed sits on the left side.
/// let region = select_region(&mesh, &[2], 1).unwrap();
/// assert_eq!(region.distance(0), Some(2));
/// assert_eq!(region.distance(2), Some(0));
/// assert_eq!(region.distance(4), Some(-2));
/// ```
pub fn select_region(
    mesh: &SurfaceMesh,
    boundary: &[u32],
    seed: u32,
) -> SelectResult<RegionSelection> {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 {
        return Err(SelectError::EmptyMesh);
    }
    for &v in boundary.iter().chain(std::iter::once(&seed)) {
        if v as usize >= vertex_count {
            return Err(SelectError::InvalidVertex {
                index: v,
                vertex_count,
            });
        }
    }
    let barrier: HashSet<u32> = boundary.iter().copied().collect();
    if barrier.contains(&seed) {
        return Err(SelectError::SeedOnBoundary(seed));
    }

    // The graph is only used for connectivity; costs are irrelevant here.
    let mut graph = CostGraph::new();
    graph.build(mesh, &EuclideanCost::new());

    // Pass 1: which vertices sit on the seed side. Boundary vertices stop
    // the expansion.
    let mut seed_side = vec![false; vertex_count];
    seed_side[seed as usize] = true;
    let mut queue = VecDeque::from([seed]);
    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.neighbors(u) {
            if barrier.contains(&v) || seed_side[v as usize] {
                continue;
            }
            seed_side[v as usize] = true;
            queue.push_back(v);
        }
    }

    // Pass 2: unsigned topological distance from the boundary loop.
    let mut distances: Vec<Option<i64>> = vec![None; vertex_count];
    let mut queue: VecDeque<u32> = VecDeque::new();
    for &b in &barrier {
        distances[b as usize] = Some(0);
        queue.push_back(b);
    }
    while let Some(u) = queue.pop_front() {
        let next = match distances[u as usize] {
            Some(d) => d + 1,
            None => continue,
        };
        for (v, _) in graph.neighbors(u) {
            if distances[v as usize].is_none() {
                distances[v as usize] = Some(next);
                queue.push_back(v);
            }
        }
    }

    // Combine: seed side keeps the positive sign.
    for (v, entry) in distances.iter_mut().enumerate() {
        if let Some(d) = *entry {
            if d > 0 && !seed_side[v] {
                *entry = Some(-d);
            }
        }
    }

    let selection = RegionSelection { distances };
    debug!(
        inside = selection.inside_count(),
        outside = selection.outside_count(),
        boundary = barrier.len(),
        "flood fill complete"
    );
    Ok(selection)
}
