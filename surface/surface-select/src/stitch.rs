//! Loop stitching onto mesh edges.
//!
//! Converts a floating loop of 3D points into a closed walk over actual
//! mesh edges: each loop point is resolved to its nearest mesh vertex, and
//! consecutive anchor pairs are joined by one edge search per segment.

use hashbrown::HashSet;
use nalgebra::Point3;
use surface_geodesic::{CostGraph, DijkstraPathfinder, PathQuery};
use surface_types::SurfaceMesh;
use tracing::info;

use crate::error::{SelectError, SelectResult};

/// Strategy used to join consecutive loop anchors over mesh edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeSearchMode {
    /// Walk to the unvisited neighbor nearest the target. Fast, follows
    /// the loop closely, and can get boxed in on convoluted meshes.
    #[default]
    Greedy,
    /// Run the Dijkstra engine per segment. Slower but always finds a
    /// connection when one exists.
    Geodesic,
}

/// A closed walk over mesh edges produced by [`LoopStitcher::stitch`].
///
/// Vertices run around the loop in anchor order, with the opening vertex
/// repeated at the end to close the walk.
#[derive(Debug, Clone, Default)]
pub struct StitchedLoop {
    vertices: Vec<u32>,
    points: Vec<Point3<f64>>,
}

impl StitchedLoop {
    /// Returns the walk's vertex ids.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Returns the walk's 3D positions, parallel to
    /// [`vertices`](Self::vertices).
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns the number of vertices on the walk (closing vertex
    /// included).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the walk is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the walk ends where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
    }

    /// Returns the distinct vertices of the walk (without the repeated
    /// closing vertex).
    #[must_use]
    pub fn vertex_set(&self) -> HashSet<u32> {
        let interior = if self.is_closed() {
            &self.vertices[..self.vertices.len() - 1]
        } else {
            &self.vertices[..]
        };
        interior.iter().copied().collect()
    }

    /// Returns the total polyline length of the walk.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}

/// Stitches a loop of 3D points onto mesh edges.
///
/// One stitcher amortizes the engine's adjacency graph across all segments
/// of all loops stitched on the same mesh.
///
/// # Example
///
/// ```
/// use surface_select::{EdgeSearchMode, LoopStitcher};
/// use surface_types::{Cell, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.add_point(Point3::new(0.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(1.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(1.0, 1.0, 0.0));
/// mesh.add_point(Point3::new(0.0, 1.0, 0.0));
/// mesh.add_cell(Cell::Triangle([0, 1, 2]));
/// mesh.add_cell(Cell::Triangle([0, 2, 3]));
///
/// let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);
/// let loop_points = [
///     Point3::new(0.1, 0.0, 0.0),
///     Point3::new(0.9, 0.1, 0.0),
///     Point3::new(0.9, 0.9, 0.0),
///     Point3::new(0.1, 0.9, 0.0),
/// ];
/// let stitched = stitcher.stitch(&mesh, &loop_points).unwrap();
/// assert!(stitched.is_closed());
/// ```
#[derive(Debug, Default)]
pub struct LoopStitcher {
    mode: EdgeSearchMode,
    engine: DijkstraPathfinder,
}

impl LoopStitcher {
    /// Creates a stitcher with the given edge-search strategy.
    #[must_use]
    pub fn new(mode: EdgeSearchMode) -> Self {
        Self {
            mode,
            engine: DijkstraPathfinder::new(),
        }
    }

    /// Returns the edge-search strategy.
    #[must_use]
    pub const fn mode(&self) -> EdgeSearchMode {
        self.mode
    }

    /// Stitches a loop of points into a closed walk over mesh edges.
    ///
    /// Loop points are resolved to their nearest mesh vertices; coincident
    /// consecutive anchors are de-duplicated. Each consecutive anchor pair
    /// (wrapping around) is joined by one edge search, and segment
    /// junctions appear once in the output.
    ///
    /// # Errors
    ///
    /// Returns an error when the mesh is empty, the loop resolves to fewer
    /// than three distinct anchors, a greedy walk gets boxed in, or the
    /// engine finds no path for a segment.
    pub fn stitch(
        &mut self,
        mesh: &SurfaceMesh,
        loop_points: &[Point3<f64>],
    ) -> SelectResult<StitchedLoop> {
        if mesh.is_empty() {
            return Err(SelectError::EmptyMesh);
        }

        let mut anchors: Vec<u32> = Vec::with_capacity(loop_points.len());
        for point in loop_points {
            if let Some(v) = mesh.nearest_vertex(point) {
                // Coincident consecutive anchors collapse to one.
                if anchors.last() != Some(&v) {
                    anchors.push(v);
                }
            }
        }
        // The wrap-around pair may coincide as well.
        if anchors.len() > 1 && anchors.first() == anchors.last() {
            anchors.pop();
        }
        if anchors.len() < 3 {
            return Err(SelectError::DegenerateLoop(anchors.len()));
        }

        info!(
            anchors = anchors.len(),
            mode = ?self.mode,
            "stitching selection loop onto mesh edges"
        );
        self.engine.ensure_graph(mesh);

        let mut vertices: Vec<u32> = Vec::new();
        for k in 0..anchors.len() {
            let from = anchors[k];
            let to = anchors[(k + 1) % anchors.len()];

            let segment = match self.mode {
                EdgeSearchMode::Geodesic => {
                    let query = PathQuery::between(from, to).with_stop_at_end(true);
                    let path = self.engine.find_path(mesh, &query)?;
                    // Traced end -> start; the walk runs start -> end.
                    path.reversed().vertices().to_vec()
                }
                EdgeSearchMode::Greedy => greedy_walk(mesh, self.engine.graph(), from, to)?,
            };

            if vertices.is_empty() {
                vertices.extend(segment);
            } else {
                // The junction vertex is already the tail of the walk.
                vertices.extend(segment.into_iter().skip(1));
            }
        }

        let mut points = Vec::with_capacity(vertices.len());
        for &v in &vertices {
            points.push(mesh.point(v).ok_or(SelectError::InvalidVertex {
                index: v,
                vertex_count: mesh.vertex_count(),
            })?);
        }

        Ok(StitchedLoop { vertices, points })
    }
}

/// Walks mesh edges from `from` to `to`, always stepping to the unvisited
/// neighbor nearest the target.
fn greedy_walk(
    mesh: &SurfaceMesh,
    graph: &CostGraph,
    from: u32,
    to: u32,
) -> SelectResult<Vec<u32>> {
    let target = mesh.point(to).ok_or(SelectError::InvalidVertex {
        index: to,
        vertex_count: mesh.vertex_count(),
    })?;

    let mut walk = vec![from];
    let mut visited: HashSet<u32> = HashSet::new();
    visited.insert(from);

    let mut current = from;
    while current != to {
        let next = graph
            .neighbors(current)
            .filter(|(n, _)| !visited.contains(n))
            .filter_map(|(n, _)| mesh.point(n).map(|p| (n, (p - target).norm_squared())))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let Some((next, _)) = next else {
            return Err(SelectError::WalkStuck {
                at: current,
                target: to,
            });
        };
        visited.insert(next);
        walk.push(next);
        current = next;
    }
    Ok(walk)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use surface_types::Cell;

    /// A flat n-by-n grid of unit squares, each split into two triangles.
    fn grid_mesh(n: u32) -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        for j in 0..=n {
            for i in 0..=n {
                mesh.add_point(Point3::new(f64::from(i), f64::from(j), 0.0));
            }
        }
        let stride = n + 1;
        for j in 0..n {
            for i in 0..n {
                let v00 = j * stride + i;
                let v10 = v00 + 1;
                let v01 = v00 + stride;
                let v11 = v01 + 1;
                mesh.add_cell(Cell::Triangle([v00, v10, v11]));
                mesh.add_cell(Cell::Triangle([v00, v11, v01]));
            }
        }
        mesh
    }

    fn square_loop() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
        ]
    }

    #[test]
    fn geodesic_stitch_closes_the_walk() {
        let mesh = grid_mesh(4);
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);
        let stitched = stitcher.stitch(&mesh, &square_loop()).unwrap();

        assert!(stitched.is_closed());
        // Ring around the center cell: 8 distinct vertices plus closure.
        assert_eq!(stitched.len(), 9);
        assert!((stitched.length() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn greedy_stitch_matches_geodesic_on_a_grid() {
        let mesh = grid_mesh(4);

        let mut geodesic = LoopStitcher::new(EdgeSearchMode::Geodesic);
        let by_engine = geodesic.stitch(&mesh, &square_loop()).unwrap();

        let mut greedy = LoopStitcher::new(EdgeSearchMode::Greedy);
        let by_walk = greedy.stitch(&mesh, &square_loop()).unwrap();

        assert_eq!(by_engine.vertices(), by_walk.vertices());
    }

    #[test]
    fn coincident_anchors_are_deduplicated() {
        let mesh = grid_mesh(4);
        let mut loop_points = square_loop();
        // Two extra points resolving to the first anchor.
        loop_points.insert(1, Point3::new(1.1, 0.95, 0.0));
        loop_points.push(Point3::new(0.9, 1.1, 0.0));

        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);
        let stitched = stitcher.stitch(&mesh, &loop_points).unwrap();

        assert!(stitched.is_closed());
        assert_eq!(stitched.len(), 9);
    }

    #[test]
    fn too_few_distinct_anchors_rejected() {
        let mesh = grid_mesh(2);
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);

        let result = stitcher.stitch(
            &mesh,
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.1, 0.1, 0.0),
                Point3::new(2.0, 2.0, 0.0),
            ],
        );
        assert!(matches!(result, Err(SelectError::DegenerateLoop(2))));
    }

    #[test]
    fn empty_mesh_rejected() {
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Greedy);
        let result = stitcher.stitch(&SurfaceMesh::new(), &square_loop());
        assert!(matches!(result, Err(SelectError::EmptyMesh)));
    }

    #[test]
    fn stitcher_reuses_one_graph_across_loops() {
        let mesh = grid_mesh(4);
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);

        stitcher.stitch(&mesh, &square_loop()).unwrap();
        stitcher.stitch(&mesh, &square_loop()).unwrap();
        assert_eq!(stitcher.engine.graph().build_count(), 1);
    }

    #[test]
    fn greedy_walk_reaches_adjacent_target() {
        let mesh = grid_mesh(2);
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Greedy);
        stitcher.engine.ensure_graph(&mesh);

        let walk = greedy_walk(&mesh, stitcher.engine.graph(), 0, 4).unwrap();
        assert_eq!(walk.first(), Some(&0));
        assert_eq!(walk.last(), Some(&4));
    }
}
