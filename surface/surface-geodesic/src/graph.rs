//! Edge-cost adjacency graph derived from mesh connectivity.

use hashbrown::HashMap;
use surface_types::{Cell, SurfaceMesh};
use tracing::debug;

use crate::cost::EdgeCost;

/// Per-vertex neighbor-to-cost mapping built from mesh cells.
///
/// The graph is undirected in topology (an edge u–v produces entries in
/// both directions) but each direction's cost is computed independently,
/// so costs may be asymmetric. Builds are stamped with the mesh revision
/// and skipped while the mesh is unchanged.
///
/// Triangle and polygon cells contribute their boundary cycle, line cells
/// their consecutive segments; strip and point cells carry no path edges
/// and are skipped.
#[derive(Debug, Clone, Default)]
pub struct CostGraph {
    /// `edges[v]` maps each neighbor of v to the cost of the edge v → n.
    edges: Vec<HashMap<u32, f64>>,
    /// Mesh revision this graph was built from, if any.
    built_revision: Option<u64>,
    /// Number of full topology builds performed.
    build_count: usize,
}

impl CostGraph {
    /// Creates an empty, unbuilt graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the graph matches the mesh's current revision.
    #[must_use]
    pub fn is_current(&self, mesh: &SurfaceMesh) -> bool {
        self.built_revision == Some(mesh.revision()) && self.edges.len() == mesh.vertex_count()
    }

    /// Returns the mesh revision of the last build, if any.
    #[must_use]
    pub const fn built_revision(&self) -> Option<u64> {
        self.built_revision
    }

    /// Returns how many full topology builds have run.
    #[must_use]
    pub const fn build_count(&self) -> usize {
        self.build_count
    }

    /// Returns the number of vertices the graph was sized for.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        // Each undirected edge is stored once per direction.
        self.edges.iter().map(HashMap::len).sum::<usize>() / 2
    }

    /// Returns `true` if the graph holds no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over `(neighbor, cost)` pairs of a vertex.
    pub fn neighbors(&self, vertex: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.edges
            .get(vertex as usize)
            .into_iter()
            .flatten()
            .map(|(&n, &c)| (n, c))
    }

    /// Returns the cached cost of the directed edge `from → to`.
    #[must_use]
    pub fn edge_cost(&self, from: u32, to: u32) -> Option<f64> {
        self.edges.get(from as usize)?.get(&to).copied()
    }

    /// Rebuilds topology and costs from the mesh, stamping its revision.
    pub fn build<C: EdgeCost>(&mut self, mesh: &SurfaceMesh, cost: &C) {
        let vertex_count = mesh.vertex_count();
        self.edges.clear();
        self.edges.resize_with(vertex_count, HashMap::new);

        for cell in mesh.cells() {
            match cell {
                Cell::Triangle(ids) => self.link_cycle(mesh, cost, ids),
                Cell::Polygon(ids) => self.link_cycle(mesh, cost, ids),
                Cell::Line(ids) => {
                    for pair in ids.windows(2) {
                        self.link(mesh, cost, pair[0], pair[1]);
                    }
                }
                // Strips and point clouds carry no path edges.
                Cell::Strip(_) | Cell::Points(_) => {}
            }
        }

        self.built_revision = Some(mesh.revision());
        self.build_count += 1;
        debug!(
            vertices = vertex_count,
            edges = self.edge_count(),
            build = self.build_count,
            "built edge cost graph"
        );
    }

    /// Recomputes every cached cost in place, preserving topology.
    ///
    /// O(E) over the existing adjacency; used when only cost parameters
    /// changed and the mesh itself did not.
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; meshes beyond 4B vertices are unsupported
    pub fn refresh_costs<C: EdgeCost>(&mut self, mesh: &SurfaceMesh, cost: &C) {
        for (from, neighbors) in self.edges.iter_mut().enumerate() {
            let from = from as u32;
            for (&to, value) in neighbors.iter_mut() {
                *value = cost.static_cost(mesh, from, to);
            }
        }
        debug!(edges = self.edge_count(), "refreshed edge costs in place");
    }

    /// Links each consecutive vertex pair of a closed boundary cycle.
    fn link_cycle<C: EdgeCost>(&mut self, mesh: &SurfaceMesh, cost: &C, ids: &[u32]) {
        if ids.len() < 2 {
            return;
        }
        for i in 0..ids.len() {
            let u = ids[i];
            let v = ids[(i + 1) % ids.len()];
            self.link(mesh, cost, u, v);
        }
    }

    /// Inserts both directions of an edge, each computed independently.
    ///
    /// Idempotent: a direction already present is never recomputed.
    fn link<C: EdgeCost>(&mut self, mesh: &SurfaceMesh, cost: &C, u: u32, v: u32) {
        if u == v {
            return;
        }
        let (ui, vi) = (u as usize, v as usize);
        if ui >= self.edges.len() || vi >= self.edges.len() {
            return;
        }
        if !self.edges[ui].contains_key(&v) {
            let c = cost.static_cost(mesh, u, v);
            self.edges[ui].insert(v, c);
        }
        if !self.edges[vi].contains_key(&u) {
            let c = cost.static_cost(mesh, v, u);
            self.edges[vi].insert(u, c);
        }
    }
}
