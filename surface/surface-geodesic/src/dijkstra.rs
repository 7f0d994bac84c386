//! Dijkstra shortest-path engine.
//!
//! Implements single-source shortest paths over the mesh edge graph with
//! an indexed heap (decrease-key instead of duplicate queue entries),
//! optional early termination, vertex repelling, and a pluggable edge-cost
//! strategy whose dynamic term may depend on the path history.

use std::time::{Duration, Instant};

use surface_types::SurfaceMesh;
use tracing::{debug, warn};

use crate::cost::{EdgeCost, EuclideanCost};
use crate::error::{GeodesicError, GeodesicResult};
use crate::graph::CostGraph;
use crate::heap::VertexHeap;
use crate::path::GeodesicPath;
use crate::query::PathQuery;
use crate::weights::{UNREACHED_WEIGHT, WeightMap};

/// Effective incoming edge weight of a repelled vertex.
const BLOCKED_WEIGHT: f64 = f64::MAX;

/// What must be rebuilt before the next search can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rebuild {
    /// Graph and costs match the mesh and cost parameters.
    Clean,
    /// Topology is valid but cached static costs are stale.
    Costs,
    /// The mesh changed; topology and costs must be rebuilt.
    Topology,
}

/// Counters describing one completed search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    closed: usize,
    relaxations: usize,
    elapsed: Duration,
}

impl SearchStats {
    /// Returns the number of vertices whose shortest path was finalized.
    #[must_use]
    pub const fn closed(&self) -> usize {
        self.closed
    }

    /// Returns the number of successful relaxations (path improvements).
    #[must_use]
    pub const fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Returns the wall-clock duration of the search loop.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Shortest-path engine over a mesh edge graph.
///
/// The engine owns its adjacency graph, heap, and per-search arrays. The
/// graph is built from the mesh on first use and reused until the mesh
/// revision changes; per-search state is cleared (not reallocated) at
/// every [`compute`](Self::compute).
///
/// One engine serves one logical search stream: repeated searches on the
/// same mesh reuse the cached graph, and the results of the latest search
/// stay readable until the next one.
///
/// # Example
///
/// ```
/// use surface_geodesic::{DijkstraPathfinder, PathQuery};
/// use surface_types::{Cell, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.add_point(Point3::new(0.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(1.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(1.0, 1.0, 0.0));
/// mesh.add_cell(Cell::Triangle([0, 1, 2]));
///
/// let mut finder = DijkstraPathfinder::new();
/// let path = finder
///     .find_path(&mesh, &PathQuery::between(0, 2).with_stop_at_end(true))
///     .unwrap();
///
/// // Traced end → start.
/// assert_eq!(path.vertices(), &[2, 0]);
/// ```
#[derive(Debug)]
pub struct DijkstraPathfinder<C: EdgeCost = EuclideanCost> {
    cost: C,
    graph: CostGraph,
    heap: VertexHeap,
    /// Best known path weight per vertex; [`UNREACHED_WEIGHT`] when unset.
    cumulative: Vec<f64>,
    /// Previous vertex on the best known path.
    predecessor: Vec<Option<u32>>,
    /// Frontier membership.
    open: Vec<bool>,
    /// Finalized vertices; never re-examined.
    closed: Vec<bool>,
    /// Repelled vertices, treated as maximal incoming cost.
    blocked: Vec<bool>,
    /// Endpoints of the last computed search.
    endpoints: Option<(u32, u32)>,
    stats: SearchStats,
}

impl DijkstraPathfinder<EuclideanCost> {
    /// Creates an engine with the plain Euclidean edge cost.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cost(EuclideanCost::new())
    }
}

impl Default for DijkstraPathfinder<EuclideanCost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: EdgeCost> DijkstraPathfinder<C> {
    /// Creates an engine with an injected edge-cost strategy.
    #[must_use]
    pub fn with_cost(cost: C) -> Self {
        Self {
            cost,
            graph: CostGraph::new(),
            heap: VertexHeap::with_capacity(0),
            cumulative: Vec::new(),
            predecessor: Vec::new(),
            open: Vec::new(),
            closed: Vec::new(),
            blocked: Vec::new(),
            endpoints: None,
            stats: SearchStats::default(),
        }
    }

    /// Returns the edge-cost strategy.
    #[must_use]
    pub const fn cost(&self) -> &C {
        &self.cost
    }

    /// Returns the edge-cost strategy mutably.
    ///
    /// Strategies flag their own parameter changes; the engine refreshes
    /// cached costs at the next search entry.
    pub fn cost_mut(&mut self) -> &mut C {
        &mut self.cost
    }

    /// Returns the cached adjacency graph.
    #[must_use]
    pub const fn graph(&self) -> &CostGraph {
        &self.graph
    }

    /// Returns counters for the last search.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Brings the cached graph up to date with the mesh and cost
    /// parameters.
    ///
    /// Called implicitly by [`compute`](Self::compute); calling it again
    /// with an unchanged mesh is a no-op, observable through
    /// [`CostGraph::build_count`].
    pub fn ensure_graph(&mut self, mesh: &SurfaceMesh) {
        match self.rebuild_needed(mesh) {
            Rebuild::Topology => {
                self.graph.build(mesh, &self.cost);
                self.cost.clear_costs_dirty();
                self.resize_state(mesh.vertex_count());
            }
            Rebuild::Costs => {
                self.graph.refresh_costs(mesh, &self.cost);
                self.cost.clear_costs_dirty();
            }
            Rebuild::Clean => {}
        }
    }

    /// Runs the shortest-path search described by `query`.
    ///
    /// With `stop_at_end` set, the search halts as soon as the end vertex
    /// is finalized; otherwise it computes shortest paths from the start
    /// to every reachable vertex. Results stay readable through
    /// [`trace_path`](Self::trace_path), [`cumulative_weights`](Self::cumulative_weights),
    /// and [`stats`](Self::stats) until the next call.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has no vertices or an endpoint index
    /// is out of range. An unreachable end vertex is not an error here;
    /// it surfaces when tracing.
    pub fn compute(&mut self, mesh: &SurfaceMesh, query: &PathQuery) -> GeodesicResult<()> {
        let vertex_count = mesh.vertex_count();
        if vertex_count == 0 {
            return Err(GeodesicError::EmptyMesh);
        }
        for index in [query.start(), query.end()] {
            if index as usize >= vertex_count {
                return Err(GeodesicError::InvalidVertex {
                    index,
                    vertex_count,
                });
            }
        }

        self.ensure_graph(mesh);
        self.reset_state();

        let start = query.start();
        let end = query.end();

        for point in query.repel_points() {
            match mesh.nearest_vertex(point) {
                None => warn!("repel point did not resolve to a mesh vertex; skipped"),
                Some(v) if v == start || v == end => {
                    debug!(vertex = v, "repel point resolves to an endpoint; skipped");
                }
                Some(v) => self.blocked[v as usize] = true,
            }
        }

        let started = Instant::now();

        self.cumulative[start as usize] = 0.0;
        self.heap.insert(start, &self.cumulative);
        self.open[start as usize] = true;

        while let Some(u) = self.heap.extract_min(&self.cumulative) {
            let ui = u as usize;
            self.open[ui] = false;
            self.closed[ui] = true;
            self.stats.closed += 1;

            if u == end && query.stop_at_end() {
                break;
            }

            let u_weight = self.cumulative[ui];
            let prev = self.predecessor[ui];

            for (v, static_cost) in self.graph.neighbors(u) {
                let vi = v as usize;
                if self.closed[vi] {
                    continue;
                }
                let weight = if self.blocked[vi] {
                    BLOCKED_WEIGHT
                } else {
                    static_cost + self.cost.dynamic_cost(mesh, u, v, prev)
                };
                if self.open[vi] {
                    // Relax: adopt the new path only on strict improvement.
                    let candidate = u_weight + weight;
                    if candidate < self.cumulative[vi] {
                        self.cumulative[vi] = candidate;
                        self.predecessor[vi] = Some(u);
                        self.heap.decrease_key(v, &self.cumulative);
                        self.stats.relaxations += 1;
                    }
                } else {
                    self.open[vi] = true;
                    self.cumulative[vi] = u_weight + weight;
                    self.predecessor[vi] = Some(u);
                    self.heap.insert(v, &self.cumulative);
                }
            }
        }

        self.stats.elapsed = started.elapsed();
        self.endpoints = Some((start, end));
        debug!(
            closed = self.stats.closed,
            relaxations = self.stats.relaxations,
            "shortest-path search finished"
        );
        Ok(())
    }

    /// Reconstructs the path of the last search by walking predecessors
    /// from the end vertex back to the start vertex.
    ///
    /// The result is in end → start order, both endpoints included.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesicError::NotComputed`] before any search, and
    /// [`GeodesicError::NoPathFound`] when the end vertex was never
    /// reached or the predecessor chain does not terminate at the start
    /// vertex.
    pub fn trace_path(&self, mesh: &SurfaceMesh) -> GeodesicResult<GeodesicPath> {
        let (start, end) = self.endpoints.ok_or(GeodesicError::NotComputed)?;

        let reached = self
            .cumulative
            .get(end as usize)
            .is_some_and(|&w| w >= 0.0);
        if !reached {
            return Err(GeodesicError::NoPathFound { start, end });
        }

        let mut path = GeodesicPath::new();
        let mut v = end;
        loop {
            let point = mesh.point(v).ok_or(GeodesicError::InvalidVertex {
                index: v,
                vertex_count: mesh.vertex_count(),
            })?;
            path.push(point, v);
            if v == start {
                break;
            }
            match self.predecessor[v as usize] {
                Some(p) => v = p,
                // Broken chain: the end vertex lies in another component.
                None => return Err(GeodesicError::NoPathFound { start, end }),
            }
        }
        Ok(path)
    }

    /// Runs the search and traces the resulting path in one call.
    ///
    /// # Errors
    ///
    /// Propagates every error of [`compute`](Self::compute) and
    /// [`trace_path`](Self::trace_path).
    pub fn find_path(
        &mut self,
        mesh: &SurfaceMesh,
        query: &PathQuery,
    ) -> GeodesicResult<GeodesicPath> {
        self.compute(mesh, query)?;
        self.trace_path(mesh)
    }

    /// Returns a snapshot copy of the per-vertex cumulative weights of the
    /// last search.
    #[must_use]
    pub fn cumulative_weights(&self) -> WeightMap {
        WeightMap::from_weights(self.cumulative.clone())
    }

    fn rebuild_needed(&self, mesh: &SurfaceMesh) -> Rebuild {
        if !self.graph.is_current(mesh) {
            Rebuild::Topology
        } else if self.cost.costs_dirty() {
            Rebuild::Costs
        } else {
            Rebuild::Clean
        }
    }

    /// Sizes per-search arrays to the vertex count.
    fn resize_state(&mut self, vertex_count: usize) {
        self.heap = VertexHeap::with_capacity(vertex_count);
        self.cumulative.resize(vertex_count, UNREACHED_WEIGHT);
        self.predecessor.resize(vertex_count, None);
        self.open.resize(vertex_count, false);
        self.closed.resize(vertex_count, false);
        self.blocked.resize(vertex_count, false);
    }

    /// Clears per-search state without reallocating.
    fn reset_state(&mut self) {
        self.heap.reset();
        self.cumulative.fill(UNREACHED_WEIGHT);
        self.predecessor.fill(None);
        self.open.fill(false);
        self.closed.fill(false);
        self.blocked.fill(false);
        self.stats = SearchStats::default();
        self.endpoints = None;
    }
}
