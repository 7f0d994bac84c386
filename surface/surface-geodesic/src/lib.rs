//! Graph-geodesic shortest paths on surface meshes.
//!
//! This crate implements single-source Dijkstra search over the edge graph
//! of a [`surface_types::SurfaceMesh`]:
//!
//! - [`DijkstraPathfinder`] — the search engine: cached adjacency graph,
//!   indexed heap with decrease-key, early termination, vertex repelling,
//!   and pluggable edge costs
//! - [`VertexHeap`] — the indexed binary min-heap driving the frontier
//! - [`CostGraph`] — the per-vertex neighbor-to-cost mapping, cached by
//!   mesh revision and refreshable in place when only cost parameters
//!   change
//! - [`EdgeCost`] / [`EuclideanCost`] — injectable cost strategies with a
//!   static (cached) and a dynamic (path-history-dependent) term
//! - [`GeodesicPath`] / [`WeightMap`] — traced polylines and
//!   cumulative-weight snapshots
//!
//! Paths follow mesh edges, so the geodesic distance is the edge-graph
//! approximation of the true surface distance; it converges on denser
//! meshes.
//!
//! # Example
//!
//! ```
//! use surface_geodesic::{DijkstraPathfinder, PathQuery};
//! use surface_types::{Cell, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! // A unit square split into two triangles sharing the 0-2 diagonal.
//! let mut mesh = SurfaceMesh::new();
//! mesh.add_point(Point3::new(0.0, 0.0, 0.0));
//! mesh.add_point(Point3::new(1.0, 0.0, 0.0));
//! mesh.add_point(Point3::new(1.0, 1.0, 0.0));
//! mesh.add_point(Point3::new(0.0, 1.0, 0.0));
//! mesh.add_cell(Cell::Triangle([0, 1, 2]));
//! mesh.add_cell(Cell::Triangle([0, 2, 3]));
//!
//! let mut finder = DijkstraPathfinder::new();
//! let path = finder
//!     .find_path(&mesh, &PathQuery::between(0, 2).with_stop_at_end(true))
//!     .unwrap();
//!
//! // The diagonal wins over the perimeter.
//! assert!((path.length() - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! # Concurrency
//!
//! The engine is single-threaded and non-reentrant. Searches on the same
//! instance serialize; parallel use requires independent instances, each
//! owning its own graph.
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for query, path, and
//!   weight types

#![doc(html_root_url = "https://docs.rs/surface-geodesic/0.7.0")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cost;
mod dijkstra;
mod error;
mod graph;
mod heap;
mod path;
mod query;
mod weights;

pub use cost::{EdgeCost, EuclideanCost};
pub use dijkstra::{DijkstraPathfinder, SearchStats};
pub use error::{GeodesicError, GeodesicResult};
pub use graph::CostGraph;
pub use heap::VertexHeap;
pub use path::GeodesicPath;
pub use query::PathQuery;
pub use weights::{UNREACHED_WEIGHT, WeightMap};
