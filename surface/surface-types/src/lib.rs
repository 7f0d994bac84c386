//! Surface mesh types for geodesic path computation.
//!
//! This crate provides the mesh collaborator consumed by the path crates:
//!
//! - [`SurfaceMesh`] — vertex positions, heterogeneous cells, optional
//!   per-vertex scalars, a monotonic revision counter, and a nearest-vertex
//!   point-location query
//! - [`Cell`] / [`CellKind`] — triangle, polygon, line, strip, and point
//!   connectivity
//!
//! # Example
//!
//! ```
//! use surface_types::{Cell, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! // A unit square split into two triangles
//! let mut mesh = SurfaceMesh::new();
//! mesh.add_point(Point3::new(0.0, 0.0, 0.0));
//! mesh.add_point(Point3::new(1.0, 0.0, 0.0));
//! mesh.add_point(Point3::new(1.0, 1.0, 0.0));
//! mesh.add_point(Point3::new(0.0, 1.0, 0.0));
//! mesh.add_cell(Cell::Triangle([0, 1, 2]));
//! mesh.add_cell(Cell::Triangle([0, 2, 3]));
//!
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.nearest_vertex(&Point3::new(0.9, 0.9, 0.0)), Some(2));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/surface-types/0.7.0")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cell;
mod mesh;

pub use cell::{Cell, CellKind};
pub use mesh::SurfaceMesh;

// Re-exported so downstream crates share one linear-algebra vocabulary.
pub use nalgebra::{Point3, Vector3};
