//! Error types for region selection.

use surface_geodesic::GeodesicError;
use thiserror::Error;

/// Result type for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors that can occur stitching a loop or marking regions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SelectError {
    /// The mesh has no vertices.
    #[error("mesh is empty")]
    EmptyMesh,

    /// The selection loop resolves to fewer than three distinct vertices.
    #[error("selection loop needs at least 3 distinct vertices (got {0})")]
    DegenerateLoop(usize),

    /// A vertex index is out of range for the mesh.
    #[error("invalid vertex index: {index} (mesh has {vertex_count} vertices)")]
    InvalidVertex {
        /// The invalid index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The greedy edge walk ran out of unvisited neighbors.
    #[error("greedy edge walk stuck at vertex {at} while heading for {target}")]
    WalkStuck {
        /// Vertex where the walk was boxed in.
        at: u32,
        /// Vertex the walk was heading for.
        target: u32,
    },

    /// The flood-fill seed lies on the boundary loop itself.
    #[error("seed vertex {0} lies on the boundary loop")]
    SeedOnBoundary(u32),

    /// An underlying shortest-path failure.
    #[error(transparent)]
    Geodesic(#[from] GeodesicError),
}
