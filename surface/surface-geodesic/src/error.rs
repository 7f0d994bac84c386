//! Error types for geodesic path computation.

use thiserror::Error;

/// Result type for geodesic path operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;

/// Errors that can occur during shortest-path search and tracing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeodesicError {
    /// The mesh has no vertices.
    #[error("mesh is empty")]
    EmptyMesh,

    /// A start or end vertex index is out of range for the mesh.
    #[error("invalid vertex index: {index} (mesh has {vertex_count} vertices)")]
    InvalidVertex {
        /// The invalid index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// No path exists between the start and end vertices.
    ///
    /// Reported by the tracer when the predecessor chain from the end
    /// vertex does not terminate at the start vertex, which happens when
    /// the end vertex lies in a different connected component.
    #[error("no path found from vertex {start} to vertex {end}")]
    NoPathFound {
        /// The start vertex of the failed search.
        start: u32,
        /// The end vertex of the failed search.
        end: u32,
    },

    /// A path was requested before any search was computed.
    #[error("no shortest-path search has been computed")]
    NotComputed,
}

impl GeodesicError {
    /// Returns `true` if this is a "no path found" error.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_geodesic::GeodesicError;
    ///
    /// let error = GeodesicError::NoPathFound { start: 0, end: 7 };
    /// assert!(error.is_no_path_found());
    /// ```
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_display() {
        let error = GeodesicError::NoPathFound { start: 2, end: 9 };
        let msg = error.to_string();
        assert!(msg.contains("no path found"));
        assert!(msg.contains('2'));
        assert!(msg.contains('9'));
        assert!(error.is_no_path_found());
    }

    #[test]
    fn invalid_vertex_display() {
        let error = GeodesicError::InvalidVertex {
            index: 12,
            vertex_count: 4,
        };
        let msg = error.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains('4'));
        assert!(!error.is_no_path_found());
    }

    #[test]
    fn empty_mesh_display() {
        assert!(GeodesicError::EmptyMesh.to_string().contains("empty"));
    }

    #[test]
    fn not_computed_display() {
        assert!(GeodesicError::NotComputed.to_string().contains("no shortest-path"));
    }
}
