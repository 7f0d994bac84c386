//! The surface mesh container.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A surface mesh: 3D points, heterogeneous cells, and optional per-vertex
/// scalars.
///
/// Fields are private; every mutator bumps a monotonic revision counter so
/// that consumers caching derived structures (adjacency graphs, locators)
/// can detect staleness with a single integer compare.
///
/// # Example
///
/// ```
/// use surface_types::{Cell, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// mesh.add_point(Point3::new(0.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(1.0, 0.0, 0.0));
/// mesh.add_point(Point3::new(0.5, 1.0, 0.0));
/// mesh.add_cell(Cell::Triangle([0, 1, 2]));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.cell_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex positions; the index into this array is the vertex id.
    points: Vec<Point3<f64>>,
    /// Cell connectivity.
    cells: Vec<Cell>,
    /// Optional per-vertex scalar data, parallel to `points`.
    scalars: Option<Vec<f64>>,
    /// Monotonic revision counter, bumped by every mutator.
    revision: u64,
}

impl SurfaceMesh {
    /// Creates a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            cells: Vec::new(),
            scalars: None,
            revision: 0,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, cell_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(vertex_count),
            cells: Vec::with_capacity(cell_count),
            scalars: None,
            revision: 0,
        }
    }

    /// Creates a mesh from points and cells.
    ///
    /// Cell vertex indices must be valid for `points`; out-of-range indices
    /// are a caller bug and surface as missing neighbors downstream.
    #[must_use]
    pub fn from_parts(points: Vec<Point3<f64>>, cells: Vec<Cell>) -> Self {
        Self {
            points,
            cells,
            scalars: None,
            revision: 0,
        }
    }

    /// Appends a point, returning its vertex id.
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; meshes beyond 4B vertices are unsupported
    pub fn add_point(&mut self, point: Point3<f64>) -> u32 {
        let id = self.points.len() as u32;
        self.points.push(point);
        self.revision += 1;
        id
    }

    /// Appends a cell.
    ///
    /// Vertex indices must be valid for the current point array.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
        self.revision += 1;
    }

    /// Attaches per-vertex scalar data.
    ///
    /// Returns `false` (and leaves the mesh unchanged) if the length does
    /// not match the vertex count.
    pub fn set_scalars(&mut self, scalars: Vec<f64>) -> bool {
        if scalars.len() != self.points.len() {
            return false;
        }
        self.scalars = Some(scalars);
        self.revision += 1;
        true
    }

    /// Bumps the revision counter without changing any data.
    ///
    /// Use after mutating shared state a consumer derives from, to force
    /// caches keyed on [`revision`](Self::revision) to rebuild.
    pub fn mark_modified(&mut self) {
        self.revision += 1;
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the position of a vertex, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn point(&self, vertex: u32) -> Option<Point3<f64>> {
        self.points.get(vertex as usize).copied()
    }

    /// Returns all vertex positions.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns a cell by index, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns all cells.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the scalar value of a vertex, or `None` when no scalars are
    /// attached or the index is out of range.
    #[inline]
    #[must_use]
    pub fn scalar(&self, vertex: u32) -> Option<f64> {
        self.scalars.as_ref()?.get(vertex as usize).copied()
    }

    /// Returns `true` if per-vertex scalars are attached.
    #[inline]
    #[must_use]
    pub const fn has_scalars(&self) -> bool {
        self.scalars.is_some()
    }

    /// Returns the current revision counter.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Finds the vertex nearest to a query point.
    ///
    /// Linear scan over all vertices; returns `None` only for an empty
    /// mesh.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; meshes beyond 4B vertices are unsupported
    pub fn nearest_vertex(&self, query: &Point3<f64>) -> Option<u32> {
        let mut best: Option<(u32, f64)> = None;
        for (id, point) in self.points.iter().enumerate() {
            let d2 = (point - query).norm_squared();
            if best.map_or(true, |(_, bd)| d2 < bd) {
                best = Some((id as u32, d2));
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_mesh() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        mesh.add_point(Point3::new(0.0, 0.0, 0.0));
        mesh.add_point(Point3::new(1.0, 0.0, 0.0));
        mesh.add_point(Point3::new(0.5, 1.0, 0.0));
        mesh.add_cell(Cell::Triangle([0, 1, 2]));
        mesh
    }

    #[test]
    fn empty_mesh() {
        let mesh = SurfaceMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.cell_count(), 0);
        assert_eq!(mesh.revision(), 0);
        assert!(mesh.nearest_vertex(&Point3::origin()).is_none());
    }

    #[test]
    fn revision_bumps_on_mutation() {
        let mut mesh = SurfaceMesh::new();
        let r0 = mesh.revision();
        mesh.add_point(Point3::origin());
        assert!(mesh.revision() > r0);

        let r1 = mesh.revision();
        mesh.add_cell(Cell::Points(vec![0]));
        assert!(mesh.revision() > r1);

        let r2 = mesh.revision();
        mesh.mark_modified();
        assert!(mesh.revision() > r2);
    }

    #[test]
    fn revision_stable_on_reads() {
        let mesh = triangle_mesh();
        let r = mesh.revision();
        let _ = mesh.point(0);
        let _ = mesh.nearest_vertex(&Point3::new(0.1, 0.1, 0.0));
        assert_eq!(mesh.revision(), r);
    }

    #[test]
    fn point_lookup() {
        let mesh = triangle_mesh();
        let p = mesh.point(1).unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert!(mesh.point(3).is_none());
    }

    #[test]
    fn scalars_length_checked() {
        let mut mesh = triangle_mesh();
        assert!(!mesh.set_scalars(vec![1.0, 2.0]));
        assert!(!mesh.has_scalars());
        assert!(mesh.scalar(0).is_none());

        assert!(mesh.set_scalars(vec![1.0, 2.0, 3.0]));
        assert!(mesh.has_scalars());
        assert_relative_eq!(mesh.scalar(2).unwrap(), 3.0);
        assert!(mesh.scalar(3).is_none());
    }

    #[test]
    fn nearest_vertex_picks_closest() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.nearest_vertex(&Point3::new(0.9, 0.1, 0.0)), Some(1));
        assert_eq!(mesh.nearest_vertex(&Point3::new(0.5, 2.0, 0.0)), Some(2));
    }

    #[test]
    fn from_parts_keeps_data() {
        let mesh = SurfaceMesh::from_parts(
            vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
            vec![Cell::Line(vec![0, 1])],
        );
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.cell_count(), 1);
    }
}
