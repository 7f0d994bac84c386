//! Traced path representation.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered polyline over mesh vertices produced by the path tracer.
///
/// Points and vertex ids are parallel sequences in trace order, which is
/// end → start; call [`reversed`](Self::reversed) for start → end order.
///
/// # Example
///
/// ```
/// use surface_geodesic::GeodesicPath;
/// use nalgebra::Point3;
///
/// let path = GeodesicPath::from_parts(
///     vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)],
///     vec![1, 0],
/// );
/// assert_eq!(path.len(), 2);
/// assert!((path.length() - 1.0).abs() < 1e-12);
/// assert_eq!(path.reversed().vertices(), &[0, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodesicPath {
    /// 3D positions in trace order.
    points: Vec<Point3<f64>>,
    /// Mesh vertex ids, parallel to `points`.
    vertices: Vec<u32>,
}

impl GeodesicPath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Creates a path from parallel point and vertex-id sequences.
    ///
    /// The sequences must have equal length.
    #[must_use]
    pub fn from_parts(points: Vec<Point3<f64>>, vertices: Vec<u32>) -> Self {
        debug_assert_eq!(points.len(), vertices.len());
        Self { points, vertices }
    }

    /// Appends one vertex to the path.
    pub(crate) fn push(&mut self, point: Point3<f64>, vertex: u32) {
        self.points.push(point);
        self.vertices.push(vertex);
    }

    /// Returns the number of vertices on the path.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the 3D positions in trace order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns the mesh vertex ids in trace order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Returns the total polyline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }

    /// Iterates over the polyline segments as point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns the same path in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        let mut vertices = self.vertices.clone();
        points.reverse();
        vertices.reverse();
        Self { points, vertices }
    }
}
