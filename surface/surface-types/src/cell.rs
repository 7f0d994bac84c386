//! Cell connectivity types.
//!
//! A [`Cell`] is an ordered list of vertex indices together with a
//! connectivity kind. Path algorithms walk the boundary of triangle and
//! polygon cells cyclically and line cells end to end; strip and point
//! cells are carried for completeness and skipped by edge-based consumers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The connectivity kind of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellKind {
    /// A single triangle.
    Triangle,
    /// A closed polygon with three or more vertices.
    Polygon,
    /// An open polyline with two or more vertices.
    Line,
    /// A triangle strip.
    Strip,
    /// A loose set of points.
    Points,
}

/// A mesh cell: ordered vertex indices with a connectivity kind.
///
/// # Example
///
/// ```
/// use surface_types::{Cell, CellKind};
///
/// let tri = Cell::Triangle([0, 1, 2]);
/// assert_eq!(tri.kind(), CellKind::Triangle);
/// assert_eq!(tri.vertex_ids(), &[0, 1, 2]);
/// assert!(tri.is_closed());
///
/// let line = Cell::Line(vec![4, 5, 6]);
/// assert!(!line.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// A single triangle.
    Triangle([u32; 3]),
    /// A closed polygon; the last vertex connects back to the first.
    Polygon(Vec<u32>),
    /// An open polyline.
    Line(Vec<u32>),
    /// A triangle strip.
    Strip(Vec<u32>),
    /// A loose set of points with no edges.
    Points(Vec<u32>),
}

impl Cell {
    /// Returns the connectivity kind of this cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        match self {
            Self::Triangle(_) => CellKind::Triangle,
            Self::Polygon(_) => CellKind::Polygon,
            Self::Line(_) => CellKind::Line,
            Self::Strip(_) => CellKind::Strip,
            Self::Points(_) => CellKind::Points,
        }
    }

    /// Returns the ordered vertex indices of this cell.
    #[inline]
    #[must_use]
    pub fn vertex_ids(&self) -> &[u32] {
        match self {
            Self::Triangle(ids) => ids,
            Self::Polygon(ids) | Self::Line(ids) | Self::Strip(ids) | Self::Points(ids) => ids,
        }
    }

    /// Returns the number of vertices referenced by this cell.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids().len()
    }

    /// Returns `true` if the cell boundary wraps around (triangles and
    /// polygons), `false` for open connectivity.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Triangle(_) | Self::Polygon(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Cell::Triangle([0, 1, 2]).kind(), CellKind::Triangle);
        assert_eq!(Cell::Polygon(vec![0, 1, 2, 3]).kind(), CellKind::Polygon);
        assert_eq!(Cell::Line(vec![0, 1]).kind(), CellKind::Line);
        assert_eq!(Cell::Strip(vec![0, 1, 2, 3]).kind(), CellKind::Strip);
        assert_eq!(Cell::Points(vec![7]).kind(), CellKind::Points);
    }

    #[test]
    fn vertex_ids_ordered() {
        let cell = Cell::Polygon(vec![3, 1, 4, 1, 5]);
        assert_eq!(cell.vertex_ids(), &[3, 1, 4, 1, 5]);
        assert_eq!(cell.vertex_count(), 5);
    }

    #[test]
    fn closed_cells() {
        assert!(Cell::Triangle([0, 1, 2]).is_closed());
        assert!(Cell::Polygon(vec![0, 1, 2, 3]).is_closed());
        assert!(!Cell::Line(vec![0, 1, 2]).is_closed());
        assert!(!Cell::Strip(vec![0, 1, 2, 3]).is_closed());
        assert!(!Cell::Points(vec![0]).is_closed());
    }
}
