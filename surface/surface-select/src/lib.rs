//! Region selection on surface meshes.
//!
//! Converts a floating loop of 3D points into a closed walk over actual
//! mesh edges, then marks the regions on either side of it:
//!
//! - [`LoopStitcher`] — resolves loop points to mesh vertices and joins
//!   consecutive anchors with one of two interchangeable edge-search
//!   strategies ([`EdgeSearchMode::Greedy`] or [`EdgeSearchMode::Geodesic`],
//!   the latter driving the `surface-geodesic` engine)
//! - [`select_region`] — breadth-first topological-distance flood fill
//!   with signed side labels ([`RegionSelection`])
//!
//! # Example
//!
//! ```
//! use surface_select::{select_region, EdgeSearchMode, LoopStitcher};
//! use surface_types::{Cell, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! // A 5x5 vertex grid of triangulated unit squares.
//! let mut mesh = SurfaceMesh::new();
//! for j in 0..5 {
//!     for i in 0..5 {
//!         mesh.add_point(Point3::new(f64::from(i), f64::from(j), 0.0));
//!     }
//! }
//! for j in 0..4u32 {
//!     for i in 0..4u32 {
//!         let v00 = j * 5 + i;
//!         mesh.add_cell(Cell::Triangle([v00, v00 + 1, v00 + 6]));
//!         mesh.add_cell(Cell::Triangle([v00, v00 + 6, v00 + 5]));
//!     }
//! }
//!
//! // Stitch a ring around the center vertex.
//! let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);
//! let stitched = stitcher
//!     .stitch(
//!         &mesh,
//!         &[
//!             Point3::new(1.0, 1.0, 0.0),
//!             Point3::new(3.0, 1.0, 0.0),
//!             Point3::new(3.0, 3.0, 0.0),
//!             Point3::new(1.0, 3.0, 0.0),
//!         ],
//!     )
//!     .unwrap();
//! assert!(stitched.is_closed());
//!
//! // The ring isolates the center vertex from the rest of the grid.
//! let boundary: Vec<u32> = stitched.vertex_set().into_iter().collect();
//! let region = select_region(&mesh, &boundary, 12).unwrap();
//! assert_eq!(region.inside_count(), 1);
//! assert_eq!(region.outside_count(), 16);
//! ```

#![doc(html_root_url = "https://docs.rs/surface-select/0.7.0")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod fill;
mod stitch;

pub use error::{SelectError, SelectResult};
pub use fill::{RegionSelection, select_region};
pub use stitch::{EdgeSearchMode, LoopStitcher, StitchedLoop};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use nalgebra::Point3;
    use surface_types::{Cell, SurfaceMesh};

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

    #[test]
    fn stitched_ring_separates_center_from_rim() {
        let mesh = grid_mesh(4);
        let mut stitcher = LoopStitcher::new(EdgeSearchMode::Geodesic);
        let stitched = stitcher
            .stitch(
                &mesh,
                &[
                    Point3::new(1.0, 1.0, 0.0),
                    Point3::new(3.0, 1.0, 0.0),
                    Point3::new(3.0, 3.0, 0.0),
                    Point3::new(1.0, 3.0, 0.0),
                ],
            )
            .unwrap();

        let boundary: Vec<u32> = stitched.vertex_set().into_iter().collect();
        assert_eq!(boundary.len(), 8);

        // Seeded at the center vertex of the 5x5 grid.
        let region = select_region(&mesh, &boundary, 12).unwrap();
        assert!(region.is_boundary(6));
        assert_eq!(region.distance(12), Some(1));
        assert_eq!(region.inside_count(), 1);
        // 25 vertices total: 1 inside, 8 boundary, 16 outside.
        assert_eq!(region.outside_count(), 16);
        assert_eq!(region.distance(0), Some(-1));
    }

    #[test]
    fn both_stitch_modes_feed_the_fill() {
        let mesh = grid_mesh(4);
        let loop_points = [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(3.0, 3.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
        ];

        for mode in [EdgeSearchMode::Greedy, EdgeSearchMode::Geodesic] {
            let mut stitcher = LoopStitcher::new(mode);
            let stitched = stitcher.stitch(&mesh, &loop_points).unwrap();
            let boundary: Vec<u32> = stitched.vertex_set().into_iter().collect();
            let region = select_region(&mesh, &boundary, 12).unwrap();
            assert_eq!(region.inside_count(), 1);
        }
    }
}
