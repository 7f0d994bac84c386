//! Image-intensity cost variant of the geodesic path engine.
//!
//! Treats a 2D intensity image as an implicit triangulated mesh and runs
//! the `surface-geodesic` engine over it with an intensity + edge-length +
//! curvature cost strategy:
//!
//! - [`ImageGrid`] — the intensity field, its pixel/world coordinate
//!   mapping, and the implicit mesh (four triangles per 2×2 pixel block,
//!   so both block diagonals are traversable edges)
//! - [`ImageEdgeCost`] — the cost strategy; weight changes refresh cached
//!   edge costs in place without rebuilding topology
//! - [`ImagePathFinder`] — grid, derived mesh, and engine bundled behind a
//!   pixel-coordinate API
//!
//! # Example
//!
//! ```
//! use image_geodesic::{ImageGrid, ImagePathFinder};
//!
//! // Bright field with a dark corridor along the bottom row.
//! let grid = ImageGrid::from_fn(5, 4, 1.0, |_, j| if j == 0 { 0.0 } else { 9.0 }).unwrap();
//!
//! let mut finder = ImagePathFinder::new(grid);
//! let path = finder.find_path_between((0, 0), (4, 0)).unwrap();
//!
//! // The path hugs the cheap corridor.
//! assert_eq!(path.len(), 5);
//! ```

#![doc(html_root_url = "https://docs.rs/image-geodesic/0.7.0")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cost;
mod error;
mod finder;
mod grid;

pub use cost::ImageEdgeCost;
pub use error::{ImageError, ImageResult};
pub use finder::ImagePathFinder;
pub use grid::ImageGrid;
