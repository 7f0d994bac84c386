//! Image path finder: grid, derived mesh, and engine in one place.

use surface_geodesic::{DijkstraPathfinder, GeodesicPath, PathQuery, WeightMap};
use surface_types::SurfaceMesh;
use tracing::debug;

use crate::cost::ImageEdgeCost;
use crate::error::{ImageError, ImageResult};
use crate::grid::ImageGrid;

/// Shortest-path finder over an image intensity field.
///
/// Owns the grid, its derived mesh, and a [`DijkstraPathfinder`] configured
/// with the [`ImageEdgeCost`] strategy. Weight changes between searches
/// refresh cached edge costs in place; the mesh topology is built once.
///
/// # Example
///
/// ```
/// use image_geodesic::{ImageGrid, ImagePathFinder};
///
/// // A dark corridor along the bottom row of a bright image.
/// let grid = ImageGrid::from_fn(4, 3, 1.0, |_, j| if j == 0 { 0.0 } else { 8.0 }).unwrap();
/// let mut finder = ImagePathFinder::new(grid);
///
/// let path = finder.find_path_between((0, 0), (3, 0)).unwrap();
/// assert_eq!(path.vertices(), &[3, 2, 1, 0]);
/// ```
#[derive(Debug)]
pub struct ImagePathFinder {
    grid: ImageGrid,
    mesh: SurfaceMesh,
    engine: DijkstraPathfinder<ImageEdgeCost>,
}

impl ImagePathFinder {
    /// Creates a finder for an image grid.
    #[must_use]
    pub fn new(grid: ImageGrid) -> Self {
        let mesh = grid.to_mesh();
        let engine = DijkstraPathfinder::with_cost(ImageEdgeCost::new(grid.spacing()));
        debug!(
            width = grid.width(),
            height = grid.height(),
            "image path finder ready"
        );
        Self { grid, mesh, engine }
    }

    /// Returns the image grid.
    #[must_use]
    pub const fn grid(&self) -> &ImageGrid {
        &self.grid
    }

    /// Returns the derived mesh.
    #[must_use]
    pub const fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Returns the underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &DijkstraPathfinder<ImageEdgeCost> {
        &self.engine
    }

    /// Returns the intensity blend weight.
    #[must_use]
    pub fn image_weight(&self) -> f64 {
        self.engine.cost().image_weight()
    }

    /// Returns the edge-length weight.
    #[must_use]
    pub fn edge_length_weight(&self) -> f64 {
        self.engine.cost().edge_length_weight()
    }

    /// Returns the curvature penalty weight.
    #[must_use]
    pub fn curvature_weight(&self) -> f64 {
        self.engine.cost().curvature_weight()
    }

    /// Sets the intensity blend weight, clamped to `[0, 1]`.
    pub fn set_image_weight(&mut self, weight: f64) {
        self.engine.cost_mut().set_image_weight(weight);
    }

    /// Sets the edge-length weight, clamped to `[0, 1]`.
    pub fn set_edge_length_weight(&mut self, weight: f64) {
        self.engine.cost_mut().set_edge_length_weight(weight);
    }

    /// Sets the curvature penalty weight, clamped to `[0, 1]`.
    pub fn set_curvature_weight(&mut self, weight: f64) {
        self.engine.cost_mut().set_curvature_weight(weight);
    }

    /// Runs a search described by a vertex-level query.
    ///
    /// # Errors
    ///
    /// Propagates engine failures (empty grid, invalid vertex, no path).
    pub fn find_path(&mut self, query: &PathQuery) -> ImageResult<GeodesicPath> {
        Ok(self.engine.find_path(&self.mesh, query)?)
    }

    /// Finds a path between two pixels, stopping once the end is reached.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelOutOfRange`] for coordinates outside the
    /// grid, and propagates engine failures.
    pub fn find_path_between(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> ImageResult<GeodesicPath> {
        let start = self.resolve_pixel(from)?;
        let end = self.resolve_pixel(to)?;
        let query = PathQuery::between(start, end).with_stop_at_end(true);
        self.find_path(&query)
    }

    /// Returns a snapshot of the last search's cumulative weights.
    #[must_use]
    pub fn cumulative_weights(&self) -> WeightMap {
        self.engine.cumulative_weights()
    }

    fn resolve_pixel(&self, (i, j): (usize, usize)) -> ImageResult<u32> {
        self.grid
            .vertex_at(i, j)
            .ok_or(ImageError::PixelOutOfRange {
                i,
                j,
                width: self.grid.width(),
                height: self.grid.height(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 3x3 grid with a zero-intensity corridor along the bottom row.
    fn corridor_finder() -> ImagePathFinder {
        let grid =
            ImageGrid::from_fn(3, 3, 1.0, |_, j| if j == 0 { 0.0 } else { 10.0 }).unwrap();
        ImagePathFinder::new(grid)
    }

    #[test]
    fn path_follows_cheap_intensities() {
        let mut finder = corridor_finder();
        let path = finder.find_path_between((0, 0), (2, 0)).unwrap();

        // Leaving a zero-intensity pixel is free, so the corridor wins.
        assert_eq!(path.vertices(), &[2, 1, 0]);
        assert_relative_eq!(finder.cumulative_weights().weight(2), 0.0);
    }

    #[test]
    fn out_of_range_pixel_rejected() {
        let mut finder = corridor_finder();
        let result = finder.find_path_between((0, 0), (5, 0));
        assert!(matches!(
            result,
            Err(ImageError::PixelOutOfRange { i: 5, .. })
        ));
    }

    #[test]
    fn weight_change_preserves_topology() {
        let mut finder = corridor_finder();
        finder.find_path_between((0, 0), (2, 2)).unwrap();

        let edges_before = finder.engine().graph().edge_count();
        let cost_before = finder.engine().graph().edge_cost(0, 1).unwrap();

        finder.set_edge_length_weight(0.5);
        finder.find_path_between((0, 0), (2, 2)).unwrap();

        // Same adjacency entries, refreshed cost values, no rebuild.
        assert_eq!(finder.engine().graph().edge_count(), edges_before);
        assert_eq!(finder.engine().graph().build_count(), 1);
        let cost_after = finder.engine().graph().edge_cost(0, 1).unwrap();
        assert_relative_eq!(cost_after - cost_before, 0.5);
    }

    #[test]
    fn curvature_prefers_straight_routes() {
        // Uniform intensities: without curvature every monotone staircase
        // to the far corner of one block costs the same.
        let grid = ImageGrid::from_fn(3, 2, 1.0, |_, _| 1.0).unwrap();
        let mut finder = ImagePathFinder::new(grid);
        finder.set_image_weight(0.0);
        finder.set_edge_length_weight(0.0);
        finder.set_curvature_weight(1.0);

        // With only curvature in play, the straight bottom row is free
        // while any dog-leg pays the turn penalty.
        let path = finder.find_path_between((0, 0), (2, 0)).unwrap();
        assert_eq!(path.vertices(), &[2, 1, 0]);
        assert_relative_eq!(finder.cumulative_weights().weight(2), 0.0);
    }

    #[test]
    fn edge_count_matches_block_formula() {
        // 3x3 pixels: 12 sides + 2 diagonals per block over 4 blocks.
        let finder = {
            let grid = ImageGrid::new(3, 3, 1.0, vec![0.0; 9]).unwrap();
            let mut finder = ImagePathFinder::new(grid);
            finder.find_path_between((0, 0), (2, 2)).unwrap();
            finder
        };
        assert_eq!(finder.engine().graph().edge_count(), 20);
    }
}
