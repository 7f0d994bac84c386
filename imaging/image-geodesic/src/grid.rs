//! 2D intensity grid and its implicit mesh.

use nalgebra::Point3;
use surface_types::{Cell, SurfaceMesh};

use crate::error::{ImageError, ImageResult};

/// A 2D image used as a cost field for path search.
///
/// Grid points sit at pixel centers in the z = 0 plane of the grid's local
/// frame, `spacing` apart, with the pixel `(0, 0)` at `origin`. Intensities
/// are stored row-major.
///
/// [`to_mesh`](Self::to_mesh) exposes the grid as an implicit triangulated
/// mesh: every 2×2 pixel block contributes four triangles so that both of
/// its diagonals become edges, six unique edges per block in total.
///
/// # Example
///
/// ```
/// use image_geodesic::ImageGrid;
///
/// let grid = ImageGrid::new(3, 2, 1.0, vec![0.0; 6]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.vertex_at(2, 1), Some(5));
/// assert_eq!(grid.intensity(2, 1), Some(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct ImageGrid {
    width: usize,
    height: usize,
    spacing: f64,
    origin: Point3<f64>,
    /// Row-major intensities, `width * height` entries.
    intensities: Vec<f64>,
}

impl ImageGrid {
    /// Creates a grid from a row-major intensity buffer.
    ///
    /// # Errors
    ///
    /// Returns an error when the buffer length does not equal
    /// `width * height` or the spacing is not positive and finite.
    pub fn new(
        width: usize,
        height: usize,
        spacing: f64,
        intensities: Vec<f64>,
    ) -> ImageResult<Self> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ImageError::InvalidSpacing(spacing));
        }
        if intensities.len() != width * height {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                actual: intensities.len(),
            });
        }
        Ok(Self {
            width,
            height,
            spacing,
            origin: Point3::origin(),
            intensities,
        })
    }

    /// Creates a grid by sampling a function of pixel coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error when the spacing is not positive and finite.
    pub fn from_fn<F>(width: usize, height: usize, spacing: f64, mut f: F) -> ImageResult<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut intensities = Vec::with_capacity(width * height);
        for j in 0..height {
            for i in 0..width {
                intensities.push(f(i, j));
            }
        }
        Self::new(width, height, spacing, intensities)
    }

    /// Places the pixel `(0, 0)` at a world-space origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point3<f64>) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel spacing.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the world-space position of pixel `(0, 0)`.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Returns the mesh vertex id of a pixel, or `None` if out of range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; grids beyond 4B pixels are unsupported
    pub fn vertex_at(&self, i: usize, j: usize) -> Option<u32> {
        (i < self.width && j < self.height).then(|| (j * self.width + i) as u32)
    }

    /// Returns the intensity of a pixel, or `None` if out of range.
    #[must_use]
    pub fn intensity(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.width && j < self.height).then(|| self.intensities[j * self.width + i])
    }

    /// Returns the world-space position of a pixel center.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Pixel indices are far below 2^52
    pub fn point(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(
            self.origin.x + i as f64 * self.spacing,
            self.origin.y + j as f64 * self.spacing,
            self.origin.z,
        )
    }

    /// Resolves a world-space point to grid coordinates `(i, j, k)`.
    ///
    /// The third coordinate is always zero for a 2D grid. Returns `None`
    /// when the rounded coordinates fall outside the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Negative and out-of-range results are rejected before the cast
    pub fn grid_coords(&self, point: &Point3<f64>) -> Option<(usize, usize, usize)> {
        let fi = ((point.x - self.origin.x) / self.spacing).round();
        let fj = ((point.y - self.origin.y) / self.spacing).round();
        if fi < 0.0 || fj < 0.0 {
            return None;
        }
        let (i, j) = (fi as usize, fj as usize);
        (i < self.width && j < self.height).then_some((i, j, 0))
    }

    /// Builds the implicit triangulated mesh of this grid.
    ///
    /// Pixel centers become vertices (intensities attached as scalars) and
    /// every 2×2 block contributes four triangles, covering both diagonals.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Vertex ids are u32; grids beyond 4B pixels are unsupported
    pub fn to_mesh(&self) -> SurfaceMesh {
        let block_count = self.width.saturating_sub(1) * self.height.saturating_sub(1);
        let mut mesh = SurfaceMesh::with_capacity(self.intensities.len(), block_count * 4);

        for j in 0..self.height {
            for i in 0..self.width {
                mesh.add_point(self.point(i, j));
            }
        }

        for j in 0..self.height.saturating_sub(1) {
            for i in 0..self.width.saturating_sub(1) {
                let c00 = (j * self.width + i) as u32;
                let c10 = c00 + 1;
                let c01 = c00 + self.width as u32;
                let c11 = c01 + 1;
                // Four triangles so that both block diagonals are edges.
                mesh.add_cell(Cell::Triangle([c00, c10, c11]));
                mesh.add_cell(Cell::Triangle([c00, c11, c01]));
                mesh.add_cell(Cell::Triangle([c00, c10, c01]));
                mesh.add_cell(Cell::Triangle([c10, c11, c01]));
            }
        }

        mesh.set_scalars(self.intensities.clone());
        mesh
    }
}
