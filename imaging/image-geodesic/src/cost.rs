//! Intensity and curvature edge costs.

use surface_geodesic::EdgeCost;
use surface_types::SurfaceMesh;

/// Edge cost driven by image intensity, edge length, and path curvature.
///
/// The static term blends the source pixel's intensity (counted twice;
/// the destination intensity does not enter the blend) with an optional
/// edge-length term normalized by the pixel spacing. The dynamic term
/// penalizes turning: it grows toward `curvature_weight` as the path folds
/// back on itself and vanishes when it runs straight.
///
/// All three weights are clamped to `[0, 1]`. Changing `image_weight` or
/// `edge_length_weight` marks the cached static costs dirty so the engine
/// refreshes them in place at the next search; `curvature_weight` only
/// affects the dynamic term, which is never cached.
#[derive(Debug, Clone)]
pub struct ImageEdgeCost {
    image_weight: f64,
    edge_length_weight: f64,
    curvature_weight: f64,
    pixel_spacing: f64,
    dirty: bool,
}

impl ImageEdgeCost {
    /// Creates a cost strategy with unit image weight and no edge-length
    /// or curvature contribution.
    #[must_use]
    pub const fn new(pixel_spacing: f64) -> Self {
        Self {
            image_weight: 1.0,
            edge_length_weight: 0.0,
            curvature_weight: 0.0,
            pixel_spacing,
            dirty: false,
        }
    }

    /// Returns the intensity blend weight.
    #[must_use]
    pub const fn image_weight(&self) -> f64 {
        self.image_weight
    }

    /// Returns the edge-length weight.
    #[must_use]
    pub const fn edge_length_weight(&self) -> f64 {
        self.edge_length_weight
    }

    /// Returns the curvature penalty weight.
    #[must_use]
    pub const fn curvature_weight(&self) -> f64 {
        self.curvature_weight
    }

    /// Sets the intensity blend weight, clamped to `[0, 1]`.
    ///
    /// Marks cached costs dirty only when the stored value changes.
    #[allow(clippy::float_cmp)]
    // Exact compare is deliberate: an unchanged value must not dirty the graph
    pub fn set_image_weight(&mut self, weight: f64) {
        let weight = weight.clamp(0.0, 1.0);
        if weight != self.image_weight {
            self.image_weight = weight;
            self.dirty = true;
        }
    }

    /// Sets the edge-length weight, clamped to `[0, 1]`.
    ///
    /// Marks cached costs dirty only when the stored value changes.
    #[allow(clippy::float_cmp)]
    // Exact compare is deliberate: an unchanged value must not dirty the graph
    pub fn set_edge_length_weight(&mut self, weight: f64) {
        let weight = weight.clamp(0.0, 1.0);
        if weight != self.edge_length_weight {
            self.edge_length_weight = weight;
            self.dirty = true;
        }
    }

    /// Sets the curvature penalty weight, clamped to `[0, 1]`.
    ///
    /// The curvature term is evaluated per search, so no cost refresh is
    /// needed.
    pub fn set_curvature_weight(&mut self, weight: f64) {
        self.curvature_weight = weight.clamp(0.0, 1.0);
    }
}

impl EdgeCost for ImageEdgeCost {
    fn static_cost(&self, mesh: &SurfaceMesh, from: u32, to: u32) -> f64 {
        let source = mesh.scalar(from).unwrap_or(0.0);
        // Source intensity is sampled twice; the destination intensity is
        // not part of the blend.
        let mut cost = self.image_weight * (source + source);
        if self.edge_length_weight != 0.0 {
            let (Some(p0), Some(p1)) = (mesh.point(from), mesh.point(to)) else {
                return cost;
            };
            cost += self.edge_length_weight * (p1 - p0).norm() / self.pixel_spacing;
        }
        cost
    }

    fn dynamic_cost(&self, mesh: &SurfaceMesh, from: u32, to: u32, prev: Option<u32>) -> f64 {
        if self.curvature_weight == 0.0 {
            return 0.0;
        }
        let Some(prev) = prev else {
            return 0.0;
        };
        let (Some(p0), Some(p1), Some(p2)) =
            (mesh.point(prev), mesh.point(from), mesh.point(to))
        else {
            return 0.0;
        };
        let (Some(incoming), Some(outgoing)) = (
            (p1 - p0).try_normalize(f64::EPSILON),
            (p2 - p1).try_normalize(f64::EPSILON),
        ) else {
            return 0.0;
        };
        // Straight continuation has dot 1 and costs nothing; a reversal
        // has dot -1 and costs the full weight.
        self.curvature_weight * 0.5 * (incoming.dot(&outgoing) - 1.0).abs()
    }

    fn costs_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_costs_dirty(&mut self) {
        self.dirty = false;
    }
}
