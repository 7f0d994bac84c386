//! Cumulative-weight snapshot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel weight for vertices the search never assigned a path to.
pub const UNREACHED_WEIGHT: f64 = -1.0;

/// Per-vertex cumulative path weights captured after a search.
///
/// A snapshot copy, not a live view: subsequent searches on the engine do
/// not affect it. Vertices the search never reached hold
/// [`UNREACHED_WEIGHT`].
///
/// # Example
///
/// ```
/// use surface_geodesic::{WeightMap, UNREACHED_WEIGHT};
///
/// let weights = WeightMap::from_weights(vec![0.0, 1.5, UNREACHED_WEIGHT]);
/// assert!(weights.is_reached(1));
/// assert!(!weights.is_reached(2));
/// assert_eq!(weights.reached_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightMap {
    weights: Vec<f64>,
}

impl WeightMap {
    /// Creates a map of `vertex_count` unreached entries.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            weights: vec![UNREACHED_WEIGHT; vertex_count],
        }
    }

    /// Wraps an existing weight vector.
    #[must_use]
    pub const fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Returns a vertex's cumulative weight, or [`UNREACHED_WEIGHT`] when
    /// the vertex was never reached or the index is out of range.
    #[inline]
    #[must_use]
    pub fn weight(&self, vertex: usize) -> f64 {
        self.weights
            .get(vertex)
            .copied()
            .unwrap_or(UNREACHED_WEIGHT)
    }

    /// Returns `true` if the search assigned the vertex a path.
    #[inline]
    #[must_use]
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.weight(vertex) >= 0.0
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns all weights as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Consumes the map, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.weights
    }

    /// Counts the vertices the search reached.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w >= 0.0).count()
    }

    /// Counts the vertices the search never reached.
    #[must_use]
    pub fn unreached_count(&self) -> usize {
        self.len() - self.reached_count()
    }

    /// Iterates over `(vertex, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().enumerate().map(|(i, &w)| (i, w))
    }

    /// Iterates over reached vertices only.
    pub fn iter_reached(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.iter().filter(|&(_, w)| w >= 0.0)
    }

    /// Returns the reached vertex with the largest cumulative weight, or
    /// `None` when nothing was reached.
    #[must_use]
    pub fn farthest_vertex(&self) -> Option<(usize, f64)> {
        self.iter_reached()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl From<Vec<f64>> for WeightMap {
    fn from(weights: Vec<f64>) -> Self {
        Self::from_weights(weights)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_map_is_unreached() {
        let map = WeightMap::new(3);
        assert_eq!(map.len(), 3);
        assert_eq!(map.reached_count(), 0);
        assert!(!map.is_reached(0));
    }

    #[test]
    fn out_of_range_reads_unreached() {
        let map = WeightMap::from_weights(vec![0.0]);
        assert_relative_eq!(map.weight(5), UNREACHED_WEIGHT);
        assert!(!map.is_reached(5));
    }

    #[test]
    fn counts_and_iteration() {
        let map = WeightMap::from_weights(vec![0.0, 2.0, UNREACHED_WEIGHT, 1.0]);
        assert_eq!(map.reached_count(), 3);
        assert_eq!(map.unreached_count(), 1);
        assert_eq!(map.iter_reached().count(), 3);
    }

    #[test]
    fn farthest_vertex() {
        let map = WeightMap::from_weights(vec![0.0, 5.0, UNREACHED_WEIGHT, 3.0]);
        let (vertex, weight) = map.farthest_vertex().unwrap();
        assert_eq!(vertex, 1);
        assert_relative_eq!(weight, 5.0);

        assert!(WeightMap::new(2).farthest_vertex().is_none());
    }
}
