//! Cumulative-weight bucketing of normalized noise into layer indices.
//!
//! Layers occupy contiguous half-open buckets on `[0, total)`: layer 0 spans
//! `[0, w0)`, layer 1 spans `[w0, w0 + w1)`, and so on. A value exactly on a
//! bucket edge belongs to the higher bucket; `z == 1` lands past the last
//! edge and is clamped to the top layer.

use crate::weights::WeightTable;

/// Layer index for a normalized value `z` in [0, 1].
///
/// Only the first `layer_count` weights take part; the result is clamped to
/// `layer_count - 1`. `layer_count` must be at least 1.
pub fn classify_layer(z: f32, weights: &[f32], total_weight: f32, layer_count: usize) -> usize {
    let target = z * total_weight;
    let mut accumulated = 0.0f32;
    for (layer, &w) in weights.iter().take(layer_count).enumerate() {
        if target < accumulated + w {
            return layer;
        }
        accumulated += w;
    }
    layer_count.saturating_sub(1)
}

/// Convenience wrapper over a reconciled [`WeightTable`].
#[inline]
pub fn classify(z: f32, table: &WeightTable) -> usize {
    classify_layer(z, table.weights(), table.total(), table.layer_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(w: &[f32]) -> WeightTable {
        WeightTable::reconcile(w, w.len()).unwrap()
    }

    #[test]
    fn uniform_three_layers() {
        let t = table(&[1.0, 1.0, 1.0]);
        assert_eq!(classify(0.0, &t), 0);
        assert_eq!(classify(0.2, &t), 0);
        assert_eq!(classify(0.5, &t), 1);
        assert_eq!(classify(0.9, &t), 2);
    }

    #[test]
    fn top_of_range_clamps_to_last_layer() {
        let t = table(&[1.0, 1.0, 1.0]);
        assert_eq!(classify(1.0, &t), 2);
    }

    #[test]
    fn exact_boundary_goes_to_higher_bucket() {
        let t = table(&[1.0, 1.0]);
        assert_eq!(classify(0.5, &t), 1);
        assert_eq!(classify(0.499, &t), 0);
    }

    #[test]
    fn zero_weight_bucket_is_never_selected() {
        let t = table(&[1.0, 0.0, 1.0]);
        for i in 0..=100 {
            let z = i as f32 / 100.0;
            assert_ne!(classify(z, &t), 1, "zero-weight layer chosen for z={z}");
        }
    }

    #[test]
    fn heavier_weight_widens_bucket() {
        let t = table(&[3.0, 1.0]);
        assert_eq!(classify(0.7, &t), 0);
        assert_eq!(classify(0.76, &t), 1);
    }

    #[test]
    fn extra_weights_beyond_layer_count_are_ignored() {
        assert_eq!(classify_layer(0.99, &[1.0, 1.0, 100.0], 2.0, 2), 1);
    }
}
