use rand::Rng;

pub struct WeightedDraw;

impl WeightedDraw {
    /// Draws an index proportionally to the given weights. Negative weights
    /// count as zero. When the total weight is not positive the draw falls
    /// back to the highest-weight candidate, first on ties, so callers get a
    /// deterministic answer instead of a skewed roll. `None` only for an
    /// empty slice.
    pub fn pick<R: Rng>(rng: &mut R, weights: &[f32]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f32 = weights.iter().map(|w| w.max(0.0)).sum();

        if total <= 0.0 {
            let mut best = 0;
            for (idx, weight) in weights.iter().enumerate().skip(1) {
                if *weight > weights[best] {
                    best = idx;
                }
            }
            return Some(best);
        }

        let mut roll = rng.random::<f32>() * total;

        for (idx, weight) in weights.iter().enumerate() {
            roll -= weight.max(0.0);
            if roll < 0.0 {
                return Some(idx);
            }
        }

        // float edge: the roll landed exactly on the total
        Some(weights.len() - 1)
    }
}
