//! Weighted categorical draws for spawning

/// Pick from `weights` using a uniform draw in `[0, 1)`.
///
/// Weights are accumulated in declaration order and the first category whose
/// running total meets or exceeds `draw` wins. If rounding leaves the total
/// short of `draw`, the first category is returned. Panics on an empty table.
pub fn weighted_pick<T: Copy>(weights: &[(T, f32)], draw: f32) -> T {
    let mut cumulative = 0.0;
    for &(item, weight) in weights {
        cumulative += weight;
        if draw <= cumulative {
            return item;
        }
    }
    weights[0].0
}
