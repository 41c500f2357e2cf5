//! Distance → influence weight.

/// Min-max scale `distances` into weights in `[0, 1]`.
///
/// ```text
/// w(f) = (d(f) − min) / (max − min)
/// ```
///
/// When every distance is equal (including the single-friend case) the
/// scale collapses: each weight is `1` if the common distance is `0`, and
/// `0` otherwise.
///
/// Note the direction: the farthest friend gets weight 1 and the nearest
/// gets 0, so influence *grows* with distance.  This is the documented
/// behavior of the model and is kept as-is pending review.
///
/// Pure: the output depends only on the input slice, position by position.
pub fn min_max_weights(distances: &[f64]) -> Vec<f64> {
    let Some(&first) = distances.first() else {
        return Vec::new();
    };
    let (min, max) = distances
        .iter()
        .fold((first, first), |(lo, hi), &d| (lo.min(d), hi.max(d)));

    if max == min {
        let w = if min == 0.0 { 1.0 } else { 0.0 };
        return vec![w; distances.len()];
    }

    let span = max - min;
    distances.iter().map(|&d| (d - min) / span).collect()
}
