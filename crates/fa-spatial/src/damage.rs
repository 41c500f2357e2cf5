//! Depth → damage curves.
//!
//! A damage factor is the fraction of a household's value lost at a given
//! flood depth: `0` is unharmed, `1` is total loss.  Every curve here is
//! deterministic and monotonically non-decreasing in depth, and its output
//! is clamped to `[0, 1]`.

use crate::{SpatialError, SpatialResult};

/// A configured depth-damage function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DamageCurve {
    /// Logarithmic curve: zero below `min_depth`, total loss at or above
    /// `max_depth`, `scale · ln(depth) + offset` in between.
    LogDepth {
        scale:     f64,
        offset:    f64,
        min_depth: f64,
        max_depth: f64,
    },
    /// Linear interpolation between `(depth, damage)` points sorted by
    /// depth; flat beyond either end.
    Piecewise { points: Vec<(f64, f64)> },
}

impl Default for DamageCurve {
    /// The basic residential curve: 0.1746 · ln(d) + 0.6483 on
    /// `[0.025 m, 6 m)`.
    fn default() -> Self {
        DamageCurve::LogDepth {
            scale:     0.1746,
            offset:    0.6483,
            min_depth: 0.025,
            max_depth: 6.0,
        }
    }
}

impl DamageCurve {
    /// Damage factor in `[0, 1]` for a flood depth in metres.
    ///
    /// Negative and NaN depths are treated as dry.
    pub fn damage(&self, depth: f64) -> f64 {
        if depth.is_nan() {
            return 0.0;
        }
        let raw = match self {
            DamageCurve::LogDepth { scale, offset, min_depth, max_depth } => {
                if depth < *min_depth {
                    0.0
                } else if depth >= *max_depth {
                    1.0
                } else {
                    scale * depth.ln() + offset
                }
            }
            DamageCurve::Piecewise { points } => interpolate(points, depth),
        };
        raw.clamp(0.0, 1.0)
    }

    /// Reject parameterisations that break monotonicity or the `[0, 1]`
    /// range.  Called when a configuration is loaded.
    pub fn validate(&self) -> SpatialResult<()> {
        let fail = |msg: String| Err(SpatialError::InvalidDamageCurve(msg));
        match self {
            DamageCurve::LogDepth { scale, offset, min_depth, max_depth } => {
                if ![*scale, *offset, *min_depth, *max_depth].iter().all(|v| v.is_finite()) {
                    return fail("log-depth parameters must be finite".into());
                }
                if *scale < 0.0 {
                    return fail(format!("scale {scale} would make damage decrease with depth"));
                }
                if !(*min_depth > 0.0 && min_depth < max_depth) {
                    return fail(format!(
                        "need 0 < min_depth < max_depth, got {min_depth} and {max_depth}"
                    ));
                }
                Ok(())
            }
            DamageCurve::Piecewise { points } => {
                if points.is_empty() {
                    return fail("piecewise curve has no points".into());
                }
                if let Some(&(d, v)) = points
                    .iter()
                    .find(|(d, v)| !d.is_finite() || !(0.0..=1.0).contains(v))
                {
                    return fail(format!("point ({d}, {v}) is outside the valid range"));
                }
                for pair in points.windows(2) {
                    let ((d0, v0), (d1, v1)) = (pair[0], pair[1]);
                    if d1 < d0 {
                        return fail(format!("depths not sorted: {d0} then {d1}"));
                    }
                    if v1 < v0 {
                        return fail(format!("damage decreases from {v0} to {v1}"));
                    }
                }
                Ok(())
            }
        }
    }
}

fn interpolate(points: &[(f64, f64)], depth: f64) -> f64 {
    let (Some(&(first_d, first_v)), Some(&(last_d, last_v))) = (points.first(), points.last())
    else {
        return 0.0;
    };
    if depth <= first_d {
        return first_v;
    }
    if depth >= last_d {
        return last_v;
    }
    // First point strictly deeper than `depth`; always in 1..len here.
    let i = points.partition_point(|&(d, _)| d <= depth);
    let (d0, v0) = points[i - 1];
    let (d1, v1) = points[i];
    v0 + (v1 - v0) * (depth - d0) / (d1 - d0)
}
