//! Household location sampling.

use fa_core::{AgentRng, BoundingBox, Point};

use crate::{PlacementError, Polygon};

/// Attempt budget used when the configuration does not override it.
pub const DEFAULT_MAX_RETRIES: u32 = 10_000;

/// The area households may be placed in.
#[derive(Clone, Debug)]
pub enum Domain {
    /// Every draw from the box is accepted.
    Rect(BoundingBox),
    /// Draws come from the polygon's bounding box and are rejected until one
    /// falls strictly inside the polygon.
    Polygon(Polygon),
}

impl Domain {
    pub fn bbox(&self) -> BoundingBox {
        match self {
            Domain::Rect(b)    => *b,
            Domain::Polygon(p) => p.bbox(),
        }
    }
}

/// Draw a uniformly distributed location inside `domain`.
///
/// For a polygon domain at most `max_retries` candidates are drawn before
/// giving up with [`PlacementError::RetriesExhausted`].
pub fn sample_location(
    domain:      &Domain,
    rng:         &mut AgentRng,
    max_retries: u32,
) -> Result<Point, PlacementError> {
    let bbox = domain.bbox();
    if bbox.is_degenerate() {
        return Err(PlacementError::EmptyDomain);
    }
    match domain {
        Domain::Rect(_) => Ok(rng.point_in(&bbox)),
        Domain::Polygon(polygon) => {
            for _ in 0..max_retries {
                let candidate = rng.point_in(&bbox);
                if polygon.contains(candidate) {
                    return Ok(candidate);
                }
            }
            Err(PlacementError::RetriesExhausted { attempts: max_retries })
        }
    }
}
