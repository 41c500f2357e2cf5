//! Polygons and exact point-in-polygon containment.
//!
//! Containment is interior-only: a point lying exactly on an exterior or
//! hole boundary is *not* contained.  Edge tests use exact arithmetic on the
//! input coordinates (no epsilon), so results are reproducible bit-for-bit.

use fa_core::{BoundingBox, Point};

use crate::{SpatialError, SpatialResult};

// ── Ring classification ───────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RingPosition {
    Inside,
    Outside,
    Boundary,
}

/// `true` if `p` lies on the closed segment `a`–`b`.
#[inline]
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Crossing-number test over an implicitly closed ring.
fn classify(ring: &[Point], p: Point) -> RingPosition {
    let mut inside = false;
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if on_segment(p, a, b) {
            return RingPosition::Boundary;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    if inside { RingPosition::Inside } else { RingPosition::Outside }
}

/// Drop an explicit closing vertex and reject rings that cannot enclose area.
fn normalise_ring(mut ring: Vec<Point>, what: &str) -> SpatialResult<Vec<Point>> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(SpatialError::InvalidPolygon(format!(
            "{what} needs at least 3 distinct vertices, got {}",
            ring.len()
        )));
    }
    if ring.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(SpatialError::InvalidPolygon(format!("{what} has a non-finite vertex")));
    }
    Ok(ring)
}

// ── Polygon ───────────────────────────────────────────────────────────────────

/// A simple polygon with optional holes.
///
/// Rings may be given open or closed (first vertex repeated at the end) and
/// in either winding order.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point>,
    holes:    Vec<Vec<Point>>,
    bbox:     BoundingBox,
}

impl Polygon {
    /// Polygon without holes.
    pub fn new(exterior: Vec<Point>) -> SpatialResult<Self> {
        Self::with_holes(exterior, Vec::new())
    }

    pub fn with_holes(exterior: Vec<Point>, holes: Vec<Vec<Point>>) -> SpatialResult<Self> {
        let exterior = normalise_ring(exterior, "exterior ring")?;
        let holes = holes
            .into_iter()
            .map(|h| normalise_ring(h, "hole"))
            .collect::<SpatialResult<Vec<_>>>()?;
        let bbox = BoundingBox::enclosing(exterior.iter().copied())
            .ok_or_else(|| SpatialError::InvalidPolygon("empty exterior ring".into()))?;
        Ok(Self { exterior, holes, bbox })
    }

    /// Axis-aligned rectangle as a polygon.
    pub fn rect(bbox: BoundingBox) -> SpatialResult<Self> {
        Self::new(vec![
            bbox.min,
            Point::new(bbox.max.x, bbox.min.y),
            bbox.max,
            Point::new(bbox.min.x, bbox.max.y),
        ])
    }

    pub fn exterior(&self) -> &[Point] {
        &self.exterior
    }

    pub fn holes(&self) -> &[Vec<Point>] {
        &self.holes
    }

    #[inline]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Interior-only containment test.
    pub fn contains(&self, p: Point) -> bool {
        if !self.bbox.contains(p) {
            return false;
        }
        match classify(&self.exterior, p) {
            RingPosition::Inside => self
                .holes
                .iter()
                .all(|hole| classify(hole, p) == RingPosition::Outside),
            RingPosition::Outside | RingPosition::Boundary => false,
        }
    }
}

/// `true` if `point` lies strictly inside `polygon`.
#[inline]
pub fn is_in_region(point: Point, polygon: &Polygon) -> bool {
    polygon.contains(point)
}

// ── MultiPolygon ──────────────────────────────────────────────────────────────

/// A collection of disjoint polygons treated as one region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    pub parts: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Linear scan over every part; see [`Floodplain`][crate::Floodplain]
    /// for the indexed variant.
    pub fn contains(&self, p: Point) -> bool {
        self.parts.iter().any(|part| part.contains(p))
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(
            self.parts
                .iter()
                .flat_map(|part| [part.bbox().min, part.bbox().max]),
        )
    }
}
