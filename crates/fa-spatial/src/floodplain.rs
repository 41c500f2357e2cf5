//! Floodplain region with an R-tree over part envelopes.
//!
//! Real floodplain layers are multipolygons with hundreds of parts.  The
//! R-tree (via `rstar`) narrows a containment query to the parts whose
//! bounding box covers the point before the exact ring test runs.

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::RTree;

use fa_core::Point;

use crate::MultiPolygon;

/// Envelope of one multipolygon part, tagged with the part index.
type PartEnvelope = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// A floodplain boundary supporting indexed point-in-region queries.
pub struct Floodplain {
    region:    MultiPolygon,
    part_idx:  RTree<PartEnvelope>,
}

impl Floodplain {
    pub fn new(region: MultiPolygon) -> Self {
        let entries: Vec<PartEnvelope> = region
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let bbox = part.bbox();
                GeomWithData::new(
                    Rectangle::from_corners(bbox.min.to_array(), bbox.max.to_array()),
                    i,
                )
            })
            .collect();
        let part_idx = RTree::bulk_load(entries);
        Self { region, part_idx }
    }

    /// A floodplain that contains nothing.
    pub fn empty() -> Self {
        Self::new(MultiPolygon::default())
    }

    pub fn region(&self) -> &MultiPolygon {
        &self.region
    }

    pub fn part_count(&self) -> usize {
        self.region.parts.len()
    }

    /// `true` if `p` lies strictly inside any floodplain part.
    pub fn contains(&self, p: Point) -> bool {
        self.part_idx
            .locate_all_at_point(&p.to_array())
            .any(|entry| self.region.parts[entry.data].contains(p))
    }
}
