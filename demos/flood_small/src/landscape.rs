//! Synthetic 1 km × 1 km river valley.
//!
//! A meandering river crosses the map west to east.  The floodplain is a
//! 300 m corridor around it plus a detached oxbow lake; flood depth falls
//! off linearly with distance from the channel and goes negative (high
//! ground) about 200 m out.  A short strip along the southern edge has no
//! survey data.

use fa_core::{BoundingBox, Point};
use fa_sim::{ExposureConfig, Landscape, SimResult};
use fa_spatial::{Domain, FloodRaster, Floodplain, MultiPolygon, Polygon, RasterGeometry};

pub const EXTENT: f64 = 1_000.0;

const CELL: f64 = 20.0;
const CELLS: usize = (EXTENT / CELL) as usize;
const NODATA: f32 = -9999.0;

const CHANNEL_DEPTH: f64 = 2.5;
/// Metres of horizontal distance per metre of depth lost.
const BANK_SLOPE: f64 = 80.0;
const CORRIDOR_HALF_WIDTH: f64 = 150.0;

fn river_y(x: f64) -> f64 {
    500.0 + 120.0 * (x / 180.0).sin()
}

fn oxbow() -> BoundingBox {
    BoundingBox::new(Point::new(600.0, 750.0), Point::new(760.0, 830.0))
}

/// Map outline with the corners cut off, so placement has to reject draws.
fn domain() -> SimResult<Domain> {
    let outline = vec![
        Point::new(100.0, 0.0),
        Point::new(900.0, 0.0),
        Point::new(EXTENT, 150.0),
        Point::new(EXTENT, 850.0),
        Point::new(900.0, EXTENT),
        Point::new(100.0, EXTENT),
        Point::new(0.0, 850.0),
        Point::new(0.0, 150.0),
    ];
    Ok(Domain::Polygon(Polygon::new(outline)?))
}

fn floodplain() -> SimResult<Floodplain> {
    let xs: Vec<f64> = (0..=10).map(|i| i as f64 * EXTENT / 10.0).collect();
    let mut corridor: Vec<Point> = xs
        .iter()
        .map(|&x| Point::new(x, river_y(x) + CORRIDOR_HALF_WIDTH))
        .collect();
    corridor.extend(xs.iter().rev().map(|&x| Point::new(x, river_y(x) - CORRIDOR_HALF_WIDTH)));

    let parts = vec![Polygon::new(corridor)?, Polygon::rect(oxbow())?];
    Ok(Floodplain::new(MultiPolygon::new(parts)))
}

fn depth_at(x: f64, y: f64) -> f32 {
    if (480.0..520.0).contains(&x) && y < 100.0 {
        return NODATA;
    }
    let mut depth = CHANNEL_DEPTH - (y - river_y(x)).abs() / BANK_SLOPE;
    if oxbow().contains(Point::new(x, y)) {
        depth = depth.max(0.8);
    }
    depth as f32
}

fn raster() -> SimResult<FloodRaster> {
    let geometry = RasterGeometry {
        west:        0.0,
        north:       EXTENT,
        cell_width:  CELL,
        cell_height: CELL,
        width:       CELLS,
        height:      CELLS,
    };
    let mut band = Vec::with_capacity(geometry.cell_count());
    for row in 0..CELLS {
        let cy = EXTENT - (row as f64 + 0.5) * CELL;
        for col in 0..CELLS {
            let cx = (col as f64 + 0.5) * CELL;
            band.push(depth_at(cx, cy));
        }
    }
    Ok(FloodRaster::new(geometry, vec![band], Some(NODATA))?)
}

pub fn build(exposure: &ExposureConfig) -> SimResult<Landscape> {
    Landscape::new(domain()?, floodplain()?, raster()?, exposure)
}
