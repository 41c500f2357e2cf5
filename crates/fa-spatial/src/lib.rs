//! `fa-spatial`: everything the model knows about space and ties.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`geometry`]   | `Polygon`, `MultiPolygon`, `is_in_region`                 |
//! | [`floodplain`] | `Floodplain` (multipolygon + R-tree over part envelopes)  |
//! | [`placement`]  | `Domain`, `sample_location`                               |
//! | [`raster`]     | `FloodRaster`, `RasterGeometry`, `NoDataPolicy`           |
//! | [`damage`]     | `DamageCurve` (depth → damage factor)                     |
//! | [`exposure`]   | `ExposureModel`, `Exposure`                               |
//! | [`network`]    | `SocialNetwork` (CSR), `SocialNetworkBuilder`             |
//! | [`error`]      | `SpatialError`, `PlacementError`, `ExposureError`         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on configuration types.    |
//!
//! Building rasters from GeoTIFFs or networks from random-graph generators
//! is left to the application; this crate only consumes loaded data.

pub mod damage;
pub mod error;
pub mod exposure;
pub mod floodplain;
pub mod geometry;
pub mod network;
pub mod placement;
pub mod raster;


pub use damage::DamageCurve;
pub use error::{ExposureError, PlacementError, SpatialError, SpatialResult};
pub use exposure::{Exposure, ExposureModel};
pub use floodplain::Floodplain;
pub use geometry::{is_in_region, MultiPolygon, Polygon};
pub use network::{SocialNetwork, SocialNetworkBuilder};
pub use placement::{sample_location, Domain, DEFAULT_MAX_RETRIES};
pub use raster::{FloodRaster, NoDataPolicy, RasterGeometry};
