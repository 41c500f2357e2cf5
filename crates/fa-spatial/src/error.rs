//! Spatial-subsystem error types.

use thiserror::Error;

use fa_core::{BandId, Point};

/// Household placement could not produce a location.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("no location inside the domain after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("domain has zero area")]
    EmptyDomain,
}

/// A flood-raster lookup failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExposureError {
    /// The location is outside raster coverage or the cell holds no data.
    #[error("no flood data at {location}")]
    NoData { location: Point },

    #[error("band {band} requested but raster has {bands} band(s)")]
    BandOutOfRange { band: BandId, bands: usize },
}

/// Errors produced by `fa-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("invalid raster: {0}")]
    InvalidRaster(String),

    #[error("invalid damage curve: {0}")]
    InvalidDamageCurve(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
