use crate::core::constants::{DEFAULT_CENTER, DEFAULT_SPAN};
use crate::{Error, Result};
use geo::Area;
use geo_types::{coord, Rect};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Full extent of a region along each axis, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSpan {
    pub lat_delta: f64,
    pub lng_delta: f64,
}

impl RegionSpan {
    pub fn new(lat_delta: f64, lng_delta: f64) -> Self {
        Self {
            lat_delta,
            lng_delta,
        }
    }

    fn is_valid(&self) -> bool {
        self.lat_delta.is_finite()
            && self.lng_delta.is_finite()
            && self.lat_delta > 0.0
            && self.lng_delta > 0.0
    }
}

/// A rectangular map viewport: a center plus the span it covers.
///
/// The bounding box is `center ± span / 2` on each axis. Regions are not
/// wrapped across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRegion {
    pub center: LatLng,
    pub span: RegionSpan,
}

impl GeoRegion {
    /// Creates a region without validation
    pub fn new(center: LatLng, span: RegionSpan) -> Self {
        Self { center, span }
    }

    /// Creates a region from raw degrees without validation
    pub fn from_degrees(lat: f64, lng: f64, lat_delta: f64, lng_delta: f64) -> Self {
        Self::new(LatLng::new(lat, lng), RegionSpan::new(lat_delta, lng_delta))
    }

    /// Creates a region, rejecting an out-of-range center or a non-positive span
    pub fn try_new(center: LatLng, span: RegionSpan) -> Result<Self> {
        if !center.is_valid() {
            return Err(Error::InvalidRegion(format!(
                "center ({}, {}) is out of range",
                center.lat, center.lng
            )));
        }
        if !span.is_valid() {
            return Err(Error::InvalidRegion(format!(
                "span ({}, {}) must be positive and finite",
                span.lat_delta, span.lng_delta
            )));
        }
        Ok(Self::new(center, span))
    }

    /// Axis-aligned bounding box with x = longitude and y = latitude
    pub fn bounds(&self) -> Rect<f64> {
        let half_lat = self.span.lat_delta / 2.0;
        let half_lng = self.span.lng_delta / 2.0;
        Rect::new(
            coord! { x: self.center.lng - half_lng, y: self.center.lat - half_lat },
            coord! { x: self.center.lng + half_lng, y: self.center.lat + half_lat },
        )
    }

    /// Area of the bounding box in square degrees
    pub fn area(&self) -> f64 {
        self.bounds().unsigned_area()
    }

    /// Checks whether a coordinate lies inside the region's bounding box
    pub fn contains(&self, point: &LatLng) -> bool {
        let rect = self.bounds();
        point.lat >= rect.min().y
            && point.lat <= rect.max().y
            && point.lng >= rect.min().x
            && point.lng <= rect.max().x
    }
}

impl Default for GeoRegion {
    fn default() -> Self {
        Self::from_degrees(DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_SPAN, DEFAULT_SPAN)
    }
}
