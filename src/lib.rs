//! # Emergency Kit
//!
//! Nearby emergency-service search for a map screen.
//!
//! The crate decides when a viewport change is worth a new nearby-places
//! query ([`RegionSearchGate`]), and buckets each returned place into a
//! [`PlaceType`] for icons, colors and filters ([`classify`]). The map and
//! the place-search service are supplied by the host application.

pub mod core;
pub mod logging;
pub mod places;
pub mod prelude;
pub mod search;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{NearbySearchOptions, SearchGateConfig, SearchSensitivity},
    geo::{GeoRegion, LatLng, RegionSpan},
};

pub use places::{
    classify, classify_all, EmergencyPlace, PlaceColor, PlaceType, PoiCategory, RawPlaceResult,
};

pub use search::{
    overlap_ratio, NearbySearchSession, PlaceSearchProvider, RegionSearchGate, SearchMemo,
    SearchRequest,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum EmergencyKitError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Place search failed: {0}")]
    Provider(String),
}

/// Error type alias for convenience
pub type Error = EmergencyKitError;
