//! Prelude module for common emergency-kit types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use emergency_kit::prelude::*;`

pub use crate::core::{
    config::{NearbySearchOptions, SearchGateConfig, SearchSensitivity},
    constants::DEFAULT_OVERLAP_THRESHOLD,
    geo::{GeoRegion, LatLng, RegionSpan},
};

pub use crate::places::{
    classifier::{classify, classify_all, classify_parts},
    types::resolve_query,
    EmergencyPlace, PlaceColor, PlaceType, PoiCategory, RawPlaceResult,
};

pub use crate::search::{
    gate::{overlap_ratio, RegionSearchGate, SearchMemo},
    provider::PlaceSearchProvider,
    session::{NearbySearchSession, SearchRequest},
};

pub use crate::{Error as EmergencyKitError, Result};

pub use async_trait::async_trait;
