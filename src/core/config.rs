//! Configuration for search throttling and session defaults
//!
//! Like the rest of the engine, configuration is offered through presets
//! (`SearchSensitivity`) that resolve to plain option structs, which can
//! also be loaded from JSON.

use crate::core::constants::{DEFAULT_OVERLAP_THRESHOLD, DEFAULT_QUERY};
use crate::core::geo::GeoRegion;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchSensitivity {
    Balanced,
    /// Re-search after small pans
    Eager,
    /// Re-search only after large moves
    Relaxed,
    Custom(SearchGateConfig),
}

impl SearchSensitivity {
    pub fn resolve(&self) -> SearchGateConfig {
        match self {
            Self::Balanced => SearchGateConfig {
                overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            },
            Self::Eager => SearchGateConfig {
                overlap_threshold: 0.85,
            },
            Self::Relaxed => SearchGateConfig {
                overlap_threshold: 0.5,
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for SearchSensitivity {
    fn default() -> Self {
        Self::Balanced
    }
}

/// Tuning for the region search gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchGateConfig {
    /// A new search fires when the overlap ratio drops below this value
    pub overlap_threshold: f64,
}

impl SearchGateConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.overlap_threshold > 0.0 && self.overlap_threshold <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "overlap_threshold must be in (0, 1], got {}",
                self.overlap_threshold
            )));
        }
        Ok(())
    }
}

impl Default for SearchGateConfig {
    fn default() -> Self {
        SearchSensitivity::Balanced.resolve()
    }
}

/// Options for a map screen's nearby-search session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbySearchOptions {
    pub gate: SearchGateConfig,
    /// Query used when no filter and no free text are set
    pub default_query: String,
    /// Viewport shown before any region change arrives
    pub initial_region: GeoRegion,
}

impl NearbySearchOptions {
    pub fn with_sensitivity(mut self, sensitivity: SearchSensitivity) -> Self {
        self.gate = sensitivity.resolve();
        self
    }

    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        self.gate.validate()?;
        if self.default_query.trim().is_empty() {
            return Err(Error::InvalidConfig("default_query must not be empty".into()));
        }
        GeoRegion::try_new(self.initial_region.center, self.initial_region.span)
            .map_err(|e| Error::InvalidConfig(format!("initial_region: {e}")))?;
        Ok(())
    }
}

impl Default for NearbySearchOptions {
    fn default() -> Self {
        Self {
            gate: SearchGateConfig::default(),
            default_query: DEFAULT_QUERY.to_string(),
            initial_region: GeoRegion::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_resolve() {
        assert_eq!(SearchSensitivity::Balanced.resolve().overlap_threshold, 0.7);
        assert!(
            SearchSensitivity::Eager.resolve().overlap_threshold
                > SearchSensitivity::Relaxed.resolve().overlap_threshold
        );
        let custom = SearchGateConfig {
            overlap_threshold: 0.6,
        };
        assert_eq!(SearchSensitivity::Custom(custom.clone()).resolve(), custom);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options =
            NearbySearchOptions::from_json_str(r#"{ "gate": { "overlap_threshold": 0.5 } }"#)
                .unwrap();
        assert_eq!(options.gate.overlap_threshold, 0.5);
        assert_eq!(options.default_query, "hospital");
        assert_eq!(options.initial_region, GeoRegion::default());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = NearbySearchOptions::from_json_str(r#"{ "gate": { "overlap_threshold": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = NearbySearchOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_empty_default_query_rejected() {
        let options = NearbySearchOptions {
            default_query: "  ".into(),
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }
}
