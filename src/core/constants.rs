//! Core constants for the nearby-search engine.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Re-search once less than this share of the smaller region is still covered.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.7;

/// Initial map center (lat, lng) before the user's location is known.
pub const DEFAULT_CENTER: (f64, f64) = (37.3361, -122.0090);

/// Initial span in degrees, on both axes.
pub const DEFAULT_SPAN: f64 = 0.05;

/// Query used when neither a filter nor free text is set.
pub const DEFAULT_QUERY: &str = "hospital";

/// Placeholder shown for places without a phone number.
pub const NO_PHONE: &str = "N/A";
