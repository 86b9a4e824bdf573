pub mod gate;
pub mod provider;
pub mod session;

// Re-exports for convenience
pub use gate::{overlap_ratio, RegionSearchGate, SearchMemo};
pub use provider::PlaceSearchProvider;
pub use session::{NearbySearchSession, SearchRequest};
