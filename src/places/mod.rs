pub mod category;
pub mod classifier;
pub mod result;
pub mod types;

// Re-exports for convenience
pub use category::PoiCategory;
pub use classifier::{classify, classify_all, classify_parts};
pub use result::{EmergencyPlace, RawPlaceResult};
pub use types::{PlaceColor, PlaceType};
