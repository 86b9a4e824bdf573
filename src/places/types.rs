use crate::core::constants::DEFAULT_QUERY;
use serde::{Deserialize, Serialize};

/// Semantic bucket a nearby place is shown under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceType {
    Hospital,
    Police,
    FireStation,
    Pharmacy,
    Restaurant,
    Grocery,
    Convenience,
    GasStation,
    Other,
}

/// Marker and chip tint for a place type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceColor {
    Red,
    Blue,
    Orange,
    Green,
    Purple,
    Yellow,
    Gray,
}

impl PlaceColor {
    /// sRGB hex string, e.g. `#FF3B30`
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#FF3B30",
            Self::Blue => "#007AFF",
            Self::Orange => "#FF9500",
            Self::Green => "#34C759",
            Self::Purple => "#AF52DE",
            Self::Yellow => "#FFCC00",
            Self::Gray => "#8E8E93",
        }
    }
}

impl PlaceType {
    /// Every variant, in filter-chip order
    pub const ALL: [PlaceType; 9] = [
        PlaceType::Hospital,
        PlaceType::Police,
        PlaceType::FireStation,
        PlaceType::Pharmacy,
        PlaceType::Restaurant,
        PlaceType::Grocery,
        PlaceType::Convenience,
        PlaceType::GasStation,
        PlaceType::Other,
    ];

    /// Symbol name for the marker icon
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Hospital => "cross.circle.fill",
            Self::Police => "shield.fill",
            Self::FireStation => "building.2.fill",
            Self::Pharmacy => "pills.fill",
            Self::Restaurant => "fork.knife",
            Self::Grocery => "cart.fill",
            Self::Convenience => "basket.fill",
            Self::GasStation => "fuelpump.fill",
            Self::Other => "mappin.circle.fill",
        }
    }

    pub fn color(&self) -> PlaceColor {
        match self {
            Self::Hospital => PlaceColor::Red,
            Self::Police => PlaceColor::Blue,
            Self::FireStation => PlaceColor::Orange,
            Self::Pharmacy => PlaceColor::Green,
            Self::Restaurant => PlaceColor::Purple,
            Self::Grocery => PlaceColor::Green,
            Self::Convenience => PlaceColor::Blue,
            Self::GasStation => PlaceColor::Yellow,
            Self::Other => PlaceColor::Gray,
        }
    }

    /// Short label for filter chips
    pub fn title(&self) -> &'static str {
        match self {
            Self::Hospital => "Hospitals",
            Self::Police => "Police",
            Self::FireStation => "Fire",
            Self::Pharmacy => "Pharmacy",
            Self::Restaurant => "Food",
            Self::Grocery => "Grocery",
            Self::Convenience => "Stores",
            Self::GasStation => "Gas",
            Self::Other => "Other",
        }
    }

    /// Natural-language query to send when this type is the active filter.
    ///
    /// `Other` has no query of its own and defers to the user's free text.
    pub fn search_query(&self) -> Option<&'static str> {
        match self {
            Self::Hospital => Some("hospital medical center urgent care"),
            Self::Police => Some("police station law enforcement"),
            Self::FireStation => Some("fire station"),
            Self::Pharmacy => Some("pharmacy drugstore"),
            Self::Restaurant => Some("restaurant food"),
            Self::Grocery => Some("grocery supermarket"),
            Self::Convenience => Some("convenience store"),
            Self::GasStation => Some("gas station fuel"),
            Self::Other => None,
        }
    }

    /// Maps the free-text type of a bundled default service.
    pub fn from_service_type(kind: &str) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "hospital" | "emergency" => Self::Hospital,
            "police" => Self::Police,
            "fire" => Self::FireStation,
            "pharmacy" => Self::Pharmacy,
            "restaurant" => Self::Restaurant,
            "grocery" => Self::Grocery,
            "convenience" => Self::Convenience,
            "gas" => Self::GasStation,
            _ => Self::Other,
        }
    }
}

/// Builds the query for a search given the active filter and free text.
pub fn resolve_query(filter: Option<PlaceType>, search_text: &str, fallback: &str) -> String {
    if let Some(query) = filter.and_then(|f| f.search_query()) {
        return query.to_string();
    }
    let text = search_text.trim();
    if text.is_empty() {
        if fallback.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            fallback.to_string()
        }
    } else {
        text.to_string()
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
