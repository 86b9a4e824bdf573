use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

/// Point-of-interest category tag reported by the place-search provider.
///
/// Only `Hospital`, `Police`, `FoodMarket` and `GasStation` drive the
/// classifier directly; the other named tags are recognized but classified
/// by name like unknown ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PoiCategory {
    Hospital,
    Police,
    FoodMarket,
    GasStation,
    FireStation,
    Pharmacy,
    Restaurant,
    Cafe,
    Other(String),
}

impl PoiCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hospital => "hospital",
            Self::Police => "police",
            Self::FoodMarket => "foodMarket",
            Self::GasStation => "gasStation",
            Self::FireStation => "fireStation",
            Self::Pharmacy => "pharmacy",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Other(raw) => raw,
        }
    }
}

impl FromStr for PoiCategory {
    type Err = Infallible;

    /// Accepts `foodMarket`, `food_market`, `FOOD-MARKET` and
    /// `MKPOICategoryFoodMarket` alike. Unknown tags become `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let stripped = trimmed.strip_prefix("MKPOICategory").unwrap_or(trimmed);
        let key: String = stripped
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(match key.as_str() {
            "hospital" => Self::Hospital,
            "police" => Self::Police,
            "foodmarket" => Self::FoodMarket,
            "gasstation" => Self::GasStation,
            "firestation" => Self::FireStation,
            "pharmacy" => Self::Pharmacy,
            "restaurant" => Self::Restaurant,
            "cafe" => Self::Cafe,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl From<&str> for PoiCategory {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl std::fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PoiCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PoiCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PoiCategory::from(raw.as_str()))
    }
}
