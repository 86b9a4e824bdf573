use crate::core::constants::NO_PHONE;
use crate::core::geo::LatLng;
use crate::places::category::PoiCategory;
use crate::places::types::PlaceType;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A single hit from the place-search provider, before classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<PoiCategory>,
    #[serde(default)]
    pub coordinate: Option<LatLng>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl RawPlaceResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<PoiCategory>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_coordinate(mut self, coordinate: LatLng) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Decodes a JSON array of provider hits.
    pub fn from_json_list(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A classified place, ready for the map and the details sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyPlace {
    pub name: String,
    pub coordinate: LatLng,
    pub address: String,
    pub phone: Option<String>,
    pub place_type: PlaceType,
}

impl EmergencyPlace {
    /// Phone number for display, `N/A` when unknown
    pub fn phone_label(&self) -> &str {
        self.phone.as_deref().unwrap_or(NO_PHONE)
    }

    /// `tel://` URI built from the digits of the phone number
    pub fn dial_uri(&self) -> Option<String> {
        let digits: String = self
            .phone
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("tel://{digits}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(phone: Option<&str>) -> EmergencyPlace {
        EmergencyPlace {
            name: "Valley Medical".into(),
            coordinate: LatLng::new(37.31, -121.93),
            address: String::new(),
            phone: phone.map(str::to_string),
            place_type: PlaceType::Hospital,
        }
    }

    #[test]
    fn test_dial_uri_strips_formatting() {
        assert_eq!(
            place(Some("+1 (408) 555-0199")).dial_uri().as_deref(),
            Some("tel://14085550199")
        );
        assert_eq!(place(Some("ask at desk")).dial_uri(), None);
        assert_eq!(place(None).dial_uri(), None);
    }

    #[test]
    fn test_phone_label() {
        assert_eq!(place(None).phone_label(), "N/A");
        assert_eq!(place(Some("911")).phone_label(), "911");
    }

    #[test]
    fn test_json_list_tolerates_missing_fields() {
        let hits = RawPlaceResult::from_json_list(
            r#"[
                { "name": "Station 4", "category": "fireStation",
                  "coordinate": { "lat": 37.0, "lng": -122.0 } },
                { "category": "foodMarket" },
                {}
            ]"#,
        )
        .unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].category, Some(PoiCategory::FireStation));
        assert_eq!(hits[1].name, None);
        assert_eq!(hits[2], RawPlaceResult::default());
    }
}
