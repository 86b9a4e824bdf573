//! Assigns a [`PlaceType`] to raw search hits.
//!
//! The provider's category tag wins when it names a type outright. A
//! food-market tag is split by name into grocery, convenience or restaurant.
//! Everything else falls back to case-insensitive keyword matching on the
//! name. Rules are checked in order and the first hit wins.

use crate::places::category::PoiCategory;
use crate::places::result::{EmergencyPlace, RawPlaceResult};
use crate::places::types::PlaceType;

const FOOD_MARKET_GROCERY: &[&str] = &["grocery", "supermarket"];
const FOOD_MARKET_CONVENIENCE: &[&str] = &["convenience", "store", "7-eleven", "market", "mart"];

const NAME_RULES: &[(&[&str], PlaceType)] = &[
    (
        &[
            "hospital",
            "emergency",
            "medical center",
            "health center",
            "urgent care",
            "pediatric",
        ],
        PlaceType::Hospital,
    ),
    (&["police"], PlaceType::Police),
    (&["fire", "station"], PlaceType::FireStation),
    (&["pharmacy", "drugstore"], PlaceType::Pharmacy),
    (&["restaurant", "cafe", "food"], PlaceType::Restaurant),
    (&["grocery", "supermarket"], PlaceType::Grocery),
    (
        &["convenience", "store", "mini market", "7-eleven"],
        PlaceType::Convenience,
    ),
    (&["gas", "fuel"], PlaceType::GasStation),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classifies a provider hit. Total: always returns a type.
pub fn classify(result: &RawPlaceResult) -> PlaceType {
    classify_parts(result.category.as_ref(), result.name.as_deref())
}

/// Classifies from a category tag and a name, either of which may be absent.
pub fn classify_parts(category: Option<&PoiCategory>, name: Option<&str>) -> PlaceType {
    let name = name.unwrap_or_default().to_lowercase();

    match category {
        Some(PoiCategory::Hospital) => PlaceType::Hospital,
        Some(PoiCategory::Police) => PlaceType::Police,
        Some(PoiCategory::GasStation) => PlaceType::GasStation,
        Some(PoiCategory::FoodMarket) => {
            if contains_any(&name, FOOD_MARKET_GROCERY) {
                PlaceType::Grocery
            } else if contains_any(&name, FOOD_MARKET_CONVENIENCE) {
                PlaceType::Convenience
            } else {
                PlaceType::Restaurant
            }
        }
        _ => NAME_RULES
            .iter()
            .find(|(keywords, _)| contains_any(&name, keywords))
            .map(|(_, place_type)| *place_type)
            .unwrap_or(PlaceType::Other),
    }
}

/// Classifies a batch of hits into display-ready places.
///
/// Hits without a coordinate are dropped since they cannot be placed on the map.
pub fn classify_all<I>(results: I) -> Vec<EmergencyPlace>
where
    I: IntoIterator<Item = RawPlaceResult>,
{
    #[cfg(feature = "debug")]
    let mut dropped = 0usize;
    let places: Vec<EmergencyPlace> = results
        .into_iter()
        .filter_map(|raw| {
            let place_type = classify(&raw);
            let Some(coordinate) = raw.coordinate else {
                #[cfg(feature = "debug")]
                {
                    dropped += 1;
                }
                return None;
            };
            Some(EmergencyPlace {
                name: raw.name.unwrap_or_default(),
                coordinate,
                address: raw.address.unwrap_or_default(),
                phone: raw.phone,
                place_type,
            })
        })
        .collect();

    #[cfg(feature = "debug")]
    if dropped > 0 {
        log::debug!("dropped {} place hits without a coordinate", dropped);
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn hit(category: Option<&str>, name: &str) -> RawPlaceResult {
        RawPlaceResult {
            name: Some(name.to_string()),
            category: category.map(PoiCategory::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_short_circuits_name() {
        assert_eq!(classify(&hit(Some("hospital"), "Anything")), PlaceType::Hospital);
        assert_eq!(classify(&hit(Some("police"), "Pizza Palace")), PlaceType::Police);
        assert_eq!(
            classify(&hit(Some("gasStation"), "City Hospital")),
            PlaceType::GasStation
        );
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(classify(&hit(None, "Joe's Pharmacy")), PlaceType::Pharmacy);
        assert_eq!(classify(&hit(None, "Downtown Cafe")), PlaceType::Restaurant);
        assert_eq!(classify(&hit(None, "Kids Pediatric Clinic")), PlaceType::Hospital);
        assert_eq!(classify(&hit(None, "Shell Fuel")), PlaceType::GasStation);
        assert_eq!(classify(&hit(None, "Whole Foods Supermarket")), PlaceType::Restaurant);
        assert_eq!(classify(&hit(None, "Safeway Supermarket")), PlaceType::Grocery);
        assert_eq!(classify(&hit(None, "Corner Mini Market")), PlaceType::Convenience);
    }

    #[test]
    fn test_rule_order_first_hit_wins() {
        // "station" is checked before "gas"
        assert_eq!(classify(&hit(None, "Gas Station")), PlaceType::FireStation);
        // hospital keywords come before police
        assert_eq!(
            classify(&hit(None, "Police Emergency Line")),
            PlaceType::Hospital
        );
    }

    #[test]
    fn test_food_market_sub_rules() {
        assert_eq!(
            classify(&hit(Some("foodMarket"), "QuickMart Convenience")),
            PlaceType::Convenience
        );
        assert_eq!(
            classify(&hit(Some("foodMarket"), "Lucky Supermarket")),
            PlaceType::Grocery
        );
        assert_eq!(
            classify(&hit(Some("foodMarket"), "Farmers Market")),
            PlaceType::Convenience
        );
        // name rules outside the food-market list do not apply here
        assert_eq!(
            classify(&hit(Some("foodMarket"), "Hospital Deli")),
            PlaceType::Restaurant
        );
    }

    #[test]
    fn test_unrouted_categories_use_name() {
        assert_eq!(
            classify(&hit(Some("pharmacy"), "Walgreens")),
            PlaceType::Other
        );
        assert_eq!(
            classify(&hit(Some("fireStation"), "Engine Co. 12")),
            PlaceType::Other
        );
        assert_eq!(
            classify(&hit(Some("nightlife"), "Sunset Cafe")),
            PlaceType::Restaurant
        );
    }

    #[test]
    fn test_empty_or_absent_name_is_other() {
        assert_eq!(classify(&hit(None, "")), PlaceType::Other);
        assert_eq!(classify(&RawPlaceResult::default()), PlaceType::Other);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify(&hit(None, "ST. MARY HOSPITAL")), PlaceType::Hospital);
        assert_eq!(classify(&hit(None, "7-Eleven")), PlaceType::Convenience);
    }

    #[test]
    fn test_classify_all() {
        let places = classify_all(vec![
            RawPlaceResult::new("County Hospital")
                .with_coordinate(LatLng::new(37.0, -122.0))
                .with_phone("(408) 555-0100"),
            RawPlaceResult::new("No Coordinate Cafe"),
            RawPlaceResult::new("")
                .with_category("foodMarket")
                .with_coordinate(LatLng::new(37.1, -122.1))
                .with_phone(" "),
        ]);

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].place_type, PlaceType::Hospital);
        assert_eq!(places[0].address, "");
        assert_eq!(places[1].place_type, PlaceType::Restaurant);
        // only a missing phone falls back to N/A
        assert_eq!(places[1].phone.as_deref(), Some(" "));
        assert_eq!(places[1].dial_uri(), None);
    }
}
