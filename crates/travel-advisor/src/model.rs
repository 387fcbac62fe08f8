//! Domain Models
//!
//! Catalog record types for destinations and experiences. Records are loaded
//! once at startup and never mutated; the JSON field names are the dataset
//! contract - renaming or removing one is a breaking change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A travel destination record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Stable record id
    pub id: u32,

    /// Destination name (lookup key, matched case-insensitively)
    pub name: String,

    /// Country the destination belongs to
    pub country: String,

    /// Indicative nightly budget in USD
    pub price: Decimal,

    /// Default hero image
    pub image: String,

    /// Per-persona image variants (persona key -> URL)
    #[serde(default)]
    pub images_category: HashMap<String, String>,

    /// Default one-line description
    pub description: String,

    /// Per-persona description variants (persona key -> text)
    #[serde(default)]
    pub descriptions: HashMap<String, String>,

    /// Overall rating, 0-5
    pub rating: f32,

    /// Relative price level, 1-5
    #[serde(rename = "priceLevel")]
    pub price_level: u8,

    /// Qualitative scores, each 0-5
    pub safety: u8,
    pub weather: u8,
    pub activities: u8,
    #[serde(rename = "familyFriendly")]
    pub family_friendly: u8,
    pub internet: u8,
    pub cost: u8,
    #[serde(rename = "airQuality")]
    pub air_quality: u8,
    pub leisure: u8,
    pub food: u8,
    pub culture: u8,

    /// Traveler profiles this destination suits
    #[serde(default)]
    pub suitability: Vec<String>,

    /// Headline attractions
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A bookable travel experience record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Stable record id
    pub id: u32,

    /// Experience name (lookup key, matched case-insensitively)
    pub name: String,

    /// Country where the experience takes place
    pub country: String,

    /// City or area
    pub city: String,

    /// Price per person in USD
    pub price: Decimal,

    /// Overall rating, 0-5
    pub rating: f32,

    /// Typical duration in hours
    pub duration_hours: f32,

    /// Experience category (e.g., "food", "culture", "adventure")
    pub category: String,

    /// Default description
    pub description: String,

    /// Per-persona description variants (persona key -> text)
    #[serde(default)]
    pub descriptions: HashMap<String, String>,

    /// What the experience includes
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_destination_roundtrips_dataset_field_names() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Bangkok",
            "country": "Thailand",
            "price": 150,
            "image": "https://example.com/bangkok.jpg",
            "images_category": {"family_fun": "https://example.com/family.jpg"},
            "description": "Vibrant capital",
            "descriptions": {"family_fun": "Kids love the tuk-tuks."},
            "rating": 4.5,
            "priceLevel": 2,
            "safety": 4,
            "weather": 3,
            "activities": 5,
            "familyFriendly": 4,
            "internet": 5,
            "cost": 5,
            "airQuality": 2,
            "leisure": 5,
            "food": 5,
            "culture": 5,
            "suitability": ["Local", "Nomad"],
            "highlights": ["Street Food"],
            "tags": ["temples"]
        });

        let dest: Destination = serde_json::from_value(json).unwrap();
        assert_eq!(dest.country, "Thailand");
        assert_eq!(dest.price, dec!(150));
        assert_eq!(dest.price_level, 2);
        assert_eq!(dest.family_friendly, 4);
        assert_eq!(dest.air_quality, 2);

        // camelCase names survive re-serialization
        let out = serde_json::to_value(&dest).unwrap();
        assert!(out.get("priceLevel").is_some());
        assert!(out.get("familyFriendly").is_some());
        assert!(out.get("airQuality").is_some());
    }
}
