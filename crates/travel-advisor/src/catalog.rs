//! Catalog Store
//!
//! Read-only accessor over the destination and experience collections.
//! Data is parsed once at startup; lookups are keyed, case-insensitive
//! exact-name matches and never mutate the backing records.

use std::collections::HashMap;

use crate::error::{Result, TravelError};
use crate::model::{Destination, Experience};

const DESTINATIONS_JSON: &str = include_str!("../data/destinations.json");
const EXPERIENCES_JSON: &str = include_str!("../data/experiences.json");

/// In-memory catalog with name-keyed indexes
#[derive(Debug)]
pub struct CatalogStore {
    destinations: Vec<Destination>,
    experiences: Vec<Experience>,
    destination_index: HashMap<String, usize>,
    experience_index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Build from already-parsed records. Duplicate names in either
    /// collection are a dataset defect and fail construction.
    pub fn from_records(
        destinations: Vec<Destination>,
        experiences: Vec<Experience>,
    ) -> Result<Self> {
        let destination_index = build_index(destinations.iter().map(|d| d.name.as_str()))?;
        let experience_index = build_index(experiences.iter().map(|e| e.name.as_str()))?;

        Ok(Self {
            destinations,
            experiences,
            destination_index,
            experience_index,
        })
    }

    /// Parse both collections from JSON text
    pub fn from_json(destinations: &str, experiences: &str) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(destinations)
            .map_err(|e| TravelError::Config(format!("malformed destinations dataset: {}", e)))?;
        let experiences: Vec<Experience> = serde_json::from_str(experiences)
            .map_err(|e| TravelError::Config(format!("malformed experiences dataset: {}", e)))?;

        Self::from_records(destinations, experiences)
    }

    /// Load the dataset bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(DESTINATIONS_JSON, EXPERIENCES_JSON)
    }

    /// Look up a destination by name (case-insensitive)
    pub fn get_destination(&self, name: &str) -> Result<&Destination> {
        self.destination_index
            .get(&normalize(name))
            .map(|&i| &self.destinations[i])
            .ok_or_else(|| TravelError::NotFound(name.trim().to_string()))
    }

    /// Look up an experience by name (case-insensitive)
    pub fn get_experience(&self, name: &str) -> Result<&Experience> {
        self.experience_index
            .get(&normalize(name))
            .map(|&i| &self.experiences[i])
            .ok_or_else(|| TravelError::NotFound(name.trim().to_string()))
    }

    /// All experiences, in dataset order
    pub fn list_experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    pub fn experience_count(&self) -> usize {
        self.experiences.len()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn build_index<'a>(names: impl Iterator<Item = &'a str>) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (i, name) in names.enumerate() {
        if index.insert(normalize(name), i).is_some() {
            return Err(TravelError::Config(format!(
                "duplicate catalog record name: '{}'",
                name
            )));
        }
    }
    Ok(index)
}
