//! Plants placed in a forest, with their reading history.

use serde::{Deserialize, Deserializer, Serialize};

use super::reading::Reading;
use super::species::Species;

/// Growth stage reported with a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantStage {
    Seedling,
    Growing,
    Flowering,
    Fruiting,
    Dormant,
}

impl PlantStage {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "seedling" => Some(PlantStage::Seedling),
            "growing" => Some(PlantStage::Growing),
            "flowering" => Some(PlantStage::Flowering),
            "fruiting" => Some(PlantStage::Fruiting),
            "dormant" => Some(PlantStage::Dormant),
            _ => None,
        }
    }

    pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(PlantStage::from_code))
    }
}

/// How much upkeep a plant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceLevel {
    High,
    Medium,
    Low,
}

impl MaintenanceLevel {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "high" => Some(MaintenanceLevel::High),
            "medium" => Some(MaintenanceLevel::Medium),
            "low" => Some(MaintenanceLevel::Low),
            _ => None,
        }
    }

    pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(MaintenanceLevel::from_code))
    }
}

/// A plant as served by the forest/plant endpoints.
///
/// `conditions` is ordered most-recent-first; index 0 is the latest
/// snapshot. `species` is absent on the wire and filled in by
/// `api::attach_species`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: i64,
    pub name: Option<String>,
    pub species_id: Option<i64>,
    pub food_forest_id: Option<i64>,

    /// Map position in percent of the forest canvas.
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,

    #[serde(default)]
    pub conditions: Vec<Reading>,

    #[serde(default, deserialize_with = "MaintenanceLevel::lenient")]
    pub maintenance: Option<MaintenanceLevel>,

    #[serde(default)]
    pub species: Option<Species>,
}

impl Plant {
    /// Most recent snapshot, if any.
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.conditions.first()
    }

    /// Plant's own name, else its species name.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.species.as_ref().and_then(|s| s.name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_reading_is_first() {
        let plant: Plant = serde_json::from_str(
            r#"{
                "id": 7,
                "speciesId": 3,
                "conditions": [
                    {"temperature": 30, "status": "attention"},
                    {"temperature": 22, "status": "good"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(plant.latest_reading().unwrap().temperature, Some(30.0));
    }

    #[test]
    fn test_missing_conditions_default_empty() {
        let plant: Plant = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(plant.conditions.is_empty());
        assert!(plant.latest_reading().is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_species() {
        let mut plant = Plant {
            id: 1,
            ..Plant::default()
        };
        assert_eq!(plant.display_name(), None);

        plant.species = Some(Species {
            id: 2,
            name: Some("Pear".to_string()),
            ..Species::default()
        });
        assert_eq!(plant.display_name(), Some("Pear"));

        plant.name = Some("Orchard pear, west bed".to_string());
        assert_eq!(plant.display_name(), Some("Orchard pear, west bed"));
    }
}
