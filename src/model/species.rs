//! Species records and their optimal-range bands.

use serde::{Deserialize, Deserializer, Serialize};

use super::reading::Quantity;

/// Coarse plant category used for filtering and the garden overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Tree,
    Shrub,
    Herb,
    Vegetable,
}

impl PlantCategory {
    pub const ALL: [PlantCategory; 4] = [
        PlantCategory::Tree,
        PlantCategory::Shrub,
        PlantCategory::Herb,
        PlantCategory::Vegetable,
    ];

    /// Parse the lowercase wire form; anything else is no category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tree" => Some(PlantCategory::Tree),
            "shrub" => Some(PlantCategory::Shrub),
            "herb" => Some(PlantCategory::Herb),
            "vegetable" => Some(PlantCategory::Vegetable),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            PlantCategory::Tree => "tree",
            PlantCategory::Shrub => "shrub",
            PlantCategory::Herb => "herb",
            PlantCategory::Vegetable => "vegetable",
        }
    }

    pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(PlantCategory::from_code))
    }
}

/// Per-species inclusive `[min, max]` bands for the measured quantities.
///
/// Either bound of a pair may be absent; an incomplete pair means "no
/// constraint" for that quantity. `min <= max` is not validated - an
/// inverted band is not an error, it just classifies most values as
/// out of range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalRange {
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_humidity: Option<f64>,
    pub max_humidity: Option<f64>,
    pub min_soil_moisture: Option<f64>,
    pub max_soil_moisture: Option<f64>,
    pub min_sunlight: Option<f64>,
    pub max_sunlight: Option<f64>,

    // Only present on legacy catalog payloads; advice-only, like the
    // matching reading field.
    #[serde(rename = "minSoilPH")]
    pub min_soil_ph: Option<f64>,
    #[serde(rename = "maxSoilPH")]
    pub max_soil_ph: Option<f64>,
}

impl OptimalRange {
    /// Both bounds for one quantity, in `(min, max)` order.
    pub fn bounds(&self, quantity: Quantity) -> (Option<f64>, Option<f64>) {
        match quantity {
            Quantity::Temperature => (self.min_temperature, self.max_temperature),
            Quantity::Humidity => (self.min_humidity, self.max_humidity),
            Quantity::SoilMoisture => (self.min_soil_moisture, self.max_soil_moisture),
            Quantity::Sunlight => (self.min_sunlight, self.max_sunlight),
            Quantity::SoilPh => (self.min_soil_ph, self.max_soil_ph),
        }
    }
}

/// A species as served by the species endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: i64,
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,

    #[serde(default, deserialize_with = "PlantCategory::lenient")]
    pub category: Option<PlantCategory>,

    /// The min/max band fields sit flat on the species record on the wire.
    #[serde(flatten)]
    pub range: OptimalRange,
}
