//! Sensor readings and the measured-quantity vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plant::PlantStage;

/// A measured quantity on a plant's sensor snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Temperature,
    Humidity,
    SoilMoisture,
    Sunlight,
    /// Carried by legacy payloads and used for care advice; never part of
    /// the status classification.
    SoilPh,
}

impl Quantity {
    /// The four quantities the status classifier checks, in its fixed order.
    pub const CLASSIFIED: [Quantity; 4] = [
        Quantity::Temperature,
        Quantity::Humidity,
        Quantity::SoilMoisture,
        Quantity::Sunlight,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            Quantity::Temperature => "Temperature",
            Quantity::Humidity => "Humidity",
            Quantity::SoilMoisture => "Soil Moisture",
            Quantity::Sunlight => "Sunlight",
            Quantity::SoilPh => "Soil pH",
        }
    }
}

/// One sensor snapshot for one plant.
///
/// Any value the backend did not send is `None`; an absent value never
/// counts against the plant when classifying.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// When the snapshot was taken. Missing on older backend rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<DateTime<Utc>>,

    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub sunlight: Option<f64>,

    /// Legacy field, advice-only.
    #[serde(rename = "soilPH")]
    pub soil_ph: Option<f64>,

    /// Legacy field, not interpreted by this crate.
    pub harvest_days: Option<i64>,

    #[serde(default, deserialize_with = "PlantStage::lenient")]
    pub stage: Option<PlantStage>,

    /// Status the backend already decided for this snapshot, verbatim.
    /// Normalized by `status::plant_status`, never compared raw.
    pub status: Option<String>,
}

impl Reading {
    /// Measured value for one quantity, if the snapshot carries it.
    pub fn value(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Temperature => self.temperature,
            Quantity::Humidity => self.humidity,
            Quantity::SoilMoisture => self.soil_moisture,
            Quantity::Sunlight => self.sunlight,
            Quantity::SoilPh => self.soil_ph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_payload_decodes() {
        let reading: Reading = serde_json::from_str(r#"{"temperature": 21.5}"#).unwrap();
        assert_eq!(reading.temperature, Some(21.5));
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.value(Quantity::Humidity), None);
        assert!(reading.status.is_none());
    }

    #[test]
    fn test_legacy_fields_decode() {
        let reading: Reading = serde_json::from_str(
            r#"{"temperature": 22, "soilPH": 6.5, "harvestDays": 45, "stage": "fruiting", "status": "good"}"#,
        )
        .unwrap();
        assert_eq!(reading.soil_ph, Some(6.5));
        assert_eq!(reading.harvest_days, Some(45));
        assert_eq!(reading.stage, Some(PlantStage::Fruiting));
        assert_eq!(reading.status.as_deref(), Some("good"));
    }

    #[test]
    fn test_unknown_stage_degrades_to_none() {
        let reading: Reading =
            serde_json::from_str(r#"{"stage": "composting"}"#).unwrap();
        assert_eq!(reading.stage, None);
    }

    #[test]
    fn test_classified_order_is_fixed() {
        assert_eq!(
            Quantity::CLASSIFIED,
            [
                Quantity::Temperature,
                Quantity::Humidity,
                Quantity::SoilMoisture,
                Quantity::Sunlight
            ]
        );
    }
}
