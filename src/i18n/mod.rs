//! Bilingual display texts.
//!
//! Static English/Dutch lookup tables for everything the engine surfaces
//! to people: care advice, status labels, categories, stages, maintenance
//! levels. Page-chrome strings (navigation, buttons) belong to the front
//! end, not here.

use crate::advice::AdviceKey;
use crate::model::{MaintenanceLevel, PlantCategory, PlantStage};
use crate::status::StatusLabel;

/// Display language. Dutch is the garden's home language, English the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}

/// Care-advice sentence for one advice key.
pub fn advice_text(key: AdviceKey, lang: Language) -> &'static str {
    match (key, lang) {
        (AdviceKey::TempTooCold, Language::En) => {
            "Temperature too cold. Move plant to warmer location or provide protection."
        }
        (AdviceKey::TempTooCold, Language::Nl) => {
            "Temperatuur te koud. Verplaats plant naar warmere locatie of bied bescherming."
        }
        (AdviceKey::TempTooHot, Language::En) => {
            "Temperature too hot. Provide shade or increase air circulation."
        }
        (AdviceKey::TempTooHot, Language::Nl) => {
            "Temperatuur te heet. Bied schaduw of verhoog luchtcirculatie."
        }
        (AdviceKey::HumidityTooLow, Language::En) => {
            "Humidity too low. Mist plant regularly or increase water in surrounding soil."
        }
        (AdviceKey::HumidityTooLow, Language::Nl) => {
            "Luchtvochtigheid te laag. Besproei plant regelmatig of verhoog water in omliggende grond."
        }
        (AdviceKey::HumidityTooHigh, Language::En) => {
            "Humidity too high. Improve air circulation to prevent fungal disease."
        }
        (AdviceKey::HumidityTooHigh, Language::Nl) => {
            "Luchtvochtigheid te hoog. Verbeter luchtcirculatie om schimmelziekten te voorkomen."
        }
        (AdviceKey::SoilTooAcidic, Language::En) => {
            "Soil too acidic. Add lime or alkaline materials to raise pH."
        }
        (AdviceKey::SoilTooAcidic, Language::Nl) => {
            "Grond te zuur. Voeg kalk of alkalische materialen toe om pH te verhogen."
        }
        (AdviceKey::SoilTooAlkaline, Language::En) => {
            "Soil too alkaline. Add sulfur or acidifying materials to lower pH."
        }
        (AdviceKey::SoilTooAlkaline, Language::Nl) => {
            "Grond te alkalisch. Voeg zwavel of verzurende materialen toe om pH te verlagen."
        }
        (AdviceKey::SoilTooDry, Language::En) => "Soil too dry. Water more frequently and deeply.",
        (AdviceKey::SoilTooDry, Language::Nl) => "Grond te droog. Water vaker en dieper.",
        (AdviceKey::SoilTooWet, Language::En) => {
            "Soil too wet. Reduce watering and improve drainage."
        }
        (AdviceKey::SoilTooWet, Language::Nl) => {
            "Grond te nat. Verminder water geven en verbeter drainage."
        }
        (AdviceKey::NotEnoughSun, Language::En) => {
            "Not enough sunlight. Move plant to a sunnier location if possible."
        }
        (AdviceKey::NotEnoughSun, Language::Nl) => {
            "Onvoldoende zonlicht. Verplaats plant naar zonnigere locatie indien mogelijk."
        }
        (AdviceKey::TooMuchSun, Language::En) => {
            "Too much direct sun. Provide partial shade during intense afternoon heat."
        }
        (AdviceKey::TooMuchSun, Language::Nl) => {
            "Te veel direct zonlicht. Bied gedeeltelijke schaduw tijdens intense middaghitte."
        }
        (AdviceKey::Optimal, Language::En) => {
            "All conditions are optimal. Continue current care routine."
        }
        (AdviceKey::Optimal, Language::Nl) => {
            "Alle omstandigheden zijn optimaal. Blijf de huidige verzorging voortzetten."
        }
    }
}

/// Status badge text.
pub fn status_text(status: StatusLabel, lang: Language) -> &'static str {
    match (status, lang) {
        (StatusLabel::Good, Language::En) => "Optimal",
        (StatusLabel::Good, Language::Nl) => "Optimaal",
        (StatusLabel::Attention, Language::En) => "Needs Attention",
        (StatusLabel::Attention, Language::Nl) => "Aandacht Nodig",
        (StatusLabel::Critical, Language::En) => "Critical",
        (StatusLabel::Critical, Language::Nl) => "Kritiek",
        (StatusLabel::Unknown, Language::En) => "Unknown",
        (StatusLabel::Unknown, Language::Nl) => "Onbekend",
    }
}

/// Garden-overview label for one category (plural, as the overview shows).
pub fn category_text(category: PlantCategory, lang: Language) -> &'static str {
    match (category, lang) {
        (PlantCategory::Tree, Language::En) => "Trees",
        (PlantCategory::Tree, Language::Nl) => "Bomen",
        (PlantCategory::Shrub, Language::En) => "Shrubs",
        (PlantCategory::Shrub, Language::Nl) => "Struiken",
        (PlantCategory::Herb, Language::En) => "Herbs",
        (PlantCategory::Herb, Language::Nl) => "Kruiden",
        (PlantCategory::Vegetable, Language::En) => "Vegetables",
        (PlantCategory::Vegetable, Language::Nl) => "Groenten",
    }
}

/// Growth-stage text.
pub fn stage_text(stage: PlantStage, lang: Language) -> &'static str {
    match (stage, lang) {
        (PlantStage::Seedling, Language::En) => "Seedling",
        (PlantStage::Seedling, Language::Nl) => "Zaailing",
        (PlantStage::Growing, Language::En) => "Growing",
        (PlantStage::Growing, Language::Nl) => "Groeiend",
        (PlantStage::Flowering, Language::En) => "Flowering",
        (PlantStage::Flowering, Language::Nl) => "Bloeiend",
        (PlantStage::Fruiting, Language::En) => "Fruiting",
        (PlantStage::Fruiting, Language::Nl) => "Vruchtdragend",
        (PlantStage::Dormant, Language::En) => "Dormant",
        (PlantStage::Dormant, Language::Nl) => "Rustend",
    }
}

/// Maintenance-level text.
pub fn maintenance_text(level: MaintenanceLevel, lang: Language) -> &'static str {
    match (level, lang) {
        (MaintenanceLevel::High, Language::En) => "High",
        (MaintenanceLevel::High, Language::Nl) => "Hoog",
        (MaintenanceLevel::Medium, Language::En) => "Medium",
        (MaintenanceLevel::Medium, Language::Nl) => "Gemiddeld",
        (MaintenanceLevel::Low, Language::En) => "Low",
        (MaintenanceLevel::Low, Language::Nl) => "Laag",
    }
}
