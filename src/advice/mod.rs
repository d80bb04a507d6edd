//! Care-advice derivation.
//!
//! Maps the direction of each out-of-range quantity to a concrete care
//! message key. The dashboard shows these next to the status badge; text
//! for each key lives in `i18n`.

use crate::model::{OptimalRange, Quantity, Reading};
use crate::status::{check_bounds, BoundFit};

/// One actionable care message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceKey {
    TempTooCold,
    TempTooHot,
    HumidityTooLow,
    HumidityTooHigh,
    SoilTooAcidic,
    SoilTooAlkaline,
    SoilTooDry,
    SoilTooWet,
    NotEnoughSun,
    TooMuchSun,
    /// Nothing out of range; keep doing what you're doing.
    Optimal,
}

/// Advice display order: the classified quantities plus soil pH, which is
/// advice-only.
const ADVISED: [Quantity; 5] = [
    Quantity::Temperature,
    Quantity::Humidity,
    Quantity::SoilPh,
    Quantity::SoilMoisture,
    Quantity::Sunlight,
];

/// Advice key for one quantity leaving its band in one direction.
fn advice_for(quantity: Quantity, fit: BoundFit) -> Option<AdviceKey> {
    match (quantity, fit) {
        (Quantity::Temperature, BoundFit::BelowRange) => Some(AdviceKey::TempTooCold),
        (Quantity::Temperature, BoundFit::AboveRange) => Some(AdviceKey::TempTooHot),
        (Quantity::Humidity, BoundFit::BelowRange) => Some(AdviceKey::HumidityTooLow),
        (Quantity::Humidity, BoundFit::AboveRange) => Some(AdviceKey::HumidityTooHigh),
        (Quantity::SoilPh, BoundFit::BelowRange) => Some(AdviceKey::SoilTooAcidic),
        (Quantity::SoilPh, BoundFit::AboveRange) => Some(AdviceKey::SoilTooAlkaline),
        (Quantity::SoilMoisture, BoundFit::BelowRange) => Some(AdviceKey::SoilTooDry),
        (Quantity::SoilMoisture, BoundFit::AboveRange) => Some(AdviceKey::SoilTooWet),
        (Quantity::Sunlight, BoundFit::BelowRange) => Some(AdviceKey::NotEnoughSun),
        (Quantity::Sunlight, BoundFit::AboveRange) => Some(AdviceKey::TooMuchSun),
        (_, BoundFit::WithinRange) => None,
    }
}

/// Derive care advice for a reading against a species' bands.
///
/// Quantities with an incomplete band or no measured value yield no
/// advice. When nothing is out of range the single `Optimal` key is
/// returned, so callers always have something to show.
pub fn care_advice(reading: &Reading, range: &OptimalRange) -> Vec<AdviceKey> {
    let mut advice = Vec::new();

    for quantity in ADVISED {
        let (Some(min), Some(max)) = range.bounds(quantity) else {
            continue;
        };
        let Some(value) = reading.value(quantity) else {
            continue;
        };
        if let Some(key) = advice_for(quantity, check_bounds(quantity, value, min, max).fit) {
            advice.push(key);
        }
    }

    if advice.is_empty() {
        advice.push(AdviceKey::Optimal);
    }
    advice
}
