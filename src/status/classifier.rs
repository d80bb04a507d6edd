//! Band comparison and violation counting.
//!
//! Core logic for checking a reading's values against a species'
//! `[min, max]` bands and turning the violation count into a status label.

use crate::model::{OptimalRange, Quantity, Reading};

use super::label::StatusLabel;

/// Most violations that still classify as `Attention`; above this the
/// plant is `Critical`.
pub const ATTENTION_MAX_VIOLATIONS: usize = 2;

/// Result of comparing one measured value to its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundFit {
    /// Value is below the band (`value < min`)
    BelowRange,

    /// Value is inside the inclusive band (`min <= value <= max`)
    WithinRange,

    /// Value exceeds the band (`value > max`)
    AboveRange,
}

impl BoundFit {
    pub fn is_violation(&self) -> bool {
        !matches!(self, BoundFit::WithinRange)
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            BoundFit::BelowRange => "Below optimal range",
            BoundFit::WithinRange => "Within optimal range",
            BoundFit::AboveRange => "Above optimal range",
        }
    }
}

/// One quantity's comparison result with distance context.
#[derive(Debug, Clone)]
pub struct QuantityCheck {
    pub quantity: Quantity,

    /// Whether the value is below, within, or above its band
    pub fit: BoundFit,

    /// Measured value being compared
    pub value: f64,

    /// Band boundaries
    pub min: f64,
    pub max: f64,

    /// Distance from the nearest boundary (0 if within the band)
    pub distance_outside: f64,

    /// Distance as a fraction of the band width (`max - min`);
    /// 0.0 if within the band
    pub distance_fraction: f64,
}

impl QuantityCheck {
    pub fn is_within_range(&self) -> bool {
        self.fit == BoundFit::WithinRange
    }
}

/// Compare one measured value against its `[min, max]` band.
///
/// Comparisons are strict, so a value exactly on a boundary is within the
/// band. `NaN` compares false against both bounds and therefore always
/// lands within range; that mirrors the backend and is deliberate.
pub fn check_bounds(quantity: Quantity, value: f64, min: f64, max: f64) -> QuantityCheck {
    let band_width = (max - min).max(0.001); // Avoid division by zero

    let (fit, distance) = if value < min {
        (BoundFit::BelowRange, min - value)
    } else if value > max {
        (BoundFit::AboveRange, value - max)
    } else {
        (BoundFit::WithinRange, 0.0)
    };

    QuantityCheck {
        quantity,
        fit,
        value,
        min,
        max,
        distance_outside: distance,
        distance_fraction: distance / band_width,
    }
}

/// Full classification result for one reading against one range.
#[derive(Debug, Clone)]
pub struct ConditionReport {
    /// Per-quantity results, in the classifier's fixed order. Quantities
    /// with an incomplete band or no measured value are skipped, not
    /// reported.
    pub checks: Vec<QuantityCheck>,

    /// How many checked quantities fell outside their band
    pub out_of_range: usize,

    pub status: StatusLabel,
}

/// Classify a reading against a species' bands.
///
/// An absent reading or range classifies as `Unknown` - missing input is
/// a degraded answer, never an error.
pub fn classify(reading: Option<&Reading>, range: Option<&OptimalRange>) -> StatusLabel {
    match (reading, range) {
        (Some(reading), Some(range)) => evaluate(reading, range).status,
        _ => StatusLabel::Unknown,
    }
}

/// Classify with per-quantity detail kept for advice and display.
///
/// Checks temperature, humidity, soil moisture, and sunlight, in that
/// order. A quantity with either bound missing is unconstrained and never
/// counts as a violation; so is a quantity the reading did not measure.
pub fn evaluate(reading: &Reading, range: &OptimalRange) -> ConditionReport {
    let mut checks = Vec::with_capacity(Quantity::CLASSIFIED.len());

    for quantity in Quantity::CLASSIFIED {
        let (Some(min), Some(max)) = range.bounds(quantity) else {
            continue;
        };
        let Some(value) = reading.value(quantity) else {
            continue;
        };
        checks.push(check_bounds(quantity, value, min, max));
    }

    let out_of_range = checks.iter().filter(|c| c.fit.is_violation()).count();

    let status = if out_of_range == 0 {
        StatusLabel::Good
    } else if out_of_range <= ATTENTION_MAX_VIOLATIONS {
        StatusLabel::Attention
    } else {
        StatusLabel::Critical
    };

    ConditionReport {
        checks,
        out_of_range,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Band set used across the scenario tests:
    /// temperature [15,30], humidity [40,80], soil moisture [30,70],
    /// sunlight [5,10].
    fn full_range() -> OptimalRange {
        OptimalRange {
            min_temperature: Some(15.0),
            max_temperature: Some(30.0),
            min_humidity: Some(40.0),
            max_humidity: Some(80.0),
            min_soil_moisture: Some(30.0),
            max_soil_moisture: Some(70.0),
            min_sunlight: Some(5.0),
            max_sunlight: Some(10.0),
            ..OptimalRange::default()
        }
    }

    fn reading(temperature: f64, humidity: f64, soil_moisture: f64, sunlight: f64) -> Reading {
        Reading {
            temperature: Some(temperature),
            humidity: Some(humidity),
            soil_moisture: Some(soil_moisture),
            sunlight: Some(sunlight),
            ..Reading::default()
        }
    }

    #[test]
    fn test_all_within_range_is_good() {
        let status = classify(Some(&reading(22.0, 60.0, 50.0, 8.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Good);
    }

    #[test]
    fn test_single_violation_is_attention() {
        let status = classify(Some(&reading(35.0, 60.0, 50.0, 8.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Attention);
    }

    #[test]
    fn test_two_violations_is_attention() {
        let status = classify(Some(&reading(35.0, 10.0, 50.0, 8.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Attention);
    }

    #[test]
    fn test_three_violations_is_critical() {
        let status = classify(Some(&reading(35.0, 10.0, 100.0, 8.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Critical);
    }

    #[test]
    fn test_all_violations_is_critical() {
        let status = classify(Some(&reading(50.0, 10.0, 100.0, 0.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Critical);
    }

    #[test]
    fn test_absent_inputs_are_unknown() {
        let range = full_range();
        let snapshot = reading(22.0, 60.0, 50.0, 8.0);
        assert_eq!(classify(None, Some(&range)), StatusLabel::Unknown);
        assert_eq!(classify(Some(&snapshot), None), StatusLabel::Unknown);
        assert_eq!(classify(None, None), StatusLabel::Unknown);
    }

    #[test]
    fn test_boundary_values_are_within_range() {
        // Inclusive band: exactly min or exactly max is not a violation.
        let status = classify(Some(&reading(15.0, 80.0, 30.0, 10.0)), Some(&full_range()));
        assert_eq!(status, StatusLabel::Good);
    }

    #[test]
    fn test_unconstrained_quantity_never_counts() {
        // Humidity band half-open -> humidity is unconstrained, so a wild
        // humidity value changes nothing.
        let mut range = full_range();
        range.max_humidity = None;
        let calm = classify(Some(&reading(22.0, 60.0, 50.0, 8.0)), Some(&range));
        let wild = classify(Some(&reading(22.0, 9999.0, 50.0, 8.0)), Some(&range));
        assert_eq!(calm, StatusLabel::Good);
        assert_eq!(wild, StatusLabel::Good);
    }

    #[test]
    fn test_unmeasured_quantity_never_counts() {
        let snapshot = Reading {
            temperature: Some(50.0),
            ..Reading::default()
        };
        // Only temperature measured and it violates: one violation.
        let report = evaluate(&snapshot, &full_range());
        assert_eq!(report.out_of_range, 1);
        assert_eq!(report.status, StatusLabel::Attention);
        assert_eq!(report.checks.len(), 1);
    }

    #[test]
    fn test_nan_never_counts_as_violation() {
        let snapshot = reading(f64::NAN, 60.0, 50.0, 8.0);
        let report = evaluate(&snapshot, &full_range());
        assert_eq!(report.out_of_range, 0);
        assert_eq!(report.status, StatusLabel::Good);
    }

    #[test]
    fn test_severity_is_monotonic_in_distance() {
        // Pushing one value further outside its band never lowers the tier.
        fn tier(status: StatusLabel) -> u8 {
            match status {
                StatusLabel::Good => 0,
                StatusLabel::Attention => 1,
                StatusLabel::Critical => 2,
                StatusLabel::Unknown => panic!("tier undefined for unknown"),
            }
        }

        let range = full_range();
        let mut previous = 0;
        for temperature in [22.0, 31.0, 40.0, 80.0, 500.0] {
            let status = classify(
                Some(&reading(temperature, 60.0, 50.0, 8.0)),
                Some(&range),
            );
            let current = tier(status);
            assert!(current >= previous, "tier dropped at {temperature}");
            previous = current;
        }
    }

    #[test]
    fn test_inverted_band_degrades_gracefully() {
        // min > max is not validated; everything reads as out of range.
        let mut range = full_range();
        range.min_temperature = Some(30.0);
        range.max_temperature = Some(15.0);
        let status = classify(Some(&reading(22.0, 60.0, 50.0, 8.0)), Some(&range));
        assert_eq!(status, StatusLabel::Attention);
    }

    #[test]
    fn test_check_bounds_distances() {
        // Band 30-70, width 40. Value 90 is 20 outside -> fraction 0.5.
        let check = check_bounds(Quantity::SoilMoisture, 90.0, 30.0, 70.0);
        assert_eq!(check.fit, BoundFit::AboveRange);
        assert_relative_eq!(check.distance_outside, 20.0);
        assert_relative_eq!(check.distance_fraction, 0.5);

        let check = check_bounds(Quantity::SoilMoisture, 20.0, 30.0, 70.0);
        assert_eq!(check.fit, BoundFit::BelowRange);
        assert_relative_eq!(check.distance_outside, 10.0);

        let check = check_bounds(Quantity::SoilMoisture, 50.0, 30.0, 70.0);
        assert!(check.is_within_range());
        assert_relative_eq!(check.distance_outside, 0.0);
    }
}
