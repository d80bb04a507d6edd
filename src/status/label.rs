//! Status vocabulary and backend-label normalization.

use serde::{Deserialize, Serialize};

use crate::model::Plant;

/// Coarse health classification for a plant.
///
/// `Good` is the canonical name; display vocabulary surfaces it as
/// "Optimal". `Unknown` means the inputs needed to decide were missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    Good,
    Attention,
    Critical,
    Unknown,
}

impl StatusLabel {
    pub const ALL: [StatusLabel; 4] = [
        StatusLabel::Good,
        StatusLabel::Attention,
        StatusLabel::Critical,
        StatusLabel::Unknown,
    ];

    /// Canonical lowercase form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Good => "good",
            StatusLabel::Attention => "attention",
            StatusLabel::Critical => "critical",
            StatusLabel::Unknown => "unknown",
        }
    }

    /// English display form; `Good` surfaces as "Optimal".
    pub fn display_text(&self) -> &'static str {
        match self {
            StatusLabel::Good => "Optimal",
            StatusLabel::Attention => "Needs Attention",
            StatusLabel::Critical => "Critical",
            StatusLabel::Unknown => "Unknown",
        }
    }

    /// Normalize a backend-reported status string.
    ///
    /// The backend's `"good"` is our `Good` (displayed "Optimal") and its
    /// `"Unknown"` is our `Unknown`; everything else is case-folded into
    /// the vocabulary. A value outside the vocabulary normalizes to
    /// `Unknown` here at the boundary - its display color is unchanged,
    /// since unknown and unrecognized both take the critical token.
    pub fn from_backend(raw: &str) -> StatusLabel {
        if raw == "good" {
            return StatusLabel::Good;
        }
        if raw == "Unknown" {
            return StatusLabel::Unknown;
        }
        match raw.to_lowercase().as_str() {
            "good" | "optimal" => StatusLabel::Good,
            "attention" => StatusLabel::Attention,
            "critical" => StatusLabel::Critical,
            _ => StatusLabel::Unknown,
        }
    }
}

/// Status the backend already decided for a plant's latest snapshot.
///
/// This is vocabulary translation only; it never recomputes from the raw
/// numbers (that is `classify`'s job). A plant with no snapshots, or a
/// snapshot without a status field, is `Unknown`.
pub fn plant_status(plant: &Plant) -> StatusLabel {
    match plant.latest_reading().and_then(|r| r.status.as_deref()) {
        Some(raw) if !raw.is_empty() => StatusLabel::from_backend(raw),
        _ => StatusLabel::Unknown,
    }
}
