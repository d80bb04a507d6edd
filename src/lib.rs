//! Food-forest monitoring engine.
//!
//! The domain core behind a food-forest dashboard: typed records for the
//! remote API's payloads, the condition-status classifier, care-advice
//! derivation, and the small pieces of persistent client state.
//!
//! - `model/`: typed plant, species, forest, and account records
//! - `api/`: the one boundary where untyped JSON becomes those records
//! - `status/`: reading + optimal range -> good/attention/critical/unknown
//! - `advice/`: out-of-range direction -> care message keys
//! - `i18n/`: English/Dutch display texts
//! - `store/`: injectable preference and session containers
//! - `sample`: built-in demo forest for the report binary and tests

pub mod model;
pub mod api;
pub mod status;
pub mod advice;
pub mod i18n;
pub mod store;
pub mod sample;

// Re-export commonly used types
pub use model::{Forest, OptimalRange, Plant, Quantity, Reading, Species};
pub use status::{classify, color_for, plant_status, StatusLabel};
pub use advice::{care_advice, AdviceKey};
pub use i18n::Language;
