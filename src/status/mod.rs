//! Condition-status classification.
//!
//! Turns a plant's latest sensor snapshot and its species' optimal-range
//! bands into a coarse health status by counting how many measured values
//! fall outside their band.
//!
//! ## Key Concept
//! There are two distinct questions here, answered by two distinct
//! operations that must not be merged:
//! - `classify` - what do the raw numbers say right now?
//! - `plant_status` - what did the backend already decide? (vocabulary
//!   translation only, no recomputation)
//!
//! ## Architecture
//! - `classifier.rs` - band comparison + violation counting (`classify`,
//!   `evaluate`, `check_bounds`)
//! - `label.rs` - `StatusLabel` vocabulary + backend-label normalization
//! - `color.rs` - status -> display color token lookup

pub mod classifier;
pub mod label;
pub mod color;

pub use classifier::{
    check_bounds, classify, evaluate, BoundFit, ConditionReport, QuantityCheck,
    ATTENTION_MAX_VIOLATIONS,
};
pub use label::{plant_status, StatusLabel};
pub use color::{color_for, ColorToken};
