//! Typed data model for the monitoring engine.
//!
//! The remote API ships loosely-typed JSON; everything the rest of the crate
//! touches goes through these records instead. Optional wire fields are
//! `Option`s and collections default to empty, so a sparse payload decodes
//! to a sparse record rather than an error.
//!
//! - `reading.rs` - sensor snapshots + the measured `Quantity` vocabulary
//! - `species.rs` - species records and their optimal-range bands
//! - `plant.rs` - plants placed in a forest, with their reading history
//! - `forest.rs` - forest containers, overview counts, community messages
//! - `user.rs` - account records for the session container

pub mod reading;
pub mod species;
pub mod plant;
pub mod forest;
pub mod user;

pub use reading::{Quantity, Reading};
pub use species::{OptimalRange, PlantCategory, Species};
pub use plant::{MaintenanceLevel, Plant, PlantStage};
pub use forest::{CategoryCounts, Forest, Message};
pub use user::{AccountRecord, UserRole};
