//! The API decode boundary.
//!
//! The remote API wraps every success payload as `{ "data": ... }` and
//! every failure as `{ "message": ... }`. This module is the one place
//! where that untyped JSON becomes the typed records in `model`; past it,
//! nothing in the crate touches raw JSON or null-checks wire fields.
//!
//! - `envelope.rs` - `{data}`/`{message}` unwrapping + `ApiError`
//! - `decode.rs` - typed decode functions and the plant->species join

pub mod envelope;
pub mod decode;

pub use envelope::{decode_envelope, ApiError};
pub use decode::{
    attach_species, decode_forest, decode_forest_list, decode_message_list, decode_plant,
    decode_species, decode_species_list,
};
