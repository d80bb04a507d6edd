//! Typed decode functions and the plant->species join.

use rustc_hash::FxHashMap;

use crate::model::{Forest, Message, Plant, Species};

use super::envelope::{decode_envelope, ApiError};

/// Decode `GET /forests/:id` - one forest with its plants.
pub fn decode_forest(body: &str) -> Result<Forest, ApiError> {
    decode_envelope(body)
}

/// Decode `GET /forests` - every forest, plants included.
pub fn decode_forest_list(body: &str) -> Result<Vec<Forest>, ApiError> {
    decode_envelope(body)
}

/// Decode `GET /species/:id`.
pub fn decode_species(body: &str) -> Result<Species, ApiError> {
    decode_envelope(body)
}

/// Decode `GET /species`.
pub fn decode_species_list(body: &str) -> Result<Vec<Species>, ApiError> {
    decode_envelope(body)
}

/// Decode `GET /plants/:id`.
pub fn decode_plant(body: &str) -> Result<Plant, ApiError> {
    decode_envelope(body)
}

/// Decode `GET /messages` or `GET /forests/:id/messages`.
pub fn decode_message_list(body: &str) -> Result<Vec<Message>, ApiError> {
    decode_envelope(body)
}

/// Join each plant in a forest to its species record.
///
/// Every view needs `plant.species` populated (names, categories, optimal
/// ranges), but the wire keeps only `speciesId`. Plants referencing a
/// species that is not in the list keep `species: None` and the view
/// degrades to unknown status for them.
pub fn attach_species(forest: &mut Forest, species: &[Species]) {
    let by_id: FxHashMap<i64, &Species> = species.iter().map(|s| (s.id, s)).collect();

    for plant in &mut forest.plants {
        let Some(species_id) = plant.species_id else {
            tracing::warn!(plant_id = plant.id, "plant carries no species id");
            continue;
        };
        match by_id.get(&species_id) {
            Some(found) => plant.species = Some((*found).clone()),
            None => {
                tracing::warn!(
                    plant_id = plant.id,
                    species_id,
                    "plant references a species the API did not return"
                );
            }
        }
    }
}
