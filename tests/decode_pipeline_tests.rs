//! Decode-pipeline integration tests.
//!
//! Runs raw API bodies through the full path the dashboard uses: decode
//! the envelopes, join species onto plants, then classify. Also carries
//! the dataset sanity checks the project has always run against forest
//! snapshots (names resolve, positions don't collide, species join).

use forest_monitor::api::{attach_species, decode_forest, decode_species_list, ApiError};
use forest_monitor::sample::{sample_forest, sample_species};
use forest_monitor::status::{classify, color_for, plant_status, ColorToken, StatusLabel};

/// Species 1 bands: temperature [15,30], humidity [40,80],
/// soil moisture [30,70], sunlight [5,10].
const SPECIES_BODY: &str = r#"{
    "data": [{
        "id": 1,
        "name": "Hazelnut",
        "scientificName": "Corylus avellana",
        "category": "tree",
        "minTemperature": 15, "maxTemperature": 30,
        "minHumidity": 40, "maxHumidity": 80,
        "minSoilMoisture": 30, "maxSoilMoisture": 70,
        "minSunlight": 5, "maxSunlight": 10
    }]
}"#;

fn forest_body(temperature: f64, humidity: f64, soil_moisture: f64, sunlight: f64) -> String {
    format!(
        r#"{{
            "data": {{
                "id": 1,
                "name": "Proeftuin",
                "plants": [{{
                    "id": 100,
                    "speciesId": 1,
                    "posX": 20, "posY": 50,
                    "conditions": [{{
                        "temperature": {temperature},
                        "humidity": {humidity},
                        "soilMoisture": {soil_moisture},
                        "sunlight": {sunlight}
                    }}]
                }}]
            }}
        }}"#
    )
}

fn classify_through_pipeline(body: &str) -> StatusLabel {
    let mut forest = decode_forest(body).unwrap();
    let species = decode_species_list(SPECIES_BODY).unwrap();
    attach_species(&mut forest, &species);

    let plant = &forest.plants[0];
    classify(
        plant.latest_reading(),
        plant.species.as_ref().map(|s| &s.range),
    )
}

#[test]
fn test_scenario_all_in_range_is_good() {
    let status = classify_through_pipeline(&forest_body(22.0, 60.0, 50.0, 8.0));
    assert_eq!(status, StatusLabel::Good);
    assert_eq!(color_for(status), ColorToken::Good);
}

#[test]
fn test_scenario_hot_spell_is_attention() {
    let status = classify_through_pipeline(&forest_body(35.0, 60.0, 50.0, 8.0));
    assert_eq!(status, StatusLabel::Attention);
}

#[test]
fn test_scenario_everything_wrong_is_critical() {
    let status = classify_through_pipeline(&forest_body(50.0, 10.0, 100.0, 0.0));
    assert_eq!(status, StatusLabel::Critical);
}

#[test]
fn test_scenario_unjoined_plant_is_unknown() {
    // The forest references a species the species endpoint never returned.
    let body = r#"{
        "data": {
            "id": 1,
            "plants": [{
                "id": 100,
                "speciesId": 404,
                "conditions": [{"temperature": 22}]
            }]
        }
    }"#;
    let mut forest = decode_forest(body).unwrap();
    let species = decode_species_list(SPECIES_BODY).unwrap();
    attach_species(&mut forest, &species);

    let plant = &forest.plants[0];
    assert!(plant.species.is_none());
    assert_eq!(
        classify(
            plant.latest_reading(),
            plant.species.as_ref().map(|s| &s.range)
        ),
        StatusLabel::Unknown
    );
}

#[test]
fn test_backend_failure_envelope_surfaces_its_message() {
    let err = decode_forest(r#"{"message": "forest 42 not found"}"#).unwrap_err();
    match err {
        ApiError::Backend { message } => assert_eq!(message, "forest 42 not found"),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[test]
fn test_backend_and_measured_status_can_disagree() {
    // The sample blueberry: backend says good, but its soil moisture and
    // humidity numbers say otherwise. The two operations answer different
    // questions and must not be merged.
    let mut forest = sample_forest();
    attach_species(&mut forest, &sample_species());
    let blueberry = &forest.plants[1];

    assert_eq!(plant_status(blueberry), StatusLabel::Good);
    assert_eq!(
        classify(
            blueberry.latest_reading(),
            blueberry.species.as_ref().map(|s| &s.range)
        ),
        StatusLabel::Attention
    );
}

// ============================================================================
// Dataset sanity checks
// ============================================================================

#[test]
fn test_forest_has_plants() {
    let forest = sample_forest();
    assert!(!forest.plants.is_empty());
}

#[test]
fn test_every_plant_resolves_a_name() {
    // Serialize the sample through the wire envelope and decode it back,
    // so the checks run on what a real payload would produce.
    let body = serde_json::json!({ "data": sample_forest() }).to_string();
    let mut forest = decode_forest(&body).unwrap();
    attach_species(&mut forest, &sample_species());

    for plant in &forest.plants {
        assert!(
            plant.display_name().is_some(),
            "plant {} has no name and no species name",
            plant.id
        );
    }
}

#[test]
fn test_no_two_plants_share_a_position() {
    let forest = sample_forest();
    for (i, a) in forest.plants.iter().enumerate() {
        for b in &forest.plants[i + 1..] {
            let same = a.pos_x == b.pos_x && a.pos_y == b.pos_y;
            assert!(
                !same,
                "plants {} and {} share position ({:?}, {:?})",
                a.id, b.id, a.pos_x, a.pos_y
            );
        }
    }
}

#[test]
fn test_every_plant_joins_a_species() {
    let mut forest = sample_forest();
    attach_species(&mut forest, &sample_species());
    for plant in &forest.plants {
        let species = plant
            .species
            .as_ref()
            .unwrap_or_else(|| panic!("plant {} did not join a species", plant.id));
        assert!(species.name.is_some());
    }
}
