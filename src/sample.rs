//! Built-in sample forest.
//!
//! A small hand-written dataset for the report binary and integration
//! tests: four species and four plants, one of them in visible trouble.
//! Plants come unjoined (species id only), the way the forest endpoint
//! serves them.

use crate::model::{Forest, OptimalRange, Plant, PlantStage, Reading, Species};

fn species(
    id: i64,
    name: &str,
    scientific_name: &str,
    category: &str,
    range: OptimalRange,
) -> Species {
    Species {
        id,
        name: Some(name.to_string()),
        scientific_name: Some(scientific_name.to_string()),
        category: crate::model::PlantCategory::from_code(category),
        range,
        ..Species::default()
    }
}

/// Sample species list, as `GET /species` would return it.
pub fn sample_species() -> Vec<Species> {
    vec![
        species(
            1,
            "Apple Tree",
            "Malus domestica",
            "tree",
            OptimalRange {
                min_temperature: Some(15.0),
                max_temperature: Some(25.0),
                min_humidity: Some(50.0),
                max_humidity: Some(70.0),
                min_soil_moisture: Some(40.0),
                max_soil_moisture: Some(60.0),
                min_sunlight: Some(6.0),
                max_sunlight: Some(8.0),
                min_soil_ph: Some(6.0),
                max_soil_ph: Some(7.0),
            },
        ),
        species(
            2,
            "Blueberry Bush",
            "Vaccinium corymbosum",
            "shrub",
            OptimalRange {
                min_temperature: Some(18.0),
                max_temperature: Some(26.0),
                min_humidity: Some(60.0),
                max_humidity: Some(80.0),
                min_soil_moisture: Some(60.0),
                max_soil_moisture: Some(80.0),
                min_sunlight: Some(6.0),
                max_sunlight: Some(8.0),
                min_soil_ph: Some(4.5),
                max_soil_ph: Some(5.5),
            },
        ),
        species(
            3,
            "Rosemary",
            "Rosmarinus officinalis",
            "herb",
            OptimalRange {
                min_temperature: Some(15.0),
                max_temperature: Some(28.0),
                min_humidity: Some(40.0),
                max_humidity: Some(60.0),
                min_soil_moisture: Some(20.0),
                max_soil_moisture: Some(40.0),
                min_sunlight: Some(6.0),
                max_sunlight: Some(8.0),
                min_soil_ph: Some(6.0),
                max_soil_ph: Some(7.5),
            },
        ),
        species(
            4,
            "Tomato",
            "Solanum lycopersicum",
            "vegetable",
            OptimalRange {
                min_temperature: Some(20.0),
                max_temperature: Some(30.0),
                min_humidity: Some(60.0),
                max_humidity: Some(80.0),
                min_soil_moisture: Some(60.0),
                max_soil_moisture: Some(80.0),
                min_sunlight: Some(6.0),
                max_sunlight: Some(8.0),
                min_soil_ph: Some(6.0),
                max_soil_ph: Some(6.8),
            },
        ),
    ]
}

fn plant(id: i64, species_id: i64, pos: (f64, f64), reading: Reading) -> Plant {
    Plant {
        id,
        species_id: Some(species_id),
        food_forest_id: Some(1),
        pos_x: Some(pos.0),
        pos_y: Some(pos.1),
        conditions: vec![reading],
        ..Plant::default()
    }
}

/// Sample forest, as `GET /forests/1` would return it.
///
/// The tomato is deliberately failing on every band; the blueberry's
/// backend status disagrees with what its numbers say (dry soil), which
/// is exactly the case the two status operations exist to distinguish.
pub fn sample_forest() -> Forest {
    Forest {
        id: 1,
        name: Some("Food Garden".to_string()),
        plants: vec![
            plant(
                10,
                1,
                (25.0, 30.0),
                Reading {
                    temperature: Some(22.0),
                    humidity: Some(58.0),
                    soil_moisture: Some(52.0),
                    sunlight: Some(7.0),
                    soil_ph: Some(6.5),
                    harvest_days: Some(45),
                    stage: Some(PlantStage::Fruiting),
                    status: Some("good".to_string()),
                    ..Reading::default()
                },
            ),
            plant(
                11,
                2,
                (45.0, 55.0),
                Reading {
                    temperature: Some(24.0),
                    humidity: Some(72.0),
                    soil_moisture: Some(45.0),
                    sunlight: Some(7.0),
                    soil_ph: Some(5.8),
                    harvest_days: Some(21),
                    stage: Some(PlantStage::Fruiting),
                    status: Some("good".to_string()),
                    ..Reading::default()
                },
            ),
            plant(
                12,
                3,
                (70.0, 40.0),
                Reading {
                    temperature: Some(26.0),
                    humidity: Some(48.0),
                    soil_moisture: Some(32.0),
                    sunlight: Some(8.0),
                    soil_ph: Some(6.8),
                    harvest_days: Some(0),
                    stage: Some(PlantStage::Growing),
                    status: Some("good".to_string()),
                    ..Reading::default()
                },
            ),
            plant(
                13,
                4,
                (60.0, 70.0),
                Reading {
                    temperature: Some(12.0),
                    humidity: Some(35.0),
                    soil_moisture: Some(25.0),
                    sunlight: Some(4.0),
                    soil_ph: Some(5.2),
                    harvest_days: Some(60),
                    stage: Some(PlantStage::Flowering),
                    status: Some("critical".to_string()),
                    ..Reading::default()
                },
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::attach_species;
    use crate::status::{classify, plant_status, StatusLabel};

    #[test]
    fn test_sample_joins_cleanly() {
        let mut forest = sample_forest();
        attach_species(&mut forest, &sample_species());
        assert!(forest.plants.iter().all(|p| p.species.is_some()));
    }

    #[test]
    fn test_tomato_is_critical_both_ways() {
        let mut forest = sample_forest();
        attach_species(&mut forest, &sample_species());
        let tomato = &forest.plants[3];
        assert_eq!(plant_status(tomato), StatusLabel::Critical);
        assert_eq!(
            classify(
                tomato.latest_reading(),
                tomato.species.as_ref().map(|s| &s.range)
            ),
            StatusLabel::Critical
        );
    }
}
