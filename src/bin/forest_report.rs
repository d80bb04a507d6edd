//! Forest Status Report
//!
//! Decodes a forest snapshot and a species list, joins them, and prints
//! per-plant status, colors, and care advice plus the garden overview.
//!
//! Run with: cargo run --bin forest_report [forest.json species.json]
//!
//! Both files are raw API responses (`{"data": ...}` envelopes). With no
//! arguments the built-in sample forest is used. Set FOREST_LANG=nl for
//! Dutch output; RUST_LOG controls log verbosity as usual.

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use forest_monitor::api::{attach_species, decode_forest, decode_species_list};
use forest_monitor::i18n::{advice_text, category_text, status_text, Language};
use forest_monitor::model::{Forest, PlantCategory, Species};
use forest_monitor::sample;
use forest_monitor::status::{color_for, evaluate, plant_status, StatusLabel};
use forest_monitor::advice::care_advice;

fn load_inputs() -> Result<(Forest, Vec<Species>)> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(forest_path), Some(species_path)) => {
            let forest_body = fs::read_to_string(&forest_path)
                .with_context(|| format!("reading forest snapshot {forest_path}"))?;
            let species_body = fs::read_to_string(&species_path)
                .with_context(|| format!("reading species list {species_path}"))?;
            let forest = decode_forest(&forest_body)
                .with_context(|| format!("decoding forest snapshot {forest_path}"))?;
            let species = decode_species_list(&species_body)
                .with_context(|| format!("decoding species list {species_path}"))?;
            Ok((forest, species))
        }
        _ => {
            println!("No snapshot paths given; using the built-in sample forest.");
            Ok((sample::sample_forest(), sample::sample_species()))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lang = std::env::var("FOREST_LANG")
        .ok()
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default();

    let (mut forest, species) = load_inputs()?;
    attach_species(&mut forest, &species);

    let forest_name = forest.name.as_deref().unwrap_or("(unnamed forest)");
    println!();
    println!("=== {} ===", forest_name);
    println!();

    for plant in &forest.plants {
        let name = plant.display_name().unwrap_or("(unnamed plant)");
        let backend = plant_status(plant);
        println!("{name}");
        println!(
            "  reported:  {} [{}]",
            status_text(backend, lang),
            color_for(backend).css_var()
        );

        match (plant.latest_reading(), plant.species.as_ref()) {
            (Some(reading), Some(species)) => {
                let report = evaluate(reading, &species.range);
                println!(
                    "  measured:  {} ({} of {} checks out of range)",
                    status_text(report.status, lang),
                    report.out_of_range,
                    report.checks.len()
                );
                for key in care_advice(reading, &species.range) {
                    println!("  - {}", advice_text(key, lang));
                }
            }
            _ => println!("  measured:  {}", status_text(StatusLabel::Unknown, lang)),
        }
        println!();
    }

    let counts = forest.category_counts();
    println!("=== Overview ===");
    println!(
        "  {}: {}",
        category_text(PlantCategory::Tree, lang),
        counts.trees
    );
    println!(
        "  {}: {}",
        category_text(PlantCategory::Shrub, lang),
        counts.shrubs
    );
    println!(
        "  {}: {}",
        category_text(PlantCategory::Herb, lang),
        counts.herbs
    );
    println!(
        "  {}: {}",
        category_text(PlantCategory::Vegetable, lang),
        counts.vegetables
    );
    if counts.uncategorized > 0 {
        println!("  (uncategorized: {})", counts.uncategorized);
    }
    println!("  Total: {}", counts.total());

    Ok(())
}
