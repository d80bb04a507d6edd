//! Forest containers, overview counts, and community messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plant::Plant;
use super::species::PlantCategory;

/// A food forest with its plants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forest {
    pub id: i64,
    pub name: Option<String>,

    #[serde(default)]
    pub plants: Vec<Plant>,
}

impl Forest {
    /// Per-category totals for the garden overview.
    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for plant in &self.plants {
            match plant.species.as_ref().and_then(|s| s.category) {
                Some(PlantCategory::Tree) => counts.trees += 1,
                Some(PlantCategory::Shrub) => counts.shrubs += 1,
                Some(PlantCategory::Herb) => counts.herbs += 1,
                Some(PlantCategory::Vegetable) => counts.vegetables += 1,
                None => counts.uncategorized += 1,
            }
        }
        counts
    }
}

/// Garden overview totals per plant category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub trees: usize,
    pub shrubs: usize,
    pub herbs: usize,
    pub vegetables: usize,
    pub uncategorized: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.trees + self.shrubs + self.herbs + self.vegetables + self.uncategorized
    }
}

/// A community message posted on a forest's board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub content: Option<String>,
    pub author: Option<String>,
    pub food_forest_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
