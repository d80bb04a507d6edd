//! Display preferences and list filters.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::model::{Plant, PlantCategory};
use crate::status::{classify, plant_status, StatusLabel};

use super::backend::StateBackend;

const THEME_KEY: &str = "theme";
const LANGUAGE_KEY: &str = "language";
const FOREST_KEY: &str = "selectedForestId";

/// Dashboard color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Which categories and statuses the list and map views show.
///
/// Defaults to everything visible. A plant whose species carries no
/// category always passes the category filter - there is nothing to
/// filter it on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: Vec<PlantCategory>,
    pub statuses: Vec<StatusLabel>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            categories: PlantCategory::ALL.to_vec(),
            statuses: StatusLabel::ALL.to_vec(),
        }
    }
}

impl FilterSelection {
    /// Display status used for filtering: the backend's decision when it
    /// sent one, else recomputed from the latest reading and the species
    /// bands.
    pub fn display_status(plant: &Plant) -> StatusLabel {
        match plant_status(plant) {
            StatusLabel::Unknown => classify(
                plant.latest_reading(),
                plant.species.as_ref().map(|s| &s.range),
            ),
            decided => decided,
        }
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        let category_ok = match plant.species.as_ref().and_then(|s| s.category) {
            Some(category) => self.categories.contains(&category),
            None => true,
        };
        category_ok && self.statuses.contains(&Self::display_status(plant))
    }

    /// Plants that pass the current selection, in input order.
    pub fn apply<'a>(&self, plants: &'a [Plant]) -> Vec<&'a Plant> {
        plants.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Display preferences container: theme, language, and the forest the
/// dashboard is looking at.
///
/// Each setter persists its key immediately. Filters are session-scoped
/// and intentionally not persisted.
#[derive(Debug)]
pub struct Preferences<B: StateBackend> {
    backend: B,
    theme: Theme,
    language: Language,
    selected_forest_id: String,
    filters: FilterSelection,
}

impl<B: StateBackend> Preferences<B> {
    /// Load persisted preferences; anything missing or unreadable falls
    /// back to its default (light, English, forest "1").
    pub fn load(backend: B) -> Self {
        let theme = backend
            .read(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_code)
            .unwrap_or_default();
        let language = backend
            .read(LANGUAGE_KEY)
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default();
        let selected_forest_id = backend
            .read(FOREST_KEY)
            .unwrap_or_else(|| "1".to_string());

        Self {
            backend,
            theme,
            language,
            selected_forest_id,
            filters: FilterSelection::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.backend.write(THEME_KEY, theme.as_code());
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.backend.write(LANGUAGE_KEY, language.as_code());
    }

    pub fn selected_forest_id(&self) -> &str {
        &self.selected_forest_id
    }

    pub fn set_selected_forest(&mut self, forest_id: impl Into<String>) {
        self.selected_forest_id = forest_id.into();
        self.backend.write(FOREST_KEY, &self.selected_forest_id);
    }

    /// Hand the backend back, e.g. to reload a fresh container over it.
    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSelection) {
        self.filters = filters;
    }
}
