//! Configuration types

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use filterpane_core::{Catalog, ParamMap};

use crate::domain::SearchDomain;

/// Application settings (.filterpane/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    /// Label translations, source text -> display text
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl Settings {
    /// Translator built from the `[translations]` table
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.translations.clone())
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the host-side parameters inspector next to the panel
    #[serde(default = "default_true")]
    pub show_params: bool,

    /// Panel title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_params: true,
            title: default_title(),
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Panel shown on startup
    #[serde(default)]
    pub panel: SearchDomain,

    /// Initial contents of the parameters object
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl SearchSettings {
    pub fn initial_params(&self) -> ParamMap {
        self.params.clone()
    }
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Search filters".to_string()
}
