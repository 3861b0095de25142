use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::menu::BuildOptions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI language; detected from the environment when unset.
    pub language: Option<Locale>,
    pub editor: EditorConfig,
    pub menu: MenuConfig,
}

impl AppConfig {
    pub fn locale(&self) -> Locale {
        self.language.unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub read_only: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub show_accelerators: bool,
    pub max_suggestions: Option<usize>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_accelerators: true,
            max_suggestions: None,
        }
    }
}

impl MenuConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            show_accelerators: self.show_accelerators,
            max_suggestions: self.max_suggestions,
        }
    }
}
