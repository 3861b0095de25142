use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Class carried by rendered citation widgets.
pub const CITATION_CLASS: &str = "citeproc-citation";
/// Class carried by rendered link widgets.
pub const LINK_CLASS: &str = "cma";
/// Class the spellchecker overlay puts on misspelled words.
pub const SPELL_ERROR_CLASS: &str = "cm-spell-error";

/// Attribute holding a link's target URL.
pub const TITLE_ATTR: &str = "title";
/// Attribute holding a citation's comma-separated cite keys.
pub const CITEKEYS_ATTR: &str = "data-citekeys";

/// Snapshot of the editor element under the pointer.
///
/// Only the parts the menu cares about are captured: marker classes,
/// attributes, the text content, and whether the element sits inside an
/// image wrapper (`<figure>`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickedElement {
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub inside_figure: bool,
}

impl ClickedElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn in_figure(mut self) -> Self {
        self.inside_figure = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Screen position of the pointer, in window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A secondary-button press inside the editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerEvent {
    pub target: Option<ClickedElement>,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(target: Option<ClickedElement>, x: f64, y: f64) -> Self {
        Self {
            target,
            position: Point { x, y },
        }
    }
}
