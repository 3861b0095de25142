use std::fmt;

use super::element::{CITATION_CLASS, ClickedElement, LINK_CLASS, SPELL_ERROR_CLASS};

/// What kind of editor content was right-clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetType {
    Text,
    Citation,
    Link,
    SpellError,
    Image,
}

impl TargetType {
    /// Classifies the clicked element.
    ///
    /// Markers are checked in priority order: citation, link, spelling
    /// error, enclosing image wrapper. Anything else (including no element
    /// at all) is plain text.
    pub fn classify(element: Option<&ClickedElement>) -> Self {
        let Some(el) = element else {
            return Self::Text;
        };

        if el.has_class(CITATION_CLASS) {
            Self::Citation
        } else if el.has_class(LINK_CLASS) {
            Self::Link
        } else if el.has_class(SPELL_ERROR_CLASS) {
            Self::SpellError
        } else if el.inside_figure {
            Self::Image
        } else {
            Self::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Citation => "citation",
            Self::Link => "link",
            Self::SpellError => "spell-error",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_target.rs"]
mod tests;
