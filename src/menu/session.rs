use crate::core::{EntryId, MenuEntry, flatten};

/// Data a built menu needs later, when the user's choice arrives.
///
/// One session belongs to exactly one menu. It moves into that menu's
/// chosen-callback, so a click can never be resolved against another menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuSession {
    entries: Vec<MenuEntry>,
    suggestions: Vec<String>,
    link_url: Option<String>,
    link_target: Option<String>,
}

impl MenuSession {
    pub(crate) fn new(
        tree: &[MenuEntry],
        suggestions: Vec<String>,
        link_url: Option<String>,
        link_target: Option<String>,
    ) -> Self {
        Self {
            entries: flatten(tree),
            suggestions,
            link_url,
            link_target,
        }
    }

    /// Every entry of the menu tree, submenu children included.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn find(&self, id: &EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id.as_ref() == Some(id))
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn suggestion(&self, index: usize) -> Option<&str> {
        self.suggestions.get(index).map(String::as_str)
    }

    /// Raw URL of the clicked link.
    pub fn link_url(&self) -> Option<&str> {
        self.link_url.as_deref()
    }

    /// What "copy link" writes: the URL, or the bare address for `mailto:`.
    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }
}
