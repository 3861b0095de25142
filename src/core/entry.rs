use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;

/// Identifies a menu entry for dispatch once the user picks it.
///
/// Ids carry their payload directly, so resolving a click never has to
/// parse a string. The textual form (`Display`/`FromStr`) exists for
/// presenters that can only round-trip plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryId {
    /// Position of a spelling suggestion in the session's suggestion list.
    Suggestion(usize),
    /// Citation key whose attachment should be opened.
    Attachment(String),
    /// Misspelled word to add to the user dictionary.
    DictionaryAdd(String),
    /// Template entry, identified by its translation key.
    Action(String),
    OpenLink,
    CopyLink,
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suggestion(idx) => write!(f, "suggestion:{idx}"),
            Self::Attachment(key) => write!(f, "citekey:{key}"),
            Self::DictionaryAdd(word) => write!(f, "typo-add:{word}"),
            Self::Action(key) => write!(f, "action:{key}"),
            Self::OpenLink => f.write_str("link:open"),
            Self::CopyLink => f.write_str("link:copy"),
        }
    }
}

impl FromStr for EntryId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MenuError::UnknownEntryId(s.to_string());
        let (tag, payload) = s.split_once(':').ok_or_else(unknown)?;
        match tag {
            "suggestion" => payload
                .parse()
                .map(Self::Suggestion)
                .map_err(|_| unknown()),
            "citekey" => Ok(Self::Attachment(payload.to_string())),
            "typo-add" => Ok(Self::DictionaryAdd(payload.to_string())),
            "action" => Ok(Self::Action(payload.to_string())),
            "link" => match payload {
                "open" => Ok(Self::OpenLink),
                "copy" => Ok(Self::CopyLink),
                _ => Err(unknown()),
            },
            _ => Err(unknown()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Normal,
    Separator,
    Submenu,
}

/// One row of a built context menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: Option<EntryId>,
    pub label: Option<String>,
    pub kind: EntryKind,
    /// Display-only shortcut hint, e.g. `CmdOrCtrl+B`.
    pub accelerator: Option<String>,
    /// Editor command run when this entry is chosen.
    pub command: Option<String>,
    pub enabled: bool,
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// An enabled, selectable entry.
    pub fn item(id: EntryId, label: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            label: Some(label.into()),
            kind: EntryKind::Normal,
            accelerator: None,
            command: None,
            enabled: true,
            children: Vec::new(),
        }
    }

    /// A disabled row with no id, shown for information only.
    pub fn notice(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: Some(label.into()),
            kind: EntryKind::Normal,
            accelerator: None,
            command: None,
            enabled: false,
            children: Vec::new(),
        }
    }

    pub fn separator() -> Self {
        Self {
            id: None,
            label: None,
            kind: EntryKind::Separator,
            accelerator: None,
            command: None,
            enabled: true,
            children: Vec::new(),
        }
    }

    pub fn submenu(label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        Self {
            id: None,
            label: Some(label.into()),
            kind: EntryKind::Submenu,
            accelerator: None,
            command: None,
            enabled: true,
            children,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == EntryKind::Separator
    }
}

/// Depth-first copy of every entry in the tree, submenu children included.
///
/// Submenu entries keep their children in the flattened copy; callers only
/// use the result for id lookup.
pub fn flatten(entries: &[MenuEntry]) -> Vec<MenuEntry> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        out.push(entry.clone());
        if !entry.children.is_empty() {
            out.extend(flatten(&entry.children));
        }
    }
    out
}
