//! Static catalog of the generic text-editing entries.
//!
//! Entries are data: adding a row here is enough for it to show up in every
//! text and spell-error menu.

use crate::core::EntryKind;
use crate::i18n::keys;

/// Definition of one template row, keyed by translation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateEntry {
    pub key: Option<&'static str>,
    pub kind: EntryKind,
    pub accelerator: Option<&'static str>,
    pub command: Option<&'static str>,
}

impl TemplateEntry {
    pub const SEPARATOR: TemplateEntry = TemplateEntry {
        key: None,
        kind: EntryKind::Separator,
        accelerator: None,
        command: None,
    };

    pub const fn action(key: &'static str, command: &'static str) -> Self {
        Self {
            key: Some(key),
            kind: EntryKind::Normal,
            accelerator: None,
            command: Some(command),
        }
    }

    pub const fn with_accelerator(mut self, accelerator: &'static str) -> Self {
        self.accelerator = Some(accelerator);
        self
    }
}

pub static TEXT_TEMPLATE: &[TemplateEntry] = &[
    TemplateEntry::action(keys::BOLD, "markdownBold").with_accelerator("CmdOrCtrl+B"),
    TemplateEntry::action(keys::ITALIC, "markdownItalic").with_accelerator("CmdOrCtrl+I"),
    TemplateEntry::SEPARATOR,
    TemplateEntry::action(keys::INSERT_LINK, "markdownLink").with_accelerator("CmdOrCtrl+K"),
    TemplateEntry::action(keys::INSERT_OL, "markdownMakeOrderedList"),
    TemplateEntry::action(keys::INSERT_UL, "markdownMakeUnorderedList"),
    TemplateEntry::action(keys::INSERT_TASKLIST, "markdownMakeTaskList")
        .with_accelerator("CmdOrCtrl+T"),
    TemplateEntry::action(keys::BLOCKQUOTE, "markdownBlockquote"),
    TemplateEntry::action(keys::INSERT_TABLE, "markdownInsertTable"),
    TemplateEntry::SEPARATOR,
    TemplateEntry::action(keys::CUT, "cut").with_accelerator("CmdOrCtrl+X"),
    TemplateEntry::action(keys::COPY, "copy").with_accelerator("CmdOrCtrl+C"),
    TemplateEntry::action(keys::COPY_HTML, "copyAsHTML").with_accelerator("CmdOrCtrl+Alt+C"),
    TemplateEntry::action(keys::PASTE, "paste").with_accelerator("CmdOrCtrl+V"),
    TemplateEntry::action(keys::PASTE_PLAIN, "pasteAsPlain").with_accelerator("CmdOrCtrl+Shift+V"),
    TemplateEntry::SEPARATOR,
    TemplateEntry::action(keys::SELECT_ALL, "selectAll").with_accelerator("CmdOrCtrl+A"),
];

/// Keys whose entries modify the document and are disabled while read-only.
pub static READ_ONLY_DISABLED: &[&str] = &[
    keys::BOLD,
    keys::ITALIC,
    keys::INSERT_LINK,
    keys::INSERT_OL,
    keys::INSERT_UL,
    keys::INSERT_TASKLIST,
    keys::BLOCKQUOTE,
    keys::INSERT_TABLE,
    keys::CUT,
    keys::PASTE,
    keys::PASTE_PLAIN,
];

/// Template rows plus the keys to disable in read-only mode.
#[derive(Clone, Copy, Debug)]
pub struct TemplateRegistry {
    pub text: &'static [TemplateEntry],
    pub read_only_disabled: &'static [&'static str],
}

impl TemplateRegistry {
    pub const fn new(
        text: &'static [TemplateEntry],
        read_only_disabled: &'static [&'static str],
    ) -> Self {
        Self {
            text,
            read_only_disabled,
        }
    }

    pub fn is_disabled_when_read_only(&self, key: &str) -> bool {
        self.read_only_disabled.contains(&key)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new(TEXT_TEMPLATE, READ_ONLY_DISABLED)
    }
}
