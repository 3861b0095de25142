/// Translation keys used by the editor context menu.
pub mod keys {
    pub const BOLD: &str = "menu.bold";
    pub const ITALIC: &str = "menu.italic";
    pub const INSERT_LINK: &str = "menu.insert_link";
    pub const INSERT_OL: &str = "menu.insert_ol";
    pub const INSERT_UL: &str = "menu.insert_ul";
    pub const INSERT_TASKLIST: &str = "menu.insert_tasklist";
    pub const BLOCKQUOTE: &str = "gui.formatting.blockquote";
    pub const INSERT_TABLE: &str = "gui.formatting.insert_table";
    pub const CUT: &str = "menu.cut";
    pub const COPY: &str = "menu.copy";
    pub const COPY_HTML: &str = "menu.copy_html";
    pub const PASTE: &str = "menu.paste";
    pub const PASTE_PLAIN: &str = "menu.paste_plain";
    pub const SELECT_ALL: &str = "menu.select_all";

    pub const OPEN_LINK: &str = "menu.open_link";
    pub const COPY_LINK: &str = "menu.copy_link";
    pub const COPY_MAIL: &str = "menu.copy_mail";
    pub const OPEN_ATTACHMENT: &str = "menu.open_attachment";
    pub const NO_SUGGESTIONS: &str = "menu.no_suggestions";
    pub const ADD_TO_DICTIONARY: &str = "menu.add_to_dictionary";
}

/// All user-facing strings of the editor context menu.
///
/// Fields are grouped by area: formatting, clipboard, link, citation and
/// spellchecking entries.
pub struct Translations {
    // --- Formatting ---
    pub menu_bold: &'static str,
    pub menu_italic: &'static str,
    pub menu_insert_link: &'static str,
    pub menu_insert_ol: &'static str,
    pub menu_insert_ul: &'static str,
    pub menu_insert_tasklist: &'static str,
    pub formatting_blockquote: &'static str,
    pub formatting_insert_table: &'static str,

    // --- Clipboard ---
    pub menu_cut: &'static str,
    pub menu_copy: &'static str,
    pub menu_copy_html: &'static str,
    pub menu_paste: &'static str,
    pub menu_paste_plain: &'static str,
    pub menu_select_all: &'static str,

    // --- Links ---
    pub menu_open_link: &'static str,
    pub menu_copy_link: &'static str,
    pub menu_copy_mail: &'static str,

    // --- Citations ---
    pub menu_open_attachment: &'static str,

    // --- Spellchecking ---
    pub menu_no_suggestions: &'static str,
    pub menu_add_to_dictionary: &'static str,
}

impl Translations {
    /// Resolves a translation key to its string in this table.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let s = match key {
            keys::BOLD => self.menu_bold,
            keys::ITALIC => self.menu_italic,
            keys::INSERT_LINK => self.menu_insert_link,
            keys::INSERT_OL => self.menu_insert_ol,
            keys::INSERT_UL => self.menu_insert_ul,
            keys::INSERT_TASKLIST => self.menu_insert_tasklist,
            keys::BLOCKQUOTE => self.formatting_blockquote,
            keys::INSERT_TABLE => self.formatting_insert_table,
            keys::CUT => self.menu_cut,
            keys::COPY => self.menu_copy,
            keys::COPY_HTML => self.menu_copy_html,
            keys::PASTE => self.menu_paste,
            keys::PASTE_PLAIN => self.menu_paste_plain,
            keys::SELECT_ALL => self.menu_select_all,
            keys::OPEN_LINK => self.menu_open_link,
            keys::COPY_LINK => self.menu_copy_link,
            keys::COPY_MAIL => self.menu_copy_mail,
            keys::OPEN_ATTACHMENT => self.menu_open_attachment,
            keys::NO_SUGGESTIONS => self.menu_no_suggestions,
            keys::ADD_TO_DICTIONARY => self.menu_add_to_dictionary,
            _ => return None,
        };
        Some(s)
    }

    /// Returns true when every field holds a non-empty string.
    pub fn all_non_empty(&self) -> bool {
        [
            self.menu_bold,
            self.menu_italic,
            self.menu_insert_link,
            self.menu_insert_ol,
            self.menu_insert_ul,
            self.menu_insert_tasklist,
            self.formatting_blockquote,
            self.formatting_insert_table,
            self.menu_cut,
            self.menu_copy,
            self.menu_copy_html,
            self.menu_paste,
            self.menu_paste_plain,
            self.menu_select_all,
            self.menu_open_link,
            self.menu_copy_link,
            self.menu_copy_mail,
            self.menu_open_attachment,
            self.menu_no_suggestions,
            self.menu_add_to_dictionary,
        ]
        .iter()
        .all(|s| !s.is_empty())
    }
}
