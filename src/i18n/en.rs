use super::translations::Translations;

static EN: Translations = Translations {
    // --- Formatting ---
    menu_bold: "Bold",
    menu_italic: "Italic",
    menu_insert_link: "Insert Link",
    menu_insert_ol: "Numbered List",
    menu_insert_ul: "Bulleted List",
    menu_insert_tasklist: "Task List",
    formatting_blockquote: "Blockquote",
    formatting_insert_table: "Insert Table",

    // --- Clipboard ---
    menu_cut: "Cut",
    menu_copy: "Copy",
    menu_copy_html: "Copy as HTML",
    menu_paste: "Paste",
    menu_paste_plain: "Paste without Formatting",
    menu_select_all: "Select All",

    // --- Links ---
    menu_open_link: "Open Link",
    menu_copy_link: "Copy Link",
    menu_copy_mail: "Copy Mail",

    // --- Citations ---
    menu_open_attachment: "Open Attachment",

    // --- Spellchecking ---
    menu_no_suggestions: "No suggestions",
    menu_add_to_dictionary: "Add to Dictionary",
};

pub fn translations() -> &'static Translations {
    &EN
}
