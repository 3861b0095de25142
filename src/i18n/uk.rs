use super::translations::Translations;

static UK: Translations = Translations {
    // --- Formatting ---
    menu_bold: "Жирний",
    menu_italic: "Курсив",
    menu_insert_link: "Вставити посилання",
    menu_insert_ol: "Нумерований список",
    menu_insert_ul: "Маркований список",
    menu_insert_tasklist: "Список завдань",
    formatting_blockquote: "Цитата",
    formatting_insert_table: "Вставити таблицю",

    // --- Clipboard ---
    menu_cut: "Вирізати",
    menu_copy: "Копіювати",
    menu_copy_html: "Копіювати як HTML",
    menu_paste: "Вставити",
    menu_paste_plain: "Вставити без форматування",
    menu_select_all: "Виділити все",

    // --- Links ---
    menu_open_link: "Відкрити посилання",
    menu_copy_link: "Копіювати посилання",
    menu_copy_mail: "Копіювати адресу",

    // --- Citations ---
    menu_open_attachment: "Відкрити вкладення",

    // --- Spellchecking ---
    menu_no_suggestions: "Немає варіантів",
    menu_add_to_dictionary: "Додати до словника",
};

pub fn translations() -> &'static Translations {
    &UK
}
