use crate::core::{
    CITEKEYS_ATTR, ClickedElement, EntryId, MenuEntry, TITLE_ATTR, TargetType,
};
use crate::error::MenuError;
use crate::i18n::{LabelTranslator, keys};
use crate::services::SpellingProvider;

use super::session::MenuSession;
use super::template::{TemplateEntry, TemplateRegistry};

pub const MAILTO_PREFIX: &str = "mailto:";

/// Build-time knobs that come from configuration rather than the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub show_accelerators: bool,
    /// Upper bound on rendered spelling suggestions; `None` keeps them all.
    pub max_suggestions: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            show_accelerators: true,
            max_suggestions: None,
        }
    }
}

/// Selection change that should accompany opening the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionEffect {
    #[default]
    None,
    /// Select the clicked element's full contents.
    SelectContents,
    /// Drop the active selection.
    Clear,
}

/// A finished menu tree and what goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltMenu {
    pub entries: Vec<MenuEntry>,
    /// Whether the caller should additionally select the word at the cursor.
    pub select_word_under_cursor: bool,
    pub selection: SelectionEffect,
    pub session: MenuSession,
}

/// Assembles the context menu for a classified click.
pub struct MenuBuilder<'a> {
    registry: TemplateRegistry,
    translator: &'a dyn LabelTranslator,
    spelling: &'a dyn SpellingProvider,
    options: BuildOptions,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(translator: &'a dyn LabelTranslator, spelling: &'a dyn SpellingProvider) -> Self {
        Self {
            registry: TemplateRegistry::default(),
            translator,
            spelling,
            options: BuildOptions::default(),
        }
    }

    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the menu for `target`. Image targets have no menu and yield
    /// `Ok(None)`.
    ///
    /// Link, citation and spell-error targets need the clicked element and
    /// its data attributes; without them the build fails with
    /// [`MenuError::InvalidTargetData`].
    pub fn build(
        &self,
        target: TargetType,
        element: Option<&ClickedElement>,
        read_only: bool,
    ) -> Result<Option<BuiltMenu>, MenuError> {
        let base: &[TemplateEntry] = match target {
            TargetType::Image => {
                log::debug!("no context menu for image targets");
                return Ok(None);
            }
            TargetType::Text | TargetType::SpellError => self.registry.text,
            TargetType::Link | TargetType::Citation => &[],
        };

        let mut entries: Vec<MenuEntry> = base
            .iter()
            .map(|template| self.materialize(template, read_only))
            .collect();

        let mut built = BuiltMenu {
            entries: Vec::new(),
            select_word_under_cursor: true,
            selection: SelectionEffect::None,
            session: MenuSession::default(),
        };
        let mut suggestions = Vec::new();
        let mut link_url = None;
        let mut link_target = None;

        match target {
            TargetType::Link => {
                let url = required(element, target, TITLE_ATTR)?;
                built.select_word_under_cursor = false;
                built.selection = SelectionEffect::SelectContents;
                let is_mail = url.starts_with(MAILTO_PREFIX);
                link_target = Some(url.strip_prefix(MAILTO_PREFIX).unwrap_or(url).to_string());
                link_url = Some(url.to_string());
                self.prepend_link_entries(&mut entries, url, is_mail);
            }
            TargetType::Citation => {
                let raw = required(element, target, CITEKEYS_ATTR)?;
                let citekeys = parse_citekeys(raw);
                if citekeys.is_empty() {
                    return Err(MenuError::InvalidTargetData {
                        target,
                        attribute: CITEKEYS_ATTR,
                    });
                }
                built.select_word_under_cursor = false;
                built.selection = SelectionEffect::Clear;
                self.append_citation_entries(&mut entries, &citekeys);
            }
            TargetType::SpellError => {
                let Some(el) = element else {
                    return Err(MenuError::InvalidTargetData {
                        target,
                        attribute: "text",
                    });
                };
                suggestions = self.spelling.suggest(&el.text);
                if let Some(max) = self.options.max_suggestions {
                    suggestions.truncate(max);
                }
                let mut prefix = self.spelling_prefix(&el.text, &suggestions);
                prefix.append(&mut entries);
                entries = prefix;
            }
            TargetType::Text | TargetType::Image => {}
        }

        built.session = MenuSession::new(&entries, suggestions, link_url, link_target);
        built.entries = entries;
        Ok(Some(built))
    }

    fn materialize(&self, template: &TemplateEntry, read_only: bool) -> MenuEntry {
        let disabled = read_only
            && template
                .key
                .is_some_and(|key| self.registry.is_disabled_when_read_only(key));
        MenuEntry {
            id: template.key.map(|key| EntryId::Action(key.to_string())),
            label: template.key.map(|key| self.translator.translate(key)),
            kind: template.kind,
            accelerator: template
                .accelerator
                .filter(|_| self.options.show_accelerators)
                .map(str::to_string),
            command: template.command.map(str::to_string),
            enabled: !disabled,
            children: Vec::new(),
        }
    }

    fn prepend_link_entries(&self, entries: &mut Vec<MenuEntry>, url: &str, is_mail: bool) {
        let copy_key = if is_mail {
            keys::COPY_MAIL
        } else {
            keys::COPY_LINK
        };
        let mut head = vec![
            MenuEntry::notice(url),
            MenuEntry::separator(),
            MenuEntry::item(EntryId::OpenLink, self.translator.translate(keys::OPEN_LINK)),
            MenuEntry::item(EntryId::CopyLink, self.translator.translate(copy_key)),
        ];
        head.append(entries);
        *entries = head;

        // Keep the link actions apart from whatever follows them.
        if entries.len() > 4 {
            entries.insert(4, MenuEntry::separator());
        }
    }

    fn append_citation_entries(&self, entries: &mut Vec<MenuEntry>, citekeys: &[&str]) {
        if !entries.is_empty() {
            entries.push(MenuEntry::separator());
        }
        let children = citekeys
            .iter()
            .map(|key| MenuEntry::item(EntryId::Attachment(key.to_string()), *key))
            .collect();
        entries.push(MenuEntry::submenu(
            self.translator.translate(keys::OPEN_ATTACHMENT),
            children,
        ));
    }

    fn spelling_prefix(&self, word: &str, suggestions: &[String]) -> Vec<MenuEntry> {
        let mut prefix: Vec<MenuEntry> = suggestions
            .iter()
            .enumerate()
            .map(|(idx, s)| MenuEntry::item(EntryId::Suggestion(idx), s.as_str()))
            .collect();
        if prefix.is_empty() {
            prefix.push(MenuEntry::notice(self.translator.translate(keys::NO_SUGGESTIONS)));
        }
        prefix.push(MenuEntry::separator());
        prefix.push(MenuEntry::item(
            EntryId::DictionaryAdd(word.to_string()),
            self.translator.translate(keys::ADD_TO_DICTIONARY),
        ));
        prefix.push(MenuEntry::separator());
        prefix
    }
}

/// Fetches a required attribute of the clicked element.
fn required<'e>(
    element: Option<&'e ClickedElement>,
    target: TargetType,
    attribute: &'static str,
) -> Result<&'e str, MenuError> {
    element
        .and_then(|el| el.attribute(attribute))
        .ok_or(MenuError::InvalidTargetData { target, attribute })
}

/// Splits a `data-citekeys` value into keys, dropping blanks.
pub fn parse_citekeys(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/menu_builder.rs"]
mod tests;
