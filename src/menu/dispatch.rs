use std::rc::Rc;

use crate::core::EntryId;
use crate::services::{CloseHandle, Services};

use super::session::MenuSession;

/// Editor hooks supplied by the caller of the menu.
#[derive(Clone)]
pub struct EditorCallbacks {
    /// Runs a named editor command, e.g. `markdownBold`.
    pub command: Rc<dyn Fn(&str)>,
    /// Replaces the misspelled word with the given text.
    pub replace: Rc<dyn Fn(&str)>,
}

impl EditorCallbacks {
    pub fn new(command: impl Fn(&str) + 'static, replace: impl Fn(&str) + 'static) -> Self {
        Self {
            command: Rc::new(command),
            replace: Rc::new(replace),
        }
    }
}

/// What a resolved choice ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    Replaced(String),
    AttachmentRequested(String),
    AddedToDictionary(String),
    CopiedLink(String),
    OpenedLink(String),
    Command(String),
    /// Nothing matched: separators, disabled rows, or ids from elsewhere.
    Ignored,
}

/// Resolves the user's choice against the menu it came from.
///
/// `close` is only used by the attachment branch, which dismisses the menu
/// once the lookup settles. Every other branch lets it drop.
pub fn dispatch(
    id: &EntryId,
    session: &MenuSession,
    callbacks: &EditorCallbacks,
    services: &Services,
    close: Option<CloseHandle>,
) -> Dispatched {
    log::debug!("context menu choice: {id}");

    match id {
        EntryId::Suggestion(idx) => {
            let Some(replacement) = session.suggestion(*idx) else {
                log::debug!("suggestion slot {idx} is out of range");
                return Dispatched::Ignored;
            };
            (callbacks.replace)(replacement);
            return Dispatched::Replaced(replacement.to_string());
        }
        EntryId::Attachment(citekey) => {
            let key = citekey.clone();
            services.attachments.open_attachment(
                citekey,
                Box::new(move |result: anyhow::Result<()>| {
                    if let Err(e) = result {
                        log::error!("Could not open attachment for {key}: {e:#}");
                    }
                    if let Some(close) = close {
                        close.close();
                    }
                }),
            );
            return Dispatched::AttachmentRequested(citekey.clone());
        }
        EntryId::DictionaryAdd(word) => {
            services.dictionary.add_word(word);
        }
        _ => {}
    }

    let Some(entry) = session.find(id) else {
        log::debug!("no entry with id {id} in this menu");
        return match id {
            EntryId::DictionaryAdd(word) => Dispatched::AddedToDictionary(word.clone()),
            _ => Dispatched::Ignored,
        };
    };

    match entry.id.as_ref() {
        Some(EntryId::CopyLink) => {
            let Some(target) = session.link_target() else {
                return Dispatched::Ignored;
            };
            if let Err(e) = services.clipboard.write_text(target) {
                log::warn!("{e:#}");
            }
            Dispatched::CopiedLink(target.to_string())
        }
        Some(EntryId::OpenLink) => {
            let Some(url) = session.link_url() else {
                return Dispatched::Ignored;
            };
            if let Err(e) = services.links.open_url(url) {
                log::warn!("Failed to open {url}: {e:#}");
            }
            Dispatched::OpenedLink(url.to_string())
        }
        Some(EntryId::DictionaryAdd(word)) => Dispatched::AddedToDictionary(word.clone()),
        _ => match &entry.command {
            Some(command) => {
                (callbacks.command)(command);
                Dispatched::Command(command.clone())
            }
            None => Dispatched::Ignored,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu_dispatch.rs"]
mod tests;
