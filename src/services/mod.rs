//! Collaborators the context menu talks to.
//!
//! All of them are supplied by the host editor. The menu only ever calls
//! them from the UI thread, so implementations that need mutation use
//! interior mutability rather than `&mut self`.

mod clipboard;
mod presenter;

use std::rc::Rc;

use crate::core::ClickedElement;

pub use clipboard::SystemClipboard;
pub use presenter::{ChosenCallback, CloseHandle, MenuPresenter, TerminalPresenter};

/// Completion callback for an attachment lookup.
pub type AttachmentDone = Box<dyn FnOnce(anyhow::Result<()>)>;

/// Returns replacement candidates for a misspelled word, best first.
pub trait SpellingProvider {
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Adds words to the user dictionary.
pub trait DictionaryMutator {
    fn add_word(&self, word: &str);
}

/// Opens the file attached to a citation key.
///
/// Resolution may take arbitrary time; `done` runs once it has settled.
pub trait AttachmentResolver {
    fn open_attachment(&self, citekey: &str, done: AttachmentDone);
}

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Controls the editor's active text selection.
pub trait SelectionController {
    fn select_contents(&self, element: &ClickedElement) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Opens URLs in the system's default handler.
pub trait LinkOpener {
    fn open_url(&self, url: &str) -> anyhow::Result<()>;
}

/// Everything the menu needs from the outside world, in one bundle.
#[derive(Clone)]
pub struct Services {
    pub spelling: Rc<dyn SpellingProvider>,
    pub dictionary: Rc<dyn DictionaryMutator>,
    pub attachments: Rc<dyn AttachmentResolver>,
    pub clipboard: Rc<dyn ClipboardWriter>,
    pub selection: Rc<dyn SelectionController>,
    pub links: Rc<dyn LinkOpener>,
}
