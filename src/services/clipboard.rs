use std::cell::RefCell;

use anyhow::{Context, bail};

use super::ClipboardWriter;

/// System clipboard backed by `arboard`.
///
/// The clipboard may be unavailable (headless session, no display server);
/// writes then fail instead of panicking.
pub struct SystemClipboard {
    inner: RefCell<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                log::warn!("System clipboard unavailable: {e}");
                None
            }
        };
        Self {
            inner: RefCell::new(inner),
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut guard = self.inner.borrow_mut();
        let Some(clipboard) = guard.as_mut() else {
            bail!("system clipboard unavailable");
        };
        clipboard
            .set_text(text)
            .context("Failed to copy to clipboard")
    }
}
