use std::fmt;
use std::io::Write;

use crate::core::{EntryId, EntryKind, MenuEntry, Point};

/// Invoked at most once, with the id of the entry the user picked.
pub type ChosenCallback = Box<dyn FnOnce(EntryId)>;

/// Puts a built menu on screen.
///
/// `show` must not block and must not call `on_chosen` before returning;
/// the choice arrives later as its own event. A dismissed menu never calls
/// `on_chosen`.
pub trait MenuPresenter {
    fn show(&mut self, point: Point, entries: &[MenuEntry], on_chosen: ChosenCallback)
    -> CloseHandle;
}

/// Forcibly dismisses a presented menu.
///
/// Closing consumes the handle, so the presentation resource is released at
/// most once. Dropping the handle leaves the menu to the presenter.
pub struct CloseHandle {
    close: Option<Box<dyn FnOnce()>>,
}

impl CloseHandle {
    pub fn new(close: impl FnOnce() + 'static) -> Self {
        Self {
            close: Some(Box::new(close)),
        }
    }

    pub fn noop() -> Self {
        Self { close: None }
    }

    pub fn close(mut self) {
        if let Some(close) = self.close.take() {
            close();
        }
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHandle")
            .field("armed", &self.close.is_some())
            .finish()
    }
}

/// Prints menus as indented text and replays a choice on request.
pub struct TerminalPresenter<W: Write> {
    out: W,
    pending: Option<ChosenCallback>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, pending: None }
    }

    /// Delivers a choice for the menu currently shown. Returns false when no
    /// menu is waiting for one.
    pub fn choose(&mut self, id: EntryId) -> bool {
        match self.pending.take() {
            Some(on_chosen) => {
                on_chosen(id);
                true
            }
            None => false,
        }
    }

    /// Drops the open menu without a choice.
    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MenuPresenter for TerminalPresenter<W> {
    fn show(
        &mut self,
        point: Point,
        entries: &[MenuEntry],
        on_chosen: ChosenCallback,
    ) -> CloseHandle {
        let rendered = render_tree(entries);
        if let Err(e) = write!(self.out, "menu at ({}, {}):\n{rendered}", point.x, point.y) {
            log::warn!("Failed to print menu: {e}");
        }
        self.pending = Some(on_chosen);
        CloseHandle::new(|| log::debug!("terminal menu closed"))
    }
}

/// Renders a menu tree one entry per line, ids in brackets.
pub fn render_tree(entries: &[MenuEntry]) -> String {
    let mut out = String::new();
    render_level(entries, 0, &mut out);
    out
}

fn render_level(entries: &[MenuEntry], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        out.push_str(&indent);
        if entry.kind == EntryKind::Separator {
            out.push_str("--------\n");
            continue;
        }

        let label = entry.label.as_deref().unwrap_or_default();
        if entry.enabled {
            out.push_str(label);
        } else {
            out.push('(');
            out.push_str(label);
            out.push(')');
        }
        if entry.kind == EntryKind::Submenu {
            out.push_str(" >");
        }
        if let Some(accel) = &entry.accelerator {
            out.push_str("  ");
            out.push_str(accel);
        }
        if let Some(id) = &entry.id {
            out.push_str(&format!("  [{id}]"));
        }
        out.push('\n');

        if entry.kind == EntryKind::Submenu {
            render_level(&entry.children, depth + 1, out);
        }
    }
}
