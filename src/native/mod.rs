//! Native popup menus through `muda`, shown on a `winit` window.
//!
//! Linux is excluded: muda needs a GTK window there, which winit does not
//! provide.

use std::sync::Arc;

use muda::accelerator::Accelerator;
use muda::{ContextMenu as _, IsMenuItem, Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use winit::window::Window;

use crate::core::{EntryId, EntryKind, MenuEntry, Point};
use crate::services::{ChosenCallback, CloseHandle, MenuPresenter};

/// Converts a menu tree into a native menu plus the ids of its selectable
/// items.
pub fn build_native_menu(entries: &[MenuEntry]) -> (Menu, Vec<(MenuId, EntryId)>) {
    let menu = Menu::new();
    let mut action_map = Vec::new();

    let items = native_items(entries, &mut action_map);
    let refs: Vec<&dyn IsMenuItem> = items.iter().map(|item| &**item).collect();
    if let Err(e) = menu.append_items(&refs) {
        log::warn!("Failed to populate native menu: {e}");
    }

    (menu, action_map)
}

fn native_items(
    entries: &[MenuEntry],
    action_map: &mut Vec<(MenuId, EntryId)>,
) -> Vec<Box<dyn IsMenuItem>> {
    let mut items: Vec<Box<dyn IsMenuItem>> = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.label.as_deref().unwrap_or_default();
        match entry.kind {
            EntryKind::Separator => items.push(Box::new(PredefinedMenuItem::separator())),
            EntryKind::Submenu => {
                let children = native_items(&entry.children, action_map);
                let refs: Vec<&dyn IsMenuItem> =
                    children.iter().map(|item| &**item).collect();
                let submenu = Submenu::with_items(label, entry.enabled, &refs)
                    .unwrap_or_else(|_| Submenu::new(label, entry.enabled));
                items.push(Box::new(submenu));
            }
            EntryKind::Normal => {
                let accelerator = entry
                    .accelerator
                    .as_deref()
                    .and_then(|a| a.parse::<Accelerator>().ok());
                let item = MenuItem::new(label, entry.enabled, accelerator);
                if let Some(id) = &entry.id {
                    action_map.push((item.id().clone(), id.clone()));
                }
                items.push(Box::new(item));
            }
        }
    }
    items
}

struct PendingMenu {
    action_map: Vec<(MenuId, EntryId)>,
    on_chosen: ChosenCallback,
}

/// Presents menus natively. The event loop must call
/// [`NativePresenter::drain_events`] to deliver choices.
pub struct NativePresenter {
    window: Arc<Window>,
    pending: Option<PendingMenu>,
}

impl NativePresenter {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Resolves queued muda events against the open menu.
    pub fn drain_events(&mut self) {
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            let Some(pending) = self.pending.take() else {
                continue;
            };
            match pending.action_map.iter().find(|(id, _)| *id == event.id) {
                Some((_, entry_id)) => {
                    let entry_id = entry_id.clone();
                    (pending.on_chosen)(entry_id);
                }
                None => log::debug!("menu event {:?} matches no open menu", event.id),
            }
        }
    }

    /// Forgets the open menu, e.g. when the window loses focus.
    pub fn dismiss(&mut self) {
        self.pending = None;
    }
}

impl MenuPresenter for NativePresenter {
    fn show(
        &mut self,
        point: Point,
        entries: &[MenuEntry],
        on_chosen: ChosenCallback,
    ) -> CloseHandle {
        let (menu, action_map) = build_native_menu(entries);
        self.pending = Some(PendingMenu {
            action_map,
            on_chosen,
        });
        let position = muda::dpi::Position::Logical(muda::dpi::LogicalPosition::new(point.x, point.y));
        show_context_menu(&self.window, &menu, Some(position));
        // Native context menus dismiss themselves once tracking ends.
        CloseHandle::noop()
    }
}

/// Shows a context menu natively for the given window.
fn show_context_menu(window: &Window, menu: &Menu, position: Option<muda::dpi::Position>) {
    #[cfg(target_os = "windows")]
    {
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
        if let Ok(handle) = window.window_handle() {
            if let RawWindowHandle::Win32(win32) = handle.as_raw() {
                unsafe {
                    menu.show_context_menu_for_hwnd(win32.hwnd.get() as isize, position);
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
        if let Ok(handle) = window.window_handle()
            && let RawWindowHandle::AppKit(appkit) = handle.as_raw()
        {
            unsafe {
                menu.show_context_menu_for_nsview(
                    appkit.ns_view.as_ptr() as *const std::ffi::c_void,
                    position,
                );
            }
        }
    }
}
