use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{ClickedElement, EntryId, PointerEvent, TargetType};
use crate::error::MenuError;
use crate::i18n::LabelTranslator;
use crate::services::{ChosenCallback, CloseHandle, MenuPresenter, SelectionController, Services};

use super::builder::{BuildOptions, MenuBuilder, SelectionEffect};
use super::dispatch::{EditorCallbacks, dispatch};
use super::template::TemplateRegistry;

/// Entry point tying classification, building, presentation and dispatch
/// together for one editor surface.
pub struct ContextMenu<P: MenuPresenter> {
    translator: Box<dyn LabelTranslator>,
    services: Services,
    presenter: P,
    registry: TemplateRegistry,
    options: BuildOptions,
}

impl<P: MenuPresenter> ContextMenu<P> {
    pub fn new(translator: Box<dyn LabelTranslator>, services: Services, presenter: P) -> Self {
        Self {
            translator,
            services,
            presenter,
            registry: TemplateRegistry::default(),
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

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Shows the context menu for a secondary click.
    ///
    /// Returns whether the caller should additionally select the word under
    /// the cursor. Image targets show nothing and return `false`.
    pub fn display(
        &mut self,
        event: &PointerEvent,
        read_only: bool,
        callbacks: EditorCallbacks,
    ) -> Result<bool, MenuError> {
        let element = event.target.as_ref();
        let target = TargetType::classify(element);
        log::debug!("context menu target: {target}");

        let built = MenuBuilder::new(self.translator.as_ref(), self.services.spelling.as_ref())
            .with_registry(self.registry)
            .with_options(self.options)
            .build(target, element, read_only)?;
        let Some(built) = built else {
            return Ok(false);
        };

        apply_selection(self.services.selection.as_ref(), built.selection, element);

        // Filled in once `show` returns; the choice always arrives later.
        let close_slot: Rc<RefCell<Option<CloseHandle>>> = Rc::new(RefCell::new(None));
        let slot = close_slot.clone();
        let session = built.session;
        let services = self.services.clone();
        let on_chosen: ChosenCallback = Box::new(move |id: EntryId| {
            let close = slot.borrow_mut().take();
            dispatch(&id, &session, &callbacks, &services, close);
        });

        let close = self
            .presenter
            .show(event.position, &built.entries, on_chosen);
        *close_slot.borrow_mut() = Some(close);

        Ok(built.select_word_under_cursor)
    }
}

/// Applies the selection change that accompanies the menu. Failures only
/// affect visual feedback and are logged.
pub fn apply_selection(
    controller: &dyn SelectionController,
    effect: SelectionEffect,
    element: Option<&ClickedElement>,
) {
    let result = match (effect, element) {
        (SelectionEffect::SelectContents, Some(el)) => controller.select_contents(el),
        (SelectionEffect::Clear, _) => controller.clear(),
        _ => Ok(()),
    };
    if let Err(e) = result {
        log::debug!("selection change skipped: {e:#}");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/menu_display.rs"]
mod tests;
