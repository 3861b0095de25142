use std::cell::RefCell;

use super::*;
use crate::core::{
    CITATION_CLASS, CITEKEYS_ATTR, LINK_CLASS, MenuEntry, SPELL_ERROR_CLASS, TITLE_ATTR,
};
use crate::i18n::{Locale, keys};
use crate::services::testing::{Fixture, ScriptedPresenter};

fn context_menu(fx: &Fixture) -> ContextMenu<ScriptedPresenter> {
    ContextMenu::new(
        Box::new(Locale::En),
        fx.services.clone(),
        ScriptedPresenter::default(),
    )
}

fn recording_callbacks() -> (EditorCallbacks, Rc<RefCell<Vec<String>>>) {
    let calls: Rc<RefCell<Vec<String>>> = Rc::default();
    let commands = calls.clone();
    let replacements = calls.clone();
    let callbacks = EditorCallbacks::new(
        move |cmd| commands.borrow_mut().push(format!("command {cmd}")),
        move |text| replacements.borrow_mut().push(format!("replace {text}")),
    );
    (callbacks, calls)
}

fn click(target: Option<ClickedElement>) -> PointerEvent {
    PointerEvent::new(target, 120.0, 48.5)
}

#[test]
fn text_click_shows_template_and_selects_word() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let (callbacks, calls) = recording_callbacks();

    let select_word = menu.display(&click(None), false, callbacks).unwrap();

    assert!(select_word);
    let presenter = menu.presenter();
    assert_eq!(presenter.shown.len(), crate::menu::TEXT_TEMPLATE.len());
    let point = presenter.point.unwrap();
    assert_eq!((point.x, point.y), (120.0, 48.5));
    assert!(fx.log.is_empty(), "no selection change for plain text");

    menu.presenter_mut()
        .choose(EntryId::Action(keys::SELECT_ALL.into()));
    assert_eq!(*calls.borrow(), ["command selectAll"]);
}

#[test]
fn image_click_shows_nothing() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let (callbacks, _) = recording_callbacks();
    let figure = ClickedElement::new("").in_figure();

    let select_word = menu.display(&click(Some(figure)), false, callbacks).unwrap();

    assert!(!select_word);
    assert!(!menu.presenter().has_pending());
    assert!(menu.presenter().shown.is_empty());
}

#[test]
fn link_click_selects_contents_and_copies() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let (callbacks, calls) = recording_callbacks();
    let link = ClickedElement::new("mail me")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "mailto:a@b.com");

    let select_word = menu.display(&click(Some(link)), false, callbacks).unwrap();

    assert!(!select_word);
    let shown: Vec<Option<&str>> = menu
        .presenter()
        .shown
        .iter()
        .map(|e: &MenuEntry| e.label.as_deref())
        .collect();
    assert_eq!(
        shown,
        [Some("mailto:a@b.com"), None, Some("Open Link"), Some("Copy Mail")]
    );

    menu.presenter_mut().choose(EntryId::CopyLink);
    assert_eq!(fx.log.lines(), ["select mail me", "clipboard a@b.com"]);
    assert!(calls.borrow().is_empty());
}

#[test]
fn citation_click_clears_selection_and_closes_after_lookup() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let (callbacks, _) = recording_callbacks();
    let citation = ClickedElement::new("(Doe 2020)")
        .with_class(CITATION_CLASS)
        .with_attribute(CITEKEYS_ATTR, "doe2020");

    let select_word = menu.display(&click(Some(citation)), false, callbacks).unwrap();
    assert!(!select_word);

    menu.presenter_mut()
        .choose(EntryId::Attachment("doe2020".into()));
    assert_eq!(menu.presenter().closed.get(), 0);

    fx.attachments.settle(Ok(()));
    assert_eq!(menu.presenter().closed.get(), 1);
    assert_eq!(
        fx.log.lines(),
        ["clear selection", "attachment doe2020", "settled doe2020"]
    );
}

#[test]
fn spell_error_click_replaces_word() {
    let fx = Fixture::new(&["the", "then"]);
    let mut menu = context_menu(&fx);
    let (callbacks, calls) = recording_callbacks();
    let typo = ClickedElement::new("teh").with_class(SPELL_ERROR_CLASS);

    let select_word = menu.display(&click(Some(typo)), true, callbacks).unwrap();
    assert!(select_word);

    menu.presenter_mut().choose(EntryId::Suggestion(1));
    assert_eq!(*calls.borrow(), ["replace then"]);
}

#[test]
fn failing_selection_does_not_abort_the_menu() {
    let fx = Fixture::with_selection_failure(&[], true);
    let mut menu = context_menu(&fx);
    let (callbacks, _) = recording_callbacks();
    let link = ClickedElement::new("site")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "https://example.org");

    let select_word = menu.display(&click(Some(link)), false, callbacks).unwrap();

    assert!(!select_word);
    assert_eq!(menu.presenter().shown.len(), 4);
    assert!(menu.presenter().has_pending());
}

#[test]
fn invalid_target_data_is_reported() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let (callbacks, _) = recording_callbacks();
    let bare_citation = ClickedElement::new("(Doe)").with_class(CITATION_CLASS);

    let err = menu
        .display(&click(Some(bare_citation)), false, callbacks)
        .unwrap_err();
    assert!(matches!(err, MenuError::InvalidTargetData { .. }));
    assert!(!menu.presenter().has_pending());
    assert!(fx.log.is_empty());
}

#[test]
fn each_menu_resolves_against_its_own_session() {
    let fx = Fixture::new(&[]);
    let mut menu = context_menu(&fx);
    let link = ClickedElement::new("site")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "https://example.org");

    let (first, _) = recording_callbacks();
    menu.display(&click(Some(link)), false, first).unwrap();
    // Presenting the next menu replaces the pending one.
    let (second, calls) = recording_callbacks();
    menu.display(&click(None), false, second).unwrap();

    menu.presenter_mut().choose(EntryId::CopyLink);
    assert!(calls.borrow().is_empty());
    assert!(!fx.log.lines().iter().any(|l| l.starts_with("clipboard")));
}

#[test]
fn apply_selection_without_element_is_a_no_op() {
    let fx = Fixture::new(&[]);
    apply_selection(
        fx.services.selection.as_ref(),
        SelectionEffect::SelectContents,
        None,
    );
    apply_selection(fx.services.selection.as_ref(), SelectionEffect::None, None);
    assert!(fx.log.is_empty());
}
