use std::cell::{Cell, RefCell};

use anyhow::anyhow;

use super::*;
use crate::core::{
    CITATION_CLASS, CITEKEYS_ATTR, ClickedElement, LINK_CLASS, SPELL_ERROR_CLASS, TITLE_ATTR,
    TargetType,
};
use crate::i18n::{Locale, keys};
use crate::menu::MenuBuilder;
use crate::services::testing::Fixture;

/// Editor callbacks that record what they were asked to do.
struct Editor {
    commands: Rc<RefCell<Vec<String>>>,
    replacements: Rc<RefCell<Vec<String>>>,
}

impl Editor {
    fn new() -> Self {
        Self {
            commands: Rc::default(),
            replacements: Rc::default(),
        }
    }

    fn callbacks(&self) -> EditorCallbacks {
        let commands = self.commands.clone();
        let replacements = self.replacements.clone();
        EditorCallbacks::new(
            move |cmd| commands.borrow_mut().push(cmd.to_string()),
            move |text| replacements.borrow_mut().push(text.to_string()),
        )
    }

    fn untouched(&self) -> bool {
        self.commands.borrow().is_empty() && self.replacements.borrow().is_empty()
    }
}

fn session_for(fx: &Fixture, target: TargetType, element: Option<&ClickedElement>) -> MenuSession {
    MenuBuilder::new(&Locale::En, fx.services.spelling.as_ref())
        .build(target, element, false)
        .unwrap()
        .unwrap()
        .session
}

fn counting_close() -> (CloseHandle, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (CloseHandle::new(move || c.set(c.get() + 1)), count)
}

#[test]
fn suggestion_slot_replaces_with_that_suggestion() {
    let fx = Fixture::new(&["the", "then"]);
    let el = ClickedElement::new("teh").with_class(SPELL_ERROR_CLASS);
    let session = session_for(&fx, TargetType::SpellError, Some(&el));
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::Suggestion(0),
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );

    assert_eq!(outcome, Dispatched::Replaced("the".into()));
    assert_eq!(*editor.replacements.borrow(), ["the"]);
    assert!(editor.commands.borrow().is_empty());
}

#[test]
fn out_of_range_suggestion_is_ignored() {
    let fx = Fixture::new(&["the"]);
    let el = ClickedElement::new("teh").with_class(SPELL_ERROR_CLASS);
    let session = session_for(&fx, TargetType::SpellError, Some(&el));
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::Suggestion(5),
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );
    assert_eq!(outcome, Dispatched::Ignored);
    assert!(editor.untouched());
}

#[test]
fn copy_link_strips_mail_prefix() {
    let fx = Fixture::new(&[]);
    let el = ClickedElement::new("write me")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "mailto:a@b.com");
    let session = session_for(&fx, TargetType::Link, Some(&el));
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::CopyLink,
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );

    assert_eq!(outcome, Dispatched::CopiedLink("a@b.com".into()));
    assert!(fx.log.lines().contains(&"clipboard a@b.com".to_string()));
    assert!(editor.untouched());
}

#[test]
fn open_link_uses_raw_url() {
    let fx = Fixture::new(&[]);
    let el = ClickedElement::new("site")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "https://example.org");
    let session = session_for(&fx, TargetType::Link, Some(&el));
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::OpenLink,
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );

    assert_eq!(outcome, Dispatched::OpenedLink("https://example.org".into()));
    assert!(fx.log.lines().contains(&"open https://example.org".to_string()));
}

#[test]
fn template_entry_runs_its_command() {
    let fx = Fixture::new(&[]);
    let session = session_for(&fx, TargetType::Text, None);
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::Action(keys::ITALIC.into()),
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );

    assert_eq!(outcome, Dispatched::Command("markdownItalic".into()));
    assert_eq!(*editor.commands.borrow(), ["markdownItalic"]);
}

#[test]
fn unknown_id_is_a_no_op() {
    let fx = Fixture::new(&[]);
    let session = session_for(&fx, TargetType::Text, None);
    let editor = Editor::new();

    for id in [
        EntryId::Action("menu.does_not_exist".into()),
        EntryId::CopyLink,
        EntryId::OpenLink,
    ] {
        let outcome = dispatch(&id, &session, &editor.callbacks(), &fx.services, None);
        assert_eq!(outcome, Dispatched::Ignored);
    }
    assert!(editor.untouched());
    assert!(fx.log.is_empty());
}

#[test]
fn dictionary_add_adds_the_word() {
    let fx = Fixture::new(&[]);
    let el = ClickedElement::new("Zettelkasten").with_class(SPELL_ERROR_CLASS);
    let session = session_for(&fx, TargetType::SpellError, Some(&el));
    let editor = Editor::new();

    let outcome = dispatch(
        &EntryId::DictionaryAdd("Zettelkasten".into()),
        &session,
        &editor.callbacks(),
        &fx.services,
        None,
    );

    assert_eq!(outcome, Dispatched::AddedToDictionary("Zettelkasten".into()));
    assert_eq!(
        fx.log.lines(),
        ["suggest Zettelkasten", "dictionary Zettelkasten"]
    );
    assert!(editor.untouched());
}

#[test]
fn attachment_closes_menu_after_lookup_settles() {
    let fx = Fixture::new(&[]);
    let el = ClickedElement::new("(Doe)")
        .with_class(CITATION_CLASS)
        .with_attribute(CITEKEYS_ATTR, "doe2020,roe2021");
    let session = session_for(&fx, TargetType::Citation, Some(&el));
    let editor = Editor::new();
    let (close, closed) = counting_close();

    let outcome = dispatch(
        &EntryId::Attachment("roe2021".into()),
        &session,
        &editor.callbacks(),
        &fx.services,
        Some(close),
    );

    assert_eq!(outcome, Dispatched::AttachmentRequested("roe2021".into()));
    assert_eq!(fx.attachments.pending_count(), 1);
    assert_eq!(closed.get(), 0, "menu stays until the lookup settles");

    fx.attachments.settle(Ok(()));
    assert_eq!(closed.get(), 1);
    assert!(editor.untouched());
}

#[test]
fn failed_attachment_lookup_still_closes_once() {
    let fx = Fixture::new(&[]);
    let el = ClickedElement::new("(Doe)")
        .with_class(CITATION_CLASS)
        .with_attribute(CITEKEYS_ATTR, "doe2020");
    let session = session_for(&fx, TargetType::Citation, Some(&el));
    let (close, closed) = counting_close();

    dispatch(
        &EntryId::Attachment("doe2020".into()),
        &session,
        &Editor::new().callbacks(),
        &fx.services,
        Some(close),
    );
    fx.attachments.settle(Err(anyhow!("no PDF for doe2020")));

    assert_eq!(closed.get(), 1);
    assert_eq!(fx.attachments.pending_count(), 0);
    assert_eq!(
        fx.log.lines(),
        ["attachment doe2020", "settled doe2020"]
    );
}

#[test]
fn ids_from_another_menu_do_not_resolve() {
    let fx = Fixture::new(&[]);
    let link = ClickedElement::new("site")
        .with_class(LINK_CLASS)
        .with_attribute(TITLE_ATTR, "https://example.org");
    let link_session = session_for(&fx, TargetType::Link, Some(&link));
    let text_session = session_for(&fx, TargetType::Text, None);
    let editor = Editor::new();

    // A template id only exists in the text menu.
    let outcome = dispatch(
        &EntryId::Action(keys::BOLD.into()),
        &link_session,
        &editor.callbacks(),
        &fx.services,
        None,
    );
    assert_eq!(outcome, Dispatched::Ignored);

    // And the link actions only in the link menu.
    let outcome = dispatch(
        &EntryId::CopyLink,
        &text_session,
        &editor.callbacks(),
        &fx.services,
        None,
    );
    assert_eq!(outcome, Dispatched::Ignored);
    assert!(editor.untouched());
    assert!(fx.log.is_empty());
}
