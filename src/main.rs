use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use flexi_logger::Logger;

use context_menu::config::{self, AppConfig};
use context_menu::core::{ClickedElement, EntryId, PointerEvent};
use context_menu::i18n::{self, ActiveLocale};
use context_menu::menu::{ContextMenu, EditorCallbacks};
use context_menu::services::{
    AttachmentDone, AttachmentResolver, ClipboardWriter, DictionaryMutator, LinkOpener,
    SelectionController, Services, SpellingProvider, SystemClipboard, TerminalPresenter,
};

/// Prints the editor context menu for a clicked element and replays a choice.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Clicked element as JSON, e.g. '{"classes":["cma"],"attributes":{"title":"mailto:a@b.com"}}'.
    /// Omit for a click on plain text.
    #[arg(value_name = "ELEMENT_JSON")]
    element: Option<String>,

    /// Config file to use instead of ~/.config/context-menu/config.ron
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat the editor as read-only
    #[arg(long)]
    read_only: bool,

    /// Entry id to choose once the menu is shown, e.g. `link:copy`
    #[arg(long, value_name = "ID")]
    choose: Option<String>,

    /// Suggestion offered for misspelled words (repeatable)
    #[arg(long = "suggest", value_name = "WORD")]
    suggestions: Vec<String>,

    /// Pointer position
    #[arg(long, default_value_t = 0.0)]
    x: f64,
    #[arg(long, default_value_t = 0.0)]
    y: f64,

    /// Write the effective config back to disk
    #[arg(long)]
    save_config: bool,
}

/// Spellchecker that offers the words given on the command line.
struct ArgSpelling(Vec<String>);

impl SpellingProvider for ArgSpelling {
    fn suggest(&self, _word: &str) -> Vec<String> {
        self.0.clone()
    }
}

/// Collaborators that report what they would do on stdout.
struct Console;

impl DictionaryMutator for Console {
    fn add_word(&self, word: &str) {
        println!("dictionary: added {word:?}");
    }
}

impl AttachmentResolver for Console {
    fn open_attachment(&self, citekey: &str, done: AttachmentDone) {
        println!("attachment: open {citekey}");
        done(Ok(()));
    }
}

impl SelectionController for Console {
    fn select_contents(&self, element: &ClickedElement) -> anyhow::Result<()> {
        println!("selection: {:?}", element.text);
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        println!("selection: cleared");
        Ok(())
    }
}

impl LinkOpener for Console {
    fn open_url(&self, url: &str) -> anyhow::Result<()> {
        println!("open: {url}");
        Ok(())
    }
}

impl ClipboardWriter for Console {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        println!("clipboard: {text}");
        Ok(())
    }
}

fn load_config(args: &Args) -> AppConfig {
    let config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if args.save_config {
        match &args.config {
            Some(path) => config::save_config_to(path, &config),
            None => config::save_config(&config),
        }
    }
    config
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let config = load_config(&args);
    i18n::set_locale(config.locale());

    let element: Option<ClickedElement> = args
        .element
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .context("ELEMENT_JSON is not a valid element description")?;

    let console = Rc::new(Console);
    let system_clipboard = SystemClipboard::new();
    let clipboard: Rc<dyn ClipboardWriter> = if system_clipboard.is_available() {
        Rc::new(system_clipboard)
    } else {
        console.clone()
    };
    let services = Services {
        spelling: Rc::new(ArgSpelling(args.suggestions.clone())),
        dictionary: console.clone(),
        attachments: console.clone(),
        clipboard,
        selection: console.clone(),
        links: console,
    };

    let mut menu = ContextMenu::new(
        Box::new(ActiveLocale),
        services,
        TerminalPresenter::new(io::stdout()),
    )
    .with_options(config.menu.build_options());

    let callbacks = EditorCallbacks::new(
        |command| println!("command: {command}"),
        |text| println!("replace: {text}"),
    );
    let read_only = args.read_only || config.editor.read_only;
    let event = PointerEvent::new(element, args.x, args.y);
    let select_word = menu.display(&event, read_only, callbacks)?;
    println!("select word under cursor: {select_word}");

    if let Some(raw) = &args.choose {
        let id: EntryId = raw.parse()?;
        if !menu.presenter_mut().choose(id) {
            println!("no menu is open");
        }
    }

    Ok(())
}
