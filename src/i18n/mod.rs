mod detect;
mod en;
mod translations;
mod uk;

use std::sync::{OnceLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

pub use detect::{detect_locale, locale_from_tag};
pub use translations::{Translations, keys};

/// Languages the menu labels ship in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Uk,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Uk];

    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => en::translations(),
            Locale::Uk => uk::translations(),
        }
    }

    /// Picks the locale from the usual POSIX environment variables.
    pub fn detect() -> Self {
        detect_locale()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::detect()
    }
}

static ACTIVE: OnceLock<RwLock<Locale>> = OnceLock::new();

fn active() -> &'static RwLock<Locale> {
    ACTIVE.get_or_init(|| RwLock::new(Locale::default()))
}

/// Locale most recently passed to [`set_locale`], or the detected one.
pub fn active_locale() -> Locale {
    *active().read().unwrap_or_else(PoisonError::into_inner)
}

/// Strings of the active locale.
pub fn t() -> &'static Translations {
    active_locale().translations()
}

pub fn set_locale(locale: Locale) {
    debug_assert!(locale.translations().all_non_empty());
    *active().write().unwrap_or_else(PoisonError::into_inner) = locale;
    log::debug!("menu locale set to {locale:?}");
}

/// Maps a translation key to a display string.
pub trait LabelTranslator {
    fn translate(&self, key: &str) -> String;
}

/// Unknown keys translate to themselves so a missing string is visible
/// rather than blank.
impl LabelTranslator for Translations {
    fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}

impl LabelTranslator for Locale {
    fn translate(&self, key: &str) -> String {
        self.translations().translate(key)
    }
}

/// Follows whatever locale `set_locale` last activated.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveLocale;

impl LabelTranslator for ActiveLocale {
    fn translate(&self, key: &str) -> String {
        t().translate(key)
    }
}

impl<F> LabelTranslator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}
