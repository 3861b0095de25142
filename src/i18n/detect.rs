use super::Locale;

/// Detects the OS locale by inspecting environment variables in precedence order:
/// `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`.
///
/// The first non-empty variable decides. `uk*` selects Ukrainian, anything
/// else English.
pub fn detect_locale() -> Locale {
    let vars = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];
    let value = vars
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty());
    locale_from_tag(value.as_deref())
}

/// Maps a POSIX locale tag such as `uk_UA.UTF-8` to a supported locale.
pub fn locale_from_tag(tag: Option<&str>) -> Locale {
    match tag {
        Some(tag) if tag.starts_with("uk") => Locale::Uk,
        _ => Locale::En,
    }
}
