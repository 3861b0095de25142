use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/context-menu/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("context-menu").join("config.ron"))
}

/// Loads the config from the default location, falling back to defaults.
pub fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

/// Loads the config at `path`, falling back to defaults on any error.
pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match ron::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed config {}: {e}", path.display());
            AppConfig::default()
        }
    }
}

/// Persists the config to `path`. Errors are logged and otherwise ignored.
pub fn save_config_to(path: &Path, config: &AppConfig) {
    let Some(dir) = path.parent() else {
        return;
    };
    if let Err(e) = fs::create_dir_all(dir) {
        log::warn!("Cannot create config dir {}: {e}", dir.display());
        return;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(config, pretty) else {
        return;
    };
    if let Err(e) = fs::write(path, serialized) {
        log::warn!("Cannot write config {}: {e}", path.display());
    }
}

/// Persists the config to the default location.
pub fn save_config(config: &AppConfig) {
    if let Some(path) = config_path() {
        save_config_to(&path, config);
    }
}
