//! Dark/light theme state and persisted preference.
//!
//! The active theme is a plain CSS class on the app root
//! (`theme-light` / `theme-dark`); the stylesheet swaps variable blocks
//! under those selectors. Preference storage is best-effort: browser
//! localStorage on wasm, a small file under the user config dir on
//! native. Failures to persist are ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

const STORAGE_KEY: &str = "parkpulse-theme";

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Stored preference, if any. Absence means "follow the default".
pub fn load_preference() -> Option<Theme> {
    read_raw().as_deref().and_then(Theme::from_str)
}

/// Persist the preference. Best effort only.
pub fn store_preference(theme: Theme) {
    write_raw(theme.as_str());
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn write_raw(value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn preference_path() -> Option<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "parkpulse", "parkpulse")?;
    Some(dirs.config_dir().join("theme"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Option<String> {
    std::fs::read_to_string(preference_path()?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(value: &str) {
    if let Some(path) = preference_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn css_class_matches_stylesheet_selectors() {
        assert_eq!(Theme::Light.css_class(), "theme-light");
        assert_eq!(Theme::Dark.css_class(), "theme-dark");
    }

    #[test]
    fn round_trips_through_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }
}
