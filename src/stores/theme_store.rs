use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Next theme when the toggle is pressed
    pub fn toggled(self, system_is_dark: bool) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::System if system_is_dark => Theme::Light,
            Theme::System => Theme::Dark,
        }
    }
}

/// Global theme state
pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

const STORAGE_KEY: &str = "gamer_profile_theme";

/// Initialize theme from localStorage or system preference
pub fn init_theme() {
    if let Ok(theme_str) = LocalStorage::get::<String>(STORAGE_KEY) {
        let theme = Theme::parse(&theme_str);
        *THEME.write() = theme;
        log::info!("Loaded theme from storage: {:?}", theme);
    } else {
        *THEME.write() = Theme::System;
        log::info!("Using system theme preference");
    }

    apply_theme();
}

/// Set theme and persist to localStorage
pub fn set_theme(theme: Theme) {
    if *THEME.read() == theme {
        return;
    }

    *THEME.write() = theme;
    LocalStorage::set(STORAGE_KEY, theme.as_str()).ok();
    log::info!("Theme changed to: {:?}", theme);
    apply_theme();
}

/// Apply theme to document
pub fn apply_theme() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let class = if is_dark_mode() { "dark" } else { "" };
            root.set_attribute("class", class).ok();
        }
    }
}

/// Toggle between light and dark themes
pub fn toggle_theme() {
    let current = *THEME.read();
    set_theme(current.toggled(system_prefers_dark()));
}

/// Check if dark mode is active
pub fn is_dark_mode() -> bool {
    match *THEME.read() {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => system_prefers_dark(),
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(match_media)) = window.match_media("(prefers-color-scheme: dark)") {
                return match_media.matches();
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_names() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
        assert_eq!(Theme::parse("solarized"), Theme::System);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(false), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(true), Theme::Light);
        assert_eq!(Theme::System.toggled(true), Theme::Light);
        assert_eq!(Theme::System.toggled(false), Theme::Dark);
    }
}
