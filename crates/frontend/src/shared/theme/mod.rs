//! Theme management module for the application.
//!
//! Единственная персистентная настройка: светлая/тёмная тема в
//! localStorage под ключом `"theme"`. Инициализация: сохранённое
//! значение, иначе системная настройка, иначе светлая.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Имя темы (значение атрибута data-theme и ключа в localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string. Нераспознанное значение — None,
    /// чтобы отличить "не сохранено" от "сохранено light".
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::parse_str(&s))
}

fn os_preferred_theme() -> Option<Theme> {
    let mql = window()?.match_media("(prefers-color-scheme: dark)").ok()??;
    if mql.matches() {
        Some(Theme::Dark)
    } else {
        None
    }
}

/// Правило инициализации: сохранённое значение → системное → светлая.
pub fn initial_theme() -> Theme {
    load_theme_from_storage()
        .or_else(os_preferred_theme)
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Применяет тему атрибутом data-theme на body.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal (подписка — через .get()/.with()).
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = initial_theme();
    let theme = RwSignal::new(initial);
    apply_theme(initial);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_stored_values() {
        assert_eq!(Theme::parse_str("light"), Some(Theme::Light));
        assert_eq!(Theme::parse_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse_str("forest"), None);
        assert_eq!(Theme::parse_str(""), None);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
