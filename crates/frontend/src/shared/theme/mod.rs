//! Theme management for the application.
//!
//! Provides a light/dark palette behind the [`ThemeProvider`] trait and a
//! signal-backed [`ThemeContext`] implementation. The preference is persisted
//! in localStorage.

use leptos::prelude::*;
use crate::shared::browser::window;

/// Light or dark appearance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the mode name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse mode from string. Unknown values fall back to light.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns the color palette for this mode.
    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

/// Theme-derived surface and text colors, as CSS color strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#FFFFFF",
        card: "#F8FAFC",
        border: "#E2E8F0",
        text: "#1E293B",
        text_secondary: "#64748B",
    };

    pub const DARK: Palette = Palette {
        background: "#0F172A",
        card: "#1E293B",
        border: "#334155",
        text: "#F1F5F9",
        text_secondary: "#94A3B8",
    };
}

/// Read/toggle access to the current theme.
///
/// Implementations backed by signals make every read reactive, so views that
/// call these inside closures re-render on toggle.
pub trait ThemeProvider {
    fn is_dark(&self) -> bool;
    fn toggle_theme(&self);
    fn colors(&self) -> Palette;
}

const THEME_STORAGE_KEY: &str = "app-theme";

/// Load mode from localStorage.
fn load_mode_from_storage() -> ThemeMode {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| ThemeMode::from_str(&s))
        .unwrap_or_default()
}

/// Save mode to localStorage.
fn save_mode_to_storage(mode: ThemeMode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

/// Mirror the mode to `data-theme` on body for page-level styling hooks.
fn apply_mode(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode signal.
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(initial),
        }
    }

    /// Set the mode and persist to storage.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        save_mode_to_storage(mode);
        apply_mode(mode);
    }
}

impl ThemeProvider for ThemeContext {
    fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }

    fn toggle_theme(&self) {
        let next = self.mode.get_untracked().toggled();
        log::debug!("theme switched to {}", next.as_str());
        self.set_mode(next);
    }

    fn colors(&self) -> Palette {
        self.mode.get().palette()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeContextProvider(children: Children) -> impl IntoView {
    let initial_mode = load_mode_from_storage();
    apply_mode(initial_mode);

    provide_context(ThemeContext::new(initial_mode));

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeContextProvider.")
}
