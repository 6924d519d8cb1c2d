//! Light/dark theme preference and toggle.
//!
//! Reads the saved preference once at load and marks the document root with
//! `light-mode` when it says `"light"`. Dark is the default: no saved value
//! means no root class. The toggle writes back after every click.
//!
//! DESIGN
//! ======
//! The new preference is derived from the root class after flipping it, never
//! from a remembered value, so rapid clicks cannot leave storage and the page
//! disagreeing.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{ICON_SELECTOR, LIGHT_MODE_CLASS, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom::{PageElement, PreferenceStore};
use crate::error::{BindError, require};

const MOON_ICON: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;
const SUN_ICON: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

/// Persisted visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Preference implied by the root element's current class.
    #[must_use]
    pub fn of_root<E: PageElement>(root: &E) -> Self {
        if root.has_class(LIGHT_MODE_CLASS) { Self::Light } else { Self::Dark }
    }

    /// SVG body for the toggle: the icon of the mode a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }
}

/// Apply the saved preference to the root element. Runs before any binding.
pub fn apply_saved<E: PageElement, P: PreferenceStore>(root: &E, store: &P) -> ThemePreference {
    let saved = store
        .load(THEME_STORAGE_KEY)
        .and_then(|value| ThemePreference::parse(&value))
        .unwrap_or_default();
    match saved {
        ThemePreference::Light => root.add_class(LIGHT_MODE_CLASS),
        ThemePreference::Dark => root.remove_class(LIGHT_MODE_CLASS),
    }
    saved
}

pub struct ThemeToggle<E, P> {
    root: E,
    control: E,
    store: P,
}

impl<E: PageElement, P: PreferenceStore> ThemeToggle<E, P> {
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when the page has no toggle control.
    pub fn bind(root: E, control: Option<E>, store: P) -> Result<Self, BindError> {
        let control = require(control, THEME_TOGGLE_ID)?;
        let toggle = Self { root, control, store };
        toggle.paint_icon();
        Ok(toggle)
    }

    #[must_use]
    pub fn control(&self) -> &E {
        &self.control
    }

    pub fn on_click(&self) -> ThemePreference {
        let is_light = self.root.toggle_class(LIGHT_MODE_CLASS);
        let next = if is_light { ThemePreference::Light } else { ThemePreference::Dark };
        self.store.save(THEME_STORAGE_KEY, next.as_str());
        self.paint_icon();
        log::debug!("theme switched to {}", next.as_str());
        next
    }

    fn paint_icon(&self) {
        if let Some(icon) = self.control.find(ICON_SELECTOR) {
            icon.set_markup(ThemePreference::of_root(&self.root).toggle_icon());
        }
    }
}
