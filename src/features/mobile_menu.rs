//! Hamburger menu for narrow viewports.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::consts::{MENU_BAR_SELECTOR, MENU_OPEN_CLASS, MOBILE_MENU_TOGGLE_ID, NAV_MENU_ID};
use crate::dom::PageElement;
use crate::error::{BindError, require};

/// Inline styles for the three bars, top to bottom, while the menu is open.
const OPEN_BARS: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];

const CLOSED_BARS: [(&str, &str); 3] = [("transform", "none"), ("opacity", "1"), ("transform", "none")];

pub struct MobileMenu<E> {
    toggle: E,
    menu: E,
}

impl<E: PageElement> MobileMenu<E> {
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when either the toggle or the menu is absent.
    pub fn bind(toggle: Option<E>, menu: Option<E>) -> Result<Self, BindError> {
        let toggle = require(toggle, MOBILE_MENU_TOGGLE_ID)?;
        let menu = require(menu, NAV_MENU_ID)?;
        Ok(Self { toggle, menu })
    }

    #[must_use]
    pub fn toggle(&self) -> &E {
        &self.toggle
    }

    #[must_use]
    pub fn menu(&self) -> &E {
        &self.menu
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.menu.has_class(MENU_OPEN_CLASS)
    }

    pub fn on_toggle_click(&self) {
        let open = self.menu.toggle_class(MENU_OPEN_CLASS);
        self.paint_bars(open);
    }

    /// A link inside the menu was followed.
    pub fn on_link_click(&self) {
        self.close();
    }

    /// Any click on the document; `target` is `None` for non-element targets.
    pub fn on_document_click(&self, target: Option<&E>) {
        let inside = target.is_some_and(|t| self.menu.encloses(t) || self.toggle.encloses(t));
        if !inside && self.is_open() {
            self.close();
        }
    }

    pub fn close(&self) {
        self.menu.remove_class(MENU_OPEN_CLASS);
        self.paint_bars(false);
    }

    fn paint_bars(&self, open: bool) {
        let styles = if open { &OPEN_BARS } else { &CLOSED_BARS };
        for (bar, (property, value)) in self.toggle.find_all(MENU_BAR_SELECTOR).iter().zip(styles) {
            bar.set_inline_style(property, value);
        }
    }
}
