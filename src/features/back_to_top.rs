//! Floating "back to top" button, shown once the hero section is behind us.

#[cfg(test)]
#[path = "back_to_top_test.rs"]
mod back_to_top_test;

use crate::consts::{BACK_TO_TOP_ID, BUTTON_VISIBLE_CLASS, HERO_SECTION_ID};
use crate::dom::{PageElement, PageWindow};
use crate::error::{BindError, require};

pub struct BackToTop<E, W> {
    button: E,
    hero: E,
    window: W,
}

impl<E: PageElement, W: PageWindow> BackToTop<E, W> {
    /// Bind and compute the initial visibility.
    ///
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when the button or the hero section is absent.
    pub fn bind(button: Option<E>, hero: Option<E>, window: W) -> Result<Self, BindError> {
        let button = require(button, BACK_TO_TOP_ID)?;
        let hero = require(hero, HERO_SECTION_ID)?;
        let control = Self { button, hero, window };
        control.on_scroll();
        Ok(control)
    }

    #[must_use]
    pub fn button(&self) -> &E {
        &self.button
    }

    /// Debounced scroll tick.
    pub fn on_scroll(&self) {
        let hero_bottom = self.hero.offset_top() + self.hero.offset_height();
        if self.window.scroll_y() > hero_bottom {
            self.button.add_class(BUTTON_VISIBLE_CLASS);
        } else {
            self.button.remove_class(BUTTON_VISIBLE_CLASS);
        }
    }

    pub fn on_click(&self) {
        self.window.scroll_to(0.0);
    }
}
