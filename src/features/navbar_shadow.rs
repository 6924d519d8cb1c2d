//! Drop shadow under the navbar once the page has scrolled.

#[cfg(test)]
#[path = "navbar_shadow_test.rs"]
mod navbar_shadow_test;

use crate::consts::NAVBAR_ID;
use crate::dom::{PageElement, PageWindow};
use crate::error::{BindError, require};

pub struct NavbarShadow<E, W> {
    navbar: E,
    window: W,
    threshold_px: f64,
    shadow: String,
}

impl<E: PageElement, W: PageWindow> NavbarShadow<E, W> {
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when the page has no navbar.
    pub fn bind(navbar: Option<E>, window: W, threshold_px: f64, shadow: &str) -> Result<Self, BindError> {
        let navbar = require(navbar, NAVBAR_ID)?;
        Ok(Self { navbar, window, threshold_px, shadow: shadow.to_owned() })
    }

    /// Recomputed on every scroll event.
    pub fn on_scroll(&self) {
        let value = if self.window.scroll_y() > self.threshold_px { self.shadow.as_str() } else { "none" };
        self.navbar.set_inline_style("box-shadow", value);
    }
}
