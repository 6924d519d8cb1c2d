//! Dismissible popup shown only on phone-sized viewports.
//!
//! On wide viewports [`MobilePopup::bind`] refuses before touching the
//! element, so the popup is never shown and no listeners are attached.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use crate::consts::{ARIA_HIDDEN_ATTR, POPUP_CLOSE_SELECTOR, POPUP_ID};
use crate::dom::{EventOutcome, PageElement};
use crate::error::{BindError, require};

pub struct MobilePopup<E> {
    popup: E,
    close: Option<E>,
}

impl<E: PageElement> MobilePopup<E> {
    /// Show the popup when the viewport is narrow enough.
    ///
    /// # Errors
    ///
    /// [`BindError::ViewportTooWide`] above `max_width_px`, or
    /// [`BindError::MissingElement`] when the popup is not on the page.
    pub fn bind(popup: Option<E>, viewport_width: f64, max_width_px: f64) -> Result<Self, BindError> {
        if viewport_width > max_width_px {
            return Err(BindError::ViewportTooWide { width: viewport_width, max: max_width_px });
        }
        let popup = require(popup, POPUP_ID)?;
        let close = popup.find(POPUP_CLOSE_SELECTOR);
        let bound = Self { popup, close };
        bound.show();
        Ok(bound)
    }

    #[must_use]
    pub fn popup(&self) -> &E {
        &self.popup
    }

    #[must_use]
    pub fn close_control(&self) -> Option<&E> {
        self.close.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.popup.computed_display() != "none"
    }

    pub fn on_popup_click(&self) {
        self.hide();
    }

    /// The close control handles its own click; the popup must not see it.
    pub fn on_close_click(&self) -> EventOutcome {
        self.hide();
        EventOutcome::StopPropagation
    }

    fn show(&self) {
        self.popup.set_inline_style("display", "flex");
        self.popup.set_attr(ARIA_HIDDEN_ATTR, "false");
    }

    fn hide(&self) {
        if !self.is_visible() {
            return;
        }
        self.popup.set_inline_style("display", "none");
        self.popup.set_attr(ARIA_HIDDEN_ATTR, "true");
    }
}
