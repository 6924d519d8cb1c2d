//! In-page anchor links scroll smoothly, clearing the sticky header.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use crate::dom::{EventOutcome, PageElement, PageWindow};

/// Element id an anchor `href` points at, or `None` for bare `#` and
/// off-page links.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct SmoothScroll<W> {
    window: W,
    header_clearance_px: f64,
}

impl<W: PageWindow> SmoothScroll<W> {
    #[must_use]
    pub fn new(window: W, header_clearance_px: f64) -> Self {
        Self { window, header_clearance_px }
    }

    /// Scroll position that leaves `target` just below the header.
    #[must_use]
    pub fn landing_offset<E: PageElement>(&self, target: &E) -> f64 {
        target.offset_top() - self.header_clearance_px
    }

    /// An anchor was clicked; `target` is the element its fragment resolved to.
    pub fn on_anchor_click<E: PageElement>(&self, target: Option<&E>) -> EventOutcome {
        match target {
            Some(target) => {
                self.window.scroll_to(self.landing_offset(target));
                EventOutcome::PreventDefault
            }
            None => EventOutcome::Continue,
        }
    }
}
