//! Expand/collapse for the inline resume.
//!
//! DESIGN
//! ======
//! Whether the resume is open is read from its computed `display` every
//! click. No flag is cached, so stylesheet changes or other scripts hiding the
//! block can never put the label and the content out of step.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use crate::config::ResumeConfig;
use crate::consts::{RESUME_CONTENT_ID, RESUME_TOGGLE_ID};
use crate::dom::{PageElement, PageWindow, Scheduler};
use crate::error::{BindError, require};

pub struct ResumeToggle<E, W, S> {
    control: E,
    content: E,
    window: W,
    scheduler: S,
    config: ResumeConfig,
}

impl<E: PageElement, W: PageWindow, S: Scheduler> ResumeToggle<E, W, S> {
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when the control or the content block is absent.
    pub fn bind(
        control: Option<E>,
        content: Option<E>,
        window: W,
        scheduler: S,
        config: ResumeConfig,
    ) -> Result<Self, BindError> {
        let control = require(control, RESUME_TOGGLE_ID)?;
        let content = require(content, RESUME_CONTENT_ID)?;
        Ok(Self { control, content, window, scheduler, config })
    }

    #[must_use]
    pub fn control(&self) -> &E {
        &self.control
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.content.computed_display() != "none"
    }

    pub fn on_click(&self) {
        if self.is_expanded() {
            self.content.set_inline_style("display", "none");
            self.control.set_text(&self.config.expand_label);
            return;
        }

        self.content.set_inline_style("display", "block");
        self.control.set_text(&self.config.collapse_label);

        let content = self.content.clone();
        let window = self.window.clone();
        let min_visible_px = self.config.min_visible_px;
        self.scheduler.defer(
            self.config.reveal_delay_ms,
            Box::new(move || {
                if !adequately_in_view(content.viewport_top(), window.inner_height(), min_visible_px) {
                    content.scroll_into_view();
                }
            }),
        );
    }
}

/// Whether a block starting `top` pixels below the viewport edge shows at
/// least `min_visible_px` of itself.
#[must_use]
pub fn adequately_in_view(top: f64, viewport_height: f64, min_visible_px: f64) -> bool {
    top >= 0.0 && top <= viewport_height - min_visible_px
}
