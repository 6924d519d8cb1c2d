//! Navigation highlight for the section currently under the header.
//!
//! DESIGN
//! ======
//! Section geometry is re-read from the DOM on every (debounced) scroll tick,
//! so layout shifts from lazy images or the resume toggle never leave stale
//! boundaries behind. The pure [`current_section`] holds the whole decision;
//! the controller only gathers inputs and flips link classes.

#[cfg(test)]
#[path = "active_section_test.rs"]
mod active_section_test;

use crate::config::ActiveSectionConfig;
use crate::consts::{LINK_ACTIVE_CLASS, SECTION_ATTR, SECTION_LINK_SELECTOR, SECTION_SELECTOR};
use crate::dom::{PageElement, PageWindow};
use crate::error::BindError;

/// A section's vertical extent in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Scroll state the decision reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Which section id should be highlighted, if any.
///
/// `sections` must be in document order.
#[must_use]
pub fn current_section(state: ScrollState, sections: &[SectionSpan], config: &ActiveSectionConfig) -> Option<String> {
    if state.scroll_y < config.near_top_px {
        return None;
    }

    let at_bottom = state.scroll_y + state.viewport_height >= state.document_height - config.bottom_slack_px;
    if at_bottom {
        return Some(config.final_section_id.clone());
    }

    let position = state.scroll_y + config.lookahead_px;
    let mut current = None;
    let mut last_seen = None;
    for section in sections {
        if section.top <= position {
            last_seen = Some(section);
        }
        if section.contains(position) {
            current = Some(section);
        }
    }
    current.or(last_seen).map(|s| s.id.clone())
}

pub struct ActiveSection<E, W> {
    sections: Vec<E>,
    links: Vec<E>,
    window: W,
    config: ActiveSectionConfig,
}

impl<E: PageElement, W: PageWindow> ActiveSection<E, W> {
    /// # Errors
    ///
    /// [`BindError::NothingToObserve`] when there are no sections or no
    /// section links.
    pub fn bind(sections: Vec<E>, links: Vec<E>, window: W, config: ActiveSectionConfig) -> Result<Self, BindError> {
        if sections.is_empty() {
            return Err(BindError::NothingToObserve(SECTION_SELECTOR));
        }
        if links.is_empty() {
            return Err(BindError::NothingToObserve(SECTION_LINK_SELECTOR));
        }
        Ok(Self { sections, links, window, config })
    }

    #[must_use]
    pub fn spans(&self) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .filter_map(|section| {
                let id = section.attr("id").filter(|id| !id.is_empty())?;
                Some(SectionSpan { id, top: section.offset_top(), height: section.offset_height() })
            })
            .collect()
    }

    /// Debounced scroll tick.
    pub fn on_scroll(&self) {
        let state = ScrollState {
            scroll_y: self.window.scroll_y(),
            viewport_height: self.window.inner_height(),
            document_height: self.window.document_height(),
        };
        let current = current_section(state, &self.spans(), &self.config);
        self.highlight(current.as_deref());
    }

    fn highlight(&self, current: Option<&str>) {
        for link in &self.links {
            let matches = current.is_some_and(|id| link.attr(SECTION_ATTR).as_deref() == Some(id));
            if matches {
                link.add_class(LINK_ACTIVE_CLASS);
            } else {
                link.remove_class(LINK_ACTIVE_CLASS);
            }
        }
    }
}
