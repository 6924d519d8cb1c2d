//! Whole-card click-through for project cards.
//!
//! A card with a `.project-link` behaves like a link: clicks anywhere on the
//! card follow the link's `href`. Clicks on the link itself are left to the
//! browser so modifier keys and middle clicks keep working.

#[cfg(test)]
#[path = "project_cards_test.rs"]
mod project_cards_test;

use crate::consts::{PROJECT_CARD_SELECTOR, PROJECT_LINK_SELECTOR};
use crate::dom::{PageElement, PageWindow};
use crate::error::BindError;

pub struct ProjectCard<E, W> {
    card: E,
    link: E,
    href: String,
    window: W,
}

impl<E: PageElement, W: PageWindow> ProjectCard<E, W> {
    /// # Errors
    ///
    /// [`BindError::MissingElement`] when the card has no link or the link has
    /// no `href`.
    pub fn bind(card: E, window: W) -> Result<Self, BindError> {
        let link = card.find(PROJECT_LINK_SELECTOR).ok_or(BindError::MissingElement(PROJECT_LINK_SELECTOR))?;
        let href = link.attr("href").filter(|h| !h.is_empty()).ok_or(BindError::MissingElement("project link href"))?;
        card.set_inline_style("cursor", "pointer");
        Ok(Self { card, link, href, window })
    }

    #[must_use]
    pub fn card(&self) -> &E {
        &self.card
    }

    /// `target` is the clicked element, `None` for non-element targets.
    pub fn on_card_click(&self, target: Option<&E>) {
        if target.is_some_and(|t| self.link.encloses(t)) {
            return;
        }
        self.window.navigate(&self.href);
    }
}

/// Bind every card on the page; cards without a usable link are skipped.
///
/// # Errors
///
/// [`BindError::NothingToObserve`] when no card could be bound.
pub fn bind_all<E: PageElement, W: PageWindow>(cards: Vec<E>, window: &W) -> Result<Vec<ProjectCard<E, W>>, BindError> {
    let bound: Vec<_> = cards
        .into_iter()
        .filter_map(|card| match ProjectCard::bind(card, window.clone()) {
            Ok(card) => Some(card),
            Err(err) => {
                log::debug!("project card skipped: {err}");
                None
            }
        })
        .collect();
    if bound.is_empty() {
        return Err(BindError::NothingToObserve(PROJECT_CARD_SELECTOR));
    }
    Ok(bound)
}
