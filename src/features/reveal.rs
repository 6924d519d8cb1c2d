//! One-shot fade-in for content cards.
//!
//! The first time a card intersects the viewport it gets `fade-in` and leaves
//! the watcher, so it is never revealed twice and never re-hidden.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::marker::PhantomData;

use crate::consts::REVEALED_CLASS;
use crate::dom::{Intersection, PageElement, Watcher};
use crate::error::{BindError, require_any};

/// Name reported when the page has no reveal cards.
pub const REVEAL_TARGETS: &str = "reveal cards";

pub struct Reveal<E, W> {
    watcher: W,
    _element: PhantomData<E>,
}

impl<E: PageElement, W: Watcher<E>> Reveal<E, W> {
    /// # Errors
    ///
    /// [`BindError::NothingToObserve`] when the page has no cards.
    pub fn bind(watcher: W, cards: &[E]) -> Result<Self, BindError> {
        require_any(cards, REVEAL_TARGETS)?;
        for card in cards {
            watcher.observe(card);
        }
        Ok(Self { watcher, _element: PhantomData })
    }

    pub fn on_intersections(&self, entries: &[Intersection<E>]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            entry.target.add_class(REVEALED_CLASS);
            self.watcher.unobserve(&entry.target);
        }
    }
}
