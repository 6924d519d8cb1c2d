//! Deferred image loading.
//!
//! Images ship with their real URL in `data-src`. When one enters the
//! viewport its source is swapped in and the image is dropped from the
//! watcher. Hosts without an intersection watcher never bind the loader and
//! images keep whatever `src` the markup gave them.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

use std::marker::PhantomData;

use crate::consts::{DEFERRED_SRC_ATTR, LAZY_IMAGE_SELECTOR};
use crate::dom::{Intersection, PageElement, Watcher};
use crate::error::{BindError, require_any};

pub struct LazyImages<E, W> {
    watcher: W,
    _element: PhantomData<E>,
}

impl<E: PageElement, W: Watcher<E>> LazyImages<E, W> {
    /// Start watching `images`. `watcher` is `None` when the host has no
    /// intersection support.
    ///
    /// # Errors
    ///
    /// [`BindError::Unsupported`] without a watcher, [`BindError::NothingToObserve`]
    /// when the page has no deferred images.
    pub fn bind(watcher: Option<W>, images: &[E]) -> Result<Self, BindError> {
        let watcher = watcher.ok_or(BindError::Unsupported("IntersectionObserver"))?;
        require_any(images, LAZY_IMAGE_SELECTOR)?;
        for image in images {
            watcher.observe(image);
        }
        Ok(Self { watcher, _element: PhantomData })
    }

    pub fn on_intersections(&self, entries: &[Intersection<E>]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let image = &entry.target;
            if let Some(src) = image.attr(DEFERRED_SRC_ATTR) {
                image.set_attr("src", &src);
                image.clear_attr(DEFERRED_SRC_ATTR);
            }
            self.watcher.unobserve(image);
        }
    }
}
