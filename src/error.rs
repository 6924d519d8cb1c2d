//! Why a page feature did not bind.
//!
//! Missing markup is the only failure mode on the page. Every feature's
//! `bind` reports it through [`BindError`]; the boot sequence logs the error
//! and moves on, so one absent element never affects the other features.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A feature stayed inactive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BindError {
    #[error("required element `{0}` is not on the page")]
    MissingElement(&'static str),
    #[error("no `{0}` elements to observe")]
    NothingToObserve(&'static str),
    #[error("host lacks `{0}`")]
    Unsupported(&'static str),
    #[error("viewport {width}px is wider than {max}px")]
    ViewportTooWide { width: f64, max: f64 },
    #[error("feature disabled by configuration: {0}")]
    Disabled(&'static str),
}

/// Turn an optional element handle into a bind result.
///
/// # Errors
///
/// Returns [`BindError::MissingElement`] naming `name` when `handle` is `None`.
pub fn require<E>(handle: Option<E>, name: &'static str) -> Result<E, BindError> {
    handle.ok_or(BindError::MissingElement(name))
}

/// Fail when a watcher-driven feature has nothing to watch. Hosts call this
/// before creating the watcher so an empty page never allocates one.
///
/// # Errors
///
/// Returns [`BindError::NothingToObserve`] naming `what` when `targets` is empty.
pub fn require_any<E>(targets: &[E], what: &'static str) -> Result<(), BindError> {
    if targets.is_empty() { Err(BindError::NothingToObserve(what)) } else { Ok(()) }
}
