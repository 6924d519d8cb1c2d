//! Page behavior controller for the portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the static site. It
//! owns every piece of cosmetic interactivity on the page: theme toggling,
//! mobile navigation, smooth scrolling, reveal animations, active-section
//! highlighting, the back-to-top button, the resume disclosure, the mobile
//! popup, and project card click-through. Markup and styling belong to the
//! site; this crate only looks elements up and mutates their classes,
//! attributes, and inline styles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`features`] | One controller per UI concern, each with a `bind` entry |
//! | [`util`] | Debounce, email check, lazy image loader |
//! | [`dom`] | Host traits the features are written against |
//! | [`config`] | Tunables with serde defaults |
//! | [`error`] | Why a feature stayed inactive |
//! | [`consts`] | DOM contract names and default numbers |
//! | `web` | web-sys host implementations and the wasm entry point (`web` feature) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod features;
pub mod util;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod fake;
