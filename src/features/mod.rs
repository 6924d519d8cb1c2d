//! Page features, one controller per UI concern.
//!
//! ARCHITECTURE
//! ============
//! Every feature follows the same shape:
//!
//! - `bind(...)` receives the element handles it needs as `Option`s and
//!   either returns a live controller or a [`crate::error::BindError`]. A
//!   feature that fails to bind attaches no listeners.
//! - `on_*` methods are the event handlers. The `web` module wires them to
//!   DOM events; tests call them directly.
//!
//! Features share nothing but DOM state and the theme storage key. Each one
//! owns its own watchers and debounced handlers.

pub mod active_section;
pub mod back_to_top;
pub mod mobile_menu;
pub mod navbar_shadow;
pub mod popup;
pub mod project_cards;
pub mod resume;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;
