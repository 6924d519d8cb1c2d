//! Host abstractions the page features are written against.
//!
//! ARCHITECTURE
//! ============
//! Feature controllers never touch `web-sys` directly. They hold handles that
//! implement these traits, so the same logic runs against the browser (the
//! `web` module) and against in-memory fakes in unit tests.
//!
//! TRADE-OFFS
//! ==========
//! DOM calls that can reject (`classList.add`, `setAttribute`, ...) return
//! `()` here. The browser implementations log rejections instead of surfacing
//! them, since no feature could do anything useful with the error.

/// A document element the page features read and mutate.
///
/// Handles are cheap to clone and compare by node identity.
pub trait PageElement: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flip `class` and report whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn clear_attr(&self, name: &str);

    fn set_inline_style(&self, property: &str, value: &str);

    /// Computed `display` value after stylesheets and inline styles.
    fn computed_display(&self) -> String;

    fn set_text(&self, text: &str);
    fn set_markup(&self, markup: &str);

    /// Distance from the document top, in CSS pixels.
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;

    /// Top edge relative to the viewport.
    fn viewport_top(&self) -> f64;

    /// Whether `other` is this element or one of its descendants.
    fn encloses(&self, other: &Self) -> bool;

    fn find(&self, selector: &str) -> Option<Self>;
    fn find_all(&self, selector: &str) -> Vec<Self>;

    /// Smooth-scroll this element to the top of the viewport.
    fn scroll_into_view(&self);
}

/// The browsing context: scroll geometry and navigation.
pub trait PageWindow: Clone + 'static {
    fn scroll_y(&self) -> f64;
    fn inner_width(&self) -> f64;
    fn inner_height(&self) -> f64;

    /// Full scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Smooth-scroll the document to `top`.
    fn scroll_to(&self, top: f64);

    fn navigate(&self, href: &str);
}

/// Durable per-origin key/value storage.
pub trait PreferenceStore: 'static {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// One viewport-intersection report.
#[derive(Clone, Debug)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

/// A viewport-intersection watcher owned by a single feature.
pub trait Watcher<E>: 'static {
    fn observe(&self, target: &E);
    fn unobserve(&self, target: &E);
}

/// Timer source. Dropping a [`Scheduler::Handle`] cancels its task.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Schedule a task that cannot be cancelled.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// What the host should do with the event that triggered a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Let the browser's default action run and the event bubble.
    Continue,
    /// Call `preventDefault`.
    PreventDefault,
    /// Call `stopPropagation`.
    StopPropagation,
}
