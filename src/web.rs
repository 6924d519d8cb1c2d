//! Browser host: web-sys implementations of the host traits, event wiring,
//! and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It looks up the page's
//! elements, hands them to each feature's `bind`, and attaches listeners for
//! the features that bound. Listener closures live for the lifetime of the
//! page, so they are leaked with `Closure::forget` once registered.
//!
//! TRADE-OFFS
//! ==========
//! Rejected DOM calls are logged at `warn` and dropped. A feature that cannot
//! find its markup logs one `debug` line and attaches nothing.

use std::cell::OnceCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Storage, Window,
};

use crate::config::PageConfig;
use crate::consts::{
    ANCHOR_SELECTOR, BACK_TO_TOP_ID, CONFIG_SCRIPT_ID, HERO_SECTION_ID, LAZY_IMAGE_SELECTOR, MOBILE_MENU_TOGGLE_ID,
    NAV_LINK_SELECTOR, NAV_MENU_ID, NAVBAR_ID, POPUP_ID, PROJECT_CARD_SELECTOR, RESUME_CONTENT_ID, RESUME_TOGGLE_ID,
    REVEAL_SELECTORS, SECTION_LINK_SELECTOR, SECTION_SELECTOR, THEME_TOGGLE_ID,
};
use crate::dom::{EventOutcome, Intersection, PageElement, PageWindow, PreferenceStore, Scheduler, Watcher};
use crate::error::{BindError, require, require_any};
use crate::features::active_section::ActiveSection;
use crate::features::back_to_top::BackToTop;
use crate::features::mobile_menu::MobileMenu;
use crate::features::navbar_shadow::NavbarShadow;
use crate::features::popup::MobilePopup;
use crate::features::project_cards;
use crate::features::resume::ResumeToggle;
use crate::features::reveal::{REVEAL_TARGETS, Reveal};
use crate::features::smooth_scroll::{SmoothScroll, fragment_target};
use crate::features::theme::{self, ThemeToggle};
use crate::util::debounce::Debounced;
use crate::util::lazy_images::LazyImages;

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Module start hook: apply the saved theme now, bind everything else once
/// the document has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let logger_ready = console_log::init_with_level(log::Level::Trace).is_ok();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_config(&document);
    if logger_ready {
        log::set_max_level(config.log_level().to_level_filter());
    }

    let store = LocalStore::open(&window);
    if let Some(root) = document.document_element() {
        theme::apply_saved(&root, &store);
    }

    let page = WebWindow { window, document };
    if is_loading(&page.document) {
        let mut pending = Some((page.clone(), store, config));
        listen(&page.document, "DOMContentLoaded", move |_| {
            if let Some((page, store, config)) = pending.take() {
                boot(&page, store, &config);
            }
        });
    } else {
        boot(&page, store, &config);
    }
}

/// Contact form helper for host pages.
#[wasm_bindgen(js_name = isValidEmail)]
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    crate::util::email::is_valid_email(value)
}

fn read_config(document: &Document) -> PageConfig {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .map_or_else(PageConfig::default, |raw| PageConfig::from_json_or_default(&raw))
}

fn is_loading(document: &Document) -> bool {
    logged(js_sys::Reflect::get(document, &JsValue::from_str("readyState")), "document.readyState")
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

fn boot(page: &WebWindow, store: LocalStore, config: &PageConfig) {
    report("theme toggle", bind_theme(page, store));
    report("mobile menu", bind_mobile_menu(page));
    report("smooth scroll", bind_smooth_scroll(page, config));
    report("navbar shadow", bind_navbar_shadow(page, config));
    report("reveal", bind_reveal(page, config));
    report("active section", bind_active_section(page, config));
    report("back to top", bind_back_to_top(page, config));
    report("resume", bind_resume(page, config));
    report("popup", bind_popup(page, config));
    report("project cards", bind_project_cards(page));
    report("lazy images", bind_lazy_images(page));
}

fn report(feature: &str, result: Result<(), BindError>) {
    match result {
        Ok(()) => log::debug!("{feature}: bound"),
        Err(err) => log::debug!("{feature}: inactive ({err})"),
    }
}

// =============================================================================
// FEATURE WIRING
// =============================================================================

fn bind_theme(page: &WebWindow, store: LocalStore) -> Result<(), BindError> {
    let root = require(page.document.document_element(), "html")?;
    let toggle = ThemeToggle::bind(root, page.by_id(THEME_TOGGLE_ID), store)?;
    let control = toggle.control().clone();
    listen(&control, "click", move |_| {
        toggle.on_click();
    });
    Ok(())
}

fn bind_mobile_menu(page: &WebWindow) -> Result<(), BindError> {
    let menu = Rc::new(MobileMenu::bind(page.by_id(MOBILE_MENU_TOGGLE_ID), page.by_id(NAV_MENU_ID))?);

    let handler = Rc::clone(&menu);
    listen(menu.toggle(), "click", move |_| handler.on_toggle_click());

    for link in menu.menu().find_all(NAV_LINK_SELECTOR) {
        let handler = Rc::clone(&menu);
        listen(&link, "click", move |_| handler.on_link_click());
    }

    let handler = Rc::clone(&menu);
    listen(&page.document, "click", move |event| {
        handler.on_document_click(event_element(&event).as_ref());
    });
    Ok(())
}

fn bind_smooth_scroll(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let anchors = page.select_all(ANCHOR_SELECTOR);
    if anchors.is_empty() {
        return Err(BindError::NothingToObserve(ANCHOR_SELECTOR));
    }
    let scroll = Rc::new(SmoothScroll::new(page.clone(), config.header_clearance_px));
    for anchor in anchors {
        let scroll = Rc::clone(&scroll);
        let page = page.clone();
        let source = anchor.clone();
        listen(&anchor, "click", move |event| {
            let target = source
                .get_attribute("href")
                .as_deref()
                .and_then(fragment_target)
                .and_then(|id| page.by_id(id));
            apply(scroll.on_anchor_click(target.as_ref()), &event);
        });
    }
    Ok(())
}

fn bind_navbar_shadow(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let shadow = NavbarShadow::bind(
        page.by_id(NAVBAR_ID),
        page.clone(),
        config.navbar_shadow_after_px,
        &config.navbar_shadow,
    )?;
    listen(&page.window, "scroll", move |_| shadow.on_scroll());
    Ok(())
}

fn bind_reveal(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let cards = page.select_all(&REVEAL_SELECTORS.join(", "));
    require_any(&cards, REVEAL_TARGETS)?;
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&config.reveal_root_margin);

    let slot: Rc<OnceCell<Reveal<Element, WebWatcher>>> = Rc::default();
    let handler = Rc::clone(&slot);
    let watcher = WebWatcher::new(Some(&init), move |entries| {
        if let Some(reveal) = handler.get() {
            reveal.on_intersections(&entries);
        }
    })
    .ok_or(BindError::Unsupported("IntersectionObserver"))?;

    let reveal = Reveal::bind(watcher, &cards)?;
    if slot.set(reveal).is_err() {
        log::warn!("reveal controller bound twice");
    }
    Ok(())
}

fn bind_active_section(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let active = ActiveSection::bind(
        page.select_all(SECTION_SELECTOR),
        page.select_all(SECTION_LINK_SELECTOR),
        page.clone(),
        config.active_section.clone(),
    )?;
    let tick = Debounced::new(BrowserTimers, config.scroll_debounce_ms, move |()| active.on_scroll());
    listen(&page.window, "scroll", move |_| tick.call(()));
    Ok(())
}

fn bind_back_to_top(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let button = Rc::new(BackToTop::bind(page.by_id(BACK_TO_TOP_ID), page.by_id(HERO_SECTION_ID), page.clone())?);

    let handler = Rc::clone(&button);
    listen(button.button(), "click", move |_| handler.on_click());

    let handler = Rc::clone(&button);
    let tick = Debounced::new(BrowserTimers, config.scroll_debounce_ms, move |()| handler.on_scroll());
    listen(&page.window, "scroll", move |_| tick.call(()));
    Ok(())
}

fn bind_resume(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    let toggle = ResumeToggle::bind(
        page.by_id(RESUME_TOGGLE_ID),
        page.by_id(RESUME_CONTENT_ID),
        page.clone(),
        BrowserTimers,
        config.resume.clone(),
    )?;
    let control = toggle.control().clone();
    listen(&control, "click", move |_| toggle.on_click());
    Ok(())
}

fn bind_popup(page: &WebWindow, config: &PageConfig) -> Result<(), BindError> {
    if !config.popup_enabled {
        return Err(BindError::Disabled("popup"));
    }
    let popup = Rc::new(MobilePopup::bind(page.by_id(POPUP_ID), page.inner_width(), config.popup_max_width_px)?);

    let handler = Rc::clone(&popup);
    listen(popup.popup(), "click", move |_| handler.on_popup_click());

    if let Some(close) = popup.close_control() {
        let handler = Rc::clone(&popup);
        listen(close, "click", move |event| apply(handler.on_close_click(), &event));
    }
    Ok(())
}

fn bind_project_cards(page: &WebWindow) -> Result<(), BindError> {
    for card in project_cards::bind_all(page.select_all(PROJECT_CARD_SELECTOR), page)? {
        let target = card.card().clone();
        listen(&target, "click", move |event| {
            card.on_card_click(event_element(&event).as_ref());
        });
    }
    Ok(())
}

fn bind_lazy_images(page: &WebWindow) -> Result<(), BindError> {
    let images = page.select_all(LAZY_IMAGE_SELECTOR);
    require_any(&images, LAZY_IMAGE_SELECTOR)?;
    let slot: Rc<OnceCell<LazyImages<Element, WebWatcher>>> = Rc::default();
    let handler = Rc::clone(&slot);
    let watcher = if page.supports("IntersectionObserver") {
        WebWatcher::new(None, move |entries| {
            if let Some(loader) = handler.get() {
                loader.on_intersections(&entries);
            }
        })
    } else {
        None
    };

    let loader = LazyImages::bind(watcher, &images)?;
    if slot.set(loader).is_err() {
        log::warn!("lazy image loader bound twice");
    }
    Ok(())
}

// =============================================================================
// EVENT HELPERS
// =============================================================================

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    check(target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()), "addEventListener");
    callback.forget();
}

fn apply(outcome: EventOutcome, event: &Event) {
    match outcome {
        EventOutcome::Continue => {}
        EventOutcome::PreventDefault => event.prevent_default(),
        EventOutcome::StopPropagation => event.stop_propagation(),
    }
}

/// The event's target when it is an element.
fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

fn logged<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {err:?}");
            None
        }
    }
}

fn check(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// =============================================================================
// HOST IMPLEMENTATIONS
// =============================================================================

impl PageElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        check(self.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, class: &str) {
        check(self.class_list().remove_1(class), "classList.remove");
    }

    fn toggle_class(&self, class: &str) -> bool {
        logged(self.class_list().toggle(class), "classList.toggle").unwrap_or_else(|| self.has_class(class))
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        check(self.set_attribute(name, value), "setAttribute");
    }

    fn clear_attr(&self, name: &str) {
        check(self.remove_attribute(name), "removeAttribute");
    }

    fn set_inline_style(&self, property: &str, value: &str) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            check(el.style().set_property(property, value), "style write");
        }
    }

    fn computed_display(&self) -> String {
        web_sys::window()
            .and_then(|window| logged(window.get_computed_style(self), "getComputedStyle"))
            .flatten()
            .and_then(|style| logged(style.get_property_value("display"), "computed display"))
            .unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_markup(&self, markup: &str) {
        self.set_inner_html(markup);
    }

    fn offset_top(&self) -> f64 {
        self.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn viewport_top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn encloses(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.contains(Some(other))
    }

    fn find(&self, selector: &str) -> Option<Self> {
        logged(self.query_selector(selector), "querySelector").flatten()
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        logged(self.query_selector_all(selector), "querySelectorAll")
            .map_or_else(Vec::new, |list| node_list_elements(&list))
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// The page's window and document.
#[derive(Clone)]
pub struct WebWindow {
    window: Window,
    document: Document,
}

impl WebWindow {
    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        logged(self.document.query_selector_all(selector), "querySelectorAll")
            .map_or_else(Vec::new, |list| node_list_elements(&list))
    }

    fn supports(&self, global: &str) -> bool {
        logged(js_sys::Reflect::has(&self.window, &JsValue::from_str(global)), "feature probe").unwrap_or(false)
    }
}

impl PageWindow for WebWindow {
    fn scroll_y(&self) -> f64 {
        logged(self.window.scroll_y(), "scrollY").unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        logged(self.window.inner_width(), "innerWidth")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        logged(self.window.inner_height(), "innerHeight")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document.document_element().map_or(0.0, |root| f64::from(root.scroll_height()))
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn navigate(&self, href: &str) {
        check(self.window.location().set_href(href), "location.href");
    }
}

/// `localStorage`, or nothing when the browser denies access.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    fn open(window: &Window) -> Self {
        Self(logged(window.local_storage(), "localStorage").flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref().and_then(|storage| logged(storage.get_item(key), "localStorage.getItem").flatten())
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            check(storage.set_item(key, value), "localStorage.setItem");
        }
    }
}

/// Timers backed by `setTimeout`; dropping a handle clears it.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// An `IntersectionObserver` owned by one feature.
pub struct WebWatcher(IntersectionObserver);

impl WebWatcher {
    /// `None` when the browser rejects the observer.
    fn new<F>(init: Option<&IntersectionObserverInit>, mut on_entries: F) -> Option<Self>
    where
        F: FnMut(Vec<Intersection<Element>>) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let entries = entries
                .iter()
                .filter_map(|entry| {
                    entry.dyn_ref::<IntersectionObserverEntry>().map(|entry| Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_entries(entries);
        });
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init),
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        };
        let observer = logged(observer, "IntersectionObserver")?;
        callback.forget();
        Some(Self(observer))
    }
}

impl Watcher<Element> for WebWatcher {
    fn observe(&self, target: &Element) {
        self.0.observe(target);
    }

    fn unobserve(&self, target: &Element) {
        self.0.unobserve(target);
    }
}
