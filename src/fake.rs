//! In-memory host doubles for unit tests.
//!
//! Each fake keeps a journal of the mutations it received so tests can assert
//! how many times a side effect ran, not just the final state.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::dom::{Intersection, PageElement, PageWindow, PreferenceStore, Scheduler, Watcher};

// =============================================================
// Elements
// =============================================================

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

struct Node {
    tag: String,
    classes: RefCell<Vec<String>>,
    attrs: RefCell<BTreeMap<String, String>>,
    styles: RefCell<BTreeMap<String, String>>,
    sheet_display: RefCell<String>,
    text: RefCell<String>,
    markup: RefCell<String>,
    offset_top: Cell<f64>,
    offset_height: Cell<f64>,
    viewport_top: Cell<f64>,
    children: RefCell<Vec<FakeElement>>,
    parent: RefCell<Weak<Node>>,
    journal: RefCell<Vec<String>>,
    scrolled_into_view: Cell<u32>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_owned(),
            classes: RefCell::new(Vec::new()),
            attrs: RefCell::new(BTreeMap::new()),
            styles: RefCell::new(BTreeMap::new()),
            sheet_display: RefCell::new("block".to_owned()),
            text: RefCell::new(String::new()),
            markup: RefCell::new(String::new()),
            offset_top: Cell::new(0.0),
            offset_height: Cell::new(0.0),
            viewport_top: Cell::new(0.0),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            journal: RefCell::new(Vec::new()),
            scrolled_into_view: Cell::new(0),
        }))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.classes.borrow_mut().push(class.to_owned());
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_geometry(self, top: f64, height: f64) -> Self {
        self.0.offset_top.set(top);
        self.0.offset_height.set(height);
        self
    }

    /// Display value the stylesheet gives this element when no inline style is set.
    pub fn with_sheet_display(self, display: &str) -> Self {
        *self.0.sheet_display.borrow_mut() = display.to_owned();
        self
    }

    /// Inline style property, empty when unset.
    pub fn inline_style(&self, property: &str) -> String {
        self.0.styles.borrow().get(property).cloned().unwrap_or_default()
    }

    pub fn append(&self, child: &FakeElement) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    pub fn set_viewport_top(&self, top: f64) {
        self.0.viewport_top.set(top);
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub fn markup(&self) -> String {
        self.0.markup.borrow().clone()
    }

    pub fn scrolled_into_view(&self) -> u32 {
        self.0.scrolled_into_view.get()
    }

    pub fn journal(&self) -> Vec<String> {
        self.0.journal.borrow().clone()
    }

    /// How many times `entry` was recorded.
    pub fn count(&self, entry: &str) -> usize {
        self.0.journal.borrow().iter().filter(|e| e.as_str() == entry).count()
    }

    fn record(&self, entry: String) {
        self.0.journal.borrow_mut().push(entry);
    }

    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.has_class(class),
            None => self.0.tag == selector,
        }
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeElement>) {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} class={:?}>", self.0.tag, self.0.classes.borrow())
    }
}

impl PageElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_owned());
        }
        self.record(format!("class+:{class}"));
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
        self.record(format!("class-:{class}"));
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.attrs.borrow().get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
        self.record(format!("attr:{name}={value}"));
    }

    fn clear_attr(&self, name: &str) {
        self.0.attrs.borrow_mut().remove(name);
        self.record(format!("attr-:{name}"));
    }

    fn set_inline_style(&self, property: &str, value: &str) {
        self.0.styles.borrow_mut().insert(property.to_owned(), value.to_owned());
        self.record(format!("style:{property}={value}"));
    }

    fn computed_display(&self) -> String {
        let inline = self.inline_style("display");
        if inline.is_empty() { self.0.sheet_display.borrow().clone() } else { inline }
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_owned();
    }

    fn set_markup(&self, markup: &str) {
        *self.0.markup.borrow_mut() = markup.to_owned();
    }

    fn offset_top(&self) -> f64 {
        self.0.offset_top.get()
    }

    fn offset_height(&self) -> f64 {
        self.0.offset_height.get()
    }

    fn viewport_top(&self) -> f64 {
        self.0.viewport_top.get()
    }

    fn encloses(&self, other: &Self) -> bool {
        let mut cursor = Some(Rc::clone(&other.0));
        while let Some(node) = cursor {
            if Rc::ptr_eq(&node, &self.0) {
                return true;
            }
            cursor = node.parent.borrow().upgrade();
        }
        false
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        out
    }

    fn scroll_into_view(&self) {
        self.0.scrolled_into_view.set(self.0.scrolled_into_view.get() + 1);
    }
}

// =============================================================
// Window
// =============================================================

#[derive(Clone)]
pub struct FakeWindow(Rc<WindowState>);

struct WindowState {
    scroll_y: Cell<f64>,
    inner_width: Cell<f64>,
    inner_height: Cell<f64>,
    document_height: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
    navigations: RefCell<Vec<String>>,
}

impl FakeWindow {
    pub fn new(inner_width: f64, inner_height: f64, document_height: f64) -> Self {
        Self(Rc::new(WindowState {
            scroll_y: Cell::new(0.0),
            inner_width: Cell::new(inner_width),
            inner_height: Cell::new(inner_height),
            document_height: Cell::new(document_height),
            scrolls: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        }))
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.0.scroll_y.set(y);
    }

    /// Every `scroll_to` target requested so far.
    pub fn scrolls(&self) -> Vec<f64> {
        self.0.scrolls.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.0.navigations.borrow().clone()
    }
}

impl PageWindow for FakeWindow {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y.get()
    }

    fn inner_width(&self) -> f64 {
        self.0.inner_width.get()
    }

    fn inner_height(&self) -> f64 {
        self.0.inner_height.get()
    }

    fn document_height(&self) -> f64 {
        self.0.document_height.get()
    }

    fn scroll_to(&self, top: f64) {
        self.0.scrolls.borrow_mut().push(top);
        self.0.scroll_y.set(top);
    }

    fn navigate(&self, href: &str) {
        self.0.navigations.borrow_mut().push(href.to_owned());
    }
}

// =============================================================
// Storage
// =============================================================

#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================
// Intersection watcher
// =============================================================

#[derive(Clone, Default)]
pub struct FakeWatcher(Rc<RefCell<Vec<FakeElement>>>);

impl FakeWatcher {
    pub fn is_observing(&self, target: &FakeElement) -> bool {
        self.0.borrow().iter().any(|e| e == target)
    }

    pub fn observed_count(&self) -> usize {
        self.0.borrow().len()
    }

    /// Build the report a browser would deliver; unobserved targets get none.
    pub fn deliver(&self, target: &FakeElement, is_intersecting: bool) -> Vec<Intersection<FakeElement>> {
        if self.is_observing(target) {
            vec![Intersection { target: target.clone(), is_intersecting }]
        } else {
            Vec::new()
        }
    }
}

impl Watcher<FakeElement> for FakeWatcher {
    fn observe(&self, target: &FakeElement) {
        if !self.is_observing(target) {
            self.0.borrow_mut().push(target.clone());
        }
    }

    fn unobserve(&self, target: &FakeElement) {
        self.0.borrow_mut().retain(|e| e != target);
    }
}

// =============================================================
// Timers
// =============================================================

/// Virtual clock; tasks run only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<RefCell<Timers>>);

#[derive(Default)]
struct Timers {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

struct Pending {
    id: u64,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

pub struct ManualHandle {
    id: u64,
    timers: Weak<RefCell<Timers>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let Some(timers) = self.timers.upgrade() else {
            return;
        };
        let cancelled: Vec<Pending> = {
            let mut timers = timers.borrow_mut();
            let (cancelled, kept) = std::mem::take(&mut timers.pending)
                .into_iter()
                .partition(|p| p.id == self.id);
            timers.pending = kept;
            cancelled
        };
        drop(cancelled);
    }
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.0.borrow().pending.len()
    }

    /// Move the clock forward, running due tasks in order.
    pub fn advance(&self, ms: u64) {
        let target = self.0.borrow().now_ms + ms;
        loop {
            let next = {
                let mut timers = self.0.borrow_mut();
                let index = timers
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due_ms <= target)
                    .min_by_key(|(_, p)| (p.due_ms, p.id))
                    .map(|(i, _)| i);
                index.map(|i| {
                    let task = timers.pending.remove(i);
                    timers.now_ms = task.due_ms;
                    task
                })
            };
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }
        self.0.borrow_mut().now_ms = target;
    }

    fn push(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let mut timers = self.0.borrow_mut();
        let id = timers.next_id;
        timers.next_id += 1;
        let due_ms = timers.now_ms + u64::from(delay_ms);
        timers.pending.push(Pending { id, due_ms, task });
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let id = self.push(delay_ms, task);
        ManualHandle { id, timers: Rc::downgrade(&self.0) }
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.push(delay_ms, task);
    }
}
