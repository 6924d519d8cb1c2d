//! Trailing-edge debounce.
//!
//! DESIGN
//! ======
//! Each call drops the pending timer handle (which cancels it) and schedules
//! a fresh one, so only the last call inside a quiet window runs. Every
//! feature builds its own [`Debounced`]; instances are never shared across
//! unrelated handlers.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::Scheduler;

/// A function wrapped so bursts of calls collapse into one trailing call.
pub struct Debounced<A: 'static, S: Scheduler> {
    func: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn new(scheduler: S, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self { func: Rc::new(func), wait_ms, scheduler, pending: RefCell::new(None) }
    }

    /// Restart the quiet window; `args` replaces any earlier pending arguments.
    pub fn call(&self, args: A) {
        drop(self.pending.borrow_mut().take());
        let func = Rc::clone(&self.func);
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(move || func(args)));
        *self.pending.borrow_mut() = Some(handle);
    }
}
