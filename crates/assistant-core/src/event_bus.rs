//! Event bus connecting fire-and-forget network tasks to the frame loop.
//!
//! Single-threaded by construction (WASM UI thread); interior mutability via
//! RefCell. Tasks push events as they resolve, the UI drains them once per
//! frame.

use assistant_types::event::SessionEvent;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called from spawned network tasks.
    pub fn emit(&self, event: SessionEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the frame loop.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// True if something is waiting (used to trigger a repaint).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
