//! Scoped timer hook.
//!
//! Wraps a Dioxus task in a `ScopedTask` stored in the component's hook list:
//! when the component unmounts the hook is dropped and the pending timer is
//! cancelled with it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use portal_core::{CancelHandle, TimerSlot};

/// A Dioxus task that can be owned by a `ScopedTask`.
pub struct UiTask {
    task: Task,
    finished: Rc<Cell<bool>>,
}

impl CancelHandle for UiTask {
    fn cancel(self) {
        // Task ids are recycled once a task completes; only cancel live ones.
        if !self.finished.get() {
            self.task.cancel();
        }
    }
}

/// At most one pending timer, cancelled on teardown or when replaced.
#[derive(Clone)]
pub struct ScopedTimer {
    slot: Rc<RefCell<TimerSlot<UiTask>>>,
}

impl ScopedTimer {
    /// Run `on_fire` after `delay`, cancelling any timer still pending.
    pub fn schedule(&self, delay: Duration, on_fire: impl FnOnce() + 'static) {
        let finished = Rc::new(Cell::new(false));
        let done = Rc::clone(&finished);
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            done.set(true);
            on_fire();
        });

        // Arming cancels the timer it replaces
        self.slot.borrow_mut().arm(UiTask { task, finished });
    }
}

/// Hook returning a timer owned by the calling component.
pub fn use_scoped_timer() -> ScopedTimer {
    use_hook(|| ScopedTimer {
        slot: Rc::new(RefCell::new(TimerSlot::new())),
    })
}
