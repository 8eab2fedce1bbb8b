//! Delayed-task scheduling.
//!
//! Every timer the page uses goes through [`Scheduler`]. In the browser that
//! is [`BrowserScheduler`], a thin layer over `setTimeout`; tests drive the
//! same code with [`VirtualScheduler`] and advance time by hand.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

/// Milliseconds, matching the browser timer API.
pub type Millis = u32;

pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task, valid until it fires or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub trait Scheduler {
    /// Run `task` once, `delay` milliseconds from now.
    fn schedule(&self, delay: Millis, task: Task) -> TimerId;

    /// Drop a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

#[derive(Default)]
struct VirtualState {
    now: u64,
    next_id: u64,
    queue: BTreeMap<(u64, TimerId), Task>,
    due: HashMap<TimerId, u64>,
}

/// Scheduler backed by a manually advanced clock.
///
/// Tasks run in expiry order; ties run in scheduling order. A task that
/// schedules another task inside the advanced window sees it run in the same
/// `advance` call.
#[derive(Default)]
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move the clock forward by `ms`, firing everything that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut guard = self.state.borrow_mut();
                let state = &mut *guard;
                match state.queue.first_entry() {
                    Some(entry) if entry.key().0 <= target => {
                        let ((due, id), task) = entry.remove_entry();
                        state.now = due;
                        state.due.remove(&id);
                        Some(task)
                    }
                    _ => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    /// Advance until the queue is empty.
    pub fn run_until_idle(&self) {
        while let Some(due) = self.next_due() {
            let now = self.now();
            self.advance(due.saturating_sub(now));
        }
    }

    fn next_due(&self) -> Option<u64> {
        self.state
            .borrow()
            .queue
            .first_key_value()
            .map(|(&(due, _), _)| due)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Millis, task: Task) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        let due = state.now + u64::from(delay);
        state.queue.insert((due, id), task);
        state.due.insert(id, due);
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        if let Some(due) = state.due.remove(&id) {
            state.queue.remove(&(due, id));
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use super::{Millis, Scheduler, Task, TimerId};

    /// `setTimeout`-backed scheduler. Live timeouts are kept so they can be
    /// cleared; dropping a `Timeout` cancels it.
    #[derive(Default)]
    pub struct BrowserScheduler {
        timeouts: Rc<RefCell<HashMap<TimerId, Timeout>>>,
        next_id: Cell<u64>,
    }

    impl BrowserScheduler {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Scheduler for BrowserScheduler {
        fn schedule(&self, delay: Millis, task: Task) -> TimerId {
            let id = TimerId(self.next_id.get());
            self.next_id.set(self.next_id.get() + 1);

            let timeouts = Rc::downgrade(&self.timeouts);
            let timeout = Timeout::new(delay, move || {
                let fired = timeouts
                    .upgrade()
                    .and_then(|timeouts| timeouts.borrow_mut().remove(&id));
                task();
                drop(fired);
            });
            self.timeouts.borrow_mut().insert(id, timeout);
            id
        }

        fn cancel(&self, id: TimerId) {
            let removed = self.timeouts.borrow_mut().remove(&id);
            drop(removed);
        }
    }
}
