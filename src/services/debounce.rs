use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scheduler::{Millis, Scheduler, TimerId};

struct Inner<E> {
    scheduler: Rc<dyn Scheduler>,
    quantum: Millis,
    effect: RefCell<Box<dyn FnMut(E)>>,
    pending: Cell<Option<TimerId>>,
}

/// Coalesces a burst of events into one call of `effect`, made `quantum`
/// milliseconds after the last event with that event's data.
///
/// Dropping the debouncer cancels any pending call.
pub struct Debouncer<E> {
    inner: Rc<Inner<E>>,
}

impl<E: 'static> Debouncer<E> {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        quantum: Millis,
        effect: impl FnMut(E) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                quantum,
                effect: RefCell::new(Box::new(effect)),
                pending: Cell::new(None),
            }),
        }
    }

    /// Record an event, replacing whatever call was pending.
    pub fn call(&self, event: E) {
        self.cancel();

        let inner = Rc::downgrade(&self.inner);
        let id = self.inner.scheduler.schedule(
            self.inner.quantum,
            Box::new(move || {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                inner.pending.set(None);
                (inner.effect.borrow_mut())(event);
            }),
        );
        self.inner.pending.set(Some(id));
    }

}

impl<E> Debouncer<E> {
    pub fn cancel(&self) {
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

impl<E> Drop for Debouncer<E> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::VirtualScheduler;

    fn counting(clock: &Rc<VirtualScheduler>) -> (Debouncer<u32>, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let debouncer = Debouncer::new(clock.clone(), 16, move |value| sink.borrow_mut().push(value));
        (debouncer, seen)
    }

    #[test]
    fn burst_fires_once_with_last_event() {
        let clock = Rc::new(VirtualScheduler::new());
        let (debouncer, seen) = counting(&clock);

        for value in 1..=10 {
            debouncer.call(value);
            clock.advance(5);
        }
        assert!(seen.borrow().is_empty());
        assert!(debouncer.is_pending());

        clock.advance(11);
        assert_eq!(*seen.borrow(), vec![10]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn separated_events_each_fire() {
        let clock = Rc::new(VirtualScheduler::new());
        let (debouncer, seen) = counting(&clock);

        debouncer.call(1);
        clock.advance(16);
        debouncer.call(2);
        clock.advance(16);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn fires_exactly_one_quantum_after_last_event() {
        let clock = Rc::new(VirtualScheduler::new());
        let (debouncer, seen) = counting(&clock);

        debouncer.call(7);
        clock.advance(15);
        assert!(seen.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn drop_cancels_pending_call() {
        let clock = Rc::new(VirtualScheduler::new());
        let (debouncer, seen) = counting(&clock);

        debouncer.call(3);
        drop(debouncer);
        clock.advance(100);

        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn explicit_cancel_discards_event() {
        let clock = Rc::new(VirtualScheduler::new());
        let (debouncer, seen) = counting(&clock);

        debouncer.call(4);
        debouncer.cancel();
        clock.advance(100);
        assert!(seen.borrow().is_empty());

        debouncer.call(5);
        clock.advance(16);
        assert_eq!(*seen.borrow(), vec![5]);
    }
}
