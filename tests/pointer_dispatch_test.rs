use std::cell::RefCell;
use std::rc::Rc;

use auraailyf::services::motion::{parallax_offset, Offset, PointerRatio};
use auraailyf::services::{Debouncer, VirtualScheduler};
use pretty_assertions::assert_eq;

/// Debounced hero parallax, recording every offset it would write.
fn parallax(clock: &Rc<VirtualScheduler>, quantum: u32) -> (Debouncer<PointerRatio>, Rc<RefCell<Vec<Offset>>>) {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let sink = writes.clone();
    let debouncer = Debouncer::new(clock.clone(), quantum, move |pointer| {
        sink.borrow_mut().push(parallax_offset(pointer, 30.0));
    });
    (debouncer, writes)
}

#[test]
fn fast_stream_writes_once_per_burst_with_last_position() {
    let clock = Rc::new(VirtualScheduler::new());
    let (dispatcher, writes) = parallax(&clock, 16);

    for step in 0..=20u32 {
        let x = f64::from(step) * 50.0;
        dispatcher.call(PointerRatio::from_client(x, 400.0, 1000.0, 800.0));
        clock.advance(4);
    }
    assert!(writes.borrow().is_empty());

    clock.advance(16);
    assert_eq!(*writes.borrow(), vec![Offset { x: 15.0, y: 0.0 }]);
}

#[test]
fn bursts_separated_by_quiet_periods_each_write_once() {
    for quantum in [1, 16, 100] {
        let clock = Rc::new(VirtualScheduler::new());
        let (dispatcher, writes) = parallax(&clock, quantum);

        for burst in 0..3u32 {
            for _ in 0..5 {
                dispatcher.call(PointerRatio { x: 0.5, y: f64::from(burst) / 2.0 });
                clock.advance(u64::from(quantum) / 2);
            }
            clock.advance(u64::from(quantum));
        }

        assert_eq!(writes.borrow().len(), 3, "quantum {quantum}");
        assert_eq!(writes.borrow()[2], Offset { x: 0.0, y: 15.0 });
    }
}

#[test]
fn teardown_with_pending_write_never_fires() {
    let clock = Rc::new(VirtualScheduler::new());
    let (dispatcher, writes) = parallax(&clock, 16);

    dispatcher.call(PointerRatio::CENTER);
    assert!(dispatcher.is_pending());
    drop(dispatcher);

    clock.run_until_idle();
    assert!(writes.borrow().is_empty());
}
